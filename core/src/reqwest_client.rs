//! `HttpClient` backed by `reqwest`. Enabled with the `reqwest` feature.

use async_trait::async_trait;

use crate::http::{HttpClient, HttpMethod, HttpRequest, HttpResponse, TransportError};
use crate::response::DEFAULT_MAX_BODY_SIZE;

/// Sends requests through a shared `reqwest::Client`.
///
/// Timeouts, proxies and TLS settings are whatever the wrapped client was
/// built with. The body is read chunk by chunk and buffering stops one byte
/// past `max_body_size`, so the decoder sees an over-bound body without the
/// whole stream ever being held in memory.
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    inner: reqwest::Client,
    max_body_size: usize,
}

impl Default for ReqwestClient {
    fn default() -> Self {
        Self::new(reqwest::Client::default())
    }
}

impl ReqwestClient {
    pub fn new(inner: reqwest::Client) -> Self {
        Self {
            inner,
            max_body_size: DEFAULT_MAX_BODY_SIZE,
        }
    }

    /// Should match `FirebaseConfig::max_body_size`.
    pub fn with_max_body_size(mut self, max_body_size: usize) -> Self {
        self.max_body_size = max_body_size;
        self
    }
}

fn to_reqwest_method(method: HttpMethod) -> reqwest::Method {
    match method {
        HttpMethod::Get => reqwest::Method::GET,
        HttpMethod::Post => reqwest::Method::POST,
        HttpMethod::Put => reqwest::Method::PUT,
        HttpMethod::Patch => reqwest::Method::PATCH,
        HttpMethod::Delete => reqwest::Method::DELETE,
    }
}

/// Buffer at most `limit + 1` bytes of the body.
async fn read_bounded(
    response: &mut reqwest::Response,
    limit: usize,
) -> Result<Vec<u8>, reqwest::Error> {
    let cap = limit.saturating_add(1);
    let hint = response.content_length().map_or(0, |len| len.min(cap as u64) as usize);
    let mut body = Vec::with_capacity(hint);
    while let Some(chunk) = response.chunk().await? {
        let room = cap - body.len();
        if chunk.len() >= room {
            body.extend_from_slice(&chunk[..room]);
            break;
        }
        body.extend_from_slice(&chunk);
    }
    Ok(body)
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = self
            .inner
            .request(to_reqwest_method(request.method), &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let mut response = builder.send().await?;
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|value| (name.as_str().to_string(), value.to_string()))
            })
            .collect();
        let body = read_bounded(&mut response, self.max_body_size).await?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    use super::*;
    use crate::error::{Error, FirebaseError};
    use crate::transport::FirebaseApiRequest;

    /// Answer a single connection with `status_line` and `body`.
    async fn serve_once(status_line: &'static str, body: Vec<u8>) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = vec![0u8; 8192];
            let _ = socket.read(&mut buf).await;
            let head = format!(
                "HTTP/1.1 {status_line}\r\ncontent-type: text/plain\r\ncontent-length: {}\r\nconnection: close\r\n\r\n",
                body.len()
            );
            let _ = socket.write_all(head.as_bytes()).await;
            let _ = socket.write_all(&body).await;
        });
        format!("http://{addr}/v1/shortLinks")
    }

    fn post(url: String) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Post,
            url,
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some("{}".to_string()),
        }
    }

    #[tokio::test]
    async fn large_body_is_cut_one_byte_past_the_bound() {
        let url = serve_once("404 Not Found", vec![b'x'; 8 * 1024 * 1024]).await;
        let response = ReqwestClient::default().send(post(url)).await.unwrap();
        assert_eq!(response.status, 404);
        assert_eq!(response.body.len(), DEFAULT_MAX_BODY_SIZE + 1);
    }

    #[tokio::test]
    async fn small_body_is_returned_whole() {
        let body = br#"{"shortLink":"s","previewLink":"p"}"#.to_vec();
        let url = serve_once("200 OK", body.clone()).await;
        let response = ReqwestClient::default().send(post(url)).await.unwrap();
        assert_eq!(response.status, 200);
        assert_eq!(response.body, body);
    }

    #[tokio::test]
    async fn oversized_error_body_decodes_as_unknown() {
        let url = serve_once("404 Not Found", vec![b'x'; 4096]).await;
        let client = ReqwestClient::default().with_max_body_size(64);
        let request = FirebaseApiRequest::new(Arc::new(client), "K").with_max_body_size(64);
        let err = request
            .send::<serde_json::Value>(HttpMethod::Post, &url, "", "{}".to_string(), &[])
            .await
            .unwrap_err();
        let firebase = err.as_firebase().unwrap();
        assert!(matches!(firebase, FirebaseError::Unknown { .. }));
        assert!(firebase.reason().contains("64 bytes"));
    }

    #[tokio::test]
    async fn oversized_success_body_is_payload_too_large() {
        let url = serve_once("200 OK", vec![b'x'; 4096]).await;
        let client = ReqwestClient::default().with_max_body_size(64);
        let request = FirebaseApiRequest::new(Arc::new(client), "K").with_max_body_size(64);
        let err = request
            .send::<serde_json::Value>(HttpMethod::Post, &url, "", "{}".to_string(), &[])
            .await
            .unwrap_err();
        assert!(matches!(err, Error::PayloadTooLarge { limit: 64 }));
    }
}
