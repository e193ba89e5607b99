//! Authenticated request dispatch for the Firebase API.
//!
//! # Design
//! `FirebaseApiRequest` owns the injected `HttpClient` and the API key and
//! carries no other state between calls. `send` is split into three steps
//! so each can be exercised alone: `build_request` produces the
//! `HttpRequest` (default headers, caller overlays, `key` query parameter),
//! `dispatch` performs the single round-trip, and `parse_response` hands the
//! result to the decoder. There are no retries.

use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::{Error, FirebaseError};
use crate::http::{self, HttpClient, HttpMethod, HttpRequest, HttpResponse};
use crate::response::{self, DEFAULT_MAX_BODY_SIZE};

const CONTENT_TYPE: &str = "content-type";
const APPLICATION_JSON: &str = "application/json";

#[derive(Clone)]
pub struct FirebaseApiRequest {
    client: Arc<dyn HttpClient>,
    api_key: String,
    max_body_size: usize,
}

impl FirebaseApiRequest {
    pub fn new(client: Arc<dyn HttpClient>, api_key: impl Into<String>) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            max_body_size: DEFAULT_MAX_BODY_SIZE,
        }
    }

    pub fn with_max_body_size(mut self, max_body_size: usize) -> Self {
        self.max_body_size = max_body_size;
        self
    }

    /// Build, dispatch and decode one API call.
    pub async fn send<T: DeserializeOwned>(
        &self,
        method: HttpMethod,
        url: &str,
        query: &str,
        body: String,
        headers: &[(String, String)],
    ) -> Result<T, Error> {
        let request = self.build_request(method, url, query, body, headers);
        let response = self.dispatch(request).await?;
        self.parse_response(&response)
    }

    /// Describe the call as plain data without performing it.
    ///
    /// `content-type: application/json` is set first and caller headers
    /// replace it or add to it. An empty `body` is sent as no body.
    pub fn build_request(
        &self,
        method: HttpMethod,
        url: &str,
        query: &str,
        body: String,
        headers: &[(String, String)],
    ) -> HttpRequest {
        let mut final_headers = vec![(CONTENT_TYPE.to_string(), APPLICATION_JSON.to_string())];
        for (name, value) in headers {
            http::replace_or_add(&mut final_headers, name, value);
        }
        HttpRequest {
            method,
            url: self.format_url(url, query),
            headers: final_headers,
            body: (!body.is_empty()).then_some(body),
        }
    }

    /// Perform the round-trip. A transport failure becomes
    /// `FirebaseError::Unknown` carrying the failure's description.
    pub async fn dispatch(&self, request: HttpRequest) -> Result<HttpResponse, Error> {
        let method = request.method;
        debug!(%method, url = %self.redacted_url(&request.url), "sending firebase request");
        match self.client.send(request).await {
            Ok(response) => {
                debug!(status = response.status, "firebase response received");
                Ok(response)
            }
            Err(err) => {
                warn!(error = %err, "firebase transport failure");
                Err(FirebaseError::unknown(err.to_string()).into())
            }
        }
    }

    pub fn parse_response<T: DeserializeOwned>(&self, response: &HttpResponse) -> Result<T, Error> {
        response::validate_response(response, self.max_body_size)
    }

    fn format_url(&self, url: &str, query: &str) -> String {
        if query.is_empty() {
            format!("{url}?key={}", self.api_key)
        } else {
            format!("{url}?{query}&key={}", self.api_key)
        }
    }

    /// `url` without the `key=<api_key>` suffix `format_url` appended, so the
    /// key never reaches the logs. URLs not built here are left as they are.
    fn redacted_url<'a>(&self, url: &'a str) -> &'a str {
        url.strip_suffix(self.api_key.as_str())
            .and_then(|rest| rest.strip_suffix("key="))
            .unwrap_or(url)
    }
}

impl fmt::Debug for FirebaseApiRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FirebaseApiRequest")
            .field("api_key", &"<redacted>")
            .field("max_body_size", &self.max_body_size)
            .finish_non_exhaustive()
    }
}
