//! Dynamic Links routes.

use async_trait::async_trait;

use crate::endpoints::DynamicLinksEndpoint;
use crate::error::Error;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::transport::FirebaseApiRequest;
use crate::types::{DynamicLink, DynamicLinkRequest};

#[async_trait]
pub trait DynamicLinksRoute: Send + Sync {
    /// Create a short link.
    /// <https://firebase.google.com/docs/reference/dynamic-links/link-shortener>
    async fn create_short_link(&self, param: &DynamicLinkRequest) -> Result<DynamicLink, Error>;
}

#[derive(Debug, Clone)]
pub struct FirebaseDynamicLinksRoute {
    request: FirebaseApiRequest,
    short_links_url: String,
}

impl FirebaseDynamicLinksRoute {
    pub fn new(request: FirebaseApiRequest) -> Self {
        Self {
            request,
            short_links_url: DynamicLinksEndpoint::ShortLinks.endpoint(),
        }
    }

    /// Route calls to `base` instead of the production host.
    pub fn with_base_url(request: FirebaseApiRequest, base: &str) -> Self {
        Self {
            request,
            short_links_url: DynamicLinksEndpoint::ShortLinks.endpoint_at(base),
        }
    }

    /// Validate and encode `param` into the request `create_short_link` sends.
    pub fn build_create_short_link(&self, param: &DynamicLinkRequest) -> Result<HttpRequest, Error> {
        param.validate()?;
        let body = param.to_encoded_body()?;
        Ok(self
            .request
            .build_request(HttpMethod::Post, &self.short_links_url, "", body, &[]))
    }

    pub fn parse_create_short_link(&self, response: &HttpResponse) -> Result<DynamicLink, Error> {
        self.request.parse_response(response)
    }
}

#[async_trait]
impl DynamicLinksRoute for FirebaseDynamicLinksRoute {
    async fn create_short_link(&self, param: &DynamicLinkRequest) -> Result<DynamicLink, Error> {
        let request = self.build_create_short_link(param)?;
        let response = self.request.dispatch(request).await?;
        self.parse_create_short_link(&response)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::testing::StubClient;
    use crate::types::{DynamicLinkInfo, Suffix};

    const LINK_JSON: &str = r#"{"shortLink":"https://shortLink","previewLink":"https://previewLink"}"#;

    fn route(stub: &Arc<StubClient>) -> FirebaseDynamicLinksRoute {
        FirebaseDynamicLinksRoute::new(FirebaseApiRequest::new(stub.clone(), "NOAPIKEY"))
    }

    fn dummy_request() -> DynamicLinkRequest {
        DynamicLinkRequest::new(DynamicLinkInfo::new("http://link"), Suffix::default())
    }

    #[tokio::test]
    async fn create_short_link_posts_once_to_short_links() {
        let stub = StubClient::responding(200, LINK_JSON);
        let link = route(&stub).create_short_link(&dummy_request()).await.unwrap();

        assert_eq!(link.short_link, "https://shortLink");
        assert_eq!(link.preview_link, "https://previewLink");

        let calls = stub.calls();
        assert_eq!(calls.len(), 1);
        let call = &calls[0];
        assert_eq!(call.method, HttpMethod::Post);
        assert_eq!(
            call.url,
            "https://firebasedynamiclinks.googleapis.com/v1/shortLinks?key=NOAPIKEY"
        );
        assert_eq!(call.header("content-type"), Some("application/json"));
        assert_eq!(
            call.body.as_deref(),
            Some(dummy_request().to_encoded_body().unwrap().as_str())
        );
    }

    #[tokio::test]
    async fn vendor_error_is_propagated() {
        let stub = StubClient::responding(
            404,
            r#"{"error":{"code":0,"message":"Unknown error","status":"UNKNOWN"}}"#,
        );
        let err = route(&stub).create_short_link(&dummy_request()).await.unwrap_err();
        let firebase = err.as_firebase().unwrap();
        assert_eq!(firebase.identifier(), "-1");
        assert_eq!(firebase.reason(), "Unknown error");
        assert_eq!(firebase.status(), Some("UNKNOWN"));
    }

    #[tokio::test]
    async fn plain_text_error_is_normalized() {
        let stub = StubClient::responding(404, "Wrong format, expected json");
        let err = route(&stub).create_short_link(&dummy_request()).await.unwrap_err();
        let firebase = err.as_firebase().unwrap();
        assert_eq!(firebase.identifier(), "-1");
        assert!(!firebase.reason().is_empty());
        assert!(firebase.status().is_none());
        assert_eq!(stub.calls().len(), 1);
    }

    #[tokio::test]
    async fn invalid_request_is_never_sent() {
        let stub = StubClient::responding(200, LINK_JSON);
        let request = DynamicLinkRequest::new(DynamicLinkInfo::new(""), Suffix::default());
        let err = route(&stub).create_short_link(&request).await.unwrap_err();
        assert!(matches!(err, Error::InvalidRequest(_)));
        assert!(stub.calls().is_empty());
    }

    #[tokio::test]
    async fn alternate_base_url_is_used() {
        let stub = StubClient::responding(200, LINK_JSON);
        let route = FirebaseDynamicLinksRoute::with_base_url(
            FirebaseApiRequest::new(stub.clone(), "K"),
            "http://127.0.0.1:9000/",
        );
        route.create_short_link(&dummy_request()).await.unwrap();
        assert_eq!(stub.calls()[0].url, "http://127.0.0.1:9000/v1/shortLinks?key=K");
    }

    #[test]
    fn parse_create_short_link_keeps_warnings() {
        let stub = StubClient::responding(200, "");
        let response = HttpResponse::new(
            200,
            r#"{"shortLink":"s","previewLink":"p","warning":[{"warningCode":"W","warningMessage":"m"}]}"#,
        );
        let link = route(&stub).parse_create_short_link(&response).unwrap();
        assert_eq!(link.warnings()[0].warning_code, "W");
    }
}
