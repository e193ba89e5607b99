//! Entry point wiring configuration and transport into the routes.
//!
//! # Design
//! The host constructs a `FirebaseClient` explicitly from a
//! `FirebaseConfig` and its own `HttpClient`; there is no registry or
//! global state. Clients are independent and cheap to clone.

use std::sync::Arc;

use crate::config::FirebaseConfig;
use crate::error::Error;
use crate::http::HttpClient;
use crate::routes::{DynamicLinksRoute, FirebaseDynamicLinksRoute};
use crate::transport::FirebaseApiRequest;
use crate::types::{DynamicLink, DynamicLinkRequest};

#[derive(Debug, Clone)]
pub struct FirebaseClient {
    dynamic_links: FirebaseDynamicLinksRoute,
}

impl FirebaseClient {
    pub fn new(config: FirebaseConfig, http: Arc<dyn HttpClient>) -> Self {
        let request =
            FirebaseApiRequest::new(http, config.api_key).with_max_body_size(config.max_body_size);
        Self {
            dynamic_links: FirebaseDynamicLinksRoute::with_base_url(request, &config.base_url),
        }
    }

    pub fn dynamic_links(&self) -> &FirebaseDynamicLinksRoute {
        &self.dynamic_links
    }

    pub async fn create_short_link(&self, param: &DynamicLinkRequest) -> Result<DynamicLink, Error> {
        self.dynamic_links.create_short_link(param).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::HttpMethod;
    use crate::testing::StubClient;
    use crate::types::{DynamicLinkInfo, Suffix, SuffixOption};

    #[tokio::test]
    async fn default_config_targets_production_endpoint() {
        let stub = StubClient::responding(200, r#"{"shortLink":"s","previewLink":"p"}"#);
        let client = FirebaseClient::new(FirebaseConfig::new("MyApiKey"), stub.clone());
        let request = DynamicLinkRequest::new(
            DynamicLinkInfo::new("https://example.com"),
            Suffix::new(SuffixOption::Unguessable),
        );

        let link = client.create_short_link(&request).await.unwrap();
        assert_eq!(link.short_link, "s");

        let call = &stub.calls()[0];
        assert_eq!(call.method, HttpMethod::Post);
        assert_eq!(
            call.url,
            "https://firebasedynamiclinks.googleapis.com/v1/shortLinks?key=MyApiKey"
        );
    }

    #[tokio::test]
    async fn configured_body_bound_reaches_decoder() {
        let stub = StubClient::responding(200, r#"{"shortLink":"s","previewLink":"p"}"#);
        let config = FirebaseConfig::new("k").with_max_body_size(4);
        let client = FirebaseClient::new(config, stub);
        let request = DynamicLinkRequest::new(DynamicLinkInfo::new("https://example.com"), Suffix::default());

        let err = client.dynamic_links().create_short_link(&request).await.unwrap_err();
        assert!(matches!(err, Error::PayloadTooLarge { limit: 4 }));
    }
}
