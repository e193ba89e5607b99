//! Client configuration.

use std::fmt;

use serde::Deserialize;

use crate::endpoints::API_BASE;
use crate::response::DEFAULT_MAX_BODY_SIZE;

/// Settings for a `FirebaseClient`.
///
/// Deserializable so hosts can load it from their own configuration source.
/// Only `api_key` is required. Keys are accepted in snake_case or camelCase.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct FirebaseConfig {
    #[serde(alias = "apiKey")]
    pub api_key: String,
    #[serde(default = "default_base_url", alias = "baseUrl")]
    pub base_url: String,
    #[serde(default = "default_max_body_size", alias = "maxBodySize")]
    pub max_body_size: usize,
}

fn default_base_url() -> String {
    API_BASE.to_string()
}

fn default_max_body_size() -> usize {
    DEFAULT_MAX_BODY_SIZE
}

impl FirebaseConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: default_base_url(),
            max_body_size: default_max_body_size(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_max_body_size(mut self, max_body_size: usize) -> Self {
        self.max_body_size = max_body_size;
        self
    }
}

impl fmt::Debug for FirebaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FirebaseConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("max_body_size", &self.max_body_size)
            .finish()
    }
}
