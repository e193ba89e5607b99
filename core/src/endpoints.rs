//! Endpoint registry for the Firebase Dynamic Links API.
//!
//! The URLs are part of the wire contract and must stay byte-stable.

pub const API_BASE: &str = "https://firebasedynamiclinks.googleapis.com/";
pub const API_VERSION: &str = "v1/";

/// Dynamic Links operations exposed by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DynamicLinksEndpoint {
    ShortLinks,
}

impl DynamicLinksEndpoint {
    pub fn path(&self) -> &'static str {
        match self {
            DynamicLinksEndpoint::ShortLinks => "shortLinks",
        }
    }

    /// Absolute URL on the production API host.
    pub fn endpoint(&self) -> String {
        self.endpoint_at(API_BASE)
    }

    /// Absolute URL on an alternate host, such as a local emulator.
    pub fn endpoint_at(&self, base: &str) -> String {
        format!("{}/{API_VERSION}{}", base.trim_end_matches('/'), self.path())
    }
}
