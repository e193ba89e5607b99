//! Client for the Firebase Dynamic Links short-link API.
//!
//! # Overview
//! `FirebaseClient::create_short_link` serializes a `DynamicLinkRequest`,
//! POSTs it to `v1/shortLinks` with the API key in the query string, and
//! decodes either a `DynamicLink` or the vendor error envelope. The network
//! round-trip goes through an `HttpClient` supplied by the host.
//!
//! # Design
//! - Every stage is pure data in, data out except `HttpClient::send`, so
//!   requests can be built and responses parsed without I/O
//!   (`FirebaseDynamicLinksRoute::build_create_short_link` /
//!   `parse_create_short_link`).
//! - Failures reported by the API, or standing in for one, are normalized
//!   into `FirebaseError`; a 200 with an unexpected body is `Error::Schema`.
//! - No retries, caching or shared mutable state. Each call is independent.
//! - The `reqwest` feature adds a ready-made `ReqwestClient`.

pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod http;
#[cfg(feature = "reqwest")]
pub mod reqwest_client;
pub mod response;
pub mod routes;
pub mod transport;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use client::FirebaseClient;
pub use config::FirebaseConfig;
pub use endpoints::DynamicLinksEndpoint;
pub use error::{Error, FirebaseApiError, FirebaseError, FirebaseErrorCode};
pub use http::{HttpClient, HttpMethod, HttpRequest, HttpResponse, TransportError};
#[cfg(feature = "reqwest")]
pub use reqwest_client::ReqwestClient;
pub use response::DEFAULT_MAX_BODY_SIZE;
pub use routes::{DynamicLinksRoute, FirebaseDynamicLinksRoute};
pub use transport::FirebaseApiRequest;
pub use types::{DynamicLink, DynamicLinkInfo, DynamicLinkRequest, Suffix, SuffixOption};
