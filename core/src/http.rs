//! HTTP transport types and the injected send capability.
//!
//! # Design
//! Requests and responses are plain data. The core builds `HttpRequest`
//! values and decodes `HttpResponse` values; the actual network round-trip
//! is delegated to whatever `HttpClient` the host injects. Keeping the I/O
//! behind one trait method keeps the pipeline deterministic under test.
//!
//! All fields use owned types so values can be recorded, replayed from test
//! vectors, or handed to any HTTP library without lifetime concerns.

use std::fmt;

use async_trait::async_trait;

/// Error type produced by an `HttpClient` implementation.
pub type TransportError = Box<dyn std::error::Error + Send + Sync>;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An HTTP request described as plain data.
///
/// `url` is fully qualified, query string and API key included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// First value of the header called `name`, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: body.into(),
        }
    }
}

/// Asynchronous HTTP send capability supplied by the host.
///
/// Implementations perform exactly one network round-trip per call. A
/// non-2xx status is a successful send and must be returned as data; only
/// failures to obtain a response at all (connection refused, timeout, TLS)
/// belong in `Err`.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// Set `name` to `value`, replacing any existing header with the same name
/// regardless of case.
pub fn replace_or_add(headers: &mut Vec<(String, String)>, name: &str, value: &str) {
    headers.retain(|(key, _)| !key.eq_ignore_ascii_case(name));
    headers.push((name.to_string(), value.to_string()));
}
