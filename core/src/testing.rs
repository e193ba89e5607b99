//! Recording `HttpClient` stub shared by unit tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::http::{HttpClient, HttpRequest, HttpResponse, TransportError};

pub(crate) struct StubClient {
    outcome: Result<HttpResponse, String>,
    calls: Mutex<Vec<HttpRequest>>,
}

impl StubClient {
    pub(crate) fn responding(status: u16, body: &str) -> Arc<Self> {
        Arc::new(Self {
            outcome: Ok(HttpResponse::new(status, body)),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub(crate) fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            outcome: Err(message.to_string()),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub(crate) fn calls(&self) -> Vec<HttpRequest> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpClient for StubClient {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.calls.lock().unwrap().push(request);
        match &self.outcome {
            Ok(response) => Ok(response.clone()),
            Err(message) => Err(message.clone().into()),
        }
    }
}
