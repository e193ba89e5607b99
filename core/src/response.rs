//! Response and error decoding.
//!
//! # Design
//! A 200 response decodes into the expected type and any mismatch is
//! surfaced as `Error::Schema`. Every other status is treated as an API
//! failure: the body is read as the vendor envelope when possible and
//! otherwise replaced by `FirebaseError::Unknown`, so the error branch never
//! leaks a raw decode error.

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::{Error, ErrorEnvelope, FirebaseError};
use crate::http::HttpResponse;

/// Largest response body decoded, in bytes.
pub const DEFAULT_MAX_BODY_SIZE: usize = 65_536;

const STATUS_OK: u16 = 200;

/// Decode `response` into `T`, or into the error it carries.
pub fn validate_response<T: DeserializeOwned>(
    response: &HttpResponse,
    max_body_size: usize,
) -> Result<T, Error> {
    if response.status != STATUS_OK {
        return Err(decode_error(response, max_body_size).into());
    }
    if response.body.len() > max_body_size {
        return Err(Error::PayloadTooLarge {
            limit: max_body_size,
        });
    }
    debug!(bytes = response.body.len(), "decoding success response");
    serde_json::from_slice(&response.body).map_err(Error::Schema)
}

/// Interpret a non-200 response as a `FirebaseError`. Infallible.
pub fn decode_error(response: &HttpResponse, max_body_size: usize) -> FirebaseError {
    if response.body.len() > max_body_size {
        warn!(
            status = response.status,
            bytes = response.body.len(),
            "error body exceeds size bound"
        );
        return FirebaseError::unknown(format!(
            "error response body exceeds {max_body_size} bytes"
        ));
    }
    match serde_json::from_slice::<ErrorEnvelope>(&response.body) {
        Ok(envelope) => {
            warn!(
                status = response.status,
                code = envelope.error.code.as_i32(),
                reason = %envelope.error.message,
                "API returned an error"
            );
            FirebaseError::Api(envelope.error)
        }
        Err(err) => {
            warn!(status = response.status, error = %err, "undecodable error body");
            FirebaseError::unknown(err.to_string())
        }
    }
}
