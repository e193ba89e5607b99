use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::{net::TcpListener, sync::RwLock};
use tracing::{debug, info};
use uuid::Uuid;

const SHORT_SUFFIX_LEN: usize = 4;
const UNGUESSABLE_SUFFIX_LEN: usize = 17;

#[derive(Clone, Debug)]
pub struct MockConfig {
    pub api_key: String,
    /// Used when a request carries no `domainUriPrefix`.
    pub default_domain: String,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            api_key: "NOAPIKEY".to_string(),
            default_domain: "https://mock.page.link".to_string(),
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortLinkRequest {
    pub dynamic_link_info: LinkInfo,
    pub suffix: Option<SuffixParam>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkInfo {
    pub domain_uri_prefix: Option<String>,
    pub link: Option<String>,
}

#[derive(Deserialize)]
pub struct SuffixParam {
    pub option: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortLink {
    pub short_link: String,
    pub preview_link: String,
}

#[derive(Deserialize)]
struct KeyParam {
    key: Option<String>,
}

/// Short path -> long link.
pub type Db = Arc<RwLock<HashMap<String, String>>>;

#[derive(Clone)]
struct AppState {
    config: Arc<MockConfig>,
    db: Db,
}

pub fn app(config: MockConfig) -> Router {
    let state = AppState {
        config: Arc::new(config),
        db: Arc::new(RwLock::new(HashMap::new())),
    };
    Router::new()
        .route("/v1/shortLinks", post(create_short_link))
        .route("/{suffix}", get(follow_link))
        .with_state(state)
}

pub async fn run(listener: TcpListener, config: MockConfig) -> Result<(), std::io::Error> {
    axum::serve(listener, app(config)).await
}

fn api_error(status: StatusCode, message: &str, reason: &str) -> Response {
    let body = json!({
        "error": {
            "code": status.as_u16(),
            "message": message,
            "status": reason,
        }
    });
    (status, Json(body)).into_response()
}

fn random_suffix(len: usize) -> String {
    let mut out = String::with_capacity(len);
    while out.len() < len {
        out.push_str(&Uuid::new_v4().simple().to_string());
    }
    out.truncate(len);
    out
}

async fn create_short_link(
    State(state): State<AppState>,
    Query(params): Query<KeyParam>,
    body: String,
) -> Response {
    if params.key.as_deref() != Some(state.config.api_key.as_str()) {
        return api_error(
            StatusCode::FORBIDDEN,
            "The caller does not have permission",
            "PERMISSION_DENIED",
        );
    }

    // Malformed payloads get a plain-text page, like a front-end proxy would.
    let input: ShortLinkRequest = match serde_json::from_str(&body) {
        Ok(input) => input,
        Err(err) => {
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "text/plain")],
                format!("Invalid JSON payload received. {err}"),
            )
                .into_response();
        }
    };

    let Some(link) = input.dynamic_link_info.link.filter(|l| !l.trim().is_empty()) else {
        return api_error(
            StatusCode::BAD_REQUEST,
            "Long link is not parsable",
            "INVALID_ARGUMENT",
        );
    };

    let len = match input.suffix.as_ref().map(|s| s.option.as_str()) {
        None | Some("SHORT") => SHORT_SUFFIX_LEN,
        Some("UNGUESSABLE") => UNGUESSABLE_SUFFIX_LEN,
        Some(other) => {
            return api_error(
                StatusCode::BAD_REQUEST,
                &format!("Invalid suffix option: {other}"),
                "INVALID_ARGUMENT",
            );
        }
    };

    let domain = input
        .dynamic_link_info
        .domain_uri_prefix
        .unwrap_or_else(|| state.config.default_domain.clone());
    let suffix = random_suffix(len);
    let short_link = format!("{}/{suffix}", domain.trim_end_matches('/'));

    debug!(%short_link, %link, "created short link");
    state.db.write().await.insert(suffix, link);

    let created = ShortLink {
        preview_link: format!("{short_link}?d=1"),
        short_link,
    };
    (StatusCode::OK, Json(created)).into_response()
}

async fn follow_link(State(state): State<AppState>, Path(suffix): Path<String>) -> Response {
    match state.db.read().await.get(&suffix) {
        Some(link) => {
            info!(%suffix, "redirecting");
            (StatusCode::FOUND, [(header::LOCATION, link.clone())]).into_response()
        }
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_suffix_has_requested_length() {
        assert_eq!(random_suffix(SHORT_SUFFIX_LEN).len(), 4);
        assert_eq!(random_suffix(UNGUESSABLE_SUFFIX_LEN).len(), 17);
        assert_eq!(random_suffix(40).len(), 40);
    }

    #[test]
    fn short_link_request_accepts_missing_suffix() {
        let input: ShortLinkRequest =
            serde_json::from_str(r#"{"dynamicLinkInfo":{"link":"http://link"}}"#).unwrap();
        assert_eq!(input.dynamic_link_info.link.as_deref(), Some("http://link"));
        assert!(input.suffix.is_none());
    }

    #[test]
    fn short_link_request_ignores_unknown_fields() {
        let input: ShortLinkRequest = serde_json::from_str(
            r#"{"dynamicLinkInfo":{"link":"l","androidInfo":{"androidPackageName":"p"}},"suffix":{"option":"UNGUESSABLE"}}"#,
        )
        .unwrap();
        assert_eq!(input.suffix.unwrap().option, "UNGUESSABLE");
    }

    #[test]
    fn short_link_serializes_camel_case() {
        let link = ShortLink {
            short_link: "s".to_string(),
            preview_link: "p".to_string(),
        };
        let json = serde_json::to_value(&link).unwrap();
        assert_eq!(json["shortLink"], "s");
        assert_eq!(json["previewLink"], "p");
    }
}
