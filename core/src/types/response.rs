use serde::{Deserialize, Serialize};

/// A successfully created short link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DynamicLink {
    pub short_link: String,
    pub preview_link: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<Vec<Warning>>,
}

impl DynamicLink {
    pub fn warnings(&self) -> &[Warning] {
        self.warning.as_deref().unwrap_or_default()
    }
}

/// Non-fatal issue the API reports alongside a created link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warning {
    #[serde(rename = "warningCode", alias = "code")]
    pub warning_code: String,
    #[serde(rename = "warningMessage", alias = "message", default)]
    pub warning_message: String,
}
