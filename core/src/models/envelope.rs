use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::unset::Unset;

/// The generic success envelope wrapped around every 200 response.
///
/// `data` carries the upstream platform's own response; `params` echoes the
/// request parameters as the server saw them. Fields TikHub adds over time
/// (`message_zh`, `time_stamp`, `cache_url`, ...) land in
/// `additional_properties`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: serde::de::DeserializeOwned"
))]
pub struct ResponseModel<T = Value> {
    pub code: i64,
    #[serde(default, skip_serializing_if = "Unset::is_unset")]
    pub request_id: Unset<String>,
    #[serde(default, skip_serializing_if = "Unset::is_unset")]
    pub message: Unset<String>,
    #[serde(default, skip_serializing_if = "Unset::is_unset")]
    pub router: Unset<String>,
    #[serde(default, skip_serializing_if = "Unset::is_unset")]
    pub params: Unset<Value>,
    #[serde(default, skip_serializing_if = "Unset::is_unset")]
    pub data: Unset<T>,
    #[serde(flatten)]
    pub additional_properties: Map<String, Value>,
}

impl<T> ResponseModel<T> {
    pub fn data(&self) -> Option<&T> {
        self.data.value()
    }
}
