use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::unset::Unset;

/// Body of a 422 response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HttpValidationError {
    #[serde(default, skip_serializing_if = "Unset::is_unset")]
    pub detail: Unset<Vec<ValidationError>>,
    #[serde(flatten)]
    pub additional_properties: Map<String, Value>,
}

impl HttpValidationError {
    pub fn errors(&self) -> &[ValidationError] {
        self.detail.value().map(Vec::as_slice).unwrap_or_default()
    }
}

/// One rejected field: where it is, what was wrong with it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    pub loc: Vec<LocItem>,
    pub msg: String,
    #[serde(rename = "type")]
    pub error_type: String,
    #[serde(flatten)]
    pub additional_properties: Map<String, Value>,
}

impl ValidationError {
    /// Dotted field path, e.g. `body.keyword` or `query.items.0`.
    pub fn path(&self) -> String {
        self.loc
            .iter()
            .map(|item| match item {
                LocItem::Field(name) => name.clone(),
                LocItem::Index(i) => i.to_string(),
            })
            .collect::<Vec<_>>()
            .join(".")
    }
}

/// A path segment: a field name or a list index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LocItem {
    Field(String),
    Index(i64),
}
