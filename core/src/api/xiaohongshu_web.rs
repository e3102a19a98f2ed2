use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::endpoint::endpoint;
use crate::unset::Unset;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchNotes {
    pub keyword: String,
    #[serde(default, skip_serializing_if = "Unset::is_unset")]
    pub page: Unset<i64>,
    /// `"general"`, `"time_descending"` or `"popularity_descending"`.
    #[serde(default, skip_serializing_if = "Unset::is_unset")]
    pub sort: Unset<String>,
    /// `"_0"` all, `"_1"` video, `"_2"` image.
    #[serde(rename = "noteType", default, skip_serializing_if = "Unset::is_unset")]
    pub note_type: Unset<String>,
    #[serde(flatten)]
    pub additional_properties: Map<String, Value>,
}

impl SearchNotes {
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            page: Unset::Unset,
            sort: Unset::Unset,
            note_type: Unset::Unset,
            additional_properties: Map::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetNoteInfo {
    pub note_id: String,
    #[serde(default, skip_serializing_if = "Unset::is_unset")]
    pub xsec_token: Unset<String>,
    #[serde(flatten)]
    pub additional_properties: Map<String, Value>,
}

impl GetNoteInfo {
    pub fn new(note_id: impl Into<String>) -> Self {
        Self {
            note_id: note_id.into(),
            xsec_token: Unset::Unset,
            additional_properties: Map::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetUserInfo {
    pub user_id: String,
    #[serde(flatten)]
    pub additional_properties: Map<String, Value>,
}

impl GetUserInfo {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            additional_properties: Map::new(),
        }
    }
}

endpoint!(SearchNotes, Get, "/api/v1/xiaohongshu/web/search_notes");
endpoint!(GetNoteInfo, Get, "/api/v1/xiaohongshu/web/get_note_info_v4");
endpoint!(GetUserInfo, Get, "/api/v1/xiaohongshu/web/get_user_info");
