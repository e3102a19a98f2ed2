//! Douyin app search.
//!
//! Paging is cursor based: pass the `cursor` and `search_id` from the
//! previous page's `data` to fetch the next one.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::endpoint::endpoint;
use crate::unset::Unset;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FetchGeneralSearch {
    pub keyword: String,
    #[serde(default, skip_serializing_if = "Unset::is_unset")]
    pub cursor: Unset<i64>,
    /// `"0"` relevance, `"1"` most liked, `"2"` newest.
    #[serde(default, skip_serializing_if = "Unset::is_unset")]
    pub sort_type: Unset<String>,
    /// `"0"` any time, `"1"` one day, `"7"` one week, `"180"` half a year.
    #[serde(default, skip_serializing_if = "Unset::is_unset")]
    pub publish_time: Unset<String>,
    #[serde(default, skip_serializing_if = "Unset::is_unset")]
    pub filter_duration: Unset<String>,
    #[serde(default, skip_serializing_if = "Unset::is_unset")]
    pub content_type: Unset<String>,
    #[serde(default, skip_serializing_if = "Unset::is_unset")]
    pub search_id: Unset<String>,
    #[serde(default, skip_serializing_if = "Unset::is_unset")]
    pub backtrace: Unset<String>,
    #[serde(flatten)]
    pub additional_properties: Map<String, Value>,
}

impl FetchGeneralSearch {
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            cursor: Unset::Unset,
            sort_type: Unset::Unset,
            publish_time: Unset::Unset,
            filter_duration: Unset::Unset,
            content_type: Unset::Unset,
            search_id: Unset::Unset,
            backtrace: Unset::Unset,
            additional_properties: Map::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FetchVideoSearch {
    pub keyword: String,
    #[serde(default, skip_serializing_if = "Unset::is_unset")]
    pub cursor: Unset<i64>,
    #[serde(default, skip_serializing_if = "Unset::is_unset")]
    pub sort_type: Unset<String>,
    #[serde(default, skip_serializing_if = "Unset::is_unset")]
    pub publish_time: Unset<String>,
    #[serde(default, skip_serializing_if = "Unset::is_unset")]
    pub filter_duration: Unset<String>,
    #[serde(default, skip_serializing_if = "Unset::is_unset")]
    pub search_id: Unset<String>,
    #[serde(default, skip_serializing_if = "Unset::is_unset")]
    pub backtrace: Unset<String>,
    #[serde(flatten)]
    pub additional_properties: Map<String, Value>,
}

impl FetchVideoSearch {
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            cursor: Unset::Unset,
            sort_type: Unset::Unset,
            publish_time: Unset::Unset,
            filter_duration: Unset::Unset,
            search_id: Unset::Unset,
            backtrace: Unset::Unset,
            additional_properties: Map::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FetchUserSearch {
    pub keyword: String,
    #[serde(default, skip_serializing_if = "Unset::is_unset")]
    pub cursor: Unset<i64>,
    /// Follower bracket, e.g. `"0_1k"`, `"1k_1w"`, `"1w_10w"`.
    #[serde(default, skip_serializing_if = "Unset::is_unset")]
    pub douyin_user_fans: Unset<String>,
    /// `"common_user"`, `"enterprise_user"` or `"personal_user"`.
    #[serde(default, skip_serializing_if = "Unset::is_unset")]
    pub douyin_user_type: Unset<String>,
    #[serde(default, skip_serializing_if = "Unset::is_unset")]
    pub search_id: Unset<String>,
    #[serde(flatten)]
    pub additional_properties: Map<String, Value>,
}

impl FetchUserSearch {
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            cursor: Unset::Unset,
            douyin_user_fans: Unset::Unset,
            douyin_user_type: Unset::Unset,
            search_id: Unset::Unset,
            additional_properties: Map::new(),
        }
    }
}

endpoint!(FetchGeneralSearch, Post, "/api/v1/douyin/search/fetch_general_search_v1");
endpoint!(FetchVideoSearch, Post, "/api/v1/douyin/search/fetch_video_search_v1");
endpoint!(FetchUserSearch, Post, "/api/v1/douyin/search/fetch_user_search");
