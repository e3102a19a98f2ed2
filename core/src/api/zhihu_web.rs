//! Zhihu web search and hot list.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::endpoint::endpoint;
use crate::unset::Unset;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FetchArticleSearch {
    pub keyword: String,
    #[serde(default, skip_serializing_if = "Unset::is_unset")]
    pub offset: Unset<i64>,
    #[serde(default, skip_serializing_if = "Unset::is_unset")]
    pub limit: Unset<i64>,
    #[serde(default, skip_serializing_if = "Unset::is_unset")]
    pub show_all_topics: Unset<i64>,
    #[serde(default, skip_serializing_if = "Unset::is_unset")]
    pub search_source: Unset<String>,
    #[serde(default, skip_serializing_if = "Unset::is_unset")]
    pub search_hash_id: Unset<String>,
    #[serde(default, skip_serializing_if = "Unset::is_unset")]
    pub vertical: Unset<String>,
    #[serde(default, skip_serializing_if = "Unset::is_unset")]
    pub sort: Unset<String>,
    /// `"a_day"`, `"a_week"`, `"a_month"`, `"three_months"`...
    #[serde(default, skip_serializing_if = "Unset::is_unset")]
    pub time_interval: Unset<String>,
    #[serde(default, skip_serializing_if = "Unset::is_unset")]
    pub vertical_info: Unset<String>,
    #[serde(flatten)]
    pub additional_properties: Map<String, Value>,
}

impl FetchArticleSearch {
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            offset: Unset::Unset,
            limit: Unset::Unset,
            show_all_topics: Unset::Unset,
            search_source: Unset::Unset,
            search_hash_id: Unset::Unset,
            vertical: Unset::Unset,
            sort: Unset::Unset,
            time_interval: Unset::Unset,
            vertical_info: Unset::Unset,
            additional_properties: Map::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FetchUserSearch {
    pub keyword: String,
    #[serde(default, skip_serializing_if = "Unset::is_unset")]
    pub offset: Unset<i64>,
    #[serde(default, skip_serializing_if = "Unset::is_unset")]
    pub limit: Unset<i64>,
    #[serde(flatten)]
    pub additional_properties: Map<String, Value>,
}

impl FetchUserSearch {
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            offset: Unset::Unset,
            limit: Unset::Unset,
            additional_properties: Map::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FetchHotList {
    #[serde(default, skip_serializing_if = "Unset::is_unset")]
    pub limit: Unset<i64>,
    #[serde(default, skip_serializing_if = "Unset::is_unset")]
    pub desktop: Unset<bool>,
    #[serde(flatten)]
    pub additional_properties: Map<String, Value>,
}

endpoint!(FetchArticleSearch, Get, "/api/v1/zhihu/web/fetch_article_search_v3");
endpoint!(FetchUserSearch, Get, "/api/v1/zhihu/web/fetch_user_search_v3");
endpoint!(FetchHotList, Get, "/api/v1/zhihu/web/fetch_hot_list");
