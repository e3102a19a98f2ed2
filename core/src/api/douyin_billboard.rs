//! Douyin hot-list billboards.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::endpoint::endpoint;
use crate::unset::Unset;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FetchHotCityList {
    #[serde(flatten)]
    pub additional_properties: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FetchHotTotalList {
    pub page: i64,
    pub page_size: i64,
    /// Board type, e.g. `"snapshot"` or `"punish"`.
    #[serde(rename = "type")]
    pub list_type: String,
    #[serde(default, skip_serializing_if = "Unset::is_unset")]
    pub snapshot_time: Unset<String>,
    #[serde(default, skip_serializing_if = "Unset::is_unset")]
    pub sentence_id: Unset<String>,
    #[serde(default, skip_serializing_if = "Unset::is_unset")]
    pub sentence_tag: Unset<String>,
    #[serde(default, skip_serializing_if = "Unset::is_unset")]
    pub keyword: Unset<String>,
    #[serde(flatten)]
    pub additional_properties: Map<String, Value>,
}

impl FetchHotTotalList {
    pub fn new(page: i64, page_size: i64, list_type: impl Into<String>) -> Self {
        Self {
            page,
            page_size,
            list_type: list_type.into(),
            snapshot_time: Unset::Unset,
            sentence_id: Unset::Unset,
            sentence_tag: Unset::Unset,
            keyword: Unset::Unset,
            additional_properties: Map::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FetchHotTotalVideoList {
    pub page: i64,
    pub page_size: i64,
    /// Window in hours: 1, 2, 6 or 24.
    #[serde(default, skip_serializing_if = "Unset::is_unset")]
    pub date_window: Unset<i64>,
    #[serde(default, skip_serializing_if = "Unset::is_unset")]
    pub sub_type: Unset<i64>,
    #[serde(default, skip_serializing_if = "Unset::is_unset")]
    pub tags: Unset<Vec<BillboardTag>>,
    #[serde(flatten)]
    pub additional_properties: Map<String, Value>,
}

impl FetchHotTotalVideoList {
    pub fn new(page: i64, page_size: i64) -> Self {
        Self {
            page,
            page_size,
            date_window: Unset::Unset,
            sub_type: Unset::Unset,
            tags: Unset::Unset,
            additional_properties: Map::new(),
        }
    }
}

/// A content-category filter; categories nest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillboardTag {
    pub value: i64,
    #[serde(default, skip_serializing_if = "Unset::is_unset")]
    pub children: Unset<Vec<BillboardTag>>,
    #[serde(flatten)]
    pub additional_properties: Map<String, Value>,
}

endpoint!(FetchHotCityList, Get, "/api/v1/douyin/billboard/fetch_hot_city_list");
endpoint!(FetchHotTotalList, Get, "/api/v1/douyin/billboard/fetch_hot_total_list");
endpoint!(
    FetchHotTotalVideoList,
    Post,
    "/api/v1/douyin/billboard/fetch_hot_total_video_list"
);
