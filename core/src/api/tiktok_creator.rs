//! TikTok Creator Center analytics.
//!
//! These read the creator's own dashboard, so every request carries the
//! logged-in creator's `cookie` string in the body.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::endpoint::endpoint;
use crate::unset::Unset;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetCreatorAccountInfo {
    pub cookie: String,
    #[serde(default, skip_serializing_if = "Unset::is_unset")]
    pub proxy: Unset<String>,
    #[serde(flatten)]
    pub additional_properties: Map<String, Value>,
}

impl GetCreatorAccountInfo {
    pub fn new(cookie: impl Into<String>) -> Self {
        Self {
            cookie: cookie.into(),
            proxy: Unset::Unset,
            additional_properties: Map::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetLiveAnalyticsSummary {
    pub cookie: String,
    /// `YYYY-MM-DD`
    pub start_date: String,
    #[serde(default, skip_serializing_if = "Unset::is_unset")]
    pub end_date: Unset<String>,
    #[serde(default, skip_serializing_if = "Unset::is_unset")]
    pub proxy: Unset<String>,
    #[serde(flatten)]
    pub additional_properties: Map<String, Value>,
}

impl GetLiveAnalyticsSummary {
    pub fn new(cookie: impl Into<String>, start_date: impl Into<String>) -> Self {
        Self {
            cookie: cookie.into(),
            start_date: start_date.into(),
            end_date: Unset::Unset,
            proxy: Unset::Unset,
            additional_properties: Map::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetVideoAnalyticsSummary {
    pub cookie: String,
    pub start_date: String,
    #[serde(default, skip_serializing_if = "Unset::is_unset")]
    pub end_date: Unset<String>,
    #[serde(default, skip_serializing_if = "Unset::is_unset")]
    pub proxy: Unset<String>,
    #[serde(flatten)]
    pub additional_properties: Map<String, Value>,
}

impl GetVideoAnalyticsSummary {
    pub fn new(cookie: impl Into<String>, start_date: impl Into<String>) -> Self {
        Self {
            cookie: cookie.into(),
            start_date: start_date.into(),
            end_date: Unset::Unset,
            proxy: Unset::Unset,
            additional_properties: Map::new(),
        }
    }
}

endpoint!(
    GetCreatorAccountInfo,
    Post,
    "/api/v1/tiktok/creator/get_creator_account_info"
);
endpoint!(
    GetLiveAnalyticsSummary,
    Post,
    "/api/v1/tiktok/creator/get_live_analytics_summary"
);
endpoint!(
    GetVideoAnalyticsSummary,
    Post,
    "/api/v1/tiktok/creator/get_video_analytics_summary"
);
