//! Account, usage, and pricing information for the calling API key.
//!
//! Unlike the platform endpoints, these payloads are TikHub's own and are
//! modelled as typed structs. All fields are optional so a new server-side
//! field or a dropped one never breaks decoding.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::endpoint::endpoint;
use crate::unset::Unset;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetUserInfo {
    #[serde(flatten)]
    pub additional_properties: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetUserDailyUsage {
    #[serde(flatten)]
    pub additional_properties: Map<String, Value>,
}

/// Quote the daily cost of calling `endpoint` `request_per_day` times.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatePrice {
    /// Endpoint path, e.g. `/api/v1/douyin/web/fetch_one_video`.
    pub endpoint: String,
    #[serde(default, skip_serializing_if = "Unset::is_unset")]
    pub request_per_day: Unset<i64>,
    #[serde(flatten)]
    pub additional_properties: Map<String, Value>,
}

impl CalculatePrice {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            request_per_day: Unset::Unset,
            additional_properties: Map::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetTieredDiscountInfo {
    #[serde(flatten)]
    pub additional_properties: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    #[serde(default, skip_serializing_if = "Unset::is_unset")]
    pub user_data: Unset<UserData>,
    #[serde(default, skip_serializing_if = "Unset::is_unset")]
    pub api_key_data: Unset<ApiKeyData>,
    #[serde(flatten)]
    pub additional_properties: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserData {
    #[serde(default, skip_serializing_if = "Unset::is_unset")]
    pub email: Unset<String>,
    /// Prepaid balance in USD.
    #[serde(default, skip_serializing_if = "Unset::is_unset")]
    pub balance: Unset<f64>,
    #[serde(default, skip_serializing_if = "Unset::is_unset")]
    pub free_credit: Unset<f64>,
    #[serde(default, skip_serializing_if = "Unset::is_unset")]
    pub email_verified: Unset<bool>,
    #[serde(default, skip_serializing_if = "Unset::is_unset")]
    pub account_disabled: Unset<bool>,
    #[serde(flatten)]
    pub additional_properties: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiKeyData {
    #[serde(default, skip_serializing_if = "Unset::is_unset")]
    pub api_key_name: Unset<String>,
    #[serde(default, skip_serializing_if = "Unset::is_unset")]
    pub api_key_scopes: Unset<Vec<String>>,
    #[serde(default, skip_serializing_if = "Unset::is_unset")]
    pub api_key_status: Unset<i64>,
    #[serde(default, skip_serializing_if = "Unset::is_unset")]
    pub expires_at: Unset<String>,
    #[serde(flatten)]
    pub additional_properties: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceQuote {
    #[serde(default, skip_serializing_if = "Unset::is_unset")]
    pub endpoint: Unset<String>,
    #[serde(default, skip_serializing_if = "Unset::is_unset")]
    pub request_per_day: Unset<i64>,
    #[serde(default, skip_serializing_if = "Unset::is_unset")]
    pub unit_price: Unset<f64>,
    #[serde(default, skip_serializing_if = "Unset::is_unset")]
    pub total_price: Unset<f64>,
    #[serde(flatten)]
    pub additional_properties: Map<String, Value>,
}

endpoint!(GetUserInfo, Get, "/api/v1/tikhub/user/get_user_info", UserInfo);
endpoint!(GetUserDailyUsage, Get, "/api/v1/tikhub/user/get_user_daily_usage");
endpoint!(CalculatePrice, Get, "/api/v1/tikhub/user/calculate_price", PriceQuote);
endpoint!(GetTieredDiscountInfo, Get, "/api/v1/tikhub/user/get_tiered_discount_info");
