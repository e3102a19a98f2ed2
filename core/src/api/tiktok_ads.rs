//! TikTok Creative Center: top ads and top products.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::endpoint::endpoint;
use crate::unset::Unset;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetAdsDetail {
    pub ads_id: String,
    #[serde(flatten)]
    pub additional_properties: Map<String, Value>,
}

impl GetAdsDetail {
    pub fn new(ads_id: impl Into<String>) -> Self {
        Self {
            ads_id: ads_id.into(),
            additional_properties: Map::new(),
        }
    }
}

/// Search the top-ads library. Every filter is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchAds {
    #[serde(default, skip_serializing_if = "Unset::is_unset")]
    pub objective: Unset<i64>,
    #[serde(default, skip_serializing_if = "Unset::is_unset")]
    pub like: Unset<i64>,
    /// Look-back window in days: 7, 30 or 180.
    #[serde(default, skip_serializing_if = "Unset::is_unset")]
    pub period: Unset<i64>,
    #[serde(default, skip_serializing_if = "Unset::is_unset")]
    pub industry: Unset<String>,
    #[serde(default, skip_serializing_if = "Unset::is_unset")]
    pub keyword: Unset<String>,
    #[serde(default, skip_serializing_if = "Unset::is_unset")]
    pub page: Unset<i64>,
    #[serde(default, skip_serializing_if = "Unset::is_unset")]
    pub limit: Unset<i64>,
    /// `"for_you"`, `"likes"`, `"ctr"` or `"impression"`.
    #[serde(default, skip_serializing_if = "Unset::is_unset")]
    pub order_by: Unset<String>,
    #[serde(default, skip_serializing_if = "Unset::is_unset")]
    pub country_code: Unset<String>,
    #[serde(default, skip_serializing_if = "Unset::is_unset")]
    pub ad_format: Unset<i64>,
    #[serde(default, skip_serializing_if = "Unset::is_unset")]
    pub ad_language: Unset<String>,
    #[serde(flatten)]
    pub additional_properties: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetTopProducts {
    #[serde(default, skip_serializing_if = "Unset::is_unset")]
    pub page: Unset<i64>,
    #[serde(default, skip_serializing_if = "Unset::is_unset")]
    pub limit: Unset<i64>,
    #[serde(default, skip_serializing_if = "Unset::is_unset")]
    pub period: Unset<i64>,
    #[serde(default, skip_serializing_if = "Unset::is_unset")]
    pub country_code: Unset<String>,
    #[serde(default, skip_serializing_if = "Unset::is_unset")]
    pub ecom_type: Unset<String>,
    #[serde(default, skip_serializing_if = "Unset::is_unset")]
    pub category_id: Unset<String>,
    #[serde(default, skip_serializing_if = "Unset::is_unset")]
    pub order_by: Unset<String>,
    #[serde(default, skip_serializing_if = "Unset::is_unset")]
    pub order_type: Unset<String>,
    #[serde(flatten)]
    pub additional_properties: Map<String, Value>,
}

endpoint!(GetAdsDetail, Get, "/api/v1/tiktok/ads/get_ads_detail");
endpoint!(SearchAds, Get, "/api/v1/tiktok/ads/search_ads");
endpoint!(GetTopProducts, Get, "/api/v1/tiktok/ads/get_top_products");

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WireModel;
    use serde_json::json;

    #[test]
    fn default_search_is_empty_on_the_wire() {
        assert!(SearchAds::default().to_wire().is_empty());
        assert!(GetTopProducts::default().to_wire().is_empty());
    }

    #[test]
    fn search_filters_serialize_by_name() {
        let req = SearchAds {
            period: 30.into(),
            country_code: "US".to_string().into(),
            order_by: "likes".to_string().into(),
            ..Default::default()
        };
        assert_eq!(
            Value::Object(req.to_wire()),
            json!({"period": 30, "country_code": "US", "order_by": "likes"})
        );
    }

    #[test]
    fn ads_detail_round_trips_extras() {
        let mut req = GetAdsDetail::new("7221117041168252930");
        req.additional_properties.insert("industry".into(), json!("label_22000000000"));
        let wire = req.to_wire();
        assert_eq!(wire.get("industry"), Some(&json!("label_22000000000")));
        assert_eq!(GetAdsDetail::from_wire(wire).unwrap(), req);
    }
}
