//! Actions performed as a logged-in TikTok user.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::endpoint::endpoint;
use crate::unset::Unset;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Like {
    pub cookie: String,
    pub aweme_id: String,
    #[serde(default, skip_serializing_if = "Unset::is_unset")]
    pub proxy: Unset<String>,
    #[serde(flatten)]
    pub additional_properties: Map<String, Value>,
}

impl Like {
    pub fn new(cookie: impl Into<String>, aweme_id: impl Into<String>) -> Self {
        Self {
            cookie: cookie.into(),
            aweme_id: aweme_id.into(),
            proxy: Unset::Unset,
            additional_properties: Map::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Follow {
    pub cookie: String,
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Unset::is_unset")]
    pub sec_user_id: Unset<String>,
    #[serde(default, skip_serializing_if = "Unset::is_unset")]
    pub proxy: Unset<String>,
    #[serde(flatten)]
    pub additional_properties: Map<String, Value>,
}

impl Follow {
    pub fn new(cookie: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            cookie: cookie.into(),
            user_id: user_id.into(),
            sec_user_id: Unset::Unset,
            proxy: Unset::Unset,
            additional_properties: Map::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostComment {
    pub cookie: String,
    pub aweme_id: String,
    pub text: String,
    /// Comment id being replied to.
    #[serde(default, skip_serializing_if = "Unset::is_unset")]
    pub reply_id: Unset<String>,
    #[serde(default, skip_serializing_if = "Unset::is_unset")]
    pub proxy: Unset<String>,
    #[serde(flatten)]
    pub additional_properties: Map<String, Value>,
}

impl PostComment {
    pub fn new(
        cookie: impl Into<String>,
        aweme_id: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            cookie: cookie.into(),
            aweme_id: aweme_id.into(),
            text: text.into(),
            reply_id: Unset::Unset,
            proxy: Unset::Unset,
            additional_properties: Map::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collect {
    pub cookie: String,
    pub aweme_id: String,
    #[serde(default, skip_serializing_if = "Unset::is_unset")]
    pub proxy: Unset<String>,
    #[serde(flatten)]
    pub additional_properties: Map<String, Value>,
}

impl Collect {
    pub fn new(cookie: impl Into<String>, aweme_id: impl Into<String>) -> Self {
        Self {
            cookie: cookie.into(),
            aweme_id: aweme_id.into(),
            proxy: Unset::Unset,
            additional_properties: Map::new(),
        }
    }
}

endpoint!(Like, Post, "/api/v1/tiktok/interaction/like");
endpoint!(Follow, Post, "/api/v1/tiktok/interaction/follow");
endpoint!(PostComment, Post, "/api/v1/tiktok/interaction/post_comment");
endpoint!(Collect, Post, "/api/v1/tiktok/interaction/collect");
