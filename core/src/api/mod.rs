//! Request models for every supported endpoint, grouped by upstream platform.
//!
//! Each struct implements [`Endpoint`](crate::Endpoint); pass it to
//! [`BlockingClient::send`](crate::BlockingClient::send) or
//! [`AsyncClient::send`](crate::AsyncClient::send).

pub mod captcha;
pub mod douyin_billboard;
pub mod douyin_search;
pub mod tikhub_user;
pub mod tiktok_ads;
pub mod tiktok_creator;
pub mod tiktok_interaction;
pub mod xiaohongshu_web;
pub mod zhihu_web;
