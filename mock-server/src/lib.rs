//! In-process imitation of a slice of the TikHub API.
//!
//! Behaves like the real service where the client can observe it: every
//! route requires `Authorization: Bearer <key>` (401 otherwise), missing
//! required fields produce a FastAPI-shaped 422, and successful responses
//! wrap their payload in the `{code, router, params, data}` envelope with
//! `params` echoing what the server received.

use std::collections::HashMap;

use axum::{
    extract::Query,
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Map, Value};
use tokio::net::TcpListener;

/// Error response: status plus JSON body.
pub type Rejection = (StatusCode, Json<Value>);
type Reply = Result<Json<Value>, Rejection>;

pub const UNIT_PRICE: f64 = 0.001;

pub fn app() -> Router {
    Router::new()
        .route("/api/v1/tikhub/user/get_user_info", get(get_user_info))
        .route("/api/v1/tikhub/user/calculate_price", get(calculate_price))
        .route("/api/v1/captcha/recaptcha_v2", post(recaptcha_v2))
        .route(
            "/api/v1/douyin/search/fetch_general_search_v1",
            post(fetch_general_search),
        )
        .route("/api/v1/tiktok/interaction/like", post(like))
        .route("/api/v1/zhihu/web/fetch_hot_list", get(fetch_hot_list))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn get_user_info(headers: HeaderMap) -> Reply {
    authorize(&headers)?;
    Ok(envelope(
        "/api/v1/tikhub/user/get_user_info",
        json!({}),
        json!({
            "user_data": {
                "email": "mock@tikhub.io",
                "balance": 100.0,
                "free_credit": 0.0,
                "email_verified": true,
                "account_disabled": false
            },
            "api_key_data": {
                "api_key_name": "mock",
                "api_key_scopes": ["*"],
                "api_key_status": 1
            }
        }),
    ))
}

async fn calculate_price(
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> Reply {
    authorize(&headers)?;
    let params = query_params(query);
    require("query", &params, &["endpoint"])?;

    let request_per_day = match params.get("request_per_day").and_then(Value::as_str) {
        None => 1,
        Some(raw) => raw.parse::<i64>().map_err(|_| {
            validation_error(vec![detail(
                "query",
                "request_per_day",
                "Input should be a valid integer, unable to parse string as an integer",
                "int_parsing",
            )])
        })?,
    };
    let endpoint = params.get("endpoint").cloned().unwrap_or(Value::Null);
    Ok(envelope(
        "/api/v1/tikhub/user/calculate_price",
        Value::Object(params),
        json!({
            "endpoint": endpoint,
            "request_per_day": request_per_day,
            "unit_price": UNIT_PRICE,
            "total_price": UNIT_PRICE * request_per_day as f64
        }),
    ))
}

async fn recaptcha_v2(headers: HeaderMap, Json(body): Json<Value>) -> Reply {
    authorize(&headers)?;
    let params = body_params(body)?;
    require("body", &params, &["website_url", "website_key"])?;
    Ok(envelope(
        "/api/v1/captcha/recaptcha_v2",
        Value::Object(params),
        json!({"token": "03AFcWeA-mock-token"}),
    ))
}

async fn fetch_general_search(headers: HeaderMap, Json(body): Json<Value>) -> Reply {
    authorize(&headers)?;
    let params = body_params(body)?;
    require("body", &params, &["keyword"])?;

    let keyword = params.get("keyword").and_then(Value::as_str).unwrap_or_default();
    let cursor = params.get("cursor").and_then(Value::as_i64).unwrap_or(0);
    let data = json!({
        "cursor": cursor + 10,
        "has_more": 1,
        "search_id": "mock-search-id",
        "data": [{"aweme_info": {"aweme_id": "7300000000000000001", "desc": format!("{keyword} #1")}}]
    });
    Ok(envelope(
        "/api/v1/douyin/search/fetch_general_search_v1",
        Value::Object(params),
        data,
    ))
}

async fn like(headers: HeaderMap, Json(body): Json<Value>) -> Reply {
    authorize(&headers)?;
    let params = body_params(body)?;
    require("body", &params, &["cookie", "aweme_id"])?;
    Ok(envelope(
        "/api/v1/tiktok/interaction/like",
        Value::Object(params),
        json!({"status_code": 0, "is_digg": 1}),
    ))
}

async fn fetch_hot_list(
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> Reply {
    authorize(&headers)?;
    let params = query_params(query);
    Ok(envelope(
        "/api/v1/zhihu/web/fetch_hot_list",
        Value::Object(params),
        json!({"data": [{"target": {"title": "mock hot question"}}]}),
    ))
}

fn envelope(router: &str, params: Value, data: Value) -> Json<Value> {
    Json(json!({
        "code": 200,
        "request_id": "mock-request-id",
        "message": "Request successful. This request will incur a charge.",
        "message_zh": "请求成功，本次请求将被计费。",
        "router": router,
        "params": params,
        "data": data
    }))
}

fn authorize(headers: &HeaderMap) -> Result<(), Rejection> {
    let authorized = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .is_some_and(|token| !token.trim().is_empty());
    if authorized {
        Ok(())
    } else {
        tracing::debug!("rejecting request without bearer token");
        Err((
            StatusCode::UNAUTHORIZED,
            Json(json!({"detail": "Not authenticated"})),
        ))
    }
}

fn query_params(query: HashMap<String, String>) -> Map<String, Value> {
    query
        .into_iter()
        .map(|(k, v)| (k, Value::String(v)))
        .collect()
}

fn body_params(body: Value) -> Result<Map<String, Value>, Rejection> {
    match body {
        Value::Object(map) => Ok(map),
        _ => Err(validation_error(vec![detail(
            "body",
            "",
            "Input should be a valid dictionary",
            "dict_type",
        )])),
    }
}

/// 422 listing every field in `fields` missing from `params`.
fn require(
    location: &str,
    params: &Map<String, Value>,
    fields: &[&str],
) -> Result<(), Rejection> {
    let missing: Vec<Value> = fields
        .iter()
        .filter(|field| params.get(**field).map_or(true, Value::is_null))
        .map(|field| detail(location, field, "Field required", "missing"))
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        tracing::debug!(location, missing = missing.len(), "rejecting request with missing fields");
        Err(validation_error(missing))
    }
}

fn detail(location: &str, field: &str, msg: &str, kind: &str) -> Value {
    let loc = if field.is_empty() {
        json!([location])
    } else {
        json!([location, field])
    };
    json!({"loc": loc, "msg": msg, "type": kind})
}

fn validation_error(detail: Vec<Value>) -> Rejection {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(json!({ "detail": detail })),
    )
}
