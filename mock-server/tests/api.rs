use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::app;
use serde_json::{json, Value};
use tower::ServiceExt;

const TOKEN: &str = "Bearer mock-key";

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn get_request(uri: &str) -> Request<String> {
    Request::builder()
        .uri(uri)
        .header(http::header::AUTHORIZATION, TOKEN)
        .body(String::new())
        .unwrap()
}

fn json_request(uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(http::header::AUTHORIZATION, TOKEN)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

// --- auth ---

#[tokio::test]
async fn missing_token_returns_401() {
    let resp = app()
        .oneshot(
            Request::builder()
                .uri("/api/v1/tikhub/user/get_user_info")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(resp).await;
    assert_eq!(body, json!({"detail": "Not authenticated"}));
}

// --- tikhub user ---

#[tokio::test]
async fn user_info_is_wrapped_in_envelope() {
    let resp = app()
        .oneshot(get_request("/api/v1/tikhub/user/get_user_info"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["code"], 200);
    assert_eq!(body["router"], "/api/v1/tikhub/user/get_user_info");
    assert_eq!(body["data"]["user_data"]["email"], "mock@tikhub.io");
}

#[tokio::test]
async fn calculate_price_echoes_query() {
    let resp = app()
        .oneshot(get_request(
            "/api/v1/tikhub/user/calculate_price?endpoint=%2Fapi%2Fv1%2Fdouyin&request_per_day=250",
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(
        body["params"],
        json!({"endpoint": "/api/v1/douyin", "request_per_day": "250"})
    );
    assert_eq!(body["data"]["request_per_day"], 250);
    assert_eq!(body["data"]["endpoint"], "/api/v1/douyin");
}

#[tokio::test]
async fn calculate_price_without_endpoint_returns_422() {
    let resp = app()
        .oneshot(get_request("/api/v1/tikhub/user/calculate_price"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(resp).await;
    assert_eq!(body["detail"][0]["loc"], json!(["query", "endpoint"]));
    assert_eq!(body["detail"][0]["type"], "missing");
}

#[tokio::test]
async fn calculate_price_with_non_integer_count_returns_422() {
    let resp = app()
        .oneshot(get_request(
            "/api/v1/tikhub/user/calculate_price?endpoint=x&request_per_day=lots",
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(resp).await;
    assert_eq!(body["detail"][0]["type"], "int_parsing");
}

// --- captcha ---

#[tokio::test]
async fn recaptcha_requires_site_key() {
    let resp = app()
        .oneshot(json_request(
            "/api/v1/captcha/recaptcha_v2",
            r#"{"website_url":"https://example.com"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(resp).await;
    assert_eq!(
        body,
        json!({"detail": [{"loc": ["body", "website_key"], "msg": "Field required", "type": "missing"}]})
    );
}

#[tokio::test]
async fn recaptcha_returns_token() {
    let resp = app()
        .oneshot(json_request(
            "/api/v1/captcha/recaptcha_v2",
            r#"{"website_url":"https://example.com","website_key":"6Le"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["data"]["token"], "03AFcWeA-mock-token");
}

// --- douyin search ---

#[tokio::test]
async fn general_search_advances_cursor() {
    let resp = app()
        .oneshot(json_request(
            "/api/v1/douyin/search/fetch_general_search_v1",
            r#"{"keyword":"猫","cursor":20}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["params"], json!({"keyword": "猫", "cursor": 20}));
    assert_eq!(body["data"]["cursor"], 30);
    assert_eq!(body["data"]["data"][0]["aweme_info"]["desc"], "猫 #1");
}

#[tokio::test]
async fn general_search_with_null_keyword_returns_422() {
    let resp = app()
        .oneshot(json_request(
            "/api/v1/douyin/search/fetch_general_search_v1",
            r#"{"keyword":null}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// --- interaction ---

#[tokio::test]
async fn like_requires_cookie_and_aweme_id() {
    let resp = app()
        .oneshot(json_request("/api/v1/tiktok/interaction/like", "{}"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(resp).await;
    assert_eq!(body["detail"].as_array().unwrap().len(), 2);
}

// --- unknown route ---

#[tokio::test]
async fn unknown_route_returns_404() {
    let resp = app()
        .oneshot(get_request("/api/v1/douyin/web/fetch_one_video"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(body_bytes(resp).await.is_empty());
}

// --- several calls on one service ---

#[tokio::test]
async fn calls_are_independent() {
    use tower::Service;

    let mut app = app().into_service();

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get_request("/api/v1/zhihu/web/fetch_hot_list?limit=5"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let first = body_json(resp).await;
    assert_eq!(first["params"], json!({"limit": "5"}));

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get_request("/api/v1/zhihu/web/fetch_hot_list"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let second = body_json(resp).await;
    assert_eq!(second["params"], json!({}));
    assert_eq!(first["data"], second["data"]);
}
