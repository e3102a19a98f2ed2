//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! These types describe HTTP requests and responses as plain data. The
//! [`TikHubClient`](crate::TikHubClient) builds `HttpRequest` values and
//! dispatches `HttpResponse` values without ever touching the network. The
//! bundled transports in [`blocking`](crate::blocking) and
//! [`nonblocking`](crate::nonblocking) are thin adapters that execute an
//! `HttpRequest` and hand back an `HttpResponse`; any other HTTP stack can do
//! the same.

use bytes::Bytes;

/// HTTP method for a request. Every TikHub endpoint is either a GET or a POST.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

/// An HTTP request described as plain data.
///
/// `url` is the base URL joined with the endpoint path, without the query
/// string. Query parameters stay in `query` in insertion order so tests can
/// assert on them directly; [`HttpRequest::full_url`] renders the final URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// The request URL with the percent-encoded query string appended.
    pub fn full_url(&self) -> String {
        if self.query.is_empty() {
            return self.url.clone();
        }
        let query = self
            .query
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{query}", self.url)
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }
}

/// An HTTP response described as plain data.
///
/// The body is kept as raw bytes; it is only decoded once the dispatcher
/// knows which model the status code calls for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Bytes,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: body.into(),
        }
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }
}

fn find_header<'a>(headers: &'a [(String, String)], name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(name))
        .map(|(_, v)| v.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(query: Vec<(&str, &str)>) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: "https://api.tikhub.io/api/v1/zhihu/web/fetch_user_search_v3".to_string(),
            query: query
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            headers: vec![("Authorization".to_string(), "Bearer abc".to_string())],
            body: None,
        }
    }

    #[test]
    fn full_url_without_query_is_plain_url() {
        let req = request(Vec::new());
        assert_eq!(req.full_url(), req.url);
    }

    #[test]
    fn full_url_percent_encodes_query() {
        let req = request(vec![("keyword", "rust 语言"), ("offset", "0")]);
        assert_eq!(
            req.full_url(),
            "https://api.tikhub.io/api/v1/zhihu/web/fetch_user_search_v3?keyword=rust%20%E8%AF%AD%E8%A8%80&offset=0"
        );
    }

    #[test]
    fn header_lookup_ignores_case() {
        let req = request(Vec::new());
        assert_eq!(req.header("authorization"), Some("Bearer abc"));
        assert_eq!(req.header("cookie"), None);
    }

    #[test]
    fn response_new_has_no_headers() {
        let resp = HttpResponse::new(200, "{}");
        assert_eq!(resp.status, 200);
        assert!(resp.headers.is_empty());
        assert_eq!(&resp.body[..], b"{}");
    }
}
