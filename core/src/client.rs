//! Stateless HTTP request builder and response dispatcher for the TikHub API.
//!
//! # Design
//! `TikHubClient` holds only its [`ClientConfig`] and carries no mutable state
//! between calls. [`build`](TikHubClient::build) turns any [`Endpoint`] model
//! into an `HttpRequest`; [`parse`](TikHubClient::parse) turns the matching
//! `HttpResponse` into a [`Response`]. The caller, or one of the bundled
//! transports, executes the round-trip in between.

use serde_json::{Map, Value};
use tracing::debug;

use crate::config::ClientConfig;
use crate::dispatch::{build_response, Response};
use crate::endpoint::Endpoint;
use crate::error::Result;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Synchronous, stateless client core.
///
/// Builds `HttpRequest` values and dispatches `HttpResponse` values without
/// touching the network.
#[derive(Debug, Clone)]
pub struct TikHubClient {
    config: ClientConfig,
}

impl TikHubClient {
    pub fn new(mut config: ClientConfig) -> Self {
        config.base_url = config.base_url.trim_end_matches('/').to_string();
        Self { config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn build<E: Endpoint>(&self, request: &E) -> HttpRequest {
        let wire = request.to_wire();
        let mut headers = Vec::with_capacity(self.config.headers.len() + 3);
        headers.push(("user-agent".to_string(), self.config.user_agent.clone()));
        if let Some(auth) = &self.config.auth {
            headers.push(auth.header());
        }
        headers.extend(self.config.headers.iter().cloned());

        let (query, body) = match E::METHOD {
            HttpMethod::Get => (query_pairs(&wire), None),
            HttpMethod::Post => {
                headers.push(("content-type".to_string(), "application/json".to_string()));
                (Vec::new(), Some(Value::Object(wire).to_string()))
            }
        };

        debug!(method = E::METHOD.as_str(), path = E::PATH, params = query.len(), "built request");
        HttpRequest {
            method: E::METHOD,
            url: format!("{}{}", self.config.base_url, E::PATH),
            query,
            headers,
            body,
        }
    }

    pub fn parse<E: Endpoint>(&self, response: HttpResponse) -> Result<Response<E::Data>> {
        build_response(response, self.config.raise_on_unexpected_status)
    }
}

/// Flatten a wire mapping into query parameters.
///
/// Nulls are dropped, arrays repeat their key, and nested objects are sent
/// as compact JSON text.
fn query_pairs(wire: &Map<String, Value>) -> Vec<(String, String)> {
    let mut pairs = Vec::with_capacity(wire.len());
    for (key, value) in wire {
        match value {
            Value::Null => {}
            Value::Array(items) => {
                for item in items.iter().filter(|v| !v.is_null()) {
                    pairs.push((key.clone(), scalar_text(item)));
                }
            }
            other => pairs.push((key.clone(), scalar_text(other))),
        }
    }
    pairs
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
