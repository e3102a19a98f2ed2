//! Async transport on `reqwest`.

use reqwest::redirect::Policy;
use tracing::debug;

use crate::client::TikHubClient;
use crate::config::ClientConfig;
use crate::dispatch::{Parsed, Response};
use crate::endpoint::Endpoint;
use crate::error::Result;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

const MAX_REDIRECTS: usize = 10;

/// Executes requests on the caller's async runtime. Each call awaits once,
/// on the network round-trip.
///
/// The `reqwest::Client` owns the connection pool; clones share it.
#[derive(Debug, Clone)]
pub struct AsyncClient {
    core: TikHubClient,
    http: reqwest::Client,
}

impl AsyncClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let redirect = if config.follow_redirects {
            Policy::limited(MAX_REDIRECTS)
        } else {
            Policy::none()
        };
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .redirect(redirect)
            .build()?;
        Ok(Self::with_http_client(config, http))
    }

    /// Use a caller-owned `reqwest::Client`. The config's timeout and redirect
    /// settings are not applied to it.
    pub fn with_http_client(config: ClientConfig, http: reqwest::Client) -> Self {
        Self {
            core: TikHubClient::new(config),
            http,
        }
    }

    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    pub fn core(&self) -> &TikHubClient {
        &self.core
    }

    pub async fn send_detailed<E: Endpoint>(&self, request: &E) -> Result<Response<E::Data>> {
        let response = self.execute(&self.core.build(request)).await?;
        self.core.parse::<E>(response)
    }

    pub async fn send<E: Endpoint>(&self, request: &E) -> Result<Option<Parsed<E::Data>>> {
        Ok(self.send_detailed(request).await?.into_parsed())
    }

    pub async fn execute(&self, request: &HttpRequest) -> Result<HttpResponse> {
        let url = request.full_url();
        debug!(method = request.method.as_str(), url = %url, "sending async request");

        let method = match request.method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
        };
        let mut builder = self.http.request(method, url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response.bytes().await?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
