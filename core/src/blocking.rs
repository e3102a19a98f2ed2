//! Blocking transport on `ureq`.

use std::fmt;
use std::time::Duration;

use tracing::debug;
use ureq::Agent;

use crate::client::TikHubClient;
use crate::config::ClientConfig;
use crate::dispatch::{Parsed, Response};
use crate::endpoint::Endpoint;
use crate::error::Result;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

const MAX_REDIRECTS: u32 = 10;

/// Executes requests on the calling thread.
///
/// The `ureq::Agent` owns the connection pool; clones share it.
#[derive(Clone)]
pub struct BlockingClient {
    core: TikHubClient,
    agent: Agent,
}

impl BlockingClient {
    pub fn new(config: ClientConfig) -> Self {
        let agent = Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(Some(config.timeout))
            .max_redirects(if config.follow_redirects { MAX_REDIRECTS } else { 0 })
            .build()
            .new_agent();
        Self::with_agent(config, agent)
    }

    /// Use a caller-owned agent. It must be built with
    /// `http_status_as_error(false)` so non-2xx responses reach the
    /// dispatcher.
    pub fn with_agent(config: ClientConfig, agent: Agent) -> Self {
        Self {
            core: TikHubClient::new(config),
            agent,
        }
    }

    pub fn from_env() -> Result<Self> {
        Ok(Self::new(ClientConfig::from_env()?))
    }

    pub fn core(&self) -> &TikHubClient {
        &self.core
    }

    pub fn timeout(&self) -> Duration {
        self.core.config().timeout
    }

    /// Send one request and return the response with its raw parts.
    pub fn send_detailed<E: Endpoint>(&self, request: &E) -> Result<Response<E::Data>> {
        let response = self.execute(&self.core.build(request))?;
        self.core.parse::<E>(response)
    }

    /// Send one request and return only the parsed model, if any.
    pub fn send<E: Endpoint>(&self, request: &E) -> Result<Option<Parsed<E::Data>>> {
        Ok(self.send_detailed(request)?.into_parsed())
    }

    /// Execute a built request. Non-2xx statuses are returned as data.
    pub fn execute(&self, request: &HttpRequest) -> Result<HttpResponse> {
        let url = request.full_url();
        debug!(method = request.method.as_str(), url = %url, "sending blocking request");

        let mut response = match (request.method, &request.body) {
            (HttpMethod::Get, _) => with_headers(self.agent.get(&url), request).call(),
            (HttpMethod::Post, Some(body)) => {
                with_headers(self.agent.post(&url), request).send(body.as_bytes())
            }
            (HttpMethod::Post, None) => with_headers(self.agent.post(&url), request).send_empty(),
        }?;

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
        // ureq caps bodies at 10 MiB by default; reqwest does not.
        let body = response
            .body_mut()
            .with_config()
            .limit(u64::MAX)
            .read_to_vec()?;

        Ok(HttpResponse {
            status,
            headers,
            body: body.into(),
        })
    }
}

impl fmt::Debug for BlockingClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BlockingClient")
            .field("core", &self.core)
            .finish_non_exhaustive()
    }
}

fn with_headers<B>(
    mut builder: ureq::RequestBuilder<B>,
    request: &HttpRequest,
) -> ureq::RequestBuilder<B> {
    for (name, value) in &request.headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    builder
}
