//! Typed client for the TikHub REST API.
//!
//! # Overview
//! Every endpoint is a request model implementing [`Endpoint`]. The sans-IO
//! [`TikHubClient`] builds an [`HttpRequest`] from a model and dispatches the
//! [`HttpResponse`] by status code: 200 decodes the success envelope, 422 the
//! validation-error body, and anything else is either an
//! [`ApiError::UnexpectedStatus`] or no parsed value, depending on
//! [`ClientConfig::raise_on_unexpected_status`].
//!
//! # Design
//! - `TikHubClient` is stateless and never touches the network.
//! - [`BlockingClient`] (ureq) and [`AsyncClient`] (reqwest) wrap it with a
//!   transport; both share the same build and parse steps.
//! - Optional fields are [`Unset`], so omitted fields never hit the wire and
//!   explicit nulls are preserved.
//! - One call issues one request. Nothing is retried, cached, or paginated.
//!
//! ```no_run
//! use tikhub_core::api::zhihu_web::FetchUserSearch;
//! use tikhub_core::{BlockingClient, ClientConfig};
//!
//! let client = BlockingClient::new(ClientConfig::default().with_token("your-api-key"));
//! let mut search = FetchUserSearch::new("rust");
//! search.limit = 20.into();
//! let response = client.send_detailed(&search)?;
//! if let Some(envelope) = response.success() {
//!     println!("{:?}", envelope.data());
//! }
//! # Ok::<(), tikhub_core::ApiError>(())
//! ```

pub mod api;
pub mod blocking;
pub mod client;
pub mod config;
pub mod dispatch;
pub mod endpoint;
pub mod error;
pub mod http;
pub mod models;
pub mod nonblocking;
pub mod unset;

pub use blocking::BlockingClient;
pub use client::TikHubClient;
pub use config::{Auth, ClientConfig};
pub use dispatch::{Parsed, Response};
pub use endpoint::Endpoint;
pub use error::{ApiError, Result};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use models::{HttpValidationError, ResponseModel, ValidationError, WireModel};
pub use nonblocking::AsyncClient;
pub use unset::Unset;
