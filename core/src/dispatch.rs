//! Status-code classification of raw responses.
//!
//! # Design
//! Only two statuses have a model: 200 decodes as the success envelope and
//! 422 as the validation-error body. Every other status yields no parsed
//! value, or an `UnexpectedStatus` error when the client asks for it. The
//! raw status, bytes, and headers are always kept alongside the parsed
//! value so callers can inspect what the server actually sent.

use bytes::Bytes;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::{ApiError, Result};
use crate::http::HttpResponse;
use crate::models::{HttpValidationError, ResponseModel};

/// The model a response decoded into.
#[derive(Debug, Clone, PartialEq)]
pub enum Parsed<T> {
    Success(ResponseModel<T>),
    ValidationError(HttpValidationError),
}

impl<T> Parsed<T> {
    pub fn success(&self) -> Option<&ResponseModel<T>> {
        match self {
            Parsed::Success(envelope) => Some(envelope),
            Parsed::ValidationError(_) => None,
        }
    }

    pub fn validation_error(&self) -> Option<&HttpValidationError> {
        match self {
            Parsed::Success(_) => None,
            Parsed::ValidationError(err) => Some(err),
        }
    }
}

/// A dispatched response: the raw parts plus whatever was parsed from them.
#[derive(Debug, Clone, PartialEq)]
pub struct Response<T> {
    pub status_code: u16,
    pub content: Bytes,
    pub headers: Vec<(String, String)>,
    pub parsed: Option<Parsed<T>>,
}

impl<T> Response<T> {
    pub fn success(&self) -> Option<&ResponseModel<T>> {
        self.parsed.as_ref().and_then(Parsed::success)
    }

    pub fn validation_error(&self) -> Option<&HttpValidationError> {
        self.parsed.as_ref().and_then(Parsed::validation_error)
    }

    pub fn into_parsed(self) -> Option<Parsed<T>> {
        self.parsed
    }
}

/// Classify `response` by status and decode the matching model.
pub fn parse_response<T: DeserializeOwned>(
    response: &HttpResponse,
    raise_on_unexpected_status: bool,
) -> Result<Option<Parsed<T>>> {
    debug!(status = response.status, bytes = response.body.len(), "dispatching response");
    match response.status {
        200 => Ok(Some(Parsed::Success(serde_json::from_slice(&response.body)?))),
        422 => Ok(Some(Parsed::ValidationError(serde_json::from_slice(
            &response.body,
        )?))),
        status if raise_on_unexpected_status => {
            warn!(status, "unexpected status code");
            Err(ApiError::UnexpectedStatus {
                status,
                content: response.body.clone(),
            })
        }
        status => {
            warn!(status, "unexpected status code, returning no parsed value");
            Ok(None)
        }
    }
}

/// [`parse_response`], keeping the raw parts of the response.
pub fn build_response<T: DeserializeOwned>(
    response: HttpResponse,
    raise_on_unexpected_status: bool,
) -> Result<Response<T>> {
    let parsed = parse_response(&response, raise_on_unexpected_status)?;
    Ok(Response {
        status_code: response.status,
        content: response.body,
        headers: response.headers,
        parsed,
    })
}
