//! The endpoint contract shared by every request model.

use serde::de::DeserializeOwned;

use crate::http::HttpMethod;
use crate::models::WireModel;

/// A fixed (verb, path) pair on the TikHub API, bound to its request model.
///
/// GET endpoints send the model's wire mapping as query parameters, POST
/// endpoints send it as a JSON body. `Data` is the type of the envelope's
/// `data` field on success.
pub trait Endpoint: WireModel {
    const METHOD: HttpMethod;
    const PATH: &'static str;
    type Data: DeserializeOwned;
}

/// Implements [`Endpoint`] for a request model.
///
/// ```ignore
/// endpoint!(FetchHotList, Get, "/api/v1/zhihu/web/fetch_hot_list");
/// endpoint!(CalculatePrice, Get, "/api/v1/tikhub/user/calculate_price", PriceQuote);
/// ```
macro_rules! endpoint {
    ($model:ty, $method:ident, $path:literal) => {
        impl $crate::endpoint::Endpoint for $model {
            const METHOD: $crate::http::HttpMethod = $crate::http::HttpMethod::$method;
            const PATH: &'static str = $path;
            type Data = ::serde_json::Value;
        }
    };
    ($model:ty, $method:ident, $path:literal, $data:ty) => {
        impl $crate::endpoint::Endpoint for $model {
            const METHOD: $crate::http::HttpMethod = $crate::http::HttpMethod::$method;
            const PATH: &'static str = $path;
            type Data = $data;
        }
    };
}

pub(crate) use endpoint;
