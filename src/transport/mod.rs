//! HTTP transport layer.
//!
//! A transport sends one fully-built [`TransportRequest`] and hands back the
//! raw [`TransportResponse`]. Status handling, decoding and error
//! normalization live in the clients, so custom transports only move bytes.

use http::{HeaderMap, HeaderValue, Method, StatusCode};
use std::time::Duration;
use url::Url;

#[cfg(feature = "async")]
pub mod async_transport;
#[cfg(feature = "blocking")]
pub mod blocking_transport;
#[cfg(feature = "metrics")]
pub(crate) mod metrics;
pub mod request;

#[derive(Clone, Debug)]
pub struct TransportBody {
    pub bytes: Vec<u8>,
    pub content_type: Option<HeaderValue>,
}

#[derive(Clone, Debug)]
pub struct TransportRequest {
    pub method: Method,
    /// Full endpoint URL; `query` pairs are appended to it.
    pub url: Url,
    pub headers: HeaderMap,
    /// Query pairs in order; repeated keys are allowed.
    pub query: Vec<(String, String)>,
    pub body: Option<TransportBody>,
    pub timeout: Duration,
}

#[derive(Clone, Debug)]
pub struct TransportResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}
