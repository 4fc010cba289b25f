//! HTTP transport types and the transport seam.
//!
//! # Design
//! `HttpRequest` and `HttpResponse` describe requests and responses as plain
//! data. The core builds `HttpRequest` values and parses `HttpResponse`
//! values without ever touching the network; a `Transport` implementation
//! supplied by the caller executes the actual round-trip. This separation
//! keeps request construction and response parsing deterministic and easy to
//! test with scripted responses.
//!
//! All fields use owned types (`String`, `Vec`) so values can be stored,
//! cloned, and inspected by tests without lifetime concerns.

use crate::error::ApiError;

/// HTTP method for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// An HTTP request described as plain data.
///
/// Built by `HeroApi::build_*` methods and handed to a `Transport` for
/// execution.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// Produced by a `Transport` after executing an `HttpRequest`, then passed
/// to `HeroApi::parse_*` methods for deserialization.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

/// Executes an `HttpRequest` against a backend.
///
/// Implementations return a response for any status code; only a failure to
/// complete the round-trip at all (connection refused, timeout imposed by
/// the transport, and so on) is an `Err`. Status interpretation belongs to
/// the parse layer.
pub trait Transport {
    fn execute(
        &self,
        request: HttpRequest,
    ) -> impl std::future::Future<Output = Result<HttpResponse, ApiError>> + Send;
}
