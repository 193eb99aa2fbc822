//! HTTP client types for storefront backend communication.
//!
//! This module provides the foundational HTTP layer used by the auth,
//! catalog and cart components.
//!
//! # Overview
//!
//! - [`HttpClient`]: The async HTTP client for backend communication
//! - [`HttpRequest`]: A request to be sent to the backend
//! - [`HttpResponse`]: A parsed response from the backend
//! - [`HttpMethod`]: The HTTP methods the backend routes use (GET, POST)
//! - [`DataType`]: Content types for request bodies
//!
//! # Retry Behavior
//!
//! None. Every failure is terminal for the action that caused it; callers
//! that want another attempt issue a new request.

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, CLIENT_VERSION};
pub use http_request::{DataType, HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
