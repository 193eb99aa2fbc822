//! HTTP-specific error types for the storefront client.
//!
//! - [`HttpResponseError`]: Non-2xx HTTP responses from the backend
//! - [`InvalidHttpRequestError`]: When a request fails validation before sending
//! - [`HttpError`]: Unified error type encompassing all HTTP-related errors
//!
//! # Example
//!
//! ```rust,ignore
//! use storefront_client::clients::{HttpClient, HttpError, HttpMethod, HttpRequest};
//!
//! match client.request(request).await {
//!     Ok(response) => println!("Success: {}", response.body),
//!     Err(HttpError::Response(e)) => {
//!         println!("API error {}: {}", e.code, e.detail.as_deref().unwrap_or("-"));
//!     }
//!     Err(HttpError::InvalidRequest(e)) => println!("Invalid request: {e}"),
//!     Err(HttpError::Network(e)) => println!("Network error: {e}"),
//! }
//! ```

use std::fmt;

use thiserror::Error;

/// Error returned when an HTTP request receives a non-successful response.
///
/// `detail` carries the human-readable message the backend put in its
/// `detail` field, when it sent one. `message` is the raw response body.
///
/// # Example
///
/// ```rust
/// use storefront_client::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 401,
///     message: r#"{"detail":"Invalid credentials"}"#.to_string(),
///     detail: Some("Invalid credentials".to_string()),
/// };
///
/// assert_eq!(error.to_string(), "HTTP 401: Invalid credentials");
/// ```
#[derive(Debug, Error)]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The raw response body.
    pub message: String,
    /// The backend-provided `detail` message, if any.
    pub detail: Option<String>,
}

impl fmt::Display for HttpResponseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = self.detail.as_deref().unwrap_or(&self.message);
        write!(f, "HTTP {}: {summary}", self.code)
    }
}

/// Error returned when an HTTP request fails validation.
///
/// This error is raised before a request is sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A request body was provided without specifying the body type.
    #[error("Cannot set a body without also setting body_type.")]
    MissingBodyType,

    /// A POST request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// A bearer token was attached but it is empty.
    #[error("Cannot authenticate with an empty bearer token.")]
    EmptyBearerToken,

    /// The body could not be serialized to JSON.
    #[error("Request body could not be serialized: {reason}")]
    UnserializableBody {
        /// The serializer's error message.
        reason: String,
    },
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl HttpError {
    /// Returns the backend `detail` message for response errors.
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Response(e) => e.detail.as_deref(),
            _ => None,
        }
    }

    /// Returns the HTTP status code for response errors.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_response_error_prefers_detail() {
        let error = HttpResponseError {
            code: 400,
            message: r#"{"detail":"Email already registered"}"#.to_string(),
            detail: Some("Email already registered".to_string()),
        };
        assert_eq!(error.to_string(), "HTTP 400: Email already registered");
    }

    #[test]
    fn test_http_response_error_falls_back_to_body() {
        let error = HttpResponseError {
            code: 502,
            message: "Bad Gateway".to_string(),
            detail: None,
        };
        assert_eq!(error.to_string(), "HTTP 502: Bad Gateway");
    }

    #[test]
    fn test_http_error_accessors() {
        let error = HttpError::Response(HttpResponseError {
            code: 404,
            message: String::new(),
            detail: Some("User not found".to_string()),
        });
        assert_eq!(error.status(), Some(404));
        assert_eq!(error.detail(), Some("User not found"));

        let error = HttpError::InvalidRequest(InvalidHttpRequestError::EmptyBearerToken);
        assert_eq!(error.status(), None);
        assert_eq!(error.detail(), None);
    }

    #[test]
    fn test_invalid_request_error_missing_body() {
        let error = InvalidHttpRequestError::MissingBody {
            method: "post".to_string(),
        };
        assert_eq!(error.to_string(), "Cannot use post without specifying data.");
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let http_error: &dyn std::error::Error = &HttpResponseError {
            code: 400,
            message: "test".to_string(),
            detail: None,
        };
        let _ = http_error;

        let invalid_error: &dyn std::error::Error = &InvalidHttpRequestError::MissingBodyType;
        let _ = invalid_error;
    }
}
