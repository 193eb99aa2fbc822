//! HTTP request types for the storefront client.
//!
//! This module provides the [`HttpRequest`] type and its builder for
//! constructing requests to the storefront backend.

use std::fmt;

use crate::clients::errors::InvalidHttpRequestError;

/// HTTP methods used by the storefront backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources.
    Post,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
        }
    }
}

/// Content type for HTTP request bodies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataType {
    /// JSON content type (`application/json`).
    Json,
}

impl DataType {
    /// Returns the MIME type string for this data type.
    #[must_use]
    pub const fn as_content_type(&self) -> &'static str {
        match self {
            Self::Json => "application/json",
        }
    }
}

/// An HTTP request to be sent to the storefront backend.
///
/// Use [`HttpRequest::builder`] to construct requests with the builder pattern.
///
/// # Example
///
/// ```rust
/// use storefront_client::clients::{DataType, HttpMethod, HttpRequest};
/// use serde_json::json;
///
/// let get_request = HttpRequest::builder(HttpMethod::Get, "/products/")
///     .build()
///     .unwrap();
///
/// let post_request = HttpRequest::builder(HttpMethod::Post, "/cart/")
///     .body(json!({"user_id": 7, "products": []}))
///     .body_type(DataType::Json)
///     .bearer_token("T1")
///     .build()
///     .unwrap();
/// assert_eq!(post_request.bearer_token.as_deref(), Some("T1"));
/// ```
#[derive(Clone)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The path (relative to the base URL) for this request.
    pub path: String,
    /// The request body, if any.
    pub body: Option<serde_json::Value>,
    /// The content type of the body.
    pub body_type: Option<DataType>,
    /// Bearer token sent in the `Authorization` header.
    pub bearer_token: Option<String>,
}

impl fmt::Debug for HttpRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpRequest")
            .field("http_method", &self.http_method)
            .field("path", &self.path)
            .field("body", &self.body)
            .field("body_type", &self.body_type)
            .field("bearer_token", &self.bearer_token.as_ref().map(|_| "*****"))
            .finish()
    }
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, path)
    }

    /// Validates the request, ensuring it meets all requirements.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if:
    /// - `body` is `Some` but `body_type` is `None`
    /// - `http_method` is `Post` but `body` is `None`
    /// - `bearer_token` is present but empty
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        if self.body.is_some() && self.body_type.is_none() {
            return Err(InvalidHttpRequestError::MissingBodyType);
        }

        if self.http_method == HttpMethod::Post && self.body.is_none() {
            return Err(InvalidHttpRequestError::MissingBody {
                method: self.http_method.to_string(),
            });
        }

        if self.bearer_token.as_deref().is_some_and(str::is_empty) {
            return Err(InvalidHttpRequestError::EmptyBearerToken);
        }

        Ok(())
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    request: HttpRequest,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            request: HttpRequest {
                http_method: method,
                path: path.into(),
                body: None,
                body_type: None,
                bearer_token: None,
            },
        }
    }

    /// Sets the request body.
    ///
    /// When setting a body, you must also set the body type via [`body_type`](Self::body_type).
    #[must_use]
    pub fn body(mut self, body: impl Into<serde_json::Value>) -> Self {
        self.request.body = Some(body.into());
        self
    }

    /// Serializes `body` as JSON and sets the body type to [`DataType::Json`].
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::UnserializableBody`] if `body`
    /// cannot be represented as JSON.
    pub fn json<T: serde::Serialize>(mut self, body: &T) -> Result<Self, InvalidHttpRequestError> {
        let value = serde_json::to_value(body).map_err(|e| {
            InvalidHttpRequestError::UnserializableBody {
                reason: e.to_string(),
            }
        })?;
        self.request.body = Some(value);
        self.request.body_type = Some(DataType::Json);
        Ok(self)
    }

    /// Sets the content type of the request body.
    #[must_use]
    pub const fn body_type(mut self, body_type: DataType) -> Self {
        self.request.body_type = Some(body_type);
        self
    }

    /// Authenticates the request with a bearer token.
    #[must_use]
    pub fn bearer_token(mut self, token: impl Into<String>) -> Self {
        self.request.bearer_token = Some(token.into());
        self
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        self.request.verify()?;
        Ok(self.request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_http_method_display() {
        assert_eq!(HttpMethod::Get.to_string(), "get");
        assert_eq!(HttpMethod::Post.to_string(), "post");
    }

    #[test]
    fn test_builder_creates_valid_get_request() {
        let request = HttpRequest::builder(HttpMethod::Get, "/products/")
            .build()
            .unwrap();

        assert_eq!(request.http_method, HttpMethod::Get);
        assert_eq!(request.path, "/products/");
        assert!(request.body.is_none());
        assert!(request.bearer_token.is_none());
    }

    #[test]
    fn test_json_sets_body_and_type() {
        #[derive(serde::Serialize)]
        struct Login<'a> {
            email: &'a str,
            password: &'a str,
        }

        let request = HttpRequest::builder(HttpMethod::Post, "/auth/login")
            .json(&Login {
                email: "a@b.com",
                password: "x",
            })
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(request.body_type, Some(DataType::Json));
        assert_eq!(
            request.body,
            Some(json!({"email": "a@b.com", "password": "x"}))
        );
    }

    #[test]
    fn test_verify_requires_body_for_post() {
        let result = HttpRequest::builder(HttpMethod::Post, "/cart/").build();

        assert!(matches!(
            result,
            Err(InvalidHttpRequestError::MissingBody { method }) if method == "post"
        ));
    }

    #[test]
    fn test_verify_requires_body_type_when_body_present() {
        let result = HttpRequest::builder(HttpMethod::Get, "/products/")
            .body(json!({"key": "value"}))
            .build();

        assert!(matches!(
            result,
            Err(InvalidHttpRequestError::MissingBodyType)
        ));
    }

    #[test]
    fn test_verify_rejects_empty_bearer_token() {
        let result = HttpRequest::builder(HttpMethod::Get, "/cart/user/1")
            .bearer_token("")
            .build();

        assert!(matches!(
            result,
            Err(InvalidHttpRequestError::EmptyBearerToken)
        ));
    }

    #[test]
    fn test_debug_masks_bearer_token() {
        let request = HttpRequest::builder(HttpMethod::Get, "/cart/user/1")
            .bearer_token("secret-token")
            .build()
            .unwrap();

        let debug = format!("{request:?}");
        assert!(debug.contains("*****"));
        assert!(!debug.contains("secret-token"));
    }
}
