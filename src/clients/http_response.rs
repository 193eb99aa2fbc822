//! HTTP response types for the storefront client.
//!
//! This module provides the [`HttpResponse`] type for accessing the status
//! and the parsed JSON body of a backend response.

use serde::de::DeserializeOwned;

/// A parsed HTTP response from the storefront backend.
///
/// The body is always a JSON value: an empty response body becomes `{}`,
/// and a body that is not valid JSON is preserved as `{"raw_body": "..."}`.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// The parsed response body.
    pub body: serde_json::Value,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub const fn new(code: u16, body: serde_json::Value) -> Self {
        Self {
            code,
            body,
        }
    }

    /// Builds a response from a raw body string, parsing it as JSON.
    #[must_use]
    pub fn from_text(code: u16, text: &str) -> Self {
        let body = if text.trim().is_empty() {
            serde_json::json!({})
        } else {
            serde_json::from_str(text).unwrap_or_else(|_| serde_json::json!({ "raw_body": text }))
        };
        Self::new(code, body)
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the human-readable `detail` message of an error body.
    ///
    /// The backend reports errors as `{"detail": "..."}`. Request validation
    /// failures instead carry a list, `{"detail": [{"msg": "..."}, ...]}`,
    /// in which case the first `msg` is returned.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self.body.get("detail")? {
            serde_json::Value::String(detail) if !detail.is_empty() => Some(detail.clone()),
            serde_json::Value::Array(items) => items
                .iter()
                .find_map(|item| item.get("msg").and_then(serde_json::Value::as_str))
                .map(String::from),
            _ => None,
        }
    }

    /// Deserializes the response body into `T`.
    ///
    /// # Errors
    ///
    /// Returns the [`serde_json::Error`] if the body does not match `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        T::deserialize(&self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_ok_returns_true_for_2xx() {
        for code in [200, 201, 204, 299] {
            let response = HttpResponse::new(code, json!({}));
            assert!(response.is_ok(), "expected {code} to be ok");
        }
    }

    #[test]
    fn test_is_ok_returns_false_for_4xx_and_5xx() {
        for code in [400, 401, 404, 422, 500, 503] {
            let response = HttpResponse::new(code, json!({}));
            assert!(!response.is_ok(), "expected {code} to fail");
        }
    }

    #[test]
    fn test_empty_body_returns_empty_json() {
        let response = HttpResponse::from_text(200, "");
        assert_eq!(response.body, json!({}));
    }

    #[test]
    fn test_non_json_body_is_preserved() {
        let response = HttpResponse::from_text(502, "Bad Gateway");
        assert_eq!(response.body, json!({"raw_body": "Bad Gateway"}));
        assert!(response.detail().is_none());
    }

    #[test]
    fn test_detail_string_extraction() {
        let response = HttpResponse::new(400, json!({"detail": "Email already registered"}));
        assert_eq!(response.detail().as_deref(), Some("Email already registered"));
    }

    #[test]
    fn test_detail_validation_list_extraction() {
        let response = HttpResponse::new(
            422,
            json!({"detail": [
                {"loc": ["body", "email"], "msg": "value is not a valid email address", "type": "value_error"}
            ]}),
        );
        assert_eq!(
            response.detail().as_deref(),
            Some("value is not a valid email address")
        );
    }

    #[test]
    fn test_detail_missing_or_empty() {
        let response = HttpResponse::new(500, json!({"error": "boom"}));
        assert!(response.detail().is_none());

        let response = HttpResponse::new(500, json!({"detail": ""}));
        assert!(response.detail().is_none());
    }

    #[test]
    fn test_json_deserializes_body() {
        #[derive(serde::Deserialize)]
        struct Named {
            name: String,
        }

        let response = HttpResponse::new(200, json!([{"name": "Books"}]));
        let named: Vec<Named> = response.json().unwrap();
        assert_eq!(named[0].name, "Books");
    }
}
