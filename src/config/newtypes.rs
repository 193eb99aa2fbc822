//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// The backend base URL used when none is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000";

/// A validated base URL for the storefront backend.
///
/// The URL must use the `http` or `https` scheme and name a host. Trailing
/// slashes are stripped so that request paths can be appended directly.
///
/// # Example
///
/// ```rust
/// use storefront_client::ApiBaseUrl;
///
/// let url = ApiBaseUrl::new("http://localhost:8000/").unwrap();
/// assert_eq!(url.as_ref(), "http://localhost:8000");
/// assert_eq!(url.scheme(), "http");
/// assert_eq!(url.host_name(), "localhost");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiBaseUrl {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl ApiBaseUrl {
    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL has no `http`/`https`
    /// scheme or no host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();
        let invalid = || ConfigError::InvalidBaseUrl { url: url.clone() };

        let scheme_end = url.find("://").ok_or_else(invalid)?;
        let scheme = &url[..scheme_end];
        if !matches!(scheme, "http" | "https") {
            return Err(invalid());
        }

        let host_start = scheme_end + 3;
        if host_start >= url.len() {
            return Err(invalid());
        }

        // Host ends at port, path, query, or end of string
        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);

        if host_end == host_start || remainder.contains(char::is_whitespace) {
            return Err(invalid());
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the URL scheme (`http` or `https`).
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.host_start..self.host_end]
    }

    /// Joins a backend path (e.g. `/products/`) onto this base URL.
    #[must_use]
    pub fn join(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.url)
        } else {
            format!("{}/{path}", self.url)
        }
    }
}

impl Default for ApiBaseUrl {
    fn default() -> Self {
        Self {
            url: DEFAULT_API_BASE_URL.to_string(),
            scheme_end: 4,
            host_start: 7,
            host_end: 16,
        }
    }
}

impl AsRef<str> for ApiBaseUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl Serialize for ApiBaseUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.url)
    }
}

impl<'de> Deserialize<'de> for ApiBaseUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_parsed_default() {
        let parsed = ApiBaseUrl::new(DEFAULT_API_BASE_URL).unwrap();
        assert_eq!(ApiBaseUrl::default(), parsed);
        assert_eq!(parsed.host_name(), "127.0.0.1");
    }

    #[test]
    fn test_base_url_validates_format() {
        let url = ApiBaseUrl::new("https://shop.example.com").unwrap();
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_name(), "shop.example.com");

        // With path prefix
        let url = ApiBaseUrl::new("https://shop.example.com/api/").unwrap();
        assert_eq!(url.as_ref(), "https://shop.example.com/api");
        assert_eq!(url.host_name(), "shop.example.com");
    }

    #[test]
    fn test_base_url_rejects_invalid() {
        assert!(ApiBaseUrl::new("shop.example.com").is_err());
        assert!(ApiBaseUrl::new("http://").is_err());
        assert!(ApiBaseUrl::new("ftp://shop.example.com").is_err());
        assert!(ApiBaseUrl::new("http://:8000").is_err());
        assert!(ApiBaseUrl::new("http://bad host").is_err());
    }

    #[test]
    fn test_join_handles_leading_slash() {
        let url = ApiBaseUrl::new("http://localhost:8000").unwrap();
        assert_eq!(url.join("/products/"), "http://localhost:8000/products/");
        assert_eq!(url.join("cart/"), "http://localhost:8000/cart/");
    }

    #[test]
    fn test_base_url_deserializes_with_validation() {
        let url: ApiBaseUrl = serde_json::from_str(r#""http://localhost:9000/""#).unwrap();
        assert_eq!(url.as_ref(), "http://localhost:9000");

        let bad: Result<ApiBaseUrl, _> = serde_json::from_str(r#""localhost""#);
        assert!(bad.is_err());
    }
}
