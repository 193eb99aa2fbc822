//! Configuration types for the storefront client.
//!
//! # Overview
//!
//! - [`StorefrontConfig`]: The configuration struct holding all client settings
//! - [`StorefrontConfigBuilder`]: A builder for constructing [`StorefrontConfig`] instances
//! - [`ApiBaseUrl`]: A validated backend base URL
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use storefront_client::{ApiBaseUrl, StorefrontConfig};
//!
//! let config = StorefrontConfig::builder()
//!     .base_url(ApiBaseUrl::new("http://localhost:8000").unwrap())
//!     .timeout(Duration::from_secs(10))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url().as_ref(), "http://localhost:8000");
//! ```

mod newtypes;

use std::time::Duration;

pub use newtypes::{ApiBaseUrl, DEFAULT_API_BASE_URL};

use crate::error::ConfigError;

/// Number of products shown per catalog page when not configured.
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// Configuration for the storefront client.
///
/// `StorefrontConfig` is `Clone`, `Send`, and `Sync`. It is passed explicitly
/// to every component that needs it; there is no global configuration.
#[derive(Clone, Debug)]
pub struct StorefrontConfig {
    base_url: ApiBaseUrl,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
    page_size: usize,
}

impl StorefrontConfig {
    /// Creates a new builder for constructing a `StorefrontConfig`.
    #[must_use]
    pub fn builder() -> StorefrontConfigBuilder {
        StorefrontConfigBuilder::new()
    }

    /// Returns the backend base URL.
    #[must_use]
    pub const fn base_url(&self) -> &ApiBaseUrl {
        &self.base_url
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the per-request timeout, if configured.
    ///
    /// `None` means requests wait for the backend indefinitely.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Returns the number of products per catalog page.
    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            base_url: ApiBaseUrl::default(),
            user_agent_prefix: None,
            timeout: None,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

// Verify StorefrontConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StorefrontConfig>();
};

/// Builder for constructing [`StorefrontConfig`] instances.
///
/// # Defaults
///
/// - `base_url`: [`DEFAULT_API_BASE_URL`]
/// - `user_agent_prefix`: `None`
/// - `timeout`: `None`
/// - `page_size`: [`DEFAULT_PAGE_SIZE`]
#[derive(Debug, Default)]
pub struct StorefrontConfigBuilder {
    base_url: Option<ApiBaseUrl>,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
    page_size: Option<usize>,
}

impl StorefrontConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the backend base URL.
    #[must_use]
    pub fn base_url(mut self, url: ApiBaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets a per-request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the number of products per catalog page.
    #[must_use]
    pub const fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Builds the [`StorefrontConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPageSize`] if the page size is zero.
    pub fn build(self) -> Result<StorefrontConfig, ConfigError> {
        let page_size = self.page_size.unwrap_or(DEFAULT_PAGE_SIZE);
        if page_size == 0 {
            return Err(ConfigError::InvalidPageSize);
        }

        Ok(StorefrontConfig {
            base_url: self.base_url.unwrap_or_default(),
            user_agent_prefix: self.user_agent_prefix,
            timeout: self.timeout,
            page_size,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = StorefrontConfig::builder().build().unwrap();

        assert_eq!(config.base_url().as_ref(), DEFAULT_API_BASE_URL);
        assert!(config.user_agent_prefix().is_none());
        assert!(config.timeout().is_none());
        assert_eq!(config.page_size(), DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_builder_with_all_optional_fields() {
        let config = StorefrontConfig::builder()
            .base_url(ApiBaseUrl::new("https://shop.example.com").unwrap())
            .user_agent_prefix("MyShop/1.0")
            .timeout(Duration::from_secs(5))
            .page_size(3)
            .build()
            .unwrap();

        assert_eq!(config.base_url().as_ref(), "https://shop.example.com");
        assert_eq!(config.user_agent_prefix(), Some("MyShop/1.0"));
        assert_eq!(config.timeout(), Some(Duration::from_secs(5)));
        assert_eq!(config.page_size(), 3);
    }

    #[test]
    fn test_builder_rejects_zero_page_size() {
        let result = StorefrontConfig::builder().page_size(0).build();
        assert!(matches!(result, Err(ConfigError::InvalidPageSize)));
    }

    #[test]
    fn test_default_matches_builder_default() {
        let built = StorefrontConfig::builder().build().unwrap();
        let default = StorefrontConfig::default();
        assert_eq!(built.base_url(), default.base_url());
        assert_eq!(built.page_size(), default.page_size());
    }
}
