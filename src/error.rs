//! Error types for the storefront client.
//!
//! This module contains the configuration error type. Errors for the HTTP,
//! storage, auth, catalog and cart layers live next to the code that
//! produces them.
//!
//! # Example
//!
//! ```rust
//! use storefront_client::{ApiBaseUrl, ConfigError};
//!
//! let result = ApiBaseUrl::new("not a url");
//! assert!(matches!(result, Err(ConfigError::InvalidBaseUrl { .. })));
//! ```

use thiserror::Error;

/// Errors that can occur while building a [`StorefrontConfig`](crate::StorefrontConfig).
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The backend base URL is invalid.
    #[error("Invalid API base URL '{url}'. Please provide a URL with scheme (e.g., 'http://127.0.0.1:8000').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// The page size used for pagination is zero.
    #[error("Invalid page size: must be at least 1.")]
    InvalidPageSize,
}
