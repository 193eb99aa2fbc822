//! # Storefront Client
//!
//! An async Rust client for a storefront REST backend: user sessions, the
//! product catalog, carts and orders.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`StorefrontConfig`] and [`StorefrontConfigBuilder`]
//! - Register, login, logout and session restore via [`auth::SessionManager`]
//! - Durable session storage behind the [`storage::Storage`] trait
//! - Catalog fetching, category filtering, product cards and client-side paging via [`catalog`]
//! - Cart creation, checkout and order lookups via [`cart`]
//! - The [`Storefront`] context object, which turns every user action into
//!   exactly one [`ui::Notice`] or navigation
//!
//! ## Quick Start
//!
//! ```rust
//! use storefront_client::{ApiBaseUrl, StorefrontConfig};
//!
//! let config = StorefrontConfig::builder()
//!     .base_url(ApiBaseUrl::new("http://127.0.0.1:8000").unwrap())
//!     .page_size(12)
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Wiring a Storefront
//!
//! Presentation is injected. Notices go to a [`ui::Notifier`], page changes
//! to a [`ui::Navigator`], and the grid, banner and pager to a
//! [`ui::StorefrontView`]. Any seam left unset logs to `tracing` and keeps
//! nothing.
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use storefront_client::storage::FileStorage;
//! use storefront_client::ui::{ChannelNotifier, NavigationLog, RecordedView};
//! use storefront_client::{Storefront, StorefrontConfig};
//!
//! let (notifier, mut notices) = ChannelNotifier::channel();
//! let mut store = Storefront::builder(StorefrontConfig::default())
//!     .storage(FileStorage::open("session.json")?)
//!     .notifier(Arc::new(notifier))
//!     .navigator(Arc::new(NavigationLog::new()))
//!     .view(Arc::new(RecordedView::new()))
//!     .build()?;
//!
//! store.restore()?;
//! store.display_products(None).await;
//! store.login("a@b.com", "x").await?;
//! while let Ok(notice) = notices.try_recv() {
//!     println!("{notice}");
//! }
//! ```
//!
//! ## Making Raw Requests
//!
//! ```rust,ignore
//! use storefront_client::clients::{HttpClient, HttpMethod, HttpRequest};
//! use storefront_client::StorefrontConfig;
//!
//! let client = HttpClient::new(&StorefrontConfig::default());
//! let request = HttpRequest::builder(HttpMethod::Get, "/products/")
//!     .build()
//!     .unwrap();
//!
//! let response = client.request(request).await?;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: configuration and the session live in explicitly passed values
//! - **Fail-fast validation**: newtypes validate on construction
//! - **Thread-safe**: all public types are `Send + Sync`
//! - **Async-first**: designed for use with the Tokio runtime
//! - **Fail-open reads**: catalog fetches return empty lists on failure;
//!   the `try_` variants expose the error

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod clients;
pub mod config;
pub mod error;
pub mod ids;
pub mod storage;
pub mod storefront;
pub mod ui;

// Re-export public types at crate root for convenience
pub use auth::{AuthError, AuthToken, Session, SessionManager, User};
pub use config::{ApiBaseUrl, StorefrontConfig, StorefrontConfigBuilder, DEFAULT_PAGE_SIZE};
pub use error::ConfigError;
pub use storefront::{Storefront, StorefrontBuilder};

// Re-export domain records
pub use cart::{Cart, CartError, Checkout, Order, OrderDetails};
pub use catalog::{CatalogError, Category, PageRequest, Product, StockStatus};
pub use ids::{CartId, CategoryId, OrderId, ProductId, UserId};

// Re-export HTTP client types
pub use clients::{
    DataType, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError,
};
