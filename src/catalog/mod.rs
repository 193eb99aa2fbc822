//! Product catalog: records, fetching, rendering and paging.
//!
//! - [`CatalogClient`]: reads `/products/` and `/categories/`
//! - [`Product`], [`Category`], [`StockStatus`]: backend records
//! - [`GridState`], [`ProductCard`]: what the product grid shows
//! - [`Paginator`]: client-side pages over a fetched list
//!
//! Category filtering happens client-side over the full catalog, see
//! [`products_in_category`].

mod client;
mod pagination;
mod render;
mod types;

pub use client::{CatalogClient, CatalogError};
pub use pagination::{PageRequest, PagerState, Paginator};
pub use render::{
    format_price, GridState, ProductCard, CURRENCY_SYMBOL, EMPTY_MESSAGE, LOADING_MESSAGE,
    NO_DESCRIPTION,
};
pub use types::{products_in_category, Category, Product, StockStatus, AVAILABLE};
