//! Carts, checkout and orders.
//!
//! - [`CartClient`]: cart creation, checkout and order lookups
//! - [`Cart`], [`Checkout`], [`Order`], [`OrderDetails`]: backend records
//! - [`CartError`]: failures, including [`CartError::NotLoggedIn`] for calls
//!   made without a session

mod client;
mod types;

pub use client::{CartClient, CartError};
pub use types::{
    parse_timestamp, Cart, CartLine, CartProduct, CartRequest, Checkout, Order, OrderDetails,
    OrderRequest,
};
