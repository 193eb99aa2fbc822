//! Authentication for the storefront client.
//!
//! This module provides session types and the [`SessionManager`], which
//! owns the login state and its durable copy.
//!
//! # Overview
//!
//! - [`Session`]: the logged-in [`User`] and their bearer [`AuthToken`]
//! - [`SessionManager`]: restore, register, login and logout
//! - [`AuthError`]: everything that can go wrong along the way
//!
//! # Durable layout
//!
//! Sessions are stored under two keys, [`CURRENT_USER_KEY`] (the user as
//! JSON) and [`AUTH_TOKEN_KEY`] (the raw token). They are written and
//! removed together; a store holding only one of them is treated as logged
//! out and cleaned up on [`SessionManager::restore`].

mod error;
mod manager;
mod session;

pub use error::AuthError;
pub use manager::{SessionManager, AUTH_TOKEN_KEY, CURRENT_USER_KEY, DEFAULT_ROLE};
pub use session::{AuthToken, Session, User};
