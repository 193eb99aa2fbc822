//! Session types for storefront authentication.
//!
//! A [`Session`] is the logged-in [`User`] plus the bearer [`AuthToken`] the
//! backend issued for them. Being logged out is the absence of a session.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ids::UserId;

/// The identity of the logged-in user.
///
/// This is the record persisted under the `currentUser` storage key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// The user's email address.
    pub email: String,
    /// The backend user id.
    pub id: UserId,
}

/// An opaque bearer token.
///
/// The `Debug` implementation masks the value to keep it out of logs.
///
/// # Example
///
/// ```rust
/// use storefront_client::auth::AuthToken;
///
/// let token = AuthToken::new("T1");
/// assert_eq!(token.as_str(), "T1");
/// assert_eq!(format!("{token:?}"), "AuthToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    /// Wraps a raw token string.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the raw token.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for AuthToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthToken(*****)")
    }
}

/// An authenticated storefront session.
///
/// Sessions are immutable: logging in again replaces the session, logging
/// out drops it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    /// Who is logged in.
    pub user: User,
    /// The bearer token for authenticated calls.
    pub token: AuthToken,
}

impl Session {
    /// Creates a session for `user` authenticated by `token`.
    #[must_use]
    pub const fn new(user: User, token: AuthToken) -> Self {
        Self { user, token }
    }

    /// Returns `true` if the session carries a usable token.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.token.as_str().is_empty()
    }
}

// Verify Session is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Session>();
};
