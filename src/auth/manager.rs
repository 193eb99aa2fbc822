//! Session lifecycle: restore, register, login and logout.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::auth::error::AuthError;
use crate::auth::session::{AuthToken, Session, User};
use crate::clients::{HttpClient, HttpError, HttpMethod, HttpRequest};
use crate::ids::UserId;
use crate::storage::Storage;
use crate::ui::AuthBanner;

/// Storage key holding the JSON-serialized [`User`].
pub const CURRENT_USER_KEY: &str = "currentUser";

/// Storage key holding the raw bearer token.
pub const AUTH_TOKEN_KEY: &str = "authToken";

/// Role sent with every self-service registration.
pub const DEFAULT_ROLE: &str = "user";

#[derive(Serialize)]
struct RegisterRequest<'a> {
    email: &'a str,
    password: &'a str,
    role: &'a str,
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct LoginResponse {
    #[serde(default)]
    access_token: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    user_id: Option<UserId>,
}

/// Owns the current session and its durable copy.
///
/// The manager is the only writer of session state. Mutating operations
/// take `&mut self`; everything else reads through [`current`](Self::current).
///
/// The two storage entries, [`CURRENT_USER_KEY`] and [`AUTH_TOKEN_KEY`], are
/// always written and cleared in a single [`Storage`] batch.
///
/// # Example
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use storefront_client::auth::SessionManager;
/// use storefront_client::clients::HttpClient;
/// use storefront_client::storage::MemoryStorage;
/// use storefront_client::StorefrontConfig;
///
/// let http = Arc::new(HttpClient::new(&StorefrontConfig::default()));
/// let mut sessions = SessionManager::new(http, Box::new(MemoryStorage::new()));
/// sessions.restore()?;
/// let session = sessions.login("a@b.com", "x").await?;
/// println!("logged in as {}", session.user.email);
/// ```
pub struct SessionManager {
    http: Arc<HttpClient>,
    storage: Box<dyn Storage>,
    current: Option<Session>,
}

impl std::fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager")
            .field("current", &self.current)
            .finish_non_exhaustive()
    }
}

impl SessionManager {
    /// Creates a logged-out manager. Call [`restore`](Self::restore) to
    /// pick up a persisted session.
    #[must_use]
    pub fn new(http: Arc<HttpClient>, storage: Box<dyn Storage>) -> Self {
        Self {
            http,
            storage,
            current: None,
        }
    }

    /// Returns the active session, if any.
    #[must_use]
    pub const fn current(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    /// Returns `true` if a user is logged in.
    #[must_use]
    pub const fn is_logged_in(&self) -> bool {
        self.current.is_some()
    }

    /// Returns the auth region contents for the current state.
    #[must_use]
    pub fn auth_banner(&self) -> AuthBanner {
        self.current
            .as_ref()
            .map_or(AuthBanner::LoggedOut, |session| AuthBanner::Welcome {
                email: session.user.email.clone(),
            })
    }

    /// Returns the durable storage backing this manager.
    #[must_use]
    pub fn storage(&self) -> &dyn Storage {
        self.storage.as_ref()
    }

    /// Loads the persisted session into memory.
    ///
    /// A session is restored only when both entries are present and the
    /// user record parses. A lone entry, or an unparseable user record, is
    /// a half-written session: both keys are cleared and the manager stays
    /// logged out.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Storage`] if the storage cannot be read or cleaned up.
    pub fn restore(&mut self) -> Result<Option<&Session>, AuthError> {
        let user = self
            .storage
            .get_item(CURRENT_USER_KEY)?
            .filter(|v| !v.is_empty());
        let token = self
            .storage
            .get_item(AUTH_TOKEN_KEY)?
            .filter(|v| !v.is_empty());

        self.current = match (user, token) {
            (Some(user), Some(token)) => match serde_json::from_str::<User>(&user) {
                Ok(user) => {
                    tracing::debug!(user_id = %user.id, "restored session");
                    Some(Session::new(user, AuthToken::new(token)))
                }
                Err(e) => {
                    tracing::warn!(error = %e, "discarding unreadable stored user");
                    self.clear_storage()?;
                    None
                }
            },
            (None, None) => None,
            (user, _) => {
                tracing::warn!(
                    has_user = user.is_some(),
                    "discarding half-written session"
                );
                self.clear_storage()?;
                None
            }
        };

        Ok(self.current.as_ref())
    }

    /// Registers a new account. Does not log in.
    ///
    /// # Errors
    ///
    /// - [`AuthError::PasswordMismatch`] if `password != confirm_password`;
    ///   no request is sent
    /// - [`AuthError::Rejected`] if the backend refuses the registration
    /// - [`AuthError::Http`] on transport failure
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        confirm_password: &str,
    ) -> Result<(), AuthError> {
        if password != confirm_password {
            return Err(AuthError::PasswordMismatch);
        }

        let request = HttpRequest::builder(HttpMethod::Post, "/auth/register")
            .json(&RegisterRequest {
                email,
                password,
                role: DEFAULT_ROLE,
            })
            .map_err(HttpError::from)?
            .build()
            .map_err(HttpError::from)?;

        self.http.request(request).await?;
        tracing::debug!(email, "registered account");
        Ok(())
    }

    /// Logs in and persists the resulting session.
    ///
    /// The user's email is taken from the response when present, otherwise
    /// the submitted `email` is used. On any error the previous state,
    /// in memory and in storage, is left untouched.
    ///
    /// # Errors
    ///
    /// - [`AuthError::Rejected`] if the backend refuses the credentials
    /// - [`AuthError::MalformedResponse`] if `access_token` or `user_id` is missing
    /// - [`AuthError::Http`] on transport failure
    /// - [`AuthError::Storage`] if the session cannot be persisted
    pub async fn login(&mut self, email: &str, password: &str) -> Result<&Session, AuthError> {
        let request = HttpRequest::builder(HttpMethod::Post, "/auth/login")
            .json(&LoginRequest { email, password })
            .map_err(HttpError::from)?
            .build()
            .map_err(HttpError::from)?;

        let response = self.http.request(request).await?;
        let body: LoginResponse =
            response
                .json()
                .map_err(|e| AuthError::MalformedResponse {
                    reason: e.to_string(),
                })?;

        let token = body
            .access_token
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AuthError::MalformedResponse {
                reason: "missing access_token".to_string(),
            })?;
        let id = body.user_id.ok_or_else(|| AuthError::MalformedResponse {
            reason: "missing user_id".to_string(),
        })?;
        let user = User {
            email: body
                .email
                .filter(|e| !e.is_empty())
                .unwrap_or_else(|| email.to_string()),
            id,
        };

        let user_json = serde_json::to_string(&user).map_err(|e| AuthError::MalformedResponse {
            reason: e.to_string(),
        })?;
        self.storage
            .set_items(&[
                (CURRENT_USER_KEY, user_json.as_str()),
                (AUTH_TOKEN_KEY, token.as_str()),
            ])?;

        tracing::debug!(user_id = %user.id, "logged in");
        let session = self.current.insert(Session::new(user, AuthToken::new(token)));
        Ok(&*session)
    }

    /// Logs out locally. The token is not revoked server-side.
    ///
    /// In-memory state is cleared even if storage cleanup fails.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Storage`] if the persisted entries cannot be removed.
    pub fn logout(&mut self) -> Result<(), AuthError> {
        if let Some(session) = self.current.take() {
            tracing::debug!(user_id = %session.user.id, "logged out");
        }
        self.clear_storage()
    }

    fn clear_storage(&self) -> Result<(), AuthError> {
        self.storage
            .remove_items(&[CURRENT_USER_KEY, AUTH_TOKEN_KEY])?;
        Ok(())
    }
}
