//! Auth-specific error types.

use thiserror::Error;

use crate::clients::HttpError;
use crate::storage::StorageError;

/// Errors that can occur during register, login, restore and logout.
///
/// Non-2xx responses are reported as [`AuthError::Rejected`] so callers can
/// show the backend's `detail` message; everything else that went wrong on
/// the wire is [`AuthError::Http`].
#[derive(Debug, Error)]
pub enum AuthError {
    /// The password and its confirmation differ. No request was sent.
    #[error("Passwords do not match!")]
    PasswordMismatch,

    /// The backend refused the request.
    #[error("Request rejected with status {status}")]
    Rejected {
        /// The HTTP status code.
        status: u16,
        /// The backend `detail` message, if any.
        detail: Option<String>,
    },

    /// The backend accepted the request but its response is unusable.
    #[error("Malformed auth response: {reason}")]
    MalformedResponse {
        /// What was missing or wrong.
        reason: String,
    },

    /// The request could not be sent or its response could not be read.
    #[error(transparent)]
    Http(HttpError),

    /// Durable session storage failed.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl From<HttpError> for AuthError {
    fn from(error: HttpError) -> Self {
        match error {
            HttpError::Response(e) => Self::Rejected {
                status: e.code,
                detail: e.detail,
            },
            other => Self::Http(other),
        }
    }
}

impl AuthError {
    /// Returns the backend `detail` message for rejected requests.
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Rejected { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}
