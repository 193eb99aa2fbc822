//! Cart and order API calls.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::auth::Session;
use crate::cart::types::{
    Cart, CartLine, CartRequest, Checkout, Order, OrderDetails, OrderRequest,
};
use crate::clients::{HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse};
use crate::ids::{CartId, ProductId};

/// Errors from cart and order requests.
#[derive(Debug, Error)]
pub enum CartError {
    /// The call needs a logged-in user. No request was sent.
    #[error("No active session")]
    NotLoggedIn,

    /// The backend refused the request.
    #[error("Request rejected with status {status}")]
    Rejected {
        /// The HTTP status code.
        status: u16,
        /// The backend `detail` message, if any.
        detail: Option<String>,
    },

    /// The request could not be sent or its response could not be read.
    #[error(transparent)]
    Http(HttpError),

    /// The backend answered with a body that is not the expected shape.
    #[error("Malformed {resource} response: {source}")]
    Decode {
        /// What was being fetched.
        resource: &'static str,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}

impl From<HttpError> for CartError {
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

impl CartError {
    /// Returns the backend `detail` message for rejected requests.
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Rejected { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}

/// Creates carts, checks them out and reads orders.
///
/// Every call that acts on behalf of a user takes the [`Session`] and sends
/// its token as `Authorization: Bearer <token>`.
#[derive(Clone, Debug)]
pub struct CartClient {
    http: Arc<HttpClient>,
}

impl CartClient {
    /// Creates a cart client sharing `http`.
    #[must_use]
    pub const fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    async fn send(
        &self,
        method: HttpMethod,
        path: &str,
        session: Option<&Session>,
        body: Option<&impl Serialize>,
    ) -> Result<HttpResponse, CartError> {
        let mut builder = HttpRequest::builder(method, path);
        if let Some(body) = body {
            builder = builder.json(body).map_err(HttpError::from)?;
        }
        if let Some(session) = session {
            builder = builder.bearer_token(session.token.as_str());
        }
        let request = builder.build().map_err(HttpError::from)?;
        Ok(self.http.request(request).await?)
    }

    fn decode<T: DeserializeOwned>(
        response: &HttpResponse,
        resource: &'static str,
    ) -> Result<T, CartError> {
        response
            .json()
            .map_err(|source| CartError::Decode { resource, source })
    }

    /// Adds one unit of `product_id` to a new cart for the session's user.
    ///
    /// Any 2xx response counts as success. The created cart is returned
    /// when the body can be read, `None` otherwise.
    ///
    /// # Errors
    ///
    /// - [`CartError::NotLoggedIn`] if `session` is `None`; no request is sent
    /// - [`CartError::Rejected`] if the backend refuses the cart
    /// - [`CartError::Http`] on transport failure
    pub async fn add_to_cart(
        &self,
        session: Option<&Session>,
        product_id: ProductId,
    ) -> Result<Option<Cart>, CartError> {
        let session = session.ok_or(CartError::NotLoggedIn)?;
        self.add_lines(session, vec![CartLine::single(product_id)])
            .await
    }

    /// Creates a cart for the session's user holding `lines`.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Rejected`] or [`CartError::Http`] if the request fails.
    pub async fn add_lines(
        &self,
        session: &Session,
        lines: Vec<CartLine>,
    ) -> Result<Option<Cart>, CartError> {
        let body = CartRequest {
            user_id: session.user.id,
            products: lines,
        };
        let response = self
            .send(HttpMethod::Post, "/cart/", Some(session), Some(&body))
            .await?;
        tracing::debug!(user_id = %session.user.id, "cart created");

        Ok(response.json::<Cart>().map_or_else(
            |e| {
                tracing::warn!(error = %e, "cart created but response unreadable");
                None
            },
            Some,
        ))
    }

    /// Lists every cart belonging to the session's user.
    ///
    /// # Errors
    ///
    /// Returns [`CartError`] if the request fails or the body is malformed.
    pub async fn user_carts(&self, session: &Session) -> Result<Vec<Cart>, CartError> {
        let path = format!("/cart/user/{}", session.user.id);
        let response = self
            .send(HttpMethod::Get, &path, Some(session), None::<&()>)
            .await?;
        Self::decode(&response, "carts")
    }

    /// Checks out `cart_id`, creating a confirmed order.
    ///
    /// # Errors
    ///
    /// Returns [`CartError`] if the request fails (404 for an unknown cart)
    /// or the body is malformed.
    pub async fn checkout(&self, session: &Session, cart_id: CartId) -> Result<Checkout, CartError> {
        let path = format!("/cart/checkout/{cart_id}");
        let empty = serde_json::json!({});
        let response = self
            .send(HttpMethod::Post, &path, Some(session), Some(&empty))
            .await?;
        tracing::debug!(%cart_id, "cart checked out");
        Self::decode(&response, "checkout")
    }

    /// Places an order for `cart_id` on behalf of the session's user.
    ///
    /// # Errors
    ///
    /// Returns [`CartError`] if the request fails or the body is malformed.
    pub async fn place_order(&self, session: &Session, cart_id: CartId) -> Result<Order, CartError> {
        let body = OrderRequest {
            user_id: session.user.id,
            cart_id,
        };
        let response = self
            .send(HttpMethod::Post, "/orders/", Some(session), Some(&body))
            .await?;
        tracing::debug!(%cart_id, "order placed");
        Self::decode(&response, "order")
    }

    /// Fetches the most recent confirmed order across the store.
    ///
    /// # Errors
    ///
    /// Returns [`CartError`] if the request fails (404 when there are no
    /// orders) or the body is malformed.
    pub async fn latest_order(&self) -> Result<Order, CartError> {
        let response = self
            .send(HttpMethod::Get, "/orders/", None, None::<&()>)
            .await?;
        Self::decode(&response, "order")
    }

    /// Fetches the session user's latest order with its product lines.
    ///
    /// # Errors
    ///
    /// Returns [`CartError`] if the request fails (404 when the user has no
    /// orders) or the body is malformed.
    pub async fn order_details(&self, session: &Session) -> Result<OrderDetails, CartError> {
        let path = format!("/orders/details/{}", session.user.id);
        let response = self
            .send(HttpMethod::Get, &path, Some(session), None::<&()>)
            .await?;
        Self::decode(&response, "order details")
    }
}
