//! Cart and order records.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::ids::{CartId, OrderId, ProductId, UserId};

/// One product and how many of it to put in the cart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// The product to add.
    pub product_id: ProductId,
    /// How many units.
    pub quantity: u32,
}

impl CartLine {
    /// A single unit of `product_id`.
    #[must_use]
    pub const fn single(product_id: ProductId) -> Self {
        Self {
            product_id,
            quantity: 1,
        }
    }
}

/// The body of a cart creation request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CartRequest {
    /// The user owning the cart.
    pub user_id: UserId,
    /// The lines to add.
    pub products: Vec<CartLine>,
}

/// The body of an order placement request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct OrderRequest {
    /// The user placing the order.
    pub user_id: UserId,
    /// The cart being ordered.
    pub cart_id: CartId,
}

/// A product line inside a cart or order, as the backend reports it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CartProduct {
    /// The product id.
    pub id: ProductId,
    /// Product name at the time of the response.
    pub name: String,
    /// Unit price at the time of the response.
    pub price: f64,
    /// Units in the cart.
    #[serde(default)]
    pub quantity: u32,
}

impl CartProduct {
    /// Price times quantity.
    #[must_use]
    pub fn subtotal(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

/// A cart owned by a user.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Cart {
    /// The cart id.
    pub id: CartId,
    /// The owning user.
    pub user_id: UserId,
    /// When the cart was created.
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    /// The lines in the cart.
    #[serde(default)]
    pub products: Vec<CartProduct>,
}

impl Cart {
    /// Sum of every line's subtotal.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.products.iter().map(CartProduct::subtotal).sum()
    }
}

/// The result of checking a cart out.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Checkout {
    /// The order created by the checkout.
    pub order_id: OrderId,
    /// The ordering user.
    pub user_id: UserId,
    /// The cart that was checked out.
    pub cart_id: CartId,
    /// Order total.
    pub total_amount: f64,
    /// Order status, e.g. `"confirmed"`.
    pub order_status: String,
    /// When the order was placed.
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    pub order_time: Option<DateTime<Utc>>,
}

/// A placed order.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Order {
    /// The order id.
    pub id: OrderId,
    /// The ordering user.
    pub user_id: UserId,
    /// The cart holding the ordered lines.
    pub cart_id: CartId,
    /// Order total.
    pub total_amount: f64,
    /// Order status, e.g. `"confirmed"`.
    pub order_status: String,
    /// When the order was placed.
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    pub order_time: Option<DateTime<Utc>>,
    /// The ordering user's email, when included.
    #[serde(default)]
    pub user_email: Option<String>,
}

/// A user's latest order with its product lines.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct OrderDetails {
    /// The order id.
    pub order_id: OrderId,
    /// The cart holding the ordered lines.
    pub cart_id: CartId,
    /// Order total.
    pub total_amount: f64,
    /// Order status.
    pub order_status: String,
    /// When the order was placed.
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    pub order_time: Option<DateTime<Utc>>,
    /// The ordered lines.
    #[serde(default)]
    pub products: Vec<CartProduct>,
}

/// Parses a backend timestamp.
///
/// Accepts RFC 3339 (`2024-05-01T10:00:00+02:00`) and naive ISO-8601
/// (`2024-05-01T10:00:00.123456` or with a space separator), the latter
/// read as UTC.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Some(ts.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|naive| naive.and_utc())
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    raw.map_or(Ok(None), |value| {
        parse_timestamp(&value)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp '{value}'")))
    })
}
