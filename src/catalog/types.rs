//! Catalog record types as returned by the backend.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ids::{CategoryId, ProductId};

/// Stock status text the backend uses for purchasable products.
pub const AVAILABLE: &str = "Available";

/// A product category.
///
/// Only `name` is guaranteed; the backend includes `id` and `description`
/// on its category listings and embedded product categories.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// The category id, when the backend sent one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<CategoryId>,
    /// The unique category name.
    pub name: String,
    /// Free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Whether a product can be bought.
///
/// The backend sends `"Available"` or some other string (currently
/// `"Out of Stock"`); anything but `"Available"` is kept verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum StockStatus {
    /// The product is in stock.
    Available,
    /// Any other status, as sent by the backend.
    Other(String),
}

impl StockStatus {
    /// Returns `true` for [`StockStatus::Available`].
    #[must_use]
    pub const fn is_available(&self) -> bool {
        matches!(self, Self::Available)
    }

    /// Returns the status text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Available => AVAILABLE,
            Self::Other(status) => status,
        }
    }
}

impl From<String> for StockStatus {
    fn from(status: String) -> Self {
        if status == AVAILABLE {
            Self::Available
        } else {
            Self::Other(status)
        }
    }
}

impl From<StockStatus> for String {
    fn from(status: StockStatus) -> Self {
        match status {
            StockStatus::Available => AVAILABLE.to_string(),
            StockStatus::Other(status) => status,
        }
    }
}

impl fmt::Display for StockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A catalog product snapshot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// The product id.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Optional long description.
    #[serde(default)]
    pub description: Option<String>,
    /// Unit price.
    pub price: f64,
    /// Stock status text.
    pub stock_status: StockStatus,
    /// The category the product belongs to.
    pub category: Category,
    /// Quantity hint sent by some backend routes.
    #[serde(default)]
    pub quantity: Option<i64>,
}

impl Product {
    /// Returns `true` if the product belongs to the category named `name`.
    ///
    /// The comparison is exact: case and whitespace matter.
    #[must_use]
    pub fn in_category(&self, name: &str) -> bool {
        self.category.name == name
    }
}

/// Returns the products whose category name equals `name`, in their original order.
#[must_use]
pub fn products_in_category(products: Vec<Product>, name: &str) -> Vec<Product> {
    products
        .into_iter()
        .filter(|product| product.in_category(name))
        .collect()
}
