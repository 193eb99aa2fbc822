//! View models for the product grid.

use crate::catalog::types::Product;
use crate::ids::ProductId;

/// Placeholder shown while products are being fetched.
pub const LOADING_MESSAGE: &str = "Loading products...";

/// Placeholder shown when there is nothing to display.
pub const EMPTY_MESSAGE: &str = "No products found";

/// Shown in place of a missing product description.
pub const NO_DESCRIPTION: &str = "No description";

/// Currency symbol prefixed to every price label.
pub const CURRENCY_SYMBOL: &str = "₨";

/// What the product grid currently shows. Each render replaces the previous state entirely.
#[derive(Clone, Debug, PartialEq)]
pub enum GridState {
    /// A fetch is in flight.
    Loading,
    /// The product list is empty.
    Empty,
    /// One card per product, in catalog order.
    Products(Vec<ProductCard>),
}

impl GridState {
    /// Builds the grid for a product list.
    #[must_use]
    pub fn from_products(products: &[Product]) -> Self {
        if products.is_empty() {
            Self::Empty
        } else {
            Self::Products(products.iter().map(ProductCard::from).collect())
        }
    }

    /// Returns the placeholder text for non-product states.
    #[must_use]
    pub const fn placeholder(&self) -> Option<&'static str> {
        match self {
            Self::Loading => Some(LOADING_MESSAGE),
            Self::Empty => Some(EMPTY_MESSAGE),
            Self::Products(_) => None,
        }
    }
}

/// Display data for a single product.
#[derive(Clone, Debug, PartialEq)]
pub struct ProductCard {
    /// The product id, used by the "Add to Cart" action.
    pub product_id: ProductId,
    /// Product name.
    pub name: String,
    /// Description, or [`NO_DESCRIPTION`].
    pub description: String,
    /// Unit price, kept for the "Add to Cart" action.
    pub price: f64,
    /// Formatted price, e.g. `"₨ 1,499.5"`.
    pub price_label: String,
    /// Stock status text.
    pub stock_label: String,
    /// Whether the stock label should be styled as available.
    pub in_stock: bool,
}

impl From<&Product> for ProductCard {
    fn from(product: &Product) -> Self {
        Self {
            product_id: product.id,
            name: product.name.clone(),
            description: product
                .description
                .as_deref()
                .filter(|d| !d.is_empty())
                .unwrap_or(NO_DESCRIPTION)
                .to_string(),
            price: product.price,
            price_label: format!("{CURRENCY_SYMBOL} {}", format_price(product.price)),
            stock_label: product.stock_status.to_string(),
            in_stock: product.stock_status.is_available(),
        }
    }
}

/// Formats a number with comma thousands separators and at most three
/// fraction digits, trailing zeros dropped.
///
/// # Example
///
/// ```rust
/// use storefront_client::catalog::format_price;
///
/// assert_eq!(format_price(1234.5), "1,234.5");
/// assert_eq!(format_price(1_000_000.0), "1,000,000");
/// assert_eq!(format_price(0.1234), "0.123");
/// ```
#[must_use]
pub fn format_price(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let text = format!("{:.3}", value.abs());
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let is_zero = int_part == "0" && frac_part.is_empty();
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };
    if frac_part.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{frac_part}")
    }
}
