//! Typed identifiers for backend records.
//!
//! The backend uses integer primary keys everywhere. Wrapping them keeps a
//! product id from being passed where a user id is expected.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! record_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            /// Returns the raw integer id.
            #[must_use]
            pub const fn get(self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

record_id!(
    /// Identifies a registered user.
    UserId
);
record_id!(
    /// Identifies a catalog product.
    ProductId
);
record_id!(
    /// Identifies a product category.
    CategoryId
);
record_id!(
    /// Identifies a cart.
    CartId
);
record_id!(
    /// Identifies a placed order.
    OrderId
);
