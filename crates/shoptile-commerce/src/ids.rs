//! Newtype IDs for type-safe identifiers.
//!
//! Catalog feeds address products and variants by small integers. Wrapping
//! them in newtypes prevents accidentally mixing up different ID types,
//! e.g., passing a ProductId where a VariantId is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate integer-backed newtype ID structs.
macro_rules! define_id {
    ($name:ident, $int:ty) => {
        /// A unique identifier.
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name($int);

        impl $name {
            /// Create a new ID from a raw integer.
            pub fn new(id: $int) -> Self {
                Self(id)
            }

            /// Get the raw integer value.
            pub fn value(&self) -> $int {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<$int> for $name {
            fn from(id: $int) -> Self {
                Self(id)
            }
        }

        impl From<$name> for $int {
            fn from(id: $name) -> $int {
                id.0
            }
        }
    };
}

// Define all ID types
define_id!(ProductId, u64);
define_id!(VariantId, u32);

impl ProductId {
    /// Whether the raw id is odd. Stock rules key off id parity until a
    /// real inventory feed exists.
    pub fn is_odd(&self) -> bool {
        self.0 % 2 == 1
    }
}
