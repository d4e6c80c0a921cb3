//! # Catalog
//!
//! Builds the initial [`Store`].
//!
//! - [`default_catalog`] returns the built-in demo inventory.
//! - [`catalog_from_json`] parses a JSON array of products, e.g.
//!
//! ```json
//! [
//!   { "name": "MacBook Air M2", "price": 1450, "quantity": 100 },
//!   { "name": "USB-C Cable", "price": 9.99, "quantity": 40 }
//! ]
//! ```

use serde_json::Value;

use crate::error::{CatalogError, ValidationError};
use crate::money::Money;
use crate::product::Product;
use crate::store::Store;

/// Demo inventory: (name, price in dollars, quantity).
const DEFAULT_PRODUCTS: &[(&str, i64, i64)] = &[
    ("MacBook Air M2", 1450, 100),
    ("Bose QuietComfort Earbuds", 250, 500),
    ("Google Pixel 7", 500, 250),
];

/// Returns a fresh store stocked with the demo inventory.
///
/// Entries that fail validation are skipped.
///
/// ```rust
/// use stockroom_core::catalog::default_catalog;
///
/// let store = default_catalog();
/// assert_eq!(store.total_quantity(), 850);
/// ```
pub fn default_catalog() -> Store {
    DEFAULT_PRODUCTS
        .iter()
        .filter_map(|&(name, dollars, quantity)| {
            Product::new(name, Money::from_dollars(dollars), quantity).ok()
        })
        .collect()
}

/// Parses catalog JSON into a store.
///
/// ## Errors
/// - `Parse` if the text is not JSON
/// - `NotAnArray` if the top level is not an array
/// - `Entry` with the zero-based index of the first invalid product
pub fn catalog_from_json(json: &str) -> Result<Store, CatalogError> {
    let value: Value = serde_json::from_str(json)?;
    let entries = value.as_array().ok_or(CatalogError::NotAnArray)?;

    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            Product::from_json(entry)
                .map_err(|source: ValidationError| CatalogError::Entry { index, source })
        })
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================
