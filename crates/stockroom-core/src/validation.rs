//! # Validation Module
//!
//! Parameter checks for product construction and purchases.
//!
//! ## Check Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Product Construction                               │
//! │                                                                         │
//! │  1. Empty?     name "" / price 0 / quantity 0  → EmptyParameter        │
//! │           │    (all three fields, before anything else)                │
//! │           ▼                                                             │
//! │  2. Type?      JSON input only                 → InvalidType           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  3. Negative?  price < 0 / quantity < 0        → NegativeValue         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  4. Too large? above MAX_PRICE_CENTS /          → OutOfRange            │
//! │                MAX_PRODUCT_QUANTITY                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Zero price and zero quantity are rejected as empty. A product therefore
//! always starts with stock and a non-zero price.
//!
//! ## Usage
//! ```rust
//! use stockroom_core::money::Money;
//! use stockroom_core::validation::validate_product;
//! use stockroom_core::ValidationError;
//!
//! assert!(validate_product("Widget", Money::from_dollars(10), 5).is_ok());
//! assert_eq!(
//!     validate_product("Widget", Money::zero(), 5),
//!     Err(ValidationError::EmptyParameter { field: "price" })
//! );
//! ```

use serde_json::Value;

use crate::error::ValidationError;
use crate::money::Money;
use crate::{MAX_PRICE_CENTS, MAX_PRODUCT_QUANTITY};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Typed Validators
// =============================================================================

/// Validates name, price and quantity for a new product.
///
/// Every field is checked for emptiness before any is checked for sign, so
/// `("", -1, 0)` reports the empty name rather than the negative price.
pub fn validate_product(name: &str, price: Money, quantity: i64) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyParameter { field: "name" });
    }
    if price.is_zero() {
        return Err(ValidationError::EmptyParameter { field: "price" });
    }
    if quantity == 0 {
        return Err(ValidationError::EmptyParameter { field: "quantity" });
    }

    if price.is_negative() {
        return Err(ValidationError::NegativeValue { field: "price" });
    }
    if quantity < 0 {
        return Err(ValidationError::NegativeValue { field: "quantity" });
    }

    if price.cents() > MAX_PRICE_CENTS {
        return Err(price_out_of_range());
    }
    if quantity > MAX_PRODUCT_QUANTITY {
        return Err(quantity_out_of_range());
    }

    Ok(())
}

/// Validates the quantity requested in a purchase.
///
/// Zero is allowed (a no-op purchase). Negative would add stock and
/// produce a negative charge, so it is refused.
pub fn validate_requested_quantity(quantity: i64) -> ValidationResult<()> {
    if quantity < 0 {
        return Err(ValidationError::NegativeValue { field: "quantity" });
    }
    Ok(())
}

// =============================================================================
// JSON Validators
// =============================================================================

/// Fields extracted from a JSON product entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductFields {
    pub name: String,
    pub price: Money,
    pub quantity: i64,
}

/// Extracts and checks `name`, `price` and `quantity` from a JSON object.
///
/// A missing key is treated the same as `null`. `false`, `0`, `""`, `[]`
/// and `{}` are all empty.
///
/// ```rust
/// use serde_json::json;
/// use stockroom_core::validation::product_fields_from_json;
/// use stockroom_core::ValidationError;
///
/// let err = product_fields_from_json(&json!({
///     "name": "Widget", "price": "cheap", "quantity": 5
/// }));
/// assert!(matches!(err, Err(ValidationError::InvalidType { field: "price", .. })));
/// ```
pub fn product_fields_from_json(entry: &Value) -> ValidationResult<ProductFields> {
    let object = entry.as_object().ok_or(ValidationError::InvalidType {
        field: "product",
        expected: "an object",
    })?;

    let name = object.get("name").unwrap_or(&Value::Null);
    let price = object.get("price").unwrap_or(&Value::Null);
    let quantity = object.get("quantity").unwrap_or(&Value::Null);

    for (field, value) in [("name", name), ("price", price), ("quantity", quantity)] {
        if is_empty(value) {
            return Err(ValidationError::EmptyParameter { field });
        }
    }

    let name = name.as_str().ok_or(ValidationError::InvalidType {
        field: "name",
        expected: "a string",
    })?;
    let price = price.as_f64().ok_or(ValidationError::InvalidType {
        field: "price",
        expected: "a number",
    })?;
    let quantity = quantity.as_i64().ok_or(ValidationError::InvalidType {
        field: "quantity",
        expected: "an integer",
    })?;

    if price < 0.0 {
        return Err(ValidationError::NegativeValue { field: "price" });
    }
    if quantity < 0 {
        return Err(ValidationError::NegativeValue { field: "quantity" });
    }

    // Range-checked before the cast, which would otherwise saturate.
    let cents = (price * 100.0).round();
    if cents > MAX_PRICE_CENTS as f64 {
        return Err(price_out_of_range());
    }
    if quantity > MAX_PRODUCT_QUANTITY {
        return Err(quantity_out_of_range());
    }

    Ok(ProductFields {
        name: name.to_string(),
        price: Money::from_cents(cents as i64),
        quantity,
    })
}

fn price_out_of_range() -> ValidationError {
    ValidationError::OutOfRange {
        field: "price",
        max: MAX_PRICE_CENTS / 100,
    }
}

fn quantity_out_of_range() -> ValidationError {
    ValidationError::OutOfRange {
        field: "quantity",
        max: MAX_PRODUCT_QUANTITY,
    }
}

fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
