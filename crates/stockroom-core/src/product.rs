//! # Product
//!
//! A single inventory line: name, price, quantity and an active flag.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   ┌──────────┐   quantity reaches ≤ 0 (set_quantity / buy)   ┌────────┐│
//! │   │  Active  │──────────────────────────────────────────────►│Inactive││
//! │   │          │──────────────── deactivate() ────────────────►│        ││
//! │   │          │◄─────────────── activate() ───────────────────│        ││
//! │   └──────────┘                                               └────────┘│
//! │                                                                         │
//! │  Restocking does NOT reactivate. activate() does not look at stock.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::validation::{self, ValidationResult};

// =============================================================================
// Product Id
// =============================================================================

/// Identity of a product inside a store.
///
/// Names are not unique, so removal and order lines refer to products by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(Uuid);

impl ProductId {
    pub fn new() -> Self {
        ProductId(Uuid::new_v4())
    }
}

impl Default for ProductId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// =============================================================================
// Product State
// =============================================================================

/// Whether a product is listed and orderable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductState {
    #[default]
    Active,
    Inactive,
}

// =============================================================================
// Product
// =============================================================================

/// A product held by a [`Store`](crate::store::Store).
///
/// Fields are private so that every quantity change goes through
/// [`set_quantity`](Product::set_quantity), which keeps
/// "quantity ≤ 0 ⇒ inactive" true.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    id: ProductId,
    name: String,
    price: Money,
    quantity: i64,
    state: ProductState,
}

impl Product {
    /// Creates an active product after validating its parameters.
    ///
    /// ## Errors
    /// - `EmptyParameter` for an empty name, zero price or zero quantity
    /// - `NegativeValue` for a negative price or quantity
    /// - `OutOfRange` above [`MAX_PRICE_CENTS`](crate::MAX_PRICE_CENTS) or
    ///   [`MAX_PRODUCT_QUANTITY`](crate::MAX_PRODUCT_QUANTITY)
    ///
    /// A name made only of whitespace is rejected as empty, unlike a plain
    /// truthiness check. The listing would otherwise show a blank line.
    ///
    /// ```rust
    /// use stockroom_core::{Money, Product};
    ///
    /// let widget = Product::new("Widget", Money::from_dollars(10), 5).unwrap();
    /// assert!(widget.is_active());
    /// assert!(Product::new("Widget", Money::from_dollars(10), 0).is_err());
    /// ```
    pub fn new(name: impl Into<String>, price: Money, quantity: i64) -> ValidationResult<Self> {
        let name = name.into();
        validation::validate_product(&name, price, quantity)?;

        Ok(Product {
            id: ProductId::new(),
            name,
            price,
            quantity,
            state: ProductState::Active,
        })
    }

    /// Creates a product from an untyped JSON object.
    ///
    /// Adds `InvalidType` to the errors of [`Product::new`]: the name must
    /// be a string, the price a number and the quantity an integer.
    pub fn from_json(entry: &serde_json::Value) -> ValidationResult<Self> {
        let fields = validation::product_fields_from_json(entry)?;
        Product::new(fields.name, fields.price, fields.quantity)
    }

    #[inline]
    pub fn id(&self) -> ProductId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn price(&self) -> Money {
        self.price
    }

    #[inline]
    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Sets the stock level, deactivating the product at zero or below.
    ///
    /// The value is not validated: a negative quantity is stored as given
    /// (and deactivates). Raising the quantity never reactivates.
    pub fn set_quantity(&mut self, quantity: i64) {
        self.quantity = quantity;
        if self.quantity <= 0 {
            self.deactivate();
        }
    }

    #[inline]
    pub fn state(&self) -> ProductState {
        self.state
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.state == ProductState::Active
    }

    /// Marks the product active. Stock is not checked.
    pub fn activate(&mut self) {
        self.state = ProductState::Active;
    }

    pub fn deactivate(&mut self) {
        self.state = ProductState::Inactive;
    }

    /// Buys `quantity` units and returns the charge.
    ///
    /// ## Flow
    /// ```text
    /// buy(q)
    ///   │
    ///   ├── q < 0 ────────────────────► NegativeValue   (no change)
    ///   │
    ///   ├── stock - q < 0 ────────────► OutOfStock      (no change)
    ///   │
    ///   ├── price × q overflows ──────► AmountOverflow  (no change)
    ///   │
    ///   └── set_quantity(stock - q) ──► Ok(price × q)
    ///                                   (inactive if stock hit 0)
    /// ```
    ///
    /// Activity is not checked: an inactive product with stock left (after
    /// `deactivate()`) can still be bought.
    ///
    /// ```rust
    /// use stockroom_core::{Money, Product};
    ///
    /// let mut widget = Product::new("Widget", Money::from_dollars(10), 5).unwrap();
    /// assert_eq!(widget.buy(5).unwrap(), Money::from_dollars(50));
    /// assert!(!widget.is_active());
    /// assert!(widget.buy(1).is_err());
    /// ```
    pub fn buy(&mut self, quantity: i64) -> CoreResult<Money> {
        let charge = self.charge_for(quantity)?;
        self.set_quantity(self.quantity - quantity);
        Ok(charge)
    }

    /// What [`buy`](Product::buy) would charge for `quantity` units, with the
    /// same checks, without touching the stock.
    pub fn charge_for(&self, quantity: i64) -> CoreResult<Money> {
        validation::validate_requested_quantity(quantity)?;

        if quantity > self.quantity {
            return Err(CoreError::OutOfStock {
                name: self.name.clone(),
                available: self.quantity,
                requested: quantity,
            });
        }

        self.price
            .checked_multiply_quantity(quantity)
            .ok_or(CoreError::AmountOverflow)
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, Price: {}, Quantity: {}",
            self.name,
            self.price.to_decimal_string(),
            self.quantity
        )
    }
}

impl TryFrom<&serde_json::Value> for Product {
    type Error = ValidationError;

    fn try_from(entry: &serde_json::Value) -> Result<Self, Self::Error> {
        Product::from_json(entry)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
