//! # Error Types
//!
//! Domain-specific error types for stockroom-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  ValidationError  - Product construction failures                      │
//! │  ├── EmptyParameter                                                    │
//! │  ├── InvalidType                                                       │
//! │  ├── NegativeValue                                                     │
//! │  └── OutOfRange                                                        │
//! │                                                                         │
//! │  CoreError        - Runtime failures (OutOfStock, ProductNotFound)     │
//! │  OrderError       - CoreError + what an order already charged          │
//! │  CatalogError     - Catalog JSON could not be turned into a Store      │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → OrderError → CLI message          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field, product name, stock)
//! 3. Errors are enum variants, never String

use thiserror::Error;

use crate::money::Money;
use crate::product::ProductId;
use crate::store::ReceiptLine;

// =============================================================================
// Validation Error
// =============================================================================

/// Product parameter validation errors.
///
/// A product that fails validation is never created; there is nothing to
/// recover for that instance.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A parameter is missing, empty, or zero.
    ///
    /// Zero counts as empty for price and quantity, so a product cannot be
    /// created with either set to 0.
    #[error("{field} can't be empty or zero")]
    EmptyParameter { field: &'static str },

    /// A parameter has the wrong type (only reachable from untyped input).
    #[error("{field} must be {expected}")]
    InvalidType {
        field: &'static str,
        expected: &'static str,
    },

    /// Price or quantity is below zero.
    #[error("{field} must not be negative")]
    NegativeValue { field: &'static str },

    /// Price or quantity is above its limit.
    ///
    /// `max` is in the unit the caller supplies: dollars for price, units
    /// for quantity.
    #[error("{field} must not exceed {max}")]
    OutOfRange { field: &'static str, max: i64 },
}

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Not enough stock to complete a purchase.
    ///
    /// ## User Workflow
    /// ```text
    /// buy(5) on "Widget" with 3 in stock
    ///      │
    ///      ▼
    /// OutOfStock { name: "Widget", available: 3, requested: 5 }
    ///      │
    ///      ▼
    /// "Not enough items of 'Widget' in stock. Current stock: 3"
    /// ```
    ///
    /// Recoverable: the caller may retry with a smaller quantity or skip.
    #[error("Not enough items of '{name}' in stock. Current stock: {available}")]
    OutOfStock {
        name: String,
        available: i64,
        requested: i64,
    },

    /// No product with this id is owned by the store.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// A charge or running order total does not fit in `Money`.
    ///
    /// Only reachable after `set_quantity` raised stock past the
    /// construction limits. Nothing is bought when it is returned.
    #[error("Order total is too large")]
    AmountOverflow,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Order Error
// =============================================================================

/// An order that stopped partway through.
///
/// Orders are not transactional: every line before `line` was bought and its
/// stock is gone. `charged` is what those lines cost.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Order stopped at line {}: {source}", .line + 1)]
pub struct OrderError {
    /// Zero-based index of the line that failed.
    pub line: usize,

    /// Sum of the lines that went through.
    pub charged: Money,

    /// Lines that went through.
    pub completed: Vec<ReceiptLine>,

    #[source]
    pub source: CoreError,
}

// =============================================================================
// Catalog Error
// =============================================================================

/// Errors while building a store from catalog JSON.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Catalog must be a JSON array of products")]
    NotAnArray,

    #[error("Catalog entry {index}: {source}")]
    Entry {
        index: usize,
        #[source]
        source: ValidationError,
    },
}

// =============================================================================
// Unit Tests
// =============================================================================
