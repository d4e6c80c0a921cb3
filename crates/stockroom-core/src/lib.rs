//! # stockroom-core: Pure Business Logic for Stockroom
//!
//! Products, the store that owns them, and order processing. No I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stockroom Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 apps/stockroom-cli (menu loop)                  │   │
//! │  │     1. List products   2. Total   3. Make order   4. Quit       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ stockroom-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  product  │  │   store   │  │   money   │  │ validation│  │   │
//! │  │   │  Product  │  │   Store   │  │   Money   │  │   rules   │  │   │
//! │  │   │   buy()   │  │  order()  │  │           │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOGGING • PURE FUNCTIONS                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`product`] - Product, its state machine and `buy`
//! - [`store`] - Store aggregate, orders and receipts
//! - [`catalog`] - Initial inventory (built-in or JSON)
//! - [`money`] - Money type with integer arithmetic
//! - [`error`] - Domain error types
//! - [`validation`] - Parameter validation
//!
//! ## Example Usage
//!
//! ```rust
//! use stockroom_core::{Money, OrderLine, Product, Store};
//!
//! let mut store = Store::default();
//! let widget = store.add_product(Product::new("Widget", Money::from_dollars(10), 5)?);
//!
//! let receipt = store.order(&[OrderLine::new(widget, 3)])?;
//! assert_eq!(receipt.total, Money::from_dollars(30));
//! assert_eq!(store.total_quantity(), 2);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod money;
pub mod product;
pub mod store;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::{catalog_from_json, default_catalog};
pub use error::{CatalogError, CoreError, CoreResult, OrderError, ValidationError};
pub use money::Money;
pub use product::{Product, ProductId, ProductState};
pub use store::{OrderLine, Receipt, ReceiptLine, Store};

// =============================================================================
// Business Constants
// =============================================================================

/// Largest stock a product can be created with.
///
/// ## Business Reason
/// Catalogs are loaded from untrusted JSON. With both limits in place a
/// single line charge (`MAX_PRICE_CENTS × MAX_PRODUCT_QUANTITY`) stays well
/// inside `i64`.
pub const MAX_PRODUCT_QUANTITY: i64 = 1_000_000_000;

/// Largest unit price a product can be created with ($10,000,000.00).
pub const MAX_PRICE_CENTS: i64 = 1_000_000_000;
