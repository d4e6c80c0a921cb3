//! # Store
//!
//! The aggregate that owns every [`Product`] and processes orders.
//!
//! ## Order Processing
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  order([(widget, 2), (gadget, 1000)])                                   │
//! │                                                                         │
//! │  line 0: widget.buy(2)    ──► Ok($20.00)    stock 5 → 3   (kept)       │
//! │  line 1: gadget.buy(1000) ──► OutOfStock    stock 5 → 5                │
//! │                                                                         │
//! │  Result: Err(OrderError { line: 1, charged: $20.00, ... })             │
//! │                                                                         │
//! │  NOT TRANSACTIONAL: line 0 is not rolled back.                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{CoreError, CoreResult, OrderError};
use crate::money::Money;
use crate::product::{Product, ProductId};

// =============================================================================
// Order Types
// =============================================================================

/// One requested purchase within an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderLine {
    pub product_id: ProductId,
    pub quantity: i64,
}

impl OrderLine {
    pub fn new(product_id: ProductId, quantity: i64) -> Self {
        OrderLine {
            product_id,
            quantity,
        }
    }
}

impl From<(ProductId, i64)> for OrderLine {
    fn from((product_id, quantity): (ProductId, i64)) -> Self {
        OrderLine::new(product_id, quantity)
    }
}

/// A purchased line, with the product's name and price frozen at the time
/// of purchase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptLine {
    pub product_id: ProductId,
    pub name: String,
    pub quantity: i64,
    pub unit_price: Money,
    pub line_total: Money,
}

/// The outcome of a fully processed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    pub order_id: Uuid,
    pub placed_at: DateTime<Utc>,
    pub lines: Vec<ReceiptLine>,
    pub total: Money,
}

impl Receipt {
    /// Total number of units bought. Saturates at `i64::MAX`.
    pub fn total_quantity(&self) -> i64 {
        self.lines
            .iter()
            .map(|line| line.quantity)
            .fold(0, i64::saturating_add)
    }
}

// =============================================================================
// Store
// =============================================================================

/// An ordered collection of products, owned exclusively.
#[derive(Debug, Clone, Default)]
pub struct Store {
    products: Vec<Product>,
}

impl Store {
    /// Creates a store holding `products` in the given order.
    pub fn new(products: Vec<Product>) -> Self {
        Store { products }
    }

    /// Appends a product and returns its id.
    pub fn add_product(&mut self, product: Product) -> ProductId {
        let id = product.id();
        self.products.push(product);
        id
    }

    /// Removes the product with this id and hands it back.
    pub fn remove_product(&mut self, id: ProductId) -> CoreResult<Product> {
        let index = self
            .products
            .iter()
            .position(|p| p.id() == id)
            .ok_or(CoreError::ProductNotFound(id))?;
        Ok(self.products.remove(index))
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id() == id)
    }

    pub fn get_mut(&mut self, id: ProductId) -> Option<&mut Product> {
        self.products.iter_mut().find(|p| p.id() == id)
    }

    /// Number of products owned, active or not.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Sum of quantities over all products, including inactive ones.
    ///
    /// Saturates at `i64::MAX` rather than wrapping.
    pub fn total_quantity(&self) -> i64 {
        self.products
            .iter()
            .map(Product::quantity)
            .fold(0, i64::saturating_add)
    }

    /// Active products, in insertion order.
    pub fn active_products(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.is_active()).collect()
    }

    /// Numbered listing of active products.
    ///
    /// ```text
    /// ------
    /// 1. MacBook Air M2, Price: 1450, Quantity: 100
    /// 2. Google Pixel 7, Price: 500, Quantity: 250
    /// ------
    /// ```
    pub fn show_all(&self) -> String {
        let mut output = String::from("------\n");
        for (i, product) in self.active_products().iter().enumerate() {
            output.push_str(&format!("{}. {}\n", i + 1, product));
        }
        output.push_str("------");
        output
    }

    /// Buys every line in sequence and returns the receipt.
    ///
    /// ## Errors
    /// Stops at the first failing line. Lines before it have already been
    /// bought and stay bought; the returned [`OrderError`] says how much
    /// they cost. A line that would push the total past what `Money` holds
    /// fails with `AmountOverflow` before any of its stock is taken.
    ///
    /// ```rust
    /// use stockroom_core::{Money, OrderLine, Product, Store};
    ///
    /// let mut store = Store::default();
    /// let widget = store.add_product(Product::new("Widget", Money::from_dollars(10), 5).unwrap());
    /// let gadget = store.add_product(Product::new("Gadget", Money::from_dollars(3), 5).unwrap());
    ///
    /// let err = store
    ///     .order(&[OrderLine::new(widget, 2), OrderLine::new(gadget, 1000)])
    ///     .unwrap_err();
    /// assert_eq!(err.charged, Money::from_dollars(20));
    /// assert_eq!(store.get(widget).unwrap().quantity(), 3);
    /// ```
    pub fn order(&mut self, lines: &[OrderLine]) -> Result<Receipt, OrderError> {
        let mut completed = Vec::with_capacity(lines.len());
        let mut charged = Money::zero();

        for (index, line) in lines.iter().enumerate() {
            match self.buy_line(line, charged) {
                Ok(receipt_line) => {
                    charged += receipt_line.line_total;
                    completed.push(receipt_line);
                }
                Err(source) => {
                    return Err(OrderError {
                        line: index,
                        charged,
                        completed,
                        source,
                    })
                }
            }
        }

        Ok(Receipt {
            order_id: Uuid::new_v4(),
            placed_at: Utc::now(),
            lines: completed,
            total: charged,
        })
    }

    fn buy_line(&mut self, line: &OrderLine, charged: Money) -> CoreResult<ReceiptLine> {
        let product = self
            .get_mut(line.product_id)
            .ok_or(CoreError::ProductNotFound(line.product_id))?;

        let line_total = product.charge_for(line.quantity)?;
        charged
            .checked_add(line_total)
            .ok_or(CoreError::AmountOverflow)?;
        product.buy(line.quantity)?;

        Ok(ReceiptLine {
            product_id: product.id(),
            name: product.name().to_string(),
            quantity: line.quantity,
            unit_price: product.price(),
            line_total,
        })
    }
}

impl FromIterator<Product> for Store {
    fn from_iter<I: IntoIterator<Item = Product>>(iter: I) -> Self {
        Store::new(iter.into_iter().collect())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    fn product(name: &str, dollars: i64, quantity: i64) -> Product {
        Product::new(name, Money::from_dollars(dollars), quantity).unwrap()
    }

    fn names(store: &Store) -> Vec<&str> {
        store.active_products().iter().map(|p| p.name()).collect()
    }

    #[test]
    fn test_add_and_remove_by_identity() {
        let mut store = Store::default();
        let first = store.add_product(product("Widget", 10, 5));
        let second = store.add_product(product("Widget", 12, 3));
        assert_eq!(store.len(), 2);

        let removed = store.remove_product(second).unwrap();
        assert_eq!(removed.price(), Money::from_dollars(12));
        assert_eq!(store.len(), 1);
        assert!(store.get(first).is_some());

        assert_eq!(
            store.remove_product(second).unwrap_err(),
            CoreError::ProductNotFound(second)
        );
    }

    #[test]
    fn test_total_quantity_includes_inactive() {
        let mut store = Store::default();
        store.add_product(product("Widget", 10, 5));
        let gadget = store.add_product(product("Gadget", 3, 7));
        store.get_mut(gadget).unwrap().deactivate();

        assert_eq!(store.total_quantity(), 12);
        assert_eq!(names(&store), ["Widget"]);
    }

    #[test]
    fn test_active_products_keep_insertion_order() {
        let mut store: Store = [
            product("A", 1, 1),
            product("B", 1, 1),
            product("C", 1, 1),
            product("D", 1, 1),
        ]
        .into_iter()
        .collect();

        let b = store.active_products()[1].id();
        store.get_mut(b).unwrap().deactivate();

        assert_eq!(names(&store), ["A", "C", "D"]);
    }

    #[test]
    fn test_show_all() {
        let mut store = Store::default();
        store.add_product(product("Widget", 10, 5));
        let gone = store.add_product(product("Gone", 1, 1));
        store.add_product(product("Gadget", 3, 7));
        store.get_mut(gone).unwrap().set_quantity(0);

        assert_eq!(
            store.show_all(),
            "------\n\
             1. Widget, Price: 10, Quantity: 5\n\
             2. Gadget, Price: 3, Quantity: 7\n\
             ------"
        );
    }

    #[test]
    fn test_show_all_empty() {
        assert_eq!(Store::default().show_all(), "------\n------");
    }

    #[test]
    fn test_order_success() {
        let mut store = Store::default();
        let widget = store.add_product(product("Widget", 10, 5));
        let gadget = store.add_product(product("Gadget", 3, 7));

        let lines: Vec<OrderLine> = vec![(widget, 5).into(), (gadget, 2).into()];
        let receipt = store.order(&lines).unwrap();

        assert_eq!(receipt.total, Money::from_dollars(56));
        assert_eq!(receipt.total_quantity(), 7);
        assert_eq!(receipt.lines.len(), 2);
        assert_eq!(receipt.lines[0].name, "Widget");
        assert_eq!(receipt.lines[1].line_total, Money::from_dollars(6));

        assert!(!store.get(widget).unwrap().is_active());
        assert_eq!(store.get(gadget).unwrap().quantity(), 5);
        assert_eq!(names(&store), ["Gadget"]);
    }

    #[test]
    fn test_empty_order_totals_zero() {
        let mut store = Store::default();
        let receipt = store.order(&[]).unwrap();
        assert!(receipt.total.is_zero());
        assert!(receipt.lines.is_empty());
    }

    #[test]
    fn test_partial_order_keeps_earlier_lines() {
        let mut store = Store::default();
        let widget = store.add_product(product("Widget", 10, 5));
        let gadget = store.add_product(product("Gadget", 3, 5));

        let err = store
            .order(&[OrderLine::new(widget, 2), OrderLine::new(gadget, 1000)])
            .unwrap_err();

        assert_eq!(err.line, 1);
        assert_eq!(err.charged, Money::from_dollars(20));
        assert_eq!(err.completed.len(), 1);
        assert!(matches!(
            err.source,
            CoreError::OutOfStock { available: 5, requested: 1000, .. }
        ));

        assert_eq!(store.get(widget).unwrap().quantity(), 3);
        assert_eq!(store.get(gadget).unwrap().quantity(), 5);
    }

    #[test]
    fn test_order_stops_at_first_failure() {
        let mut store = Store::default();
        let widget = store.add_product(product("Widget", 10, 5));

        let err = store
            .order(&[OrderLine::new(widget, 6), OrderLine::new(widget, 1)])
            .unwrap_err();

        assert_eq!(err.line, 0);
        assert!(err.charged.is_zero());
        assert_eq!(store.get(widget).unwrap().quantity(), 5);
    }

    #[test]
    fn test_same_product_twice_in_one_order() {
        let mut store = Store::default();
        let widget = store.add_product(product("Widget", 10, 5));

        let err = store
            .order(&[OrderLine::new(widget, 3), OrderLine::new(widget, 3)])
            .unwrap_err();

        assert_eq!(err.charged, Money::from_dollars(30));
        assert!(matches!(
            err.source,
            CoreError::OutOfStock { available: 2, requested: 3, .. }
        ));
    }

    #[test]
    fn test_order_unknown_product() {
        let mut store = Store::default();
        let widget = store.add_product(product("Widget", 10, 5));
        let removed = store.remove_product(widget).unwrap();

        let err = store.order(&[OrderLine::new(removed.id(), 1)]).unwrap_err();
        assert_eq!(err.source, CoreError::ProductNotFound(removed.id()));
    }

    #[test]
    fn test_total_quantity_saturates() {
        let mut store = Store::default();
        for name in ["Bolt", "Nut"] {
            let id = store.add_product(product(name, 10, 1));
            store.get_mut(id).unwrap().set_quantity(9_000_000_000_000_000_000);
        }
        assert_eq!(store.total_quantity(), i64::MAX);
    }

    #[test]
    fn test_order_total_overflow_takes_no_stock() {
        let mut store = Store::default();
        let price = Money::from_cents(crate::MAX_PRICE_CENTS);
        let bolt = store.add_product(Product::new("Bolt", price, 1).unwrap());
        let nut = store.add_product(Product::new("Nut", price, 1).unwrap());
        for id in [bolt, nut] {
            store.get_mut(id).unwrap().set_quantity(9_000_000_000);
        }

        let err = store
            .order(&[OrderLine::new(bolt, 9_000_000_000), OrderLine::new(nut, 9_000_000_000)])
            .unwrap_err();

        assert_eq!(err.line, 1);
        assert_eq!(err.source, CoreError::AmountOverflow);
        assert_eq!(err.charged, price.multiply_quantity(9_000_000_000));
        assert_eq!(store.get(bolt).unwrap().quantity(), 0);
        assert_eq!(store.get(nut).unwrap().quantity(), 9_000_000_000);
    }

    #[test]
    fn test_catalog_limits_keep_order_in_range() {
        let mut store = crate::catalog_from_json(
            r#"[{"name": "Bolt", "price": 10000000, "quantity": 1000000000}]"#,
        )
        .unwrap();
        let bolt = store.active_products()[0].id();

        let receipt = store
            .order(&[OrderLine::new(bolt, crate::MAX_PRODUCT_QUANTITY)])
            .unwrap();
        assert_eq!(receipt.total.cents(), 1_000_000_000_000_000_000);
        assert!(crate::catalog_from_json(
            r#"[{"name": "Bolt", "price": 10, "quantity": 9000000000000000000}]"#
        )
        .is_err());
    }

    #[test]
    fn test_order_negative_quantity() {
        let mut store = Store::default();
        let widget = store.add_product(product("Widget", 10, 5));

        let err = store.order(&[OrderLine::new(widget, -1)]).unwrap_err();
        assert_eq!(
            err.source,
            CoreError::Validation(ValidationError::NegativeValue { field: "quantity" })
        );
        assert_eq!(store.get(widget).unwrap().quantity(), 5);
    }
}
