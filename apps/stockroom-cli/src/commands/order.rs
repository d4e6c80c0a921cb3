//! # Order Command
//!
//! Collects order lines from the user, then places them as one order.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  loop:                                                                  │
//! │    listing + "When you want to finish order, enter empty text."         │
//! │    "Which product # do you want? "  ──┐                                 │
//! │    "Which amount do you want? "     ──┤                                 │
//! │                                       ▼                                 │
//! │        either empty / end of input ──► stop collecting                  │
//! │        not digits / no such number ──► "error adding product"           │
//! │        otherwise ───────────────────► OrderLine, "Product added..."     │
//! │                                                                         │
//! │  with_store_mut(|s| s.order(&lines))                                    │
//! │    Ok(receipt)  ──► "Order made! Total payment: $X" (if X > 0)          │
//! │    Err(error)   ──► error text + "Charged before the error: $Y"         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Product numbers refer to the listing printed just before the prompt, so
//! they are resolved to ids while collecting.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use stockroom_core::{OrderLine, ProductId};
use tracing::{debug, info, warn};

use super::Session;

impl<R: BufRead, W: Write> Session<'_, R, W> {
    pub(super) fn make_order(&mut self) -> io::Result<()> {
        let lines = self.collect_order_lines()?;
        debug!(lines = lines.len(), "Placing order");

        match self.store.with_store_mut(|s| s.order(&lines)) {
            Ok(receipt) => {
                info!(
                    order_id = %receipt.order_id,
                    total = %receipt.total,
                    units = receipt.total_quantity(),
                    "Order placed"
                );
                if let Ok(json) = serde_json::to_string(&receipt) {
                    debug!(receipt = %json, "Order receipt");
                }

                if receipt.total.is_positive() {
                    writeln!(
                        self.output,
                        "********\nOrder made! Total payment: {}",
                        receipt.total
                    )?;
                }
            }
            Err(error) => {
                warn!(
                    line = error.line,
                    charged = %error.charged,
                    error = %error.source,
                    "Order stopped partway"
                );
                writeln!(self.output, "{error}")?;
                if error.charged.is_positive() {
                    writeln!(self.output, "Charged before the error: {}", error.charged)?;
                }
            }
        }

        Ok(())
    }

    fn collect_order_lines(&mut self) -> io::Result<Vec<OrderLine>> {
        let mut lines = Vec::new();

        loop {
            let listing = self.store.with_store(|s| s.show_all());
            writeln!(self.output, "{listing}")?;
            writeln!(self.output, "When you want to finish order, enter empty text.")?;

            let Some(product) = self.prompt("Which product # do you want? ")? else {
                break;
            };
            let Some(amount) = self.prompt("Which amount do you want? ")? else {
                break;
            };
            if product.is_empty() || amount.is_empty() {
                break;
            }

            let selection = parse_digits::<usize>(&product)
                .and_then(|number| self.listed_product(number))
                .zip(parse_digits::<i64>(&amount));

            match selection {
                Some((product_id, quantity)) => {
                    lines.push(OrderLine::new(product_id, quantity));
                    writeln!(self.output, "Product added to list!")?;
                }
                None => {
                    debug!(%product, %amount, "Rejected order line");
                    writeln!(self.output, "error adding product")?;
                }
            }
        }

        Ok(lines)
    }

    /// Id of the product shown as `number` in the listing (1-based).
    fn listed_product(&self, number: usize) -> Option<ProductId> {
        let index = number.checked_sub(1)?;
        self.store
            .with_store(|s| s.active_products().get(index).map(|p| p.id()))
    }
}

/// Parses text made only of ASCII digits. Signs, spaces and overflow are
/// rejected.
fn parse_digits<T: FromStr>(text: &str) -> Option<T> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::tests::{default_state, run_session, run_session_bytes};
    use crate::state::StoreState;
    use stockroom_core::{Money, Product, Store};

    fn widget_and_gadget() -> StoreState {
        StoreState::new(Store::new(vec![
            Product::new("Widget", Money::from_dollars(10), 5).unwrap(),
            Product::new("Gadget", Money::from_dollars(3), 5).unwrap(),
        ]))
    }

    #[test]
    fn test_parse_digits() {
        assert_eq!(parse_digits::<usize>("12"), Some(12));
        assert_eq!(parse_digits::<usize>("0"), Some(0));
        assert_eq!(parse_digits::<usize>(""), None);
        assert_eq!(parse_digits::<i64>("-1"), None);
        assert_eq!(parse_digits::<i64>("+1"), None);
        assert_eq!(parse_digits::<i64>(" 1"), None);
        assert_eq!(parse_digits::<i64>("1.5"), None);
        assert_eq!(parse_digits::<i64>("99999999999999999999"), None);
    }

    #[test]
    fn test_order_single_product() {
        let state = default_state();
        let output = run_session(&state, "3\n1\n2\n\n\n4\n");

        assert!(output.contains("When you want to finish order, enter empty text.\n"));
        assert!(output.contains("Which product # do you want? Which amount do you want? "));
        assert!(output.contains("Product added to list!\n"));
        assert!(output.contains("********\nOrder made! Total payment: $2900.00\n"));
        assert_eq!(state.with_store(|s| s.total_quantity()), 848);
    }

    #[test]
    fn test_order_several_products() {
        let state = widget_and_gadget();
        let output = run_session(&state, "3\n1\n2\n2\n3\n\n\n4\n");

        assert_eq!(output.matches("Product added to list!").count(), 2);
        assert!(output.contains("Order made! Total payment: $29.00"));
        assert_eq!(state.with_store(|s| s.total_quantity()), 5);
    }

    #[test]
    fn test_empty_order_prints_no_total() {
        let state = default_state();
        let output = run_session(&state, "3\n\n\n4\n");

        assert!(!output.contains("Order made!"));
        assert_eq!(state.with_store(|s| s.total_quantity()), 850);
    }

    #[test]
    fn test_bad_order_lines_are_rejected() {
        let state = default_state();
        let output = run_session(&state, "3\nx\n1\n0\n1\n4\n1\n1\n-2\n\n\n4\n");

        assert_eq!(output.matches("error adding product").count(), 4);
        assert!(!output.contains("Product added to list!"));
        assert_eq!(state.with_store(|s| s.total_quantity()), 850);
    }

    #[test]
    fn test_non_utf8_order_line_is_rejected() {
        let state = default_state();
        let output = run_session_bytes(&state, b"3\n\xff\n1\n1\n1\n\n\n4\n");

        assert_eq!(output.matches("error adding product").count(), 1);
        assert!(output.contains("Order made! Total payment: $1450.00"));
        assert_eq!(state.with_store(|s| s.total_quantity()), 849);
    }

    #[test]
    fn test_order_zero_amount() {
        let state = default_state();
        let output = run_session(&state, "3\n1\n0\n\n\n4\n");

        assert!(output.contains("Product added to list!"));
        assert!(!output.contains("Order made!"));
        assert_eq!(state.with_store(|s| s.total_quantity()), 850);
    }

    #[test]
    fn test_partial_order_reports_charge() {
        let state = widget_and_gadget();
        let output = run_session(&state, "3\n1\n2\n2\n1000\n\n\n4\n");

        assert!(output.contains(
            "Order stopped at line 2: Not enough items of 'Gadget' in stock. Current stock: 5\n"
        ));
        assert!(output.contains("Charged before the error: $20.00\n"));
        assert!(!output.contains("Order made!"));
        assert_eq!(state.with_store(|s| s.total_quantity()), 8);
    }

    #[test]
    fn test_first_line_failure_reports_no_charge() {
        let state = widget_and_gadget();
        let output = run_session(&state, "3\n1\n6\n\n\n4\n");

        assert!(output.contains("Order stopped at line 1:"));
        assert!(!output.contains("Charged before the error"));
        assert_eq!(state.with_store(|s| s.total_quantity()), 10);
    }

    #[test]
    fn test_sold_out_product_leaves_listing() {
        let state = default_state();
        let output = run_session(&state, "3\n1\n100\n\n\n3\n1\n1\n\n\n4\n");

        assert!(output.contains("Order made! Total payment: $145000.00"));
        assert!(output.contains("Order made! Total payment: $250.00"));
        assert!(output.contains("1. Bose QuietComfort Earbuds, Price: 250, Quantity: 500"));
        assert_eq!(state.with_store(|s| s.active_products().len()), 2);
    }

    #[test]
    fn test_end_of_input_places_collected_order() {
        let state = default_state();
        let output = run_session(&state, "3\n1\n2\n");

        assert!(output.contains("Order made! Total payment: $2900.00"));
        assert_eq!(state.with_store(|s| s.total_quantity()), 848);
    }
}
