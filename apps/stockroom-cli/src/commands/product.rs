//! Read-only product commands.

use std::io::{self, BufRead, Write};

use super::Session;

impl<R: BufRead, W: Write> Session<'_, R, W> {
    /// Prints the numbered listing of active products.
    pub(super) fn list_products(&mut self) -> io::Result<()> {
        let listing = self.store.with_store(|s| s.show_all());
        writeln!(self.output, "{listing}")
    }

    /// Prints the number of units held across all products.
    pub(super) fn show_total(&mut self) -> io::Result<()> {
        let total = self.store.with_store(|s| s.total_quantity());
        writeln!(self.output, "Total of {total} items in store")
    }
}
