//! # Stockroom Entry Point
//!
//! Setup lives in `lib.rs` so the session can be tested without a terminal.

fn main() -> anyhow::Result<()> {
    stockroom_cli::run()
}
