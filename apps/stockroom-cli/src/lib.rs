//! # Stockroom CLI
//!
//! Interactive menu over a `stockroom-core` Store.
//!
//! ## Module Structure
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         stockroom-cli                                   │
//! │                                                                         │
//! │  main.rs ────► stockroom_cli::run()                                     │
//! │                                                                         │
//! │  args.rs ────► --catalog, --store-name (clap)                           │
//! │                                                                         │
//! │  state/ ─────► AppConfig (defaults ◄ env ◄ flags), StoreState           │
//! │                                                                         │
//! │  menu.rs ────► Menu rendering                                           │
//! │                                                                         │
//! │  commands/ ──► Session loop: list, total, order, quit                   │
//! │                                                                         │
//! │  error.rs ───► AppError (startup and terminal failures)                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Logs go to stderr so they never mix with the menu on stdout. Set
//! `RUST_LOG=debug` to see every command and receipt.

pub mod args;
pub mod commands;
pub mod error;
pub mod menu;
pub mod state;

use std::io;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use args::CommandLine;
use commands::{store_menu, Session};
use state::{AppConfig, StoreState};

/// Runs the interactive store.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Parse flags ──────────────────────────────────────────────────────► │
/// │  2. Initialize logging (stderr) ──────────────────────────────────────► │
/// │  3. Resolve AppConfig: defaults ◄ STOCKROOM_* ◄ flags ────────────────► │
/// │  4. Load the store (JSON catalog or built-in) ────────────────────────► │
/// │  5. Run the menu over stdin/stdout until Quit or end of input ────────► │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> anyhow::Result<()> {
    let args = CommandLine::parse_args();
    init_tracing();

    let config = AppConfig::from_env().with_args(&args);
    info!(store_name = %config.store_name, "Configuration loaded");

    let store = StoreState::load(&config).context("Failed to stock the store")?;
    let menu = store_menu(&config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    Session::new(&store, &menu, stdin.lock(), stdout.lock())
        .run()
        .map_err(error::AppError::from)?;

    info!("Store closed");
    Ok(())
}

/// Initializes the tracing subscriber.
///
/// ## Log Levels
/// - Default: `warn` (partial orders only)
/// - Override with the `RUST_LOG` environment variable
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
