//! # App Error Type
//!
//! Failures the CLI cannot recover from. Everything here ends the process
//! through `anyhow` in `main`.
//!
//! Order failures are NOT here: an `OrderError` is reported in the menu and
//! the loop continues.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Startup                                                                │
//! │     catalog file unreadable ──► AppError::ReadCatalog ──► exit 1        │
//! │     catalog JSON invalid ─────► AppError::Catalog ──────► exit 1        │
//! │                                                                         │
//! │  Menu loop                                                              │
//! │     stdin/stdout broken ──────► AppError::Io ───────────► exit 1        │
//! │     OutOfStock ───────────────► printed, loop continues                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io;
use std::path::PathBuf;

use stockroom_core::CatalogError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to read catalog {}: {source}", .path.display())]
    ReadCatalog {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid catalog {}: {source}", .path.display())]
    Catalog {
        path: PathBuf,
        #[source]
        source: CatalogError,
    },

    #[error("Terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

pub type AppResult<T> = Result<T, AppError>;
