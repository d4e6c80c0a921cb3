//! # Configuration State
//!
//! Application configuration resolved at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command line flags (`--store-name`, `--catalog`)
//! 2. Environment variables (`STOCKROOM_*`)
//! 3. Defaults (this file)
//!
//! Read-only after startup, so no locking.

use std::path::PathBuf;

use crate::args::CommandLine;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Menu header.
    pub store_name: String,

    /// Line drawn under the header.
    pub separator: String,

    /// Prompt printed after the menu options.
    pub prompt: String,

    /// JSON catalog to load instead of the built-in inventory.
    pub catalog_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            store_name: "Store Menu".to_string(),
            separator: "----------".to_string(),
            prompt: "Please choose a number: ".to_string(),
            catalog_path: None,
        }
    }
}

impl AppConfig {
    /// Defaults overridden by the process environment.
    ///
    /// ## Environment Variables
    /// - `STOCKROOM_STORE_NAME`: menu header
    /// - `STOCKROOM_CATALOG`: path to a JSON catalog
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = AppConfig::default();

        if let Some(store_name) = lookup("STOCKROOM_STORE_NAME").filter(|s| !s.is_empty()) {
            config.store_name = store_name;
        }

        if let Some(path) = lookup("STOCKROOM_CATALOG").filter(|s| !s.is_empty()) {
            config.catalog_path = Some(PathBuf::from(path));
        }

        config
    }

    /// Applies command line flags on top of the current values.
    pub fn with_args(mut self, args: &CommandLine) -> Self {
        if let Some(store_name) = &args.store_name {
            self.store_name = store_name.clone();
        }
        if let Some(path) = &args.catalog {
            self.catalog_path = Some(path.clone());
        }
        self
    }
}
