//! # Store State
//!
//! The store shared by the menu loop.
//!
//! ## Thread Safety
//! `Product::buy` is check-then-set. The Store is wrapped in
//! `Arc<Mutex<T>>` and every order runs inside one `with_store_mut` call, so
//! a whole order is applied under a single lock acquisition even if
//! sessions ever run on several threads.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Menu Choice          Session handler          Lock                     │
//! │  ───────────          ───────────────          ────                     │
//! │  1. List   ─────────► list_products() ───────► with_store     (read)   │
//! │  2. Total  ─────────► show_total() ──────────► with_store     (read)   │
//! │  3. Order  ─────────► make_order() ──────────► with_store     (pick)   │
//! │                                   └──────────► with_store_mut (order)  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fs;
use std::sync::{Arc, Mutex, PoisonError};

use stockroom_core::{catalog_from_json, default_catalog, Store};
use tracing::info;

use crate::error::{AppError, AppResult};
use crate::state::AppConfig;

#[derive(Debug, Clone, Default)]
pub struct StoreState {
    store: Arc<Mutex<Store>>,
}

impl StoreState {
    pub fn new(store: Store) -> Self {
        StoreState {
            store: Arc::new(Mutex::new(store)),
        }
    }

    /// Builds the store named by the configuration.
    ///
    /// Uses the JSON catalog at `catalog_path` when set, otherwise the
    /// built-in inventory.
    pub fn load(config: &AppConfig) -> AppResult<Self> {
        let store = match &config.catalog_path {
            Some(path) => {
                let json = fs::read_to_string(path).map_err(|source| AppError::ReadCatalog {
                    path: path.clone(),
                    source,
                })?;
                let store = catalog_from_json(&json).map_err(|source| AppError::Catalog {
                    path: path.clone(),
                    source,
                })?;
                info!(path = %path.display(), products = store.len(), "Catalog loaded from file");
                store
            }
            None => {
                let store = default_catalog();
                info!(products = store.len(), "Using built-in catalog");
                store
            }
        };

        Ok(StoreState::new(store))
    }

    /// Executes a function with read access to the store.
    ///
    /// A poisoned lock is recovered rather than propagated.
    pub fn with_store<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Store) -> R,
    {
        let store = self.store.lock().unwrap_or_else(PoisonError::into_inner);
        f(&store)
    }

    /// Executes a function with write access to the store.
    pub fn with_store_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Store) -> R,
    {
        let mut store = self.store.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut store)
    }
}
