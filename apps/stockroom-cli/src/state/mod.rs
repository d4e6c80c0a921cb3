//! # State Module
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────────────┐        ┌──────────────────────────┐       │
//! │  │       StoreState         │        │        AppConfig         │       │
//! │  │  Arc<Mutex<Store>>       │        │  store_name, separator   │       │
//! │  │  with_store / _mut       │        │  prompt, catalog_path    │       │
//! │  └──────────────────────────┘        └──────────────────────────┘       │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • StoreState: Arc<Mutex<T>> for exclusive access                      │
//! │  • AppConfig: read-only after startup                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod store;

pub use config::AppConfig;
pub use store::StoreState;
