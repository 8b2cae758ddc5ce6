//! # State Module
//!
//! Mutable session state, one type per concern. Commands take only the
//! state they need, so each store can be tested on its own.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────┐  ┌──────────────────┐  ┌──────────────────────┐      │
//! │  │  CartStore   │  │   ThemeStore     │  │  StorefrontConfig    │      │
//! │  │              │  │                  │  │                      │      │
//! │  │  Arc<Mutex<  │  │  watch<Theme>    │  │  store_name          │      │
//! │  │    Cart      │  │  + dyn           │  │  delays              │      │
//! │  │  >>          │  │  PreferenceStore │  │  limits              │      │
//! │  └──────────────┘  └──────────────────┘  └──────────────────────┘      │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • CartStore: Arc<Mutex<T>>, publishes snapshots on a watch channel    │
//! │  • ThemeStore: the watch channel holds the current mode                │
//! │  • StorefrontConfig: read-only after initialization                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod config;
mod preferences;
mod theme;

pub use cart::{Cart, CartItem, CartSnapshot, CartStore, CartTotals};
pub use config::{ConfigError, ConfigResult, StorefrontConfig};
pub use preferences::{
    FilePreferences, MemoryPreferences, PreferenceError, PreferenceResult, PreferenceStore,
};
pub use theme::ThemeStore;
