//! # Artisan Gallery Storefront
//!
//! Session state and the command API for the gallery storefront. A view
//! layer builds one [`Storefront`], hands its parts to the commands it
//! calls, and subscribes to the stores it renders.
//!
//! ## Module Organization
//! ```text
//! gallery_storefront/
//! ├── lib.rs          ◄─── You are here (Storefront context, tracing init)
//! ├── state/
//! │   ├── mod.rs          ◄─── State type exports
//! │   ├── cart.rs         ◄─── Cart state management
//! │   ├── theme.rs        ◄─── Light/dark mode
//! │   ├── preferences.rs  ◄─── Where the theme choice is saved
//! │   └── config.rs       ◄─── Configuration state
//! ├── commands/
//! │   ├── catalog.rs  ◄─── Gallery, filtering, preview
//! │   ├── cart.rs     ◄─── Cart manipulation commands
//! │   ├── order.rs    ◄─── Checkout and tracking
//! │   └── ...
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## Example
//! ```rust
//! use gallery_core::ThemeMode;
//! use gallery_storefront::{commands, state::StorefrontConfig, Storefront};
//!
//! let storefront = Storefront::in_memory(StorefrontConfig::instant(), ThemeMode::Light);
//! commands::cart::add_to_cart(storefront.catalog(), storefront.cart(), 1, None).unwrap();
//! assert_eq!(storefront.cart().total_count(), 1);
//! ```

pub mod commands;
pub mod error;
pub mod state;

use std::sync::Arc;

use gallery_core::{Catalog, ThemeMode};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use state::{
    CartStore, FilePreferences, MemoryPreferences, PreferenceStore, StorefrontConfig, ThemeStore,
};

/// Everything one shopping session needs.
///
/// Passed to views explicitly. Cloning is cheap and clones share the same
/// cart and theme.
#[derive(Debug, Clone)]
pub struct Storefront {
    catalog: Arc<Catalog>,
    cart: CartStore,
    theme: ThemeStore,
    config: Arc<StorefrontConfig>,
}

impl Storefront {
    /// Builds the storefront the way the app starts.
    ///
    /// ## Startup Sequence
    /// ```text
    /// ┌─────────────────────────────────────────────────────────────────────────┐
    /// │  1. Load Config ──────────────────────────────────────────────────────► │
    /// │     • storefront.toml, then GALLERY_* overrides                         │
    /// │     • Any error: log and use defaults                                   │
    /// │                                                                         │
    /// │  2. Open Preferences ─────────────────────────────────────────────────► │
    /// │     • preferences_path, else the platform config dir                    │
    /// │     • No usable path: keep preferences in memory                        │
    /// │                                                                         │
    /// │  3. Load Theme ───────────────────────────────────────────────────────► │
    /// │     • Saved choice, else `system_default`                               │
    /// │                                                                         │
    /// │  4. Empty cart, built-in catalog                                        │
    /// └─────────────────────────────────────────────────────────────────────────┘
    /// ```
    pub fn bootstrap(system_default: ThemeMode) -> Self {
        let config = StorefrontConfig::load_or_default(None);

        let prefs: Arc<dyn PreferenceStore> = match config.preferences_path.clone() {
            Some(path) => Arc::new(FilePreferences::new(path)),
            None => match FilePreferences::at_default_path() {
                Ok(file) => Arc::new(file),
                Err(e) => {
                    warn!("{}. Theme choice will not be saved.", e);
                    Arc::new(MemoryPreferences::default())
                }
            },
        };

        let storefront = Self::with_preferences(config, prefs, system_default);
        info!(
            store = %storefront.config.store_name,
            artworks = storefront.catalog.len(),
            theme = storefront.theme.theme().as_str(),
            "Storefront ready"
        );
        storefront
    }

    /// No files touched; the theme choice lives as long as the process.
    pub fn in_memory(config: StorefrontConfig, system_default: ThemeMode) -> Self {
        Self::with_preferences(config, Arc::new(MemoryPreferences::default()), system_default)
    }

    pub fn with_preferences(
        config: StorefrontConfig,
        prefs: Arc<dyn PreferenceStore>,
        system_default: ThemeMode,
    ) -> Self {
        Storefront {
            catalog: Arc::new(Catalog::builtin()),
            cart: CartStore::new(),
            theme: ThemeStore::load(prefs, system_default),
            config: Arc::new(config),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    pub fn theme(&self) -> &ThemeStore {
        &self.theme
    }

    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=gallery_storefront=trace` - Trace this crate only
/// - Default: INFO, DEBUG for the gallery crates
///
/// Safe to call more than once; later calls are ignored.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,gallery_core=debug,gallery_storefront=debug"));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
