//! # Configuration State
//!
//! Storefront configuration loaded at startup.
//!
//! ## Configuration Sources (later overrides earlier)
//! 1. Defaults (this file)
//! 2. Config file (`storefront.toml`)
//! 3. Environment variables (`GALLERY_*`)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.
//!
//! ## Example `storefront.toml`
//! ```toml
//! store_name = "Artisan Gallery"
//! navigation_delay_ms = 0
//! tracking_delay_ms = 250
//! ```

use std::path::PathBuf;
use std::time::Duration;

use gallery_core::money::group_thousands;
use gallery_core::{Money, DEFAULT_DELIVERY_DAYS, DEFAULT_FEATURED_COUNT, DEFAULT_RELATED_LIMIT};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors from loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Storefront configuration.
///
/// ## Fields
/// Every field has a default, so a partial `storefront.toml` is fine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    /// Shown in the navbar and footer
    pub store_name: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Decimal places shown for prices: 0 hides cents, 2 shows them
    pub currency_decimals: u8,

    /// Latency before an artwork preview opens
    pub navigation_delay_ms: u64,

    /// Latency of an order tracking lookup
    pub tracking_delay_ms: u64,

    /// Latency of placing an order
    pub checkout_delay_ms: u64,

    /// Related artworks under a preview
    pub related_limit: usize,

    /// Artworks on the home page
    pub featured_count: usize,

    /// Days from checkout to estimated delivery
    pub delivery_days: u32,

    /// Where the theme preference is stored. `None` uses the platform default.
    pub preferences_path: Option<PathBuf>,
}

impl Default for StorefrontConfig {
    /// ## Default Values
    /// - Store: "Artisan Gallery"
    /// - Currency: $ with whole units
    /// - Delays: 300ms preview, 1000ms tracking, 1500ms checkout
    fn default() -> Self {
        StorefrontConfig {
            store_name: "Artisan Gallery".to_string(),
            currency_symbol: "$".to_string(),
            currency_decimals: 0,
            navigation_delay_ms: 300,
            tracking_delay_ms: 1000,
            checkout_delay_ms: 1500,
            related_limit: DEFAULT_RELATED_LIMIT,
            featured_count: DEFAULT_FEATURED_COUNT,
            delivery_days: DEFAULT_DELIVERY_DAYS,
            preferences_path: None,
        }
    }
}

impl StorefrontConfig {
    /// Loads configuration from file, environment, and defaults.
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading storefront config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load storefront config: {}. Using defaults.", e);
            Self::default()
        })
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.store_name.trim().is_empty() {
            return Err(ConfigError::Invalid("store_name must not be empty".into()));
        }

        if self.currency_symbol.is_empty() {
            return Err(ConfigError::Invalid(
                "currency_symbol must not be empty".into(),
            ));
        }

        if !matches!(self.currency_decimals, 0 | 2) {
            return Err(ConfigError::Invalid(format!(
                "currency_decimals must be 0 or 2, got {}",
                self.currency_decimals
            )));
        }

        if self.featured_count == 0 {
            return Err(ConfigError::Invalid(
                "featured_count must be greater than 0".into(),
            ));
        }

        Ok(())
    }

    /// Applies `GALLERY_*` overrides read through `lookup`.
    ///
    /// Unparseable numbers are logged and ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(name) = lookup("GALLERY_STORE_NAME") {
            self.store_name = name;
        }

        if let Some(symbol) = lookup("GALLERY_CURRENCY_SYMBOL") {
            self.currency_symbol = symbol;
        }

        if let Some(path) = lookup("GALLERY_PREFERENCES_PATH") {
            debug!(path = %path, "Overriding preferences path from environment");
            self.preferences_path = Some(PathBuf::from(path));
        }

        let numeric = |key: &str| -> Option<u64> {
            let raw = lookup(key)?;
            match raw.trim().parse::<u64>() {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!(key, value = %raw, "Ignoring non-numeric environment override");
                    None
                }
            }
        };

        if let Some(ms) = numeric("GALLERY_NAVIGATION_DELAY_MS") {
            self.navigation_delay_ms = ms;
        }
        if let Some(ms) = numeric("GALLERY_TRACKING_DELAY_MS") {
            self.tracking_delay_ms = ms;
        }
        if let Some(ms) = numeric("GALLERY_CHECKOUT_DELAY_MS") {
            self.checkout_delay_ms = ms;
        }
        if let Some(limit) = numeric("GALLERY_RELATED_LIMIT") {
            self.related_limit = limit as usize;
        }
        if let Some(count) = numeric("GALLERY_FEATURED_COUNT") {
            self.featured_count = count as usize;
        }
        if let Some(days) = numeric("GALLERY_DELIVERY_DAYS") {
            self.delivery_days = u32::try_from(days).unwrap_or(u32::MAX);
        }
        if let Some(decimals) = numeric("GALLERY_CURRENCY_DECIMALS") {
            // Out-of-range values are left for validate() to reject.
            self.currency_decimals = u8::try_from(decimals).unwrap_or(u8::MAX);
        }
    }

    /// `~/.config/gallery/storefront.toml` on Linux; platform equivalents elsewhere.
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "artisan", "gallery")
            .map(|dirs| dirs.config_dir().join("storefront.toml"))
    }

    /// Zero-latency config with in-memory-friendly defaults.
    pub fn instant() -> Self {
        StorefrontConfig {
            navigation_delay_ms: 0,
            tracking_delay_ms: 0,
            checkout_delay_ms: 0,
            ..Self::default()
        }
    }

    pub fn navigation_delay(&self) -> Duration {
        Duration::from_millis(self.navigation_delay_ms)
    }

    pub fn tracking_delay(&self) -> Duration {
        Duration::from_millis(self.tracking_delay_ms)
    }

    pub fn checkout_delay(&self) -> Duration {
        Duration::from_millis(self.checkout_delay_ms)
    }

    /// Formats an amount for display.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let config = StorefrontConfig::default();
    /// assert_eq!(config.format_currency(Money::from_major(2400)), "$2,400");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        let sign = if amount.cents() < 0 { "-" } else { "" };
        let whole = group_thousands(amount.dollars().unsigned_abs());
        let cents = amount.cents_part().abs();

        match self.currency_decimals {
            0 => format!("{}{}{}", sign, self.currency_symbol, whole),
            _ => format!("{}{}{}.{:02}", sign, self.currency_symbol, whole, cents),
        }
    }
}
