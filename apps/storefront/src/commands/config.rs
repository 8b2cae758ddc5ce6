//! # Config Commands
//!
//! Commands for retrieving storefront configuration.

use tracing::debug;

use crate::state::StorefrontConfig;

/// Gets the current storefront configuration.
///
/// ## When Used
/// - App startup (store name, currency formatting)
/// - Showing delays as loading indicators
pub fn get_config(config: &StorefrontConfig) -> StorefrontConfig {
    debug!("get_config command");
    config.clone()
}
