//! # Theme Commands
//!
//! The navbar's sun/moon button.

use gallery_core::ThemeMode;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::state::ThemeStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeResponse {
    pub mode: ThemeMode,
    pub is_dark: bool,
}

impl From<ThemeMode> for ThemeResponse {
    fn from(mode: ThemeMode) -> Self {
        ThemeResponse {
            mode,
            is_dark: mode.is_dark(),
        }
    }
}

pub fn get_theme(theme: &ThemeStore) -> ThemeResponse {
    debug!("get_theme command");
    ThemeResponse::from(theme.theme())
}

/// Flips light/dark and remembers the choice.
pub fn toggle_theme(theme: &ThemeStore) -> ThemeResponse {
    let mode = theme.toggle_theme();
    debug!(theme = mode.as_str(), "toggle_theme command");
    ThemeResponse::from(mode)
}
