//! # Storefront Entry Point
//!
//! Starts a session the way the app does (tracing, config, saved theme) and
//! prints what the home page would show. Handy for checking a
//! `storefront.toml` or `GALLERY_*` override without a view attached.
//!
//! ```text
//! $ RUST_LOG=debug gallery-storefront
//! Artisan Gallery (light theme)
//!   #1 Urban Serenity · Maya Chen · $2,400
//!   ...
//! ```

use gallery_core::ThemeMode;
use gallery_storefront::commands::catalog::featured_artworks;
use gallery_storefront::{init_tracing, Storefront};

fn main() {
    init_tracing();

    let storefront = Storefront::bootstrap(ThemeMode::Light);
    let config = storefront.config();

    println!(
        "{} ({} theme)",
        config.store_name,
        storefront.theme().theme().as_str()
    );
    for card in featured_artworks(storefront.catalog(), config) {
        println!(
            "  #{} {} · {} · {}",
            card.id,
            card.title,
            card.artist,
            config.format_currency(card.price)
        );
    }
}
