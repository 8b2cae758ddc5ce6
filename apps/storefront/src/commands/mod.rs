//! # Commands Module
//!
//! All operations exposed to the view layer.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── catalog.rs  ◄─── Listing, filtering, artwork preview
//! ├── cart.rs     ◄─── Cart manipulation
//! ├── theme.rs    ◄─── Light/dark toggle
//! ├── order.rs    ◄─── Mock checkout and order tracking
//! ├── contact.rs  ◄─── Contact form
//! └── config.rs   ◄─── Configuration retrieval
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  View                                                                   │
//! │  ────                                                                   │
//! │  let page = commands::catalog::filter_artworks(                         │
//! │      storefront.catalog(),                                              │
//! │      &ArtworkQuery::new(Category::Photography, "ocean"),                │
//! │  );                                                                     │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Rust Command                                                           │
//! │  ────────────                                                           │
//! │  fn filter_artworks(                                                    │
//! │      catalog: &Catalog,        ◄── Only the state it needs             │
//! │      query: &ArtworkQuery,     ◄── From the view                       │
//! │  ) -> GalleryPage                                                       │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Serializable response (camelCase)                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## State Injection
//! Each command declares only the state it needs:
//! ```rust,ignore
//! // Only needs the cart
//! fn get_cart(cart: &CartStore)
//!
//! // Needs catalog and cart
//! fn add_to_cart(catalog: &Catalog, cart: &CartStore, ...)
//!
//! // Async: simulated latency from config
//! async fn track_order(config: &StorefrontConfig, order_number: &str)
//! ```

pub mod cart;
pub mod catalog;
pub mod config;
pub mod contact;
pub mod order;
pub mod theme;
