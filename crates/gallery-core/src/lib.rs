//! # gallery-core: Pure Domain Logic for Artisan Gallery
//!
//! This crate contains the storefront's domain logic as pure functions with
//! zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Artisan Gallery Architecture                       │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                       View layer                                │   │
//! │  │   Home ─ Gallery ─ Preview ─ Cart panel ─ Checkout ─ Tracking   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ in-process calls                       │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 storefront (app crate)                          │   │
//! │  │   CartStore, ThemeStore, config, commands                       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ gallery-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐  │   │
//! │  │   │ catalog │ │ filter  │ │  money  │ │  order  │ │ contact │  │   │
//! │  │   └─────────┘ └─────────┘ └─────────┘ └─────────┘ └─────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CLOCK • NO NETWORK • PURE FUNCTIONS               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Artwork, Category, CategoryFilter, ThemeMode, ImageCursor
//! - [`catalog`] - The fixed artwork list and its lookups
//! - [`filter`] - Gallery category/search predicate
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`order`] - Mock checkout confirmation and order tracking
//! - [`contact`] - Contact form message
//! - [`validation`] - Form validation
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use gallery_core::{ArtworkQuery, Catalog, Category};
//!
//! let catalog = Catalog::builtin();
//! let photos = ArtworkQuery::new(Category::Photography, "").apply(&catalog);
//! let ids: Vec<u32> = photos.iter().map(|a| a.id).collect();
//! assert_eq!(ids, vec![3, 8]);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod contact;
pub mod error;
pub mod filter;
pub mod money;
pub mod order;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::Catalog;
pub use contact::{ContactMessage, ContactSubject};
pub use error::{CoreError, CoreResult, ValidationError};
pub use filter::ArtworkQuery;
pub use money::Money;
pub use order::{
    CheckoutDetails, OrderConfirmation, OrderLine, OrderStatus, ShippingAddress, TrackedItem,
    TrackedOrder, TrackingEvent, TrackingStage,
};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// How many artworks the preview page suggests under "related".
pub const DEFAULT_RELATED_LIMIT: usize = 3;

/// How many artworks the home page features.
pub const DEFAULT_FEATURED_COUNT: usize = 6;

/// Days between checkout and the estimated delivery date.
pub const DEFAULT_DELIVERY_DAYS: u32 = 7;
