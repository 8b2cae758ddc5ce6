//! # Error Types
//!
//! Domain-specific error types for gallery-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  gallery-core errors (this file)                                       │
//! │  ├── CoreError        - Lookup misses and business rule failures       │
//! │  └── ValidationError  - Form / input validation failures               │
//! │                                                                         │
//! │  storefront errors (app crate)                                         │
//! │  ├── ConfigError / PreferenceError - file and env handling             │
//! │  └── ApiError         - What the view layer sees (serialized)          │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → View                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Cart and theme mutations never fail, so nothing here describes them.
//! Catalog lookups return `Option`; `ArtworkNotFound` only exists for the
//! command layer, which turns absence into a "not found" response.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core domain errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No artwork with this id in the catalog.
    #[error("Artwork not found: {0}")]
    ArtworkNotFound(u32),

    /// Order tracking lookup did not match any known order.
    ///
    /// ## When This Occurs
    /// - The order number is well-formed but unknown
    /// - Typo in the order number
    #[error("Order not found: {0}")]
    OrderNotFound(String),

    /// Checkout was attempted with nothing in the cart.
    #[error("Cannot check out an empty cart")]
    EmptyCart,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised by the contact form, the checkout form and the order tracking
/// lookup before any work is done.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Invalid format (e.g., malformed email).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
