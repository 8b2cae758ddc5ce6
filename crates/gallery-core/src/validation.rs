//! # Validation Module
//!
//! Input validation for the storefront's forms.
//!
//! ## Where Validation Runs
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: View                                                         │
//! │  └── `required` attributes, input types                                │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Storefront command (Rust)                                    │
//! │  └── THIS MODULE: contact form, checkout form, order number            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Cart quantities are NOT validated here: the cart treats any
//! non-positive quantity as a removal and has no upper bound.
//!
//! ## Usage
//! ```rust
//! use gallery_core::validation::{validate_email, validate_order_number};
//!
//! assert!(validate_email("customer@example.com").is_ok());
//! assert_eq!(validate_order_number("  AG-123456 ").unwrap(), "AG-123456");
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest single-line form field we accept.
pub const MAX_FIELD_LEN: usize = 200;

/// Longest contact message body we accept.
pub const MAX_MESSAGE_LEN: usize = 5000;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a required text field.
///
/// ## Rules
/// - Must not be empty after trimming
/// - Must be at most `max` characters
pub fn validate_required(field: &str, value: &str, max: usize) -> ValidationResult<()> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.chars().count() > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
        });
    }

    Ok(())
}

/// Validates an email address.
///
/// ## Rules
/// - Required
/// - Exactly one `@` with a non-empty local part
/// - Domain contains a `.` that is neither first nor last
/// - No whitespace
///
/// This is the same bar the browser's `type="email"` input applies; it is
/// not an RFC 5322 parser.
///
/// ```rust
/// use gallery_core::validation::validate_email;
///
/// assert!(validate_email("info@artisan.gallery").is_ok());
/// assert!(validate_email("not-an-email").is_err());
/// ```
pub fn validate_email(email: &str) -> ValidationResult<()> {
    validate_required("email", email, MAX_FIELD_LEN)?;
    let email = email.trim();

    let invalid = |reason: &str| ValidationError::InvalidFormat {
        field: "email".to_string(),
        reason: reason.to_string(),
    };

    if email.chars().any(char::is_whitespace) {
        return Err(invalid("must not contain spaces"));
    }

    let (local, domain) = email
        .split_once('@')
        .ok_or_else(|| invalid("missing '@'"))?;

    if local.is_empty() || domain.contains('@') {
        return Err(invalid("must look like name@example.com"));
    }

    if domain.starts_with('.') || domain.ends_with('.') || !domain.contains('.') {
        return Err(invalid("domain must look like example.com"));
    }

    Ok(())
}

/// Validates an order number entered on the tracking page.
///
/// Returns the trimmed value. Only emptiness and length (in characters) are
/// checked; whether the order exists is the lookup's job.
pub fn validate_order_number(input: &str) -> ValidationResult<&str> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required {
            field: "order number".to_string(),
        });
    }
    if trimmed.chars().count() > 64 {
        return Err(ValidationError::TooLong {
            field: "order number".to_string(),
            max: 64,
        });
    }
    Ok(trimmed)
}

// =============================================================================
// Unit Tests
// =============================================================================
