//! # Order Commands
//!
//! Mock checkout and order tracking. Nothing leaves the process: checkout
//! builds a confirmation from the cart, tracking answers from fixed data.
//!
//! ## Checkout Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Checkout form (email + shipping address)                              │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  place_order(cart, details)                                            │
//! │    1. Snapshot cart lines (cart itself is left as is)                  │
//! │    2. Empty? ──────────────────────────────► BUSINESS_LOGIC error      │
//! │    3. Validate form ───────────────────────► VALIDATION_ERROR          │
//! │    4. sleep(checkout delay)                                            │
//! │    5. OrderConfirmation { AG-xxxxxx, total, delivery estimate }        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use gallery_core::order::lookup_order;
use gallery_core::validation::validate_order_number;
use gallery_core::{CheckoutDetails, CoreError, OrderConfirmation, TrackedOrder};
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::{CartStore, StorefrontConfig};

/// Places the (mock) order for everything in the cart.
///
/// The form is checked before the delay so a bad form fails fast.
///
/// ## Errors
/// - `BUSINESS_LOGIC` when the cart is empty
/// - `VALIDATION_ERROR` when a checkout field is missing or malformed
pub async fn place_order(
    cart: &CartStore,
    config: &StorefrontConfig,
    details: CheckoutDetails,
) -> Result<OrderConfirmation, ApiError> {
    let lines = cart.with_cart(|c| c.order_lines());
    debug!(lines = lines.len(), "place_order command");

    if lines.is_empty() {
        return Err(CoreError::EmptyCart.into());
    }
    details.validate().map_err(CoreError::from)?;

    tokio::time::sleep(config.checkout_delay()).await;

    let confirmation = OrderConfirmation::build(lines, details, Utc::now(), config.delivery_days)?;
    info!(
        order_number = %confirmation.order_number,
        total = %confirmation.total,
        "Order placed"
    );
    Ok(confirmation)
}

/// Looks up an order for the tracking page.
///
/// ## Arguments
/// * `order_number` - As typed; only the `AG-` form tolerates surrounding text
///
/// ## Errors
/// - `VALIDATION_ERROR` for a blank number (returned immediately)
/// - `NOT_FOUND` for an unknown number (after the lookup delay)
pub async fn track_order(
    config: &StorefrontConfig,
    order_number: &str,
) -> Result<TrackedOrder, ApiError> {
    let number = validate_order_number(order_number).map_err(CoreError::from)?;
    debug!(order_number = %number, "track_order command");

    tokio::time::sleep(config.tracking_delay()).await;

    Ok(lookup_order(order_number)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use gallery_core::{Catalog, Money, OrderStatus, ShippingAddress};

    fn details() -> CheckoutDetails {
        CheckoutDetails {
            email: "collector@example.com".to_string(),
            shipping: ShippingAddress {
                name: "Ada Collector".to_string(),
                address: "1 Gallery Row".to_string(),
                city: "Portland".to_string(),
                state: "OR".to_string(),
                zip_code: "97201".to_string(),
            },
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_place_order() {
        let catalog = Catalog::builtin();
        let cart = CartStore::new();
        cart.add_item(catalog.find_by_id(1).unwrap(), 1);
        cart.add_item(catalog.find_by_id(8).unwrap(), 2);

        let config = StorefrontConfig::default();
        let confirmation = place_order(&cart, &config, details()).await.unwrap();

        assert!(confirmation.order_number.starts_with("AG-"));
        assert_eq!(confirmation.order_number.len(), 9);
        assert_eq!(confirmation.total, Money::from_major(5200));
        assert_eq!(confirmation.items.len(), 2);

        // Placing an order reads the cart but does not empty it.
        assert_eq!(cart.total_count(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_place_order_empty_cart() {
        let err = place_order(&CartStore::new(), &StorefrontConfig::default(), details())
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::BusinessLogic);
    }

    #[tokio::test(start_paused = true)]
    async fn test_place_order_bad_form() {
        let cart = CartStore::new();
        cart.add_item(Catalog::builtin().find_by_id(2).unwrap(), 1);

        let mut form = details();
        form.email = "not-an-email".to_string();
        let err = place_order(&cart, &StorefrontConfig::default(), form)
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[tokio::test(start_paused = true)]
    async fn test_track_order() {
        let config = StorefrontConfig::default();

        let started = tokio::time::Instant::now();
        let order = track_order(&config, "  ag-123456 ").await.unwrap();
        assert!(started.elapsed() >= config.tracking_delay());
        assert_eq!(order.status, OrderStatus::InTransit);
        assert_eq!(order.tracking_number, "TRK789012345");

        assert!(track_order(&config, "123456").await.is_ok());
        assert!(track_order(&config, " 123456 ")
            .await
            .unwrap_err()
            .is_not_found());
        assert!(track_order(&config, "AG-000001")
            .await
            .unwrap_err()
            .is_not_found());
    }

    #[tokio::test(start_paused = true)]
    async fn test_track_blank_order_number_skips_delay() {
        let config = StorefrontConfig::default();
        let started = tokio::time::Instant::now();

        let err = track_order(&config, "   ").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(started.elapsed(), std::time::Duration::ZERO);
    }
}
