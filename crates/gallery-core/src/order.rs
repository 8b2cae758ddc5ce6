//! # Orders (mock)
//!
//! Checkout confirmation and order tracking. Nothing is charged and nothing
//! is stored: a confirmation is derived from the cart's contents at the
//! moment of checkout, and tracking only knows one demo order.
//!
//! ## Checkout Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Cart (read once) ──► Vec<OrderLine>                                    │
//! │                            │                                            │
//! │  CheckoutDetails ──────────┤  validate email + shipping                 │
//! │                            ▼                                            │
//! │  OrderConfirmation::build(lines, details, now, delivery_days)           │
//! │     order_number       = "AG-" + last 6 digits of unix millis           │
//! │     estimated_delivery = now + delivery_days, "Friday, January 12, 2025"│
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The clock is always passed in; this module never reads it.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::validation::{validate_email, validate_order_number, validate_required, ValidationResult, MAX_FIELD_LEN};

/// Prefix of every order number.
pub const ORDER_NUMBER_PREFIX: &str = "AG-";

/// The one order the tracking page knows about.
pub const DEMO_ORDER_NUMBER: &str = "AG-123456";

// =============================================================================
// Checkout
// =============================================================================

/// Where the artwork ships.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddress {
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

impl ShippingAddress {
    pub fn validate(&self) -> ValidationResult<()> {
        validate_required("name", &self.name, MAX_FIELD_LEN)?;
        validate_required("address", &self.address, MAX_FIELD_LEN)?;
        validate_required("city", &self.city, MAX_FIELD_LEN)?;
        validate_required("state", &self.state, MAX_FIELD_LEN)?;
        validate_required("zip code", &self.zip_code, 16)?;
        Ok(())
    }
}

impl fmt::Display for ShippingAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {} {}",
            self.address, self.city, self.state, self.zip_code
        )
    }
}

/// What the checkout form collects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutDetails {
    pub email: String,
    pub shipping: ShippingAddress,
}

impl CheckoutDetails {
    pub fn validate(&self) -> ValidationResult<()> {
        validate_email(&self.email)?;
        self.shipping.validate()
    }
}

/// One purchased artwork, frozen at checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub artwork_id: u32,
    pub title: String,
    pub artist: String,
    pub unit_price: Money,
    pub quantity: i64,
}

impl OrderLine {
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }
}

/// The "thank you" page's order summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderConfirmation {
    pub order_number: String,
    pub email: String,
    pub items: Vec<OrderLine>,
    pub total: Money,
    pub shipping: ShippingAddress,
    pub estimated_delivery: String,
    #[ts(as = "String")]
    pub placed_at: DateTime<Utc>,
}

impl OrderConfirmation {
    /// Builds the confirmation for `lines`.
    ///
    /// ## Errors
    /// - `EmptyCart` when there is nothing to buy
    /// - `Validation` when the checkout form is incomplete
    pub fn build(
        lines: Vec<OrderLine>,
        details: CheckoutDetails,
        now: DateTime<Utc>,
        delivery_days: u32,
    ) -> CoreResult<Self> {
        if lines.is_empty() {
            return Err(CoreError::EmptyCart);
        }
        details.validate()?;

        let total = lines.iter().map(OrderLine::line_total).sum();
        Ok(OrderConfirmation {
            order_number: order_number_at(now),
            email: details.email.trim().to_string(),
            items: lines,
            total,
            shipping: details.shipping,
            estimated_delivery: estimate_delivery(now, delivery_days),
            placed_at: now,
        })
    }
}

/// `AG-` followed by the last six digits of the millisecond timestamp.
pub fn order_number_at(now: DateTime<Utc>) -> String {
    let millis = now.timestamp_millis().rem_euclid(1_000_000);
    format!("{}{:06}", ORDER_NUMBER_PREFIX, millis)
}

/// `now + days`, written out as "Friday, January 12, 2025".
pub fn estimate_delivery(now: DateTime<Utc>, days: u32) -> String {
    (now + Duration::days(i64::from(days)))
        .format("%A, %B %-d, %Y")
        .to_string()
}

// =============================================================================
// Tracking
// =============================================================================

/// Overall shipment status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    Processing,
    Shipped,
    InTransit,
    Delivered,
}

impl OrderStatus {
    pub const fn label(&self) -> &'static str {
        match self {
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::InTransit => "In Transit",
            OrderStatus::Delivered => "Delivered",
        }
    }
}

/// A step on the tracking timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum TrackingStage {
    Confirmed,
    Processing,
    Shipped,
    InTransit,
    Delivered,
}

impl TrackingStage {
    pub const fn label(&self) -> &'static str {
        match self {
            TrackingStage::Confirmed => "Confirmed",
            TrackingStage::Processing => "Processing",
            TrackingStage::Shipped => "Shipped",
            TrackingStage::InTransit => "In Transit",
            TrackingStage::Delivered => "Delivered",
        }
    }

    /// Whether this stage ends the timeline.
    pub const fn is_final(&self) -> bool {
        matches!(self, TrackingStage::Delivered)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct TrackingEvent {
    pub date: String,
    pub time: String,
    pub stage: TrackingStage,
    pub location: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct TrackedItem {
    pub title: String,
    pub artist: String,
    pub image: String,
    pub price: Money,
}

/// Everything the tracking page shows for one order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct TrackedOrder {
    pub order_number: String,
    pub status: OrderStatus,
    pub tracking_number: String,
    pub estimated_delivery: String,
    pub shipping_address: String,
    pub items: Vec<TrackedItem>,
    /// Newest first.
    pub events: Vec<TrackingEvent>,
}

/// Looks up an order by the number a shopper typed.
///
/// Accepts anything containing `ag-123456` (any case) or exactly `123456`.
/// The bare-digits form is compared as typed, whitespace included.
///
/// ## Errors
/// - `Validation` for blank input
/// - `OrderNotFound` for anything else
pub fn lookup_order(input: &str) -> CoreResult<TrackedOrder> {
    let number = validate_order_number(input)?;
    if is_demo_order(input) {
        Ok(demo_order())
    } else {
        Err(CoreError::OrderNotFound(number.to_string()))
    }
}

fn is_demo_order(input: &str) -> bool {
    let digits = &DEMO_ORDER_NUMBER[ORDER_NUMBER_PREFIX.len()..];
    input
        .to_ascii_lowercase()
        .contains(&DEMO_ORDER_NUMBER.to_ascii_lowercase())
        || input == digits
}

fn event(
    date: &str,
    time: &str,
    stage: TrackingStage,
    location: &str,
    description: &str,
) -> TrackingEvent {
    TrackingEvent {
        date: date.to_string(),
        time: time.to_string(),
        stage,
        location: location.to_string(),
        description: description.to_string(),
    }
}

fn demo_order() -> TrackedOrder {
    TrackedOrder {
        order_number: DEMO_ORDER_NUMBER.to_string(),
        status: OrderStatus::InTransit,
        tracking_number: "TRK789012345".to_string(),
        estimated_delivery: "Friday, January 12, 2025".to_string(),
        shipping_address: "123 Art Street, San Francisco, CA 94102".to_string(),
        items: vec![TrackedItem {
            title: "Urban Serenity".to_string(),
            artist: "Maya Chen".to_string(),
            image: "https://images.pexels.com/photos/1099680/pexels-photo-1099680.jpeg?auto=compress&cs=tinysrgb&w=400"
                .to_string(),
            price: Money::from_major(2400),
        }],
        events: vec![
            event(
                "Jan 8, 2025",
                "2:30 PM",
                TrackingStage::InTransit,
                "Oakland, CA",
                "Package is on the way to the next facility",
            ),
            event(
                "Jan 7, 2025",
                "11:45 AM",
                TrackingStage::Shipped,
                "San Francisco, CA",
                "Package has been picked up and is on its way",
            ),
            event(
                "Jan 6, 2025",
                "3:15 PM",
                TrackingStage::Processing,
                "Artisan Gallery",
                "Order is being carefully packaged",
            ),
            event(
                "Jan 5, 2025",
                "10:20 AM",
                TrackingStage::Confirmed,
                "Artisan Gallery",
                "Order confirmed and payment processed",
            ),
        ],
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
