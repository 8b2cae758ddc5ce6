//! # Cart State
//!
//! Manages the shopping cart and the cart panel's open/closed flag.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart State Operations                                │
//! │                                                                         │
//! │  View Action              Command                 Cart State Change     │
//! │  ───────────              ───────                 ─────────────────     │
//! │                                                                         │
//! │  "Add to Cart" ──────────► add_to_cart() ───────► qty += n or push     │
//! │                                                                         │
//! │  + / - buttons ──────────► increment/decrement ─► qty ± 1 (0 removes)  │
//! │                                                                         │
//! │  Click Remove ───────────► remove_from_cart() ──► items.retain(..)     │
//! │                                                                         │
//! │  Bag icon / backdrop ────► toggle_cart() ───────► is_open = !is_open   │
//! │                                                                         │
//! │  Every change publishes a CartSnapshot to subscribers (watch channel). │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - At most one line item per artwork id
//! - Every line item has quantity >= 1
//!
//! Every operation here is total: unknown ids are no-ops, and anything that
//! would leave a quantity at or below zero removes the line instead.

use std::sync::{Arc, Mutex, PoisonError};

use chrono::{DateTime, Utc};
use gallery_core::{Artwork, Category, Money, OrderLine};
use serde::{Deserialize, Serialize};
use tokio::sync::watch;

/// An item in the shopping cart.
///
/// ## Snapshot Pattern
/// Title, artist, image and price are copied from the artwork when the item
/// is added. The line is not live-linked to the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Artwork id; the line's identity
    pub artwork_id: u32,

    pub title: String,

    pub artist: String,

    /// Cover image at time of adding (empty if the artwork had none)
    pub image: String,

    pub category: Category,

    /// Price at time of adding (frozen)
    pub unit_price: Money,

    /// Always >= 1
    pub quantity: i64,

    /// When this item was added to cart
    pub added_at: DateTime<Utc>,
}

impl CartItem {
    /// Creates a new cart item from an artwork and quantity.
    pub fn from_artwork(artwork: &Artwork, quantity: i64) -> Self {
        CartItem {
            artwork_id: artwork.id,
            title: artwork.title.clone(),
            artist: artwork.artist.clone(),
            image: artwork.cover_image().unwrap_or_default().to_string(),
            category: artwork.category,
            unit_price: artwork.price,
            quantity,
            added_at: Utc::now(),
        }
    }

    /// Unit price × quantity.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }
}

/// The shopping cart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Line items in insertion order
    items: Vec<CartItem>,

    /// Whether the cart panel is showing
    is_open: bool,
}

impl Cart {
    /// Creates a new empty, closed cart.
    pub fn new() -> Self {
        Cart::default()
    }

    /// Adds an artwork to the cart or increases its quantity if already present.
    ///
    /// ## Behavior
    /// - Already in cart: quantity += `quantity`
    /// - Not in cart: appended with `quantity`
    /// - A resulting quantity <= 0 removes the line (or never adds it)
    ///
    /// Stock is not checked; `in_stock` is informational.
    pub fn add_item(&mut self, artwork: &Artwork, quantity: i64) {
        if let Some(item) = self.items.iter().find(|i| i.artwork_id == artwork.id) {
            let new_qty = item.quantity.saturating_add(quantity);
            self.set_quantity(artwork.id, new_qty);
            return;
        }

        if quantity > 0 {
            self.items.push(CartItem::from_artwork(artwork, quantity));
        }
    }

    /// Removes the line for `artwork_id`. Returns whether anything was removed.
    pub fn remove_item(&mut self, artwork_id: u32) -> bool {
        let initial_len = self.items.len();
        self.items.retain(|i| i.artwork_id != artwork_id);
        self.items.len() != initial_len
    }

    /// Sets the quantity of a line.
    ///
    /// ## Behavior
    /// - `quantity <= 0`: same as `remove_item`
    /// - Unknown id: no-op
    /// - No upper bound
    pub fn set_quantity(&mut self, artwork_id: u32, quantity: i64) {
        if quantity <= 0 {
            self.remove_item(artwork_id);
            return;
        }

        if let Some(item) = self.items.iter_mut().find(|i| i.artwork_id == artwork_id) {
            item.quantity = quantity;
        }
    }

    /// The panel's "+" button.
    pub fn increment(&mut self, artwork_id: u32) {
        if let Some(qty) = self.quantity_of(artwork_id) {
            self.set_quantity(artwork_id, qty.saturating_add(1));
        }
    }

    /// The panel's "-" button; going below 1 removes the line.
    pub fn decrement(&mut self, artwork_id: u32) {
        if let Some(qty) = self.quantity_of(artwork_id) {
            self.set_quantity(artwork_id, qty - 1);
        }
    }

    /// Clears all items from the cart. The panel flag is left alone.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Flips the panel open/closed. Returns the new state.
    pub fn toggle_visibility(&mut self) -> bool {
        self.is_open = !self.is_open;
        self.is_open
    }

    pub fn set_open(&mut self, open: bool) {
        self.is_open = open;
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Line items in insertion order.
    #[inline]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn get(&self, artwork_id: u32) -> Option<&CartItem> {
        self.items.iter().find(|i| i.artwork_id == artwork_id)
    }

    fn quantity_of(&self, artwork_id: u32) -> Option<i64> {
        self.get(artwork_id).map(|i| i.quantity)
    }

    /// Returns the number of distinct artworks in the cart.
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    /// Sum of quantities; the navbar badge. Saturates rather than overflowing.
    pub fn total_count(&self) -> i64 {
        self.items
            .iter()
            .fold(0_i64, |acc, i| acc.saturating_add(i.quantity))
    }

    /// Sum of price × quantity over every line.
    pub fn total_price(&self) -> Money {
        self.items.iter().map(CartItem::line_total).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Freezes the cart into order lines for checkout.
    pub fn order_lines(&self) -> Vec<OrderLine> {
        self.items
            .iter()
            .map(|i| OrderLine {
                artwork_id: i.artwork_id,
                title: i.title.clone(),
                artist: i.artist.clone(),
                unit_price: i.unit_price,
                quantity: i.quantity,
            })
            .collect()
    }
}

/// Cart totals, computed on read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub line_count: usize,
    pub total_count: i64,
    pub total_price: Money,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            line_count: cart.line_count(),
            total_count: cart.total_count(),
            total_price: cart.total_price(),
        }
    }
}

/// What subscribers and commands see: items, totals and the panel flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartSnapshot {
    pub items: Vec<CartItem>,
    pub totals: CartTotals,
    pub is_open: bool,
}

impl From<&Cart> for CartSnapshot {
    fn from(cart: &Cart) -> Self {
        CartSnapshot {
            items: cart.items.clone(),
            totals: CartTotals::from(cart),
            is_open: cart.is_open,
        }
    }
}

/// Shared handle to the session's cart.
///
/// ## Thread Safety
/// `Arc<Mutex<Cart>>` so the handle can be cloned into every view that
/// needs it. Operations are short and almost all of them write, so a plain
/// Mutex is enough.
///
/// ## Change Notification
/// Every mutation that actually changes the cart publishes a fresh
/// `CartSnapshot` on a `watch` channel. Views hold a receiver from
/// [`CartStore::subscribe`] and re-render when it reports a change.
#[derive(Debug, Clone)]
pub struct CartStore {
    cart: Arc<Mutex<Cart>>,
    changes: Arc<watch::Sender<CartSnapshot>>,
}

impl CartStore {
    /// Creates a new empty cart store.
    pub fn new() -> Self {
        let cart = Cart::new();
        let (changes, _) = watch::channel(CartSnapshot::from(&cart));
        CartStore {
            cart: Arc::new(Mutex::new(cart)),
            changes: Arc::new(changes),
        }
    }

    /// Executes a function with read access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let totals = cart_store.with_cart(|cart| CartTotals::from(cart));
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self.cart.lock().unwrap_or_else(PoisonError::into_inner);
        f(&cart)
    }

    /// Executes a function with write access to the cart, then notifies
    /// subscribers if the cart changed.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// cart_store.with_cart_mut(|cart| cart.add_item(&artwork, 1));
    /// ```
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let mut cart = self.cart.lock().unwrap_or_else(PoisonError::into_inner);
        let result = f(&mut cart);
        let next = CartSnapshot::from(&*cart);
        self.changes.send_if_modified(|current| {
            if *current == next {
                false
            } else {
                *current = next;
                true
            }
        });
        result
    }

    /// Receiver that observes every cart change.
    pub fn subscribe(&self) -> watch::Receiver<CartSnapshot> {
        self.changes.subscribe()
    }

    /// Current items, totals and panel flag.
    pub fn snapshot(&self) -> CartSnapshot {
        self.with_cart(|c| CartSnapshot::from(c))
    }

    pub fn add_item(&self, artwork: &Artwork, quantity: i64) {
        self.with_cart_mut(|c| c.add_item(artwork, quantity));
    }

    pub fn remove_item(&self, artwork_id: u32) -> bool {
        self.with_cart_mut(|c| c.remove_item(artwork_id))
    }

    pub fn set_quantity(&self, artwork_id: u32, quantity: i64) {
        self.with_cart_mut(|c| c.set_quantity(artwork_id, quantity));
    }

    pub fn toggle_visibility(&self) -> bool {
        self.with_cart_mut(Cart::toggle_visibility)
    }

    pub fn total_price(&self) -> Money {
        self.with_cart(Cart::total_price)
    }

    pub fn total_count(&self) -> i64 {
        self.with_cart(Cart::total_count)
    }

    pub fn items(&self) -> Vec<CartItem> {
        self.with_cart(|c| c.items().to_vec())
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gallery_core::Catalog;

    fn artwork(id: u32) -> Artwork {
        Catalog::builtin().find_by_id(id).cloned().unwrap()
    }

    #[test]
    fn test_cart_add_item() {
        let mut cart = Cart::new();
        cart.add_item(&artwork(1), 1);

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.total_count(), 1);
        assert_eq!(cart.total_price(), Money::from_major(2400));

        let item = cart.get(1).unwrap();
        assert_eq!(item.title, "Urban Serenity");
        assert_eq!(item.artist, "Maya Chen");
        assert!(item.image.contains("photo-1541961017774"));
    }

    #[test]
    fn test_cart_add_same_artwork_increases_quantity() {
        let mut cart = Cart::new();
        let urban = artwork(1);

        cart.add_item(&urban, 1);
        cart.add_item(&urban, 2);

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.get(1).unwrap().quantity, 3);
        assert_eq!(cart.total_price(), Money::from_major(7200));
    }

    #[test]
    fn test_cart_keeps_insertion_order() {
        let mut cart = Cart::new();
        cart.add_item(&artwork(5), 1);
        cart.add_item(&artwork(2), 1);
        cart.add_item(&artwork(5), 1);
        let ids: Vec<u32> = cart.items().iter().map(|i| i.artwork_id).collect();
        assert_eq!(ids, vec![5, 2]);
    }

    #[test]
    fn test_cart_add_non_positive_quantity() {
        let mut cart = Cart::new();
        cart.add_item(&artwork(1), 0);
        cart.add_item(&artwork(2), -3);
        assert!(cart.is_empty());

        cart.add_item(&artwork(1), 2);
        cart.add_item(&artwork(1), -2);
        assert!(cart.get(1).is_none());
    }

    #[test]
    fn test_cart_price_is_frozen() {
        let mut cart = Cart::new();
        let mut urban = artwork(1);
        cart.add_item(&urban, 1);

        urban.price = Money::from_major(9999);
        cart.add_item(&urban, 1);

        assert_eq!(cart.get(1).unwrap().unit_price, Money::from_major(2400));
        assert_eq!(cart.total_price(), Money::from_major(4800));
    }

    #[test]
    fn test_set_quantity_zero_removes() {
        let mut cart = Cart::new();
        cart.add_item(&artwork(1), 4);
        cart.add_item(&artwork(3), 1);

        cart.set_quantity(1, 0);
        assert!(cart.get(1).is_none());
        assert_eq!(cart.line_count(), 1);

        cart.set_quantity(3, -5);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_unknown_id_is_noop() {
        let mut cart = Cart::new();
        cart.add_item(&artwork(1), 1);
        cart.set_quantity(42, 3);
        assert_eq!(cart.line_count(), 1);
        assert!(!cart.remove_item(42));
    }

    #[test]
    fn test_increment_decrement() {
        let mut cart = Cart::new();
        cart.add_item(&artwork(8), 1);

        cart.increment(8);
        assert_eq!(cart.get(8).unwrap().quantity, 2);

        cart.decrement(8);
        cart.decrement(8);
        assert!(cart.get(8).is_none());

        cart.increment(8);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_toggle_visibility_leaves_contents() {
        let mut cart = Cart::new();
        cart.add_item(&artwork(1), 1);
        assert!(!cart.is_open());
        assert!(cart.toggle_visibility());
        assert!(!cart.toggle_visibility());
        assert_eq!(cart.total_count(), 1);
    }

    #[test]
    fn test_cart_clear() {
        let mut cart = Cart::new();
        cart.add_item(&artwork(1), 2);
        cart.set_open(true);
        cart.clear();
        assert!(cart.is_empty());
        assert!(cart.is_open());
    }

    #[test]
    fn test_order_lines() {
        let mut cart = Cart::new();
        cart.add_item(&artwork(1), 1);
        cart.add_item(&artwork(3), 2);
        let lines = cart.order_lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].line_total(), Money::from_major(2400));
    }

    #[test]
    fn test_store_notifies_subscribers_on_change() {
        let store = CartStore::new();
        let mut rx = store.subscribe();
        assert!(!rx.has_changed().unwrap());

        store.add_item(&artwork(1), 1);
        assert!(rx.has_changed().unwrap());
        let snapshot = rx.borrow_and_update().clone();
        assert_eq!(snapshot.totals.total_count, 1);
        assert_eq!(snapshot.totals.total_price, Money::from_major(2400));
    }

    #[test]
    fn test_store_skips_notification_for_noop() {
        let store = CartStore::new();
        let mut rx = store.subscribe();

        store.remove_item(7);
        store.set_quantity(7, 3);
        assert!(!rx.has_changed().unwrap());

        store.toggle_visibility();
        assert!(rx.has_changed().unwrap());
        assert!(rx.borrow_and_update().is_open);
    }

    #[test]
    fn test_huge_quantities_saturate_totals() {
        let store = CartStore::new();
        store.add_item(&artwork(1), 1);
        store.set_quantity(1, 100_000_000_000_000);
        assert_eq!(store.total_price().cents(), i64::MAX);

        store.add_item(&artwork(3), i64::MAX);
        store.add_item(&artwork(8), 1);
        assert_eq!(store.total_count(), i64::MAX);
        assert_eq!(store.total_price().cents(), i64::MAX);

        // The store keeps working after the saturated totals.
        store.remove_item(1);
        store.remove_item(3);
        let snapshot = store.snapshot();
        assert_eq!(snapshot.totals.total_count, 1);
        assert_eq!(snapshot.totals.total_price, Money::from_major(1400));
    }

    #[test]
    fn test_store_clones_share_state() {
        let store = CartStore::new();
        let view_handle = store.clone();
        store.add_item(&artwork(2), 2);
        assert_eq!(view_handle.total_count(), 2);
        assert_eq!(view_handle.items().len(), 1);
    }
}
