//! # Cart Commands
//!
//! Commands for cart manipulation.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │  Empty   │────►│ In Cart  │────►│ Checkout │────►│ Confirmed│       │
//! │  │  Cart    │     │          │     │   Form   │     │  Order   │       │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘       │
//! │                        │                 │                              │
//! │                   add_to_cart       place_order                        │
//! │                   update_item       (order.rs)                         │
//! │                   remove_item                                           │
//! │                        │                                                │
//! │                        ▼                                                │
//! │                   clear_cart ──────────────────────►                   │
//! │                                                      (back to empty)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Apart from `add_to_cart` (which must find the artwork first) these never
//! fail. Unknown ids leave the cart as it was.

use gallery_core::{Catalog, CoreError};
use tracing::debug;

use crate::error::ApiError;
use crate::state::{CartSnapshot, CartStore};

/// Gets the current cart contents, totals and panel state.
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Cart Panel (slides in from the right)                                 │
/// │                                                                         │
/// │  ┌────────────────────────────────────────────────────────────────┐    │
/// │  │  Shopping Cart                                        3 items  │    │
/// │  ├────────────────────────────────────────────────────────────────┤    │
/// │  │  Urban Serenity  Maya Chen      [-] 2 [+]         $4,800       │    │
/// │  │  Ocean Depths    Thomas Anderson [-] 1 [+]        $1,400       │    │
/// │  ├────────────────────────────────────────────────────────────────┤    │
/// │  │  Total                                            $6,200       │    │
/// │  │  [ Proceed to Checkout ]                                       │    │
/// │  └────────────────────────────────────────────────────────────────┘    │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn get_cart(cart: &CartStore) -> CartSnapshot {
    debug!("get_cart command");
    cart.snapshot()
}

/// Adds an artwork to the cart.
///
/// ## Behavior
/// - Already in cart: quantity increases
/// - Not in cart: added as new item
/// - Price is "frozen" at time of adding
/// - Resulting quantity <= 0: the line is removed (or never added)
///
/// ## Arguments
/// * `artwork_id` - Catalog id to add
/// * `quantity` - Quantity to add (default: 1)
///
/// ## Errors
/// `NOT_FOUND` if the id is not in the catalog
pub fn add_to_cart(
    catalog: &Catalog,
    cart: &CartStore,
    artwork_id: u32,
    quantity: Option<i64>,
) -> Result<CartSnapshot, ApiError> {
    let quantity = quantity.unwrap_or(1);
    debug!(artwork_id, quantity, "add_to_cart command");

    let artwork = catalog
        .find_by_id(artwork_id)
        .ok_or(CoreError::ArtworkNotFound(artwork_id))?;

    Ok(cart.with_cart_mut(|c| {
        c.add_item(artwork, quantity);
        CartSnapshot::from(&*c)
    }))
}

/// Sets the quantity of an item in the cart.
///
/// ## Behavior
/// - Quantity <= 0: removes the item
/// - Unknown id: no change
pub fn update_cart_item(cart: &CartStore, artwork_id: u32, quantity: i64) -> CartSnapshot {
    debug!(artwork_id, quantity, "update_cart_item command");

    cart.with_cart_mut(|c| {
        c.set_quantity(artwork_id, quantity);
        CartSnapshot::from(&*c)
    })
}

/// Removes an item from the cart.
pub fn remove_from_cart(cart: &CartStore, artwork_id: u32) -> CartSnapshot {
    debug!(artwork_id, "remove_from_cart command");

    cart.with_cart_mut(|c| {
        c.remove_item(artwork_id);
        CartSnapshot::from(&*c)
    })
}

/// The panel's "+" button.
pub fn increment_cart_item(cart: &CartStore, artwork_id: u32) -> CartSnapshot {
    debug!(artwork_id, "increment_cart_item command");

    cart.with_cart_mut(|c| {
        c.increment(artwork_id);
        CartSnapshot::from(&*c)
    })
}

/// The panel's "-" button. At quantity 1 this removes the line.
pub fn decrement_cart_item(cart: &CartStore, artwork_id: u32) -> CartSnapshot {
    debug!(artwork_id, "decrement_cart_item command");

    cart.with_cart_mut(|c| {
        c.decrement(artwork_id);
        CartSnapshot::from(&*c)
    })
}

/// Clears all items from the cart.
///
/// ## When Used
/// - Shopper empties the bag
/// - After an order is confirmed, if the view wants a fresh cart
pub fn clear_cart(cart: &CartStore) -> CartSnapshot {
    debug!("clear_cart command");

    cart.with_cart_mut(|c| {
        c.clear();
        CartSnapshot::from(&*c)
    })
}

/// Opens or closes the cart panel. Contents are untouched.
pub fn toggle_cart(cart: &CartStore) -> CartSnapshot {
    debug!("toggle_cart command");

    cart.with_cart_mut(|c| {
        c.toggle_visibility();
        CartSnapshot::from(&*c)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use gallery_core::Money;

    #[test]
    fn test_add_to_cart_defaults_to_one() {
        let catalog = Catalog::builtin();
        let cart = CartStore::new();

        let snapshot = add_to_cart(&catalog, &cart, 1, None).unwrap();
        assert_eq!(snapshot.totals.total_count, 1);

        let snapshot = add_to_cart(&catalog, &cart, 1, Some(2)).unwrap();
        assert_eq!(snapshot.items.len(), 1);
        assert_eq!(snapshot.items[0].quantity, 3);
        assert_eq!(snapshot.totals.total_price, Money::from_major(7200));
    }

    #[test]
    fn test_add_unknown_artwork() {
        let cart = CartStore::new();
        assert!(add_to_cart(&Catalog::builtin(), &cart, 404, None)
            .unwrap_err()
            .is_not_found());
        assert!(get_cart(&cart).items.is_empty());
    }

    #[test]
    fn test_panel_buttons() {
        let catalog = Catalog::builtin();
        let cart = CartStore::new();
        add_to_cart(&catalog, &cart, 8, None).unwrap();

        assert_eq!(increment_cart_item(&cart, 8).items[0].quantity, 2);
        assert_eq!(decrement_cart_item(&cart, 8).items[0].quantity, 1);
        assert!(decrement_cart_item(&cart, 8).items.is_empty());
    }

    #[test]
    fn test_update_and_remove() {
        let catalog = Catalog::builtin();
        let cart = CartStore::new();
        add_to_cart(&catalog, &cart, 1, None).unwrap();
        add_to_cart(&catalog, &cart, 3, None).unwrap();

        let snapshot = update_cart_item(&cart, 3, 4);
        assert_eq!(snapshot.totals.total_count, 5);

        let snapshot = update_cart_item(&cart, 3, 0);
        assert_eq!(snapshot.totals.line_count, 1);

        let snapshot = remove_from_cart(&cart, 1);
        assert!(snapshot.items.is_empty());
        assert_eq!(snapshot.totals.total_price, Money::zero());
    }

    #[test]
    fn test_toggle_and_clear() {
        let catalog = Catalog::builtin();
        let cart = CartStore::new();
        add_to_cart(&catalog, &cart, 2, None).unwrap();

        assert!(toggle_cart(&cart).is_open);
        let snapshot = clear_cart(&cart);
        assert!(snapshot.items.is_empty());
        assert!(snapshot.is_open);
        assert!(!toggle_cart(&cart).is_open);
    }
}
