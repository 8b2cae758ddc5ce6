//! # Property-Based Tests
//!
//! Cart and gallery-filter invariants over random operation sequences.

use gallery_core::{Artwork, ArtworkQuery, Catalog, Category, CategoryFilter, Money};
use gallery_storefront::state::Cart;
use proptest::collection::vec;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Add(u32, i64),
    Remove(u32),
    SetQuantity(u32, i64),
    Increment(u32),
    Decrement(u32),
    Toggle,
}

fn op() -> impl Strategy<Value = Op> {
    // Ids 1..=10 include two the catalog does not have.
    prop_oneof![
        (1u32..=10, -3i64..6).prop_map(|(id, q)| Op::Add(id, q)),
        (1u32..=10).prop_map(Op::Remove),
        (1u32..=10, -2i64..8).prop_map(|(id, q)| Op::SetQuantity(id, q)),
        (1u32..=10).prop_map(Op::Increment),
        (1u32..=10).prop_map(Op::Decrement),
        Just(Op::Toggle),
    ]
}

fn apply(cart: &mut Cart, catalog: &Catalog, op: &Op) {
    match *op {
        Op::Add(id, qty) => {
            if let Some(artwork) = catalog.find_by_id(id) {
                cart.add_item(artwork, qty);
            }
        }
        Op::Remove(id) => {
            cart.remove_item(id);
        }
        Op::SetQuantity(id, qty) => cart.set_quantity(id, qty),
        Op::Increment(id) => cart.increment(id),
        Op::Decrement(id) => cart.decrement(id),
        Op::Toggle => {
            cart.toggle_visibility();
        }
    }
}

fn ids(artworks: &[&Artwork]) -> Vec<u32> {
    artworks.iter().map(|a| a.id).collect()
}

proptest! {
    /// Repeated adds of one artwork collapse into a single line whose
    /// quantity is the sum of the amounts added.
    #[test]
    fn repeated_adds_accumulate(amounts in vec(1i64..20, 1..20), id in 1u32..=8) {
        let catalog = Catalog::builtin();
        let artwork = catalog.find_by_id(id).unwrap();
        let mut cart = Cart::new();

        for qty in &amounts {
            cart.add_item(artwork, *qty);
        }

        let expected: i64 = amounts.iter().sum();
        prop_assert_eq!(cart.line_count(), 1);
        prop_assert_eq!(cart.get(id).map(|i| i.quantity), Some(expected));
        prop_assert_eq!(cart.total_price(), artwork.price.multiply_quantity(expected));
    }

    /// Totals always equal the sums over the current lines, and every line
    /// is unique and positive.
    #[test]
    fn totals_match_lines_after_any_interleaving(ops in vec(op(), 0..60)) {
        let catalog = Catalog::builtin();
        let mut cart = Cart::new();

        for op in &ops {
            apply(&mut cart, &catalog, op);

            let price: Money = cart.items().iter().map(|i| i.unit_price * i.quantity).sum();
            let count: i64 = cart.items().iter().map(|i| i.quantity).sum();
            prop_assert_eq!(cart.total_price(), price);
            prop_assert_eq!(cart.total_count(), count);

            prop_assert!(cart.items().iter().all(|i| i.quantity >= 1));
            let mut seen: Vec<u32> = cart.items().iter().map(|i| i.artwork_id).collect();
            seen.sort_unstable();
            seen.dedup();
            prop_assert_eq!(seen.len(), cart.line_count());
        }
    }

    /// Removing a line leaves no trace of it, whatever its quantity was.
    #[test]
    fn remove_leaves_no_line(ops in vec(op(), 0..30), id in 1u32..=8) {
        let catalog = Catalog::builtin();
        let mut cart = Cart::new();
        for op in &ops {
            apply(&mut cart, &catalog, op);
        }

        cart.remove_item(id);
        prop_assert!(cart.get(id).is_none());
    }

    /// Setting a quantity to zero is the same as removing the line.
    #[test]
    fn set_quantity_zero_is_remove(ops in vec(op(), 0..30), id in 1u32..=10) {
        let catalog = Catalog::builtin();
        let mut by_zero = Cart::new();
        for op in &ops {
            apply(&mut by_zero, &catalog, op);
        }
        let mut by_remove = by_zero.clone();

        by_zero.set_quantity(id, 0);
        by_remove.remove_item(id);
        prop_assert_eq!(by_zero, by_remove);
    }

    /// A single-category filter with blank search keeps exactly that
    /// category, in catalog order.
    #[test]
    fn category_filter_preserves_order(index in 0usize..Category::ALL.len()) {
        let catalog = Catalog::builtin();
        let category = Category::ALL[index];

        let expected: Vec<u32> = catalog
            .all()
            .iter()
            .filter(|a| a.category == category)
            .map(|a| a.id)
            .collect();
        prop_assert_eq!(ids(&ArtworkQuery::new(category, "").apply(&catalog)), expected);
    }

    /// Search ignores case.
    #[test]
    fn search_ignores_case(search in "[a-zA-Z ]{0,6}") {
        let catalog = Catalog::builtin();
        let lower = ArtworkQuery::new(CategoryFilter::All, search.to_lowercase());
        let upper = ArtworkQuery::new(CategoryFilter::All, search.to_uppercase());
        prop_assert_eq!(ids(&lower.apply(&catalog)), ids(&upper.apply(&catalog)));
    }
}

#[test]
fn unfiltered_gallery_is_whole_catalog() {
    let catalog = Catalog::builtin();
    let all: Vec<u32> = catalog.all().iter().map(|a| a.id).collect();
    assert_eq!(ids(&ArtworkQuery::all().apply(&catalog)), all);
    assert_eq!(all, vec![1, 2, 3, 4, 5, 6, 7, 8]);
}
