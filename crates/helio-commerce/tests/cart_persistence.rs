//! Integration tests: cart ledger persistence through the store.

use helio_commerce::prelude::*;
use helio_store::{KvStore, MemoryStore};
use std::sync::Arc;

fn inverter() -> Product {
    Product::new(
        "inv-5000",
        "INV-5000",
        "5kW Hybrid Inverter",
        Category::Inverter,
        Money::new(89999, Currency::USD),
    )
}

fn kit_listing() -> Product {
    Product::new(
        "kit-home-5kw",
        "KIT-5KW",
        "5kW Home Kit",
        Category::Kit,
        Money::new(0, Currency::USD),
    )
}

fn kit_parts() -> Vec<KitPart> {
    vec![
        KitPart::new("inv-5000", "5kW Hybrid Inverter", Money::new(89999, Currency::USD), 1),
        KitPart::new("pan-450w", "450W Panel", Money::new(18999, Currency::USD), 8),
        KitPart::new("bat-200ah", "200Ah Battery", Money::new(64999, Currency::USD), 2),
    ]
}

#[test]
fn reload_observes_identical_ledger() {
    let store = Arc::new(MemoryStore::new());

    let kit_id = {
        let mut cart = CartLedger::load(store.clone());
        cart.add_simple_item(&inverter());
        cart.add_simple_item(&inverter());
        let kit_id = cart.add_kit(&kit_listing(), kit_parts());
        cart.update_part_quantity(&kit_id, &KitPartId::new("pan-450w"), 2);
        kit_id
    };

    let reloaded = CartLedger::load(store);

    assert_eq!(reloaded.items().len(), 2);
    assert_eq!(reloaded.total_item_count(), 3);

    let simple = &reloaded.items()[0];
    assert_eq!(simple.quantity, 2);
    assert_eq!(simple.unit_price.amount_cents, 89999);

    let kit = reloaded.get_item(&kit_id).expect("kit line survives reload");
    assert_eq!(kit.parts.len(), 3);
    let panel = kit.parts.iter().find(|p| p.id.as_str() == "pan-450w").unwrap();
    assert_eq!(panel.quantity, 10);
    assert_eq!(kit.unit_price, kit.parts_subtotal());
}

#[test]
fn reload_preserves_display_order() {
    let store = Arc::new(MemoryStore::new());
    {
        let mut cart = CartLedger::load(store.clone());
        cart.add_kit(&kit_listing(), kit_parts());
        cart.add_simple_item(&inverter());
    }

    let reloaded = CartLedger::load(store);
    assert!(reloaded.items()[0].is_kit());
    assert!(!reloaded.items()[1].is_kit());
}

#[test]
fn snapshot_tracks_every_mutation() {
    let store = Arc::new(MemoryStore::new());
    let mut cart = CartLedger::load(store.clone());

    cart.add_simple_item(&inverter());
    let after_add = store.get(CART_KEY).unwrap().unwrap();

    let line_id = cart.items()[0].id.clone();
    cart.update_quantity(&line_id, 1);
    let after_update = store.get(CART_KEY).unwrap().unwrap();
    assert_ne!(after_add, after_update);

    cart.clear();
    let after_clear = store.get(CART_KEY).unwrap().unwrap();
    assert_eq!(after_clear, "[]");
}

#[test]
fn checkout_clears_durable_state_too() {
    let store = Arc::new(MemoryStore::new());
    let mut cart = CartLedger::load(store.clone());
    cart.add_simple_item(&inverter());

    let order = submit_order(&mut cart, SessionId::new("sess-7")).unwrap();
    assert_eq!(order.total.amount_cents, 89999);

    let reloaded = CartLedger::load(store);
    assert!(reloaded.is_empty());
}

#[test]
fn cart_and_lists_do_not_interfere() {
    let store = Arc::new(MemoryStore::new());

    let mut cart = CartLedger::load(store.clone());
    let mut wishlist = SavedList::wishlist(store.clone());

    cart.add_simple_item(&inverter());
    wishlist.add(ProductId::new("bat-200ah"));

    assert!(store.get(CART_KEY).unwrap().is_some());
    assert!(store.get(WISHLIST_KEY).unwrap().is_some());

    cart.clear();
    assert!(wishlist.contains(&ProductId::new("bat-200ah")));
}
