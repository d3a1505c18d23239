//! Cart and kit composition domain logic for the Helio storefront.
//!
//! Helio sells renewable-energy hardware: inverters, batteries, solar panels,
//! charging stations, and configurable bundles ("kits") assembled from
//! swappable components. This crate owns the session-scoped state behind that
//! storefront:
//!
//! - **Catalog**: product snapshots, categories, kit component options
//! - **Cart**: the ledger of line items (simple products and composite kits)
//!   with parts-derived pricing and durable persistence
//! - **Checkout**: order submission built from the ledger
//! - **Session**: wishlist and comparison list, persisted the same way
//!
//! # Example
//!
//! ```rust,ignore
//! use helio_commerce::prelude::*;
//! use helio_store::MemoryStore;
//! use std::sync::Arc;
//!
//! let store = Arc::new(MemoryStore::new());
//! let mut ledger = CartLedger::load(store);
//!
//! ledger.add_simple_item(&inverter);
//! let kit_line = ledger.add_kit(&starter_kit, parts);
//!
//! let totals = ledger.totals();
//! println!("{} items, {}", totals.item_count, totals.subtotal.display());
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod session;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Category, ComponentOption, Product};

    // Cart
    pub use crate::cart::{CartLedger, CartLineItem, CartTotals, KitPart, CART_KEY};

    // Checkout
    pub use crate::checkout::{submit_order, Order, OrderLineItem, OrderStatus};

    // Session
    pub use crate::session::{SavedList, COMPARE_KEY, WISHLIST_KEY};
}
