//! The cart ledger: session-scoped cart state and its persistence discipline.

use crate::cart::{CartLineItem, CartTotals, KitPart};
use crate::catalog::Product;
use crate::ids::{KitPartId, LineItemId};
use crate::money::{Currency, Money};
use helio_store::KvStore;
use std::sync::Arc;

/// Fixed storage key for the cart snapshot. Sibling session domains
/// (wishlist, comparison list) use their own keys.
pub const CART_KEY: &str = "helio:cart";

/// The authoritative in-memory cart state for one shopping session.
///
/// The ledger is constructed with an injected store handle and is the single
/// writer of its state: operations take `&mut self`, apply atomically, and
/// mirror the full snapshot to the store afterwards. The store is a
/// best-effort mirror only; if a write fails the in-memory state stays
/// authoritative for the rest of the session.
///
/// Misuse (removing a line or part that isn't there, requantifying a missing
/// line, part operations on a plain line) is a no-op rather than an error.
pub struct CartLedger {
    items: Vec<CartLineItem>,
    currency: Currency,
    store: Arc<dyn KvStore>,
}

impl CartLedger {
    /// Load the ledger for this session from the store.
    ///
    /// Reads the snapshot under [`CART_KEY`] exactly once. An absent or
    /// malformed snapshot yields an empty ledger; this never fails.
    pub fn load(store: Arc<dyn KvStore>) -> Self {
        let items = match store.get(CART_KEY) {
            Ok(Some(json)) => match serde_json::from_str::<Vec<CartLineItem>>(&json) {
                Ok(items) => items,
                Err(e) => {
                    tracing::warn!(error = %e, "discarding malformed cart snapshot");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "cart snapshot unavailable, starting empty");
                Vec::new()
            }
        };
        Self {
            items,
            currency: Currency::default(),
            store,
        }
    }

    /// Line items in insertion order. Insertion order is the display order.
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    /// Get a line item by id.
    pub fn get_item(&self, line_item_id: &LineItemId) -> Option<&CartLineItem> {
        self.items.iter().find(|i| &i.id == line_item_id)
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add a plain product to the cart.
    ///
    /// If a plain line for the same product already exists its quantity is
    /// incremented by 1; otherwise a new line with quantity 1 is appended,
    /// snapshotting the product's display attributes.
    pub fn add_simple_item(&mut self, product: &Product) {
        if let Some(existing) = self
            .items
            .iter_mut()
            .find(|i| !i.is_kit() && i.product_id == product.id)
        {
            existing.quantity += 1;
        } else {
            self.items.push(CartLineItem::simple(product));
        }
        self.persist();
    }

    /// Add a configured kit to the cart.
    ///
    /// Always appends a new line with a freshly minted id; two adds of an
    /// identically configured kit produce two distinct rows. Returns the new
    /// line's id so the caller can drive part operations against it.
    pub fn add_kit(&mut self, product: &Product, parts: Vec<KitPart>) -> LineItemId {
        let line = CartLineItem::kit(product, parts);
        let id = line.id.clone();
        self.items.push(line);
        self.persist();
        id
    }

    /// Remove a line item. No-op if absent.
    pub fn remove_item(&mut self, line_item_id: &LineItemId) {
        let len_before = self.items.len();
        self.items.retain(|i| &i.id != line_item_id);
        if self.items.len() < len_before {
            self.persist();
        }
    }

    /// Remove a part from a kit line.
    ///
    /// The line's unit price drops by the removed part's contribution,
    /// floored at zero. No-op on plain lines and missing parts.
    pub fn remove_part(&mut self, line_item_id: &LineItemId, part_id: &KitPartId) {
        let Some(item) = self.items.iter_mut().find(|i| &i.id == line_item_id) else {
            return;
        };
        if !item.is_kit() {
            return;
        }
        let Some(pos) = item.parts.iter().position(|p| &p.id == part_id) else {
            return;
        };
        let removed = item.parts.remove(pos);
        item.unit_price = (item.unit_price - removed.subtotal()).clamp_non_negative();
        self.persist();
    }

    /// Adjust a part's quantity by a signed delta, floored at 1.
    ///
    /// The owning line's unit price moves by the quantity change times the
    /// part's unit price, floored at zero. Other parts are untouched.
    pub fn update_part_quantity(
        &mut self,
        line_item_id: &LineItemId,
        part_id: &KitPartId,
        delta: i64,
    ) {
        let Some(item) = self.items.iter_mut().find(|i| &i.id == line_item_id) else {
            return;
        };
        let Some(part) = item.parts.iter_mut().find(|p| &p.id == part_id) else {
            return;
        };
        let new_quantity = (part.quantity.saturating_add(delta)).max(1);
        let change = new_quantity - part.quantity;
        if change == 0 {
            return;
        }
        part.quantity = new_quantity;
        let price_delta = part.unit_price.multiply(change);
        item.unit_price = (item.unit_price + price_delta).clamp_non_negative();
        self.persist();
    }

    /// Adjust a line item's quantity by a signed delta, floored at 1.
    ///
    /// Unit price is untouched: for plain lines it is fixed at add time, for
    /// composites it is governed solely by part operations.
    pub fn update_quantity(&mut self, line_item_id: &LineItemId, delta: i64) {
        let Some(item) = self.items.iter_mut().find(|i| &i.id == line_item_id) else {
            return;
        };
        let new_quantity = (item.quantity.saturating_add(delta)).max(1);
        if new_quantity == item.quantity {
            return;
        }
        item.quantity = new_quantity;
        self.persist();
    }

    /// Empty the ledger. Idempotent; used after successful checkout.
    pub fn clear(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.items.clear();
        self.persist();
    }

    /// Total number of items: sum of line quantities.
    ///
    /// Recomputed on every call; totals are never stored.
    pub fn total_item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Total price: sum of unit price times quantity over all lines.
    pub fn total_price(&self) -> Money {
        self.items
            .iter()
            .fold(Money::zero(self.currency), |acc, i| acc + i.line_total())
    }

    /// Totals projection for the checkout collaborator.
    pub fn totals(&self) -> CartTotals {
        CartTotals {
            item_count: self.total_item_count(),
            subtotal: self.total_price(),
        }
    }

    /// Mirror the full snapshot to the store.
    ///
    /// Best-effort: a failed write is logged and swallowed, leaving the
    /// in-memory state authoritative until the next successful write.
    fn persist(&self) {
        let json = match serde_json::to_string(&self.items) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!(error = %e, "failed to serialize cart snapshot");
                return;
            }
        };
        if let Err(e) = self.store.set(CART_KEY, &json) {
            tracing::warn!(error = %e, "failed to persist cart snapshot");
        }
    }
}
