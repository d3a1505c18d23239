//! Saved product lists: wishlist and comparison list.

use crate::ids::ProductId;
use helio_store::KvStore;
use std::sync::Arc;

/// Fixed storage key for the wishlist snapshot.
pub const WISHLIST_KEY: &str = "helio:wishlist";

/// Fixed storage key for the comparison list snapshot.
pub const COMPARE_KEY: &str = "helio:compare";

/// An ordered, deduplicated list of saved products.
///
/// Follows the cart ledger's discipline: loaded once at construction, mirrored
/// to the store after every mutation, and tolerant of an absent or malformed
/// snapshot (falls back to empty).
pub struct SavedList {
    key: &'static str,
    products: Vec<ProductId>,
    store: Arc<dyn KvStore>,
}

impl SavedList {
    /// Load the session's wishlist.
    pub fn wishlist(store: Arc<dyn KvStore>) -> Self {
        Self::load(WISHLIST_KEY, store)
    }

    /// Load the session's comparison list.
    pub fn compare_list(store: Arc<dyn KvStore>) -> Self {
        Self::load(COMPARE_KEY, store)
    }

    fn load(key: &'static str, store: Arc<dyn KvStore>) -> Self {
        let products = match store.get(key) {
            Ok(Some(json)) => match serde_json::from_str::<Vec<ProductId>>(&json) {
                Ok(products) => products,
                Err(e) => {
                    tracing::warn!(key, error = %e, "discarding malformed list snapshot");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(key, error = %e, "list snapshot unavailable, starting empty");
                Vec::new()
            }
        };
        Self {
            key,
            products,
            store,
        }
    }

    /// Saved products in insertion order.
    pub fn products(&self) -> &[ProductId] {
        &self.products
    }

    /// Check if a product is saved.
    pub fn contains(&self, product_id: &ProductId) -> bool {
        self.products.contains(product_id)
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Save a product. Already-saved products are not duplicated.
    pub fn add(&mut self, product_id: ProductId) {
        if self.products.contains(&product_id) {
            return;
        }
        self.products.push(product_id);
        self.persist();
    }

    /// Remove a product. No-op if absent.
    pub fn remove(&mut self, product_id: &ProductId) {
        let len_before = self.products.len();
        self.products.retain(|p| p != product_id);
        if self.products.len() < len_before {
            self.persist();
        }
    }

    /// Toggle a product's presence. Returns `true` if it is saved afterwards.
    pub fn toggle(&mut self, product_id: ProductId) -> bool {
        if self.contains(&product_id) {
            self.remove(&product_id);
            false
        } else {
            self.add(product_id);
            true
        }
    }

    /// Empty the list. Idempotent.
    pub fn clear(&mut self) {
        if self.products.is_empty() {
            return;
        }
        self.products.clear();
        self.persist();
    }

    fn persist(&self) {
        let json = match serde_json::to_string(&self.products) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!(key = self.key, error = %e, "failed to serialize list snapshot");
                return;
            }
        };
        if let Err(e) = self.store.set(self.key, &json) {
            tracing::warn!(key = self.key, error = %e, "failed to persist list snapshot");
        }
    }
}
