//! Durable key-value session storage for Helio Commerce.
//!
//! Provides the persistence sink the storefront uses for its per-session
//! state: the cart ledger, the wishlist, the comparison list, and the
//! language preference each live under their own fixed key.
//!
//! # Example
//!
//! ```rust,ignore
//! use helio_store::{KvStore, MemoryStore};
//! use std::sync::Arc;
//!
//! let store: Arc<dyn KvStore> = Arc::new(MemoryStore::new());
//! store.set("helio:cart", "[]")?;
//! let snapshot = store.get("helio:cart")?;
//! ```

mod error;
mod kv;

pub use error::StoreError;
pub use kv::{KvStore, MemoryStore};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{store_key, KvStore, MemoryStore, StoreError};
}
