//! Session-scoped saved lists.
//!
//! Wishlist and comparison list follow the cart's persistence pattern, each
//! under its own fixed key.

mod lists;

pub use lists::{SavedList, COMPARE_KEY, WISHLIST_KEY};
