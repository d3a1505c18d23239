//! Shopping cart module.
//!
//! Contains the cart ledger, its line items (plain products and composite
//! kits), and the derived totals.

mod item;
mod ledger;
mod totals;

pub use item::{CartLineItem, KitPart};
pub use ledger::{CartLedger, CART_KEY};
pub use totals::CartTotals;
