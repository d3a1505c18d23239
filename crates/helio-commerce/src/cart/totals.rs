//! Derived cart totals.

use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Aggregate totals over the current cart state.
///
/// Always built fresh by [`CartLedger::totals`](crate::cart::CartLedger::totals);
/// never stored alongside the line items, so it cannot drift from them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CartTotals {
    /// Sum of line quantities.
    pub item_count: i64,
    /// Sum of unit price times quantity over all lines.
    pub subtotal: Money,
}

impl CartTotals {
    /// Check if the totals describe an empty cart.
    pub fn is_empty(&self) -> bool {
        self.item_count == 0
    }
}
