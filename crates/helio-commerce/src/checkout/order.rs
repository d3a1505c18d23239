//! Order types and submission.

use crate::cart::{CartLedger, CartLineItem, KitPart};
use crate::error::CommerceError;
use crate::ids::{LineItemId, OrderId, ProductId, SessionId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Order status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderStatus {
    /// Order placed, awaiting confirmation from the payment collaborator.
    #[default]
    Pending,
    /// Order confirmed.
    Confirmed,
    /// Order cancelled.
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    /// Check if the order is in a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Confirmed | OrderStatus::Cancelled)
    }
}

/// A line of an order: a denormalized copy of a cart line at submission time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderLineItem {
    /// The cart line this was copied from.
    pub line_item_id: LineItemId,
    /// Product the line was built from.
    pub product_id: ProductId,
    /// Product name at submission time.
    pub name: String,
    /// Quantity ordered.
    pub quantity: i64,
    /// Unit price at submission time.
    pub unit_price: Money,
    /// Line total: unit price times quantity.
    pub total: Money,
    /// Kit parts, for composite lines.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parts: Vec<KitPart>,
}

impl From<&CartLineItem> for OrderLineItem {
    fn from(line: &CartLineItem) -> Self {
        Self {
            line_item_id: line.id.clone(),
            product_id: line.product_id.clone(),
            name: line.name.clone(),
            quantity: line.quantity,
            unit_price: line.unit_price,
            total: line.line_total(),
            parts: line.parts.clone(),
        }
    }
}

/// An order built from the cart ledger.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    /// Unique order identifier.
    pub id: OrderId,
    /// Session the order was placed from.
    pub session_id: SessionId,
    /// Ordered lines, in cart display order.
    pub lines: Vec<OrderLineItem>,
    /// Total item count at submission time.
    pub item_count: i64,
    /// Order total at submission time.
    pub total: Money,
    /// Order status.
    pub status: OrderStatus,
    /// Unix timestamp of creation.
    pub created_at: i64,
}

impl Order {
    /// Build an order from the ledger's current state without mutating it.
    pub fn from_ledger(ledger: &CartLedger, session_id: SessionId) -> Self {
        let totals = ledger.totals();
        Self {
            id: OrderId::generate(),
            session_id,
            lines: ledger.items().iter().map(OrderLineItem::from).collect(),
            item_count: totals.item_count,
            total: totals.subtotal,
            status: OrderStatus::Pending,
            created_at: current_timestamp(),
        }
    }
}

/// Submit the cart as an order.
///
/// Builds the order from the ledger's line items and totals, then clears the
/// ledger. An empty cart is rejected.
pub fn submit_order(
    ledger: &mut CartLedger,
    session_id: SessionId,
) -> Result<Order, CommerceError> {
    if ledger.is_empty() {
        return Err(CommerceError::EmptyCart);
    }
    let order = Order::from_ledger(ledger, session_id);
    ledger.clear();
    tracing::info!(order_id = %order.id, total = %order.total, "order submitted");
    Ok(order)
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Category, Product};
    use crate::money::Currency;
    use helio_store::MemoryStore;
    use std::sync::Arc;

    fn ledger_with_items() -> CartLedger {
        let mut ledger = CartLedger::load(Arc::new(MemoryStore::new()));
        let p = Product::new(
            "inv-5000",
            "INV-5000",
            "5kW Hybrid Inverter",
            Category::Inverter,
            Money::new(89999, Currency::USD),
        );
        ledger.add_simple_item(&p);
        ledger.add_simple_item(&p);
        ledger
    }

    #[test]
    fn test_submit_copies_lines_and_totals() {
        let mut ledger = ledger_with_items();
        let order = submit_order(&mut ledger, SessionId::new("sess-1")).unwrap();

        assert_eq!(order.lines.len(), 1);
        assert_eq!(order.lines[0].quantity, 2);
        assert_eq!(order.item_count, 2);
        assert_eq!(order.total.amount_cents, 179998);
        assert_eq!(order.status, OrderStatus::Pending);
    }

    #[test]
    fn test_submit_clears_the_cart() {
        let mut ledger = ledger_with_items();
        submit_order(&mut ledger, SessionId::new("sess-1")).unwrap();
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_submit_empty_cart_is_rejected() {
        let mut ledger = CartLedger::load(Arc::new(MemoryStore::new()));
        let result = submit_order(&mut ledger, SessionId::new("sess-1"));
        assert!(matches!(result, Err(CommerceError::EmptyCart)));
    }

    #[test]
    fn test_kit_parts_survive_into_order() {
        let mut ledger = CartLedger::load(Arc::new(MemoryStore::new()));
        let listing = Product::new(
            "kit-home-5kw",
            "KIT-5KW",
            "5kW Home Kit",
            Category::Kit,
            Money::new(0, Currency::USD),
        );
        ledger.add_kit(
            &listing,
            vec![
                KitPart::new("a", "Part A", Money::new(5000, Currency::USD), 1),
                KitPart::new("b", "Part B", Money::new(3000, Currency::USD), 2),
            ],
        );

        let order = submit_order(&mut ledger, SessionId::new("sess-1")).unwrap();
        assert_eq!(order.lines[0].parts.len(), 2);
        assert_eq!(order.lines[0].unit_price.amount_cents, 11000);
    }

    #[test]
    fn test_status_terminality() {
        assert!(!OrderStatus::Pending.is_terminal());
        assert!(OrderStatus::Confirmed.is_terminal());
        assert!(OrderStatus::Cancelled.is_terminal());
    }
}
