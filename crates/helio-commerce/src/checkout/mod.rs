//! Checkout module.
//!
//! The order-submission collaborator: reads the ledger's line items and
//! totals, builds an order, and clears the ledger on success.

mod order;

pub use order::{submit_order, Order, OrderLineItem, OrderStatus};
