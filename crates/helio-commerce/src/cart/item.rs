//! Cart line item and kit part types.

use crate::catalog::{Category, ComponentOption, Product};
use crate::ids::{KitPartId, LineItemId, ProductId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// One row in the cart.
///
/// A line item is either a plain product or a composite kit, discriminated by
/// whether it carries parts. Display attributes are snapshots captured at add
/// time, not live references into the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLineItem {
    /// Unique line identifier. For plain items this equals the product id;
    /// composite items mint a fresh one so two kits of the same listing can
    /// coexist as separate rows.
    pub id: LineItemId,
    /// The product this line was created from.
    pub product_id: ProductId,
    /// Product name at add time.
    pub name: String,
    /// Category at add time.
    pub category: Category,
    /// Primary image reference at add time.
    pub image: Option<String>,
    /// Quantity of this line. Always >= 1.
    pub quantity: i64,
    /// Unit price. For composites this is the parts-derived sum.
    pub unit_price: Money,
    /// Kit parts, in configuration order. Empty for plain items.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parts: Vec<KitPart>,
}

impl CartLineItem {
    /// Create a plain line item from a product snapshot, quantity 1.
    pub fn simple(product: &Product) -> Self {
        Self {
            id: LineItemId::new(product.id.as_str()),
            product_id: product.id.clone(),
            name: product.name.clone(),
            category: product.category,
            image: product.primary_image().map(str::to_string),
            quantity: 1,
            unit_price: product.price,
            parts: Vec::new(),
        }
    }

    /// Create a composite line item from a kit listing and its configured
    /// parts, quantity 1.
    ///
    /// The line id is freshly minted so repeated adds of the same kit never
    /// collapse into one row. The unit price is taken from the parts sum
    /// rather than the listing price, so it is consistent with the parts from
    /// the first observation onwards.
    pub fn kit(product: &Product, parts: Vec<KitPart>) -> Self {
        let unit_price = KitPart::subtotal_of(&parts, product.price.currency);
        Self {
            id: LineItemId::derived_from(&product.id),
            product_id: product.id.clone(),
            name: product.name.clone(),
            category: product.category,
            image: product.primary_image().map(str::to_string),
            quantity: 1,
            unit_price,
            parts,
        }
    }

    /// Check if this line is a composite kit.
    pub fn is_kit(&self) -> bool {
        !self.parts.is_empty()
    }

    /// Line total: unit price times quantity.
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply(self.quantity)
    }

    /// Sum of (part price x part quantity) over the current parts.
    pub fn parts_subtotal(&self) -> Money {
        KitPart::subtotal_of(&self.parts, self.unit_price.currency)
    }
}

/// A sub-component of a kit line item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KitPart {
    /// Component identifier.
    pub id: KitPartId,
    /// Display name.
    pub name: String,
    /// Unit price of the component.
    pub unit_price: Money,
    /// Quantity of this component within one kit. Always >= 1.
    pub quantity: i64,
    /// Advisory lower bound, carried for the quantity controls.
    pub min_quantity: Option<i64>,
    /// Advisory upper bound, carried for the quantity controls.
    pub max_quantity: Option<i64>,
}

impl KitPart {
    /// Create a part with the given quantity.
    pub fn new(
        id: impl Into<KitPartId>,
        name: impl Into<String>,
        unit_price: Money,
        quantity: i64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            unit_price,
            quantity: quantity.max(1),
            min_quantity: None,
            max_quantity: None,
        }
    }

    /// Build a part from a catalog component option at its default quantity.
    pub fn from_option(option: &ComponentOption) -> Self {
        Self {
            id: option.id.clone(),
            name: option.name.clone(),
            unit_price: option.price,
            quantity: option.default_quantity.max(1),
            min_quantity: option.min_quantity,
            max_quantity: option.max_quantity,
        }
    }

    /// Price contribution of this part: unit price times quantity.
    pub fn subtotal(&self) -> Money {
        self.unit_price.multiply(self.quantity)
    }

    fn subtotal_of(parts: &[KitPart], currency: crate::money::Currency) -> Money {
        parts
            .iter()
            .fold(Money::zero(currency), |acc, p| acc + p.subtotal())
            .clamp_non_negative()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn battery() -> Product {
        Product::new(
            "bat-200ah",
            "BAT-200",
            "200Ah LiFePO4 Battery",
            Category::Battery,
            Money::new(64999, Currency::USD),
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

    #[test]
    fn test_simple_line_uses_product_id() {
        let line = CartLineItem::simple(&battery());
        assert_eq!(line.id.as_str(), "bat-200ah");
        assert_eq!(line.quantity, 1);
        assert!(!line.is_kit());
        assert_eq!(line.unit_price.amount_cents, 64999);
    }

    #[test]
    fn test_kit_lines_get_distinct_ids() {
        let listing = kit_listing();
        let parts = vec![KitPart::new(
            "inv-5000",
            "5kW Hybrid Inverter",
            Money::new(89999, Currency::USD),
            1,
        )];
        let a = CartLineItem::kit(&listing, parts.clone());
        let b = CartLineItem::kit(&listing, parts);
        assert_ne!(a.id, b.id);
        assert_eq!(a.product_id, b.product_id);
    }

    #[test]
    fn test_kit_price_is_parts_sum() {
        let parts = vec![
            KitPart::new("a", "Part A", Money::new(5000, Currency::USD), 1),
            KitPart::new("b", "Part B", Money::new(3000, Currency::USD), 2),
        ];
        let line = CartLineItem::kit(&kit_listing(), parts);
        assert_eq!(line.unit_price.amount_cents, 11000);
        assert_eq!(line.parts_subtotal(), line.unit_price);
    }

    #[test]
    fn test_part_quantity_floor_at_construction() {
        let part = KitPart::new("a", "Part A", Money::new(100, Currency::USD), -5);
        assert_eq!(part.quantity, 1);
    }

    #[test]
    fn test_line_item_serde_round_trip() {
        let parts = vec![
            KitPart::new("a", "Part A", Money::new(5000, Currency::USD), 1),
            KitPart::new("b", "Part B", Money::new(3000, Currency::USD), 2),
        ];
        let line = CartLineItem::kit(&kit_listing(), parts);

        let json = serde_json::to_string(&line).unwrap();
        let back: CartLineItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back, line);
    }

    #[test]
    fn test_simple_line_serde_omits_parts() {
        let line = CartLineItem::simple(&battery());
        let json = serde_json::to_string(&line).unwrap();
        assert!(!json.contains("\"parts\""));

        let back: CartLineItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back, line);
    }
}
