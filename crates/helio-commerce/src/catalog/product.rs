//! Product snapshot types.
//!
//! Products are owned by the remote catalog service; the cart only ever sees
//! immutable snapshots of them. Kit component options are typed structured
//! fields, not serialized sub-documents.

use crate::catalog::Category;
use crate::ids::{KitPartId, ProductId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product as fetched from the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Stock keeping unit.
    pub sku: String,
    /// Localized product name.
    pub name: String,
    /// Full description.
    pub description: Option<String>,
    /// Category this product is listed under.
    pub category: Category,
    /// Unit price in the reference currency. Never negative.
    pub price: Money,
    /// Units in stock. `None` means unknown/back-orderable.
    pub stock: Option<i64>,
    /// Image references.
    pub images: Vec<String>,
    /// Swappable components, for kit listings. Empty for plain products.
    pub component_options: Vec<ComponentOption>,
}

impl Product {
    /// Create a plain product snapshot.
    pub fn new(
        id: impl Into<ProductId>,
        sku: impl Into<String>,
        name: impl Into<String>,
        category: Category,
        price: Money,
    ) -> Self {
        Self {
            id: id.into(),
            sku: sku.into(),
            name: name.into(),
            description: None,
            category,
            price,
            stock: None,
            images: Vec::new(),
            component_options: Vec::new(),
        }
    }

    /// Check if this listing is a configurable kit.
    pub fn is_kit(&self) -> bool {
        !self.component_options.is_empty()
    }

    /// Check if the product can be added to a cart right now.
    ///
    /// Unknown stock counts as back-orderable.
    pub fn is_available(&self) -> bool {
        match self.stock {
            Some(n) => n > 0,
            None => true,
        }
    }

    /// Primary image reference, if any.
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

/// One swappable component slot choice on a kit listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ComponentOption {
    /// Identifier of the component.
    pub id: KitPartId,
    /// Display name.
    pub name: String,
    /// Unit price of the component.
    pub price: Money,
    /// Quantity preselected when the kit is first configured.
    pub default_quantity: i64,
    /// Advisory lower bound for the quantity controls.
    pub min_quantity: Option<i64>,
    /// Advisory upper bound for the quantity controls.
    pub max_quantity: Option<i64>,
}

impl ComponentOption {
    /// Create a component option with a default quantity of 1 and no bounds.
    pub fn new(id: impl Into<KitPartId>, name: impl Into<String>, price: Money) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            default_quantity: 1,
            min_quantity: None,
            max_quantity: None,
        }
    }
}
