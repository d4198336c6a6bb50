//! Domain types for the backend REST services.
//!
//! These are the normalized shapes the rest of the storefront works with.
//! The raw payloads the services actually emit live in [`super::wire`] and
//! are converted here by [`super::conversions`].

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;

use ovenside_core::{OrderId, Price, ProductId};

/// Fixed menu categories.
///
/// The catalog may grow product types the storefront does not know about;
/// those are tolerated on the wire but excluded from the menu grids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductKind {
    Pizza,
    Snack,
    Drink,
    /// Unrecognized product type.
    Other,
}

/// Nutrition facts per product.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Characteristics {
    pub protein: Decimal,
    pub fat: Decimal,
    pub carbohydrates: Decimal,
    pub calories: Decimal,
}

/// A catalog product.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub cost: Decimal,
    /// Image file name under the product image root.
    pub preview_link: Option<String>,
    pub kind: ProductKind,
    pub ingredients: Vec<String>,
    /// Topping name to selected state. A wire-level list of names is
    /// normalized to a map with every topping unselected.
    pub additions: BTreeMap<String, bool>,
    pub characteristics: Characteristics,
}

/// One cart line.
///
/// `quantity` is always at least 1; a line leaves the cart rather than
/// existing at zero.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub product_id: ProductId,
    pub quantity: u32,
    pub product: Product,
}

impl CartLine {
    /// Line total: unit cost times quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        (Price::from(self.product.cost) * self.quantity).amount
    }
}

/// A normalized cart snapshot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartSnapshot {
    pub lines: Vec<CartLine>,
    pub total: Decimal,
}

impl CartSnapshot {
    /// Sum of quantities across all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Recompute the total from the lines.
    #[must_use]
    pub fn computed_total(&self) -> Decimal {
        self.lines
            .iter()
            .map(|line| Price::from(line.line_total()))
            .sum::<Price>()
            .amount
    }
}

/// Delivery address collected at checkout.
///
/// `street` and `apartment` are mandatory; the rest is optional detail
/// passed through to the courier.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct Address {
    pub street: String,
    pub city: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apartment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entrance: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub floor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// Receipt returned by the orders service after a successful order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderReceipt {
    pub order_id: OrderId,
    pub order_time: String,
    pub payment_sum: Decimal,
    pub payment_currency: String,
    pub paid: bool,
}

/// One entry of the recently/popularly ordered board.
#[derive(Debug, Clone, PartialEq)]
pub struct RecentEntry {
    pub product: Product,
    /// Popularity score assigned by the catalog service.
    pub score: i64,
}

/// The recently/popularly ordered board, in server-provided order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecentBoard {
    pub count: u32,
    pub entries: Vec<RecentEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::dec;

    fn product(id: i64, cost: Decimal) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("product-{id}"),
            description: String::new(),
            cost,
            preview_link: None,
            kind: ProductKind::Pizza,
            ingredients: Vec::new(),
            additions: BTreeMap::new(),
            characteristics: Characteristics::default(),
        }
    }

    #[test]
    fn test_line_total() {
        let line = CartLine {
            product_id: ProductId::new(7),
            quantity: 2,
            product: product(7, dec!(10)),
        };
        assert_eq!(line.line_total(), dec!(20));
    }

    #[test]
    fn test_snapshot_item_count_and_total() {
        let snapshot = CartSnapshot {
            lines: vec![
                CartLine {
                    product_id: ProductId::new(1),
                    quantity: 2,
                    product: product(1, dec!(10)),
                },
                CartLine {
                    product_id: ProductId::new(2),
                    quantity: 1,
                    product: product(2, dec!(5.5)),
                },
            ],
            total: dec!(25.5),
        };
        assert_eq!(snapshot.item_count(), 3);
        assert_eq!(snapshot.computed_total(), dec!(25.5));
        assert!(!snapshot.is_empty());
    }

    #[test]
    fn test_address_serializes_without_empty_optionals() {
        let address = Address {
            street: "Baker St 221b".to_string(),
            city: "London".to_string(),
            apartment: Some("4".to_string()),
            ..Address::default()
        };
        let json = serde_json::to_value(&address).unwrap();
        assert_eq!(json["street"], "Baker St 221b");
        assert_eq!(json["apartment"], "4");
        assert!(json.get("entrance").is_none());
        assert!(json.get("comment").is_none());
    }
}
