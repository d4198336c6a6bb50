//! Raw payload shapes emitted by the orders and catalog services.
//!
//! The services have drifted over time, so several payloads exist in more
//! than one shape. Everything here is deserialization-only and gets
//! normalized in [`super::conversions`] before the rest of the crate sees it.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Deserialize;

use ovenside_core::ProductId;

/// Product as the catalog service serializes it.
#[derive(Debug, Clone, Deserialize)]
pub struct WireProduct {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub cost: Decimal,
    #[serde(default)]
    pub preview_link: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: WireProductKind,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub additions: WireAdditions,
    #[serde(default)]
    pub characteristics: WireCharacteristics,
}

/// Product type field. Unknown values deserialize to `Other`.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum WireProductKind {
    Pizza,
    Snack,
    Drink,
    #[serde(other)]
    #[default]
    Other,
}

/// Toppings arrive either as a plain name list (older catalog rows) or as
/// a name-to-selected map (rows the orders service has already normalized).
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum WireAdditions {
    List(Vec<String>),
    Map(BTreeMap<String, bool>),
}

impl Default for WireAdditions {
    fn default() -> Self {
        Self::Map(BTreeMap::new())
    }
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct WireCharacteristics {
    #[serde(default)]
    pub protein: Decimal,
    #[serde(default)]
    pub fat: Decimal,
    #[serde(default)]
    pub carbohydrates: Decimal,
    #[serde(default)]
    pub calories: Decimal,
}

/// One cart entry: either wrapped with quantity and `product_info`, or a
/// bare product (implied quantity 1).
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum WireCartItem {
    Wrapped {
        #[serde(default)]
        product_id: Option<ProductId>,
        #[serde(default)]
        quantity: Option<u32>,
        product_info: WireProduct,
    },
    Bare(WireProduct),
}

/// Cart snapshot. The orders service has emitted three shapes across its
/// versions: a bare line array, `{cart, total}`, and `{products, total}`.
/// Anything else normalizes to an empty cart.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum WireCart {
    Keyed {
        cart: Vec<WireCartItem>,
        #[serde(default)]
        total: Option<Decimal>,
    },
    Legacy {
        products: Vec<WireCartItem>,
        #[serde(default)]
        total: Option<Decimal>,
    },
    Lines(Vec<WireCartItem>),
    Other(serde_json::Value),
}

/// `GET /get_products` response.
#[derive(Debug, Clone, Deserialize)]
pub struct WireProducts {
    #[serde(default)]
    pub products: Vec<WireProduct>,
}

/// One `GET /get_favorites` entry.
#[derive(Debug, Clone, Deserialize)]
pub struct WireFavorite {
    pub product_info: WireProduct,
}

/// `GET /get_recent` response.
#[derive(Debug, Clone, Deserialize)]
pub struct WireRecent {
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub products: Vec<WireRecentEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WireRecentEntry {
    pub product_info: WireProduct,
    #[serde(default)]
    pub score: i64,
}

/// `POST /make_order` response. The receipt arrives nested under `data`
/// next to a status message; a bare receipt body is tolerated as well.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum WireReceiptEnvelope {
    Enveloped { data: WireOrderReceipt },
    Bare(WireOrderReceipt),
}

/// The order receipt itself.
#[derive(Debug, Clone, Deserialize)]
pub struct WireOrderReceipt {
    pub order_id: i64,
    pub order_time: String,
    pub payment_sum: Decimal,
    pub payment_currency: String,
    #[serde(default)]
    pub paid: bool,
}
