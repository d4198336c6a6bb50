//! Conversions from wire payloads to domain types.

use std::collections::BTreeMap;

use ovenside_core::OrderId;

use super::types::{
    CartLine, CartSnapshot, Characteristics, OrderReceipt, Product, ProductKind, RecentBoard,
    RecentEntry,
};
use super::wire::{
    WireAdditions, WireCart, WireCartItem, WireCharacteristics, WireFavorite, WireProduct,
    WireProductKind, WireReceiptEnvelope, WireRecent,
};

pub fn convert_product(product: WireProduct) -> Product {
    Product {
        id: product.id,
        name: product.name,
        description: product.description,
        cost: product.cost,
        preview_link: product.preview_link,
        kind: convert_kind(product.kind),
        ingredients: product.ingredients,
        additions: convert_additions(product.additions),
        characteristics: convert_characteristics(product.characteristics),
    }
}

const fn convert_kind(kind: WireProductKind) -> ProductKind {
    match kind {
        WireProductKind::Pizza => ProductKind::Pizza,
        WireProductKind::Snack => ProductKind::Snack,
        WireProductKind::Drink => ProductKind::Drink,
        WireProductKind::Other => ProductKind::Other,
    }
}

/// A bare topping list means nothing has been selected yet.
fn convert_additions(additions: WireAdditions) -> BTreeMap<String, bool> {
    match additions {
        WireAdditions::List(names) => names.into_iter().map(|name| (name, false)).collect(),
        WireAdditions::Map(map) => map,
    }
}

const fn convert_characteristics(c: WireCharacteristics) -> Characteristics {
    Characteristics {
        protein: c.protein,
        fat: c.fat,
        carbohydrates: c.carbohydrates,
        calories: c.calories,
    }
}

/// A cart line from any of the item shapes. Quantity defaults to 1 and
/// never normalizes below it.
fn convert_cart_item(item: WireCartItem) -> CartLine {
    match item {
        WireCartItem::Wrapped {
            product_id,
            quantity,
            product_info,
        } => {
            let product = convert_product(product_info);
            CartLine {
                product_id: product_id.unwrap_or(product.id),
                quantity: quantity.unwrap_or(1).max(1),
                product,
            }
        }
        WireCartItem::Bare(product_info) => {
            let product = convert_product(product_info);
            CartLine {
                product_id: product.id,
                quantity: 1,
                product,
            }
        }
    }
}

/// Normalize any of the three accepted cart shapes to the same snapshot.
///
/// The total is the server-supplied value when present, otherwise the sum
/// of line totals. Unrecognized shapes yield an empty cart.
pub fn convert_cart(cart: WireCart) -> CartSnapshot {
    let (items, total) = match cart {
        WireCart::Keyed { cart, total } | WireCart::Legacy {
            products: cart,
            total,
        } => (cart, total),
        WireCart::Lines(items) => (items, None),
        WireCart::Other(value) => {
            tracing::warn!(payload = %value, "unrecognized cart payload shape");
            return CartSnapshot::default();
        }
    };

    let lines: Vec<CartLine> = items.into_iter().map(convert_cart_item).collect();
    let computed: rust_decimal::Decimal = lines.iter().map(CartLine::line_total).sum();
    let total = match total {
        Some(total) if !total.is_zero() => total,
        _ => computed,
    };

    CartSnapshot { lines, total }
}

pub fn convert_favorites(favorites: Vec<WireFavorite>) -> Vec<Product> {
    favorites
        .into_iter()
        .map(|fav| convert_product(fav.product_info))
        .collect()
}

pub fn convert_recent(recent: WireRecent) -> RecentBoard {
    RecentBoard {
        count: recent.count,
        entries: recent
            .products
            .into_iter()
            .map(|entry| RecentEntry {
                product: convert_product(entry.product_info),
                score: entry.score,
            })
            .collect(),
    }
}

pub fn convert_receipt(envelope: WireReceiptEnvelope) -> OrderReceipt {
    let (WireReceiptEnvelope::Enveloped { data: receipt } | WireReceiptEnvelope::Bare(receipt)) =
        envelope;
    OrderReceipt {
        order_id: OrderId::new(receipt.order_id),
        order_time: receipt.order_time,
        payment_sum: receipt.payment_sum,
        payment_currency: receipt.payment_currency,
        paid: receipt.paid,
    }
}
