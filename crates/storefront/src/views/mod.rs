//! Pure view models for the templates.
//!
//! Each function here maps store state to a plain-strings view model; the
//! act of rendering is left to the askama templates. Keeping this mapping
//! pure makes the display logic testable without a server.

use ovenside_core::Price;
use rust_decimal::Decimal;

use crate::api::types::{CartSnapshot, Product, RecentBoard};

/// Placeholder image used when a product has no preview.
const DEFAULT_PREVIEW: &str = "default_product.png";

/// Format an amount as a price string, e.g. `20.000000 Ł`.
#[must_use]
pub fn format_price(amount: Decimal) -> String {
    Price::from(amount).display()
}

/// Image URL for a product preview.
fn preview_url(preview_link: Option<&str>) -> String {
    format!(
        "/images/products/{}",
        preview_link.unwrap_or(DEFAULT_PREVIEW)
    )
}

// =============================================================================
// Cart
// =============================================================================

/// One topping row in a cart line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdditionView {
    pub name: String,
    pub selected: bool,
}

/// Cart line display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItemView {
    pub product_id: i64,
    pub name: String,
    pub quantity: u32,
    pub unit_price: String,
    pub line_total: String,
    pub image: String,
    pub additions: Vec<AdditionView>,
}

/// Cart display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub total: String,
    pub count: u32,
}

impl CartView {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Map a cart snapshot and badge count to its view model.
#[must_use]
pub fn cart_view(snapshot: &CartSnapshot, badge: u32) -> CartView {
    let items = snapshot
        .lines
        .iter()
        .map(|line| CartItemView {
            product_id: line.product_id.as_i64(),
            name: line.product.name.clone(),
            quantity: line.quantity,
            unit_price: format_price(line.product.cost),
            line_total: format_price(line.line_total()),
            image: preview_url(line.product.preview_link.as_deref()),
            additions: line
                .product
                .additions
                .iter()
                .map(|(name, &selected)| AdditionView {
                    name: name.clone(),
                    selected,
                })
                .collect(),
        })
        .collect();

    CartView {
        items,
        total: format_price(snapshot.total),
        count: badge,
    }
}

/// Order receipt display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptView {
    pub order_id: String,
    pub order_time: String,
    pub payment: String,
    pub paid: bool,
}

/// Map an order receipt to its view model.
#[must_use]
pub fn receipt_view(receipt: &crate::api::types::OrderReceipt) -> ReceiptView {
    ReceiptView {
        order_id: receipt.order_id.to_string(),
        order_time: receipt.order_time.clone(),
        payment: format!("{:.6} {}", receipt.payment_sum, receipt.payment_currency),
        paid: receipt.paid,
    }
}

// =============================================================================
// Product cards
// =============================================================================

/// Product card display data, shared by the menu grids, the favorites
/// grid, and the recent board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCardView {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: String,
    pub image: String,
    pub ingredients: Vec<String>,
    pub additions: Vec<String>,
    pub protein: String,
    pub fat: String,
    pub carbohydrates: String,
    pub calories: String,
    pub is_favorite: bool,
}

/// Map a product to its card view model.
#[must_use]
pub fn product_card(product: &Product, is_favorite: bool) -> ProductCardView {
    ProductCardView {
        id: product.id.as_i64(),
        name: product.name.clone(),
        description: product.description.clone(),
        price: format_price(product.cost),
        image: preview_url(product.preview_link.as_deref()),
        ingredients: product.ingredients.clone(),
        additions: product.additions.keys().cloned().collect(),
        protein: product.characteristics.protein.to_string(),
        fat: product.characteristics.fat.to_string(),
        carbohydrates: product.characteristics.carbohydrates.to_string(),
        calories: product.characteristics.calories.to_string(),
        is_favorite,
    }
}

/// Map a product list to card view models, marking favorites.
pub fn product_cards<'a, I, F>(products: I, is_favorite: F) -> Vec<ProductCardView>
where
    I: IntoIterator<Item = &'a Product>,
    F: Fn(&Product) -> bool,
{
    products
        .into_iter()
        .map(|product| product_card(product, is_favorite(product)))
        .collect()
}

// =============================================================================
// Filters
// =============================================================================

/// One checkbox in the filter panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOptionView {
    pub name: String,
    pub selected: bool,
}

/// Build the filter panel from the available options and the selection.
#[must_use]
pub fn filter_options(
    options: &[String],
    selected: &std::collections::BTreeSet<String>,
) -> Vec<FilterOptionView> {
    options
        .iter()
        .map(|name| FilterOptionView {
            name: name.clone(),
            selected: selected.contains(name),
        })
        .collect()
}

// =============================================================================
// Recent board
// =============================================================================

/// Recent board card with its popularity score badge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentCardView {
    pub card: ProductCardView,
    pub score: i64,
}

/// Map the recent board to card view models, in server-provided order.
pub fn recent_cards<F>(board: &RecentBoard, is_favorite: F) -> Vec<RecentCardView>
where
    F: Fn(&Product) -> bool,
{
    board
        .entries
        .iter()
        .map(|entry| RecentCardView {
            card: product_card(&entry.product, is_favorite(&entry.product)),
            score: entry.score,
        })
        .collect()
}
