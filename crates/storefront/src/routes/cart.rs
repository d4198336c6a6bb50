//! Cart routes.
//!
//! Every mutation renders the cart contents fragment and fires the
//! `cart-updated` event so the header badge refreshes itself. While
//! another cart operation is in flight the store reports [`Outcome::Busy`]
//! and the handler responds with the unchanged fragment, without the
//! event.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::State,
    response::{AppendHeaders, IntoResponse, Response},
};
use axum::Form;
use ovenside_core::ProductId;
use serde::Deserialize;
use tracing::instrument;

use crate::api::types::Address;
use crate::error::{AppError, Result};
use crate::locale;
use crate::state::AppState;
use crate::store::{CartError, Outcome};
use crate::views::{self, CartView, ReceiptView};

/// Cart contents fragment, swapped into `#cart-content`.
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_content.html")]
pub struct CartContentTemplate {
    pub cart: CartView,
}

/// Header badge fragment, swapped into `#cart-count`.
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u32,
}

/// Checkout outcome fragment, swapped into `#checkout-feedback`.
#[derive(Template, WebTemplate)]
#[template(path = "partials/checkout_result.html")]
pub struct CheckoutResultTemplate {
    pub receipt: Option<ReceiptView>,
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LineForm {
    pub product_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct AdditionForm {
    pub product_id: i64,
    pub addition_name: String,
}

#[derive(Debug, Deserialize)]
pub struct CheckoutForm {
    #[serde(default)]
    pub street: String,
    pub city: Option<String>,
    pub apartment: Option<String>,
    pub entrance: Option<String>,
    pub floor: Option<String>,
    pub comment: Option<String>,
}

fn content(state: &AppState) -> CartContentTemplate {
    CartContentTemplate {
        cart: views::cart_view(&state.cart().snapshot(), state.cart().badge()),
    }
}

/// Render a mutation outcome: the updated fragment with the refresh
/// event, or the unchanged fragment when the store was busy.
fn mutated(state: &AppState, outcome: Outcome) -> Response {
    let fragment = content(state);
    if outcome.is_busy() {
        fragment.into_response()
    } else {
        (
            AppendHeaders([("HX-Trigger", "cart-updated")]),
            fragment,
        )
            .into_response()
    }
}

fn none_if_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

/// GET /cart
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> Result<impl IntoResponse> {
    state.cart().load().await;
    Ok(content(&state))
}

/// GET /cart/count
#[instrument(skip(state))]
pub async fn count(State(state): State<AppState>) -> Result<impl IntoResponse> {
    Ok(CartCountTemplate {
        count: state.cart().badge(),
    })
}

/// POST /cart/add
#[instrument(skip(state), fields(product_id = form.product_id))]
pub async fn add(
    State(state): State<AppState>,
    Form(form): Form<LineForm>,
) -> Result<impl IntoResponse> {
    let outcome = state.cart().add(ProductId::new(form.product_id)).await?;
    let badge = CartCountTemplate {
        count: state.cart().badge(),
    };
    if outcome.is_busy() {
        Ok(badge.into_response())
    } else {
        Ok((AppendHeaders([("HX-Trigger", "cart-updated")]), badge).into_response())
    }
}

/// POST /cart/increment
#[instrument(skip(state), fields(product_id = form.product_id))]
pub async fn increment(
    State(state): State<AppState>,
    Form(form): Form<LineForm>,
) -> Result<impl IntoResponse> {
    let outcome = state
        .cart()
        .increment(ProductId::new(form.product_id))
        .await?;
    Ok(mutated(&state, outcome))
}

/// POST /cart/decrement
#[instrument(skip(state), fields(product_id = form.product_id))]
pub async fn decrement(
    State(state): State<AppState>,
    Form(form): Form<LineForm>,
) -> Result<impl IntoResponse> {
    let outcome = state
        .cart()
        .decrement(ProductId::new(form.product_id))
        .await?;
    Ok(mutated(&state, outcome))
}

/// POST /cart/remove
#[instrument(skip(state), fields(product_id = form.product_id))]
pub async fn remove(
    State(state): State<AppState>,
    Form(form): Form<LineForm>,
) -> Result<impl IntoResponse> {
    let outcome = state.cart().remove(ProductId::new(form.product_id)).await?;
    Ok(mutated(&state, outcome))
}

/// POST /cart/clear
#[instrument(skip(state))]
pub async fn clear(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let outcome = state.cart().clear(false).await?;
    Ok(mutated(&state, outcome))
}

/// POST /cart/toggle-addition
#[instrument(skip(state), fields(product_id = form.product_id, addition = %form.addition_name))]
pub async fn toggle_addition(
    State(state): State<AppState>,
    Form(form): Form<AdditionForm>,
) -> Result<impl IntoResponse> {
    let outcome = state
        .cart()
        .toggle_addition(ProductId::new(form.product_id), &form.addition_name)
        .await?;
    Ok(mutated(&state, outcome))
}

/// POST /cart/checkout
///
/// Validation failures render inline in the address form feedback area;
/// only upstream failures surface as error responses.
#[instrument(skip(state, form))]
pub async fn checkout(
    State(state): State<AppState>,
    Form(form): Form<CheckoutForm>,
) -> Result<impl IntoResponse> {
    let address = Address {
        street: form.street.trim().to_string(),
        city: form
            .city
            .filter(|c| locale::is_known(locale::CITIES, c))
            .unwrap_or_else(|| locale::default_city().to_string()),
        apartment: none_if_blank(form.apartment),
        entrance: none_if_blank(form.entrance),
        floor: none_if_blank(form.floor),
        comment: none_if_blank(form.comment),
    };

    match state.cart().checkout(address).await {
        Ok(Outcome::Done(receipt)) => Ok((
            AppendHeaders([("HX-Trigger", "cart-updated")]),
            CheckoutResultTemplate {
                receipt: Some(views::receipt_view(&receipt)),
                error: None,
            },
        )
            .into_response()),
        Ok(Outcome::Busy) => Ok(CheckoutResultTemplate {
            receipt: None,
            error: None,
        }
        .into_response()),
        Err(
            err @ (CartError::Empty | CartError::MissingStreet | CartError::MissingApartment),
        ) => Ok(CheckoutResultTemplate {
            receipt: None,
            error: Some(err.to_string()),
        }
        .into_response()),
        Err(err) => Err(AppError::from(err)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_if_blank() {
        assert_eq!(none_if_blank(None), None);
        assert_eq!(none_if_blank(Some(String::new())), None);
        assert_eq!(none_if_blank(Some("   ".to_string())), None);
        assert_eq!(
            none_if_blank(Some("12b".to_string())),
            Some("12b".to_string())
        );
    }
}
