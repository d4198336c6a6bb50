//! Favorites routes.
//!
//! Toggling swaps the heart button in place and fires
//! `favorites-updated`, which the favorites container listens for to
//! re-render itself.

use askama::Template;
use askama_web::WebTemplate;
use axum::Form;
use axum::extract::State;
use axum::response::{AppendHeaders, IntoResponse};
use ovenside_core::ProductId;
use serde::Deserialize;
use tracing::instrument;

use crate::error::Result;
use crate::state::AppState;

/// Heart button fragment, swapped over the button that was clicked.
#[derive(Template, WebTemplate)]
#[template(path = "partials/favorite_button.html")]
pub struct FavoriteButtonTemplate {
    pub id: i64,
    pub is_favorite: bool,
}

#[derive(Debug, Deserialize)]
pub struct ToggleForm {
    pub product_id: i64,
}

/// GET /favorites
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> Result<impl IntoResponse> {
    Ok(super::menu::favorites_grid(&state).await)
}

/// POST /favorites/toggle
#[instrument(skip(state), fields(product_id = form.product_id))]
pub async fn toggle(
    State(state): State<AppState>,
    Form(form): Form<ToggleForm>,
) -> Result<impl IntoResponse> {
    let is_favorite = state
        .favorites()
        .toggle(ProductId::new(form.product_id))
        .await?;
    Ok((
        AppendHeaders([("HX-Trigger", "favorites-updated")]),
        FavoriteButtonTemplate {
            id: form.product_id,
            is_favorite,
        },
    ))
}
