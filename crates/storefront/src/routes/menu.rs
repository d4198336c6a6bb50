//! Menu routes: category tabs and ingredient filtering.
//!
//! The filter form posts its checkbox selection as repeated
//! `ingredient` fields along with the active `tab`, carried in a hidden
//! input that each grid fragment renders. Filtering is OR semantics and
//! is handled entirely by the menu store.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use tracing::{instrument, warn};

use crate::error::{AppError, Result};
use crate::state::AppState;
use crate::views::{self, FilterOptionView, ProductCardView};

/// One product grid, swapped into `#menu-grids`. Carries the active tab
/// in a hidden input so the filter form can echo it back.
#[derive(Template, WebTemplate)]
#[template(path = "partials/menu_grid.html")]
pub struct MenuGridTemplate {
    pub tab: &'static str,
    pub cards: Vec<ProductCardView>,
}

/// Favorites grid, swapped into `#menu-grids` when the favorites tab is
/// active. Distinguishes "nothing saved" from "could not load".
#[derive(Template, WebTemplate)]
#[template(path = "partials/favorites_grid.html")]
pub struct FavoritesGridTemplate {
    pub cards: Vec<ProductCardView>,
    pub failed: bool,
}

/// Filter panel with its reset response: the active tab's grid plus an
/// out-of-band refresh of the checkbox panel.
#[derive(Template, WebTemplate)]
#[template(path = "partials/menu_reset.html")]
pub struct MenuResetTemplate {
    pub tab: &'static str,
    pub cards: Vec<ProductCardView>,
    pub filter_options: Vec<FilterOptionView>,
    pub panel_oob: bool,
}

const MENU_TABS: &[&str] = &["pizzas", "snacks", "drinks", "favorites"];

fn known_tab(tab: &str) -> Result<&'static str> {
    MENU_TABS
        .iter()
        .find(|&&known| known == tab)
        .copied()
        .ok_or_else(|| AppError::NotFound(format!("no such menu tab: {tab}")))
}

/// Make sure the product list has been fetched at least once. A failed
/// fetch leaves the grid empty rather than failing the page.
pub(crate) async fn ensure_menu(state: &AppState) {
    if state.menu().products().is_empty()
        && let Err(err) = state.menu().load().await
    {
        warn!(error = %err, "failed to load the menu");
    }
}

pub(crate) fn category_cards(state: &AppState, tab: &str) -> Vec<ProductCardView> {
    let partition = state.menu().by_category();
    let products = match tab {
        "snacks" => partition.snacks,
        "drinks" => partition.drinks,
        _ => partition.pizzas,
    };
    views::product_cards(&products, |product| {
        state.favorites().is_favorite(product.id)
    })
}

pub(crate) async fn favorites_grid(state: &AppState) -> FavoritesGridTemplate {
    let failed = if let Err(err) = state.favorites().load().await {
        warn!(error = %err, "failed to load favorites");
        true
    } else {
        false
    };
    FavoritesGridTemplate {
        cards: views::product_cards(&state.favorites().products(), |_| true),
        failed,
    }
}

/// GET /menu/{tab}
#[instrument(skip(state))]
pub async fn tab(
    State(state): State<AppState>,
    Path(tab): Path<String>,
) -> Result<impl IntoResponse> {
    let tab = known_tab(&tab)?;
    if tab == "favorites" {
        return Ok(favorites_grid(&state).await.into_response());
    }
    ensure_menu(&state).await;
    Ok(MenuGridTemplate {
        tab,
        cards: category_cards(&state, tab),
    }
    .into_response())
}

/// POST /menu/filter
///
/// The body is parsed by hand because the checkbox selection arrives as
/// repeated `ingredient` keys.
#[instrument(skip(state, body))]
pub async fn filter(State(state): State<AppState>, body: String) -> Result<impl IntoResponse> {
    let mut tab = "pizzas";
    let mut selected = Vec::new();
    for (key, value) in url::form_urlencoded::parse(body.as_bytes()) {
        match key.as_ref() {
            "ingredient" => selected.push(value.into_owned()),
            "tab" => tab = known_tab(&value)?,
            _ => {}
        }
    }
    state.menu().set_filters(selected);

    if tab == "favorites" {
        return Ok(favorites_grid(&state).await.into_response());
    }
    ensure_menu(&state).await;
    Ok(MenuGridTemplate {
        tab,
        cards: category_cards(&state, tab),
    }
    .into_response())
}

#[derive(Debug, serde::Deserialize)]
pub struct ResetForm {
    pub tab: Option<String>,
}

/// POST /menu/reset
#[instrument(skip(state))]
pub async fn reset(
    State(state): State<AppState>,
    axum::Form(form): axum::Form<ResetForm>,
) -> Result<impl IntoResponse> {
    state.menu().reset_filters();
    let tab = match form.tab.as_deref() {
        Some(tab) => known_tab(tab)?,
        None => "pizzas",
    };
    ensure_menu(&state).await;
    Ok(MenuResetTemplate {
        tab,
        cards: if tab == "favorites" {
            views::product_cards(&state.favorites().products(), |_| true)
        } else {
            category_cards(&state, tab)
        },
        filter_options: views::filter_options(
            &state.menu().ingredient_options(),
            &state.menu().filters(),
        ),
        panel_oob: true,
    })
}
