//! Home page: the full storefront shell with the menu, filters, recent
//! board, cart modal, and locale pickers.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use axum::response::IntoResponse;
use tracing::{instrument, warn};

use crate::error::Result;
use crate::filters;
use crate::locale;
use crate::state::AppState;
use crate::views::{self, CartView, FilterOptionView, ProductCardView, RecentCardView};

#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub cart: CartView,
    pub tab: &'static str,
    pub cards: Vec<ProductCardView>,
    pub filter_options: Vec<FilterOptionView>,
    pub recent: Vec<RecentCardView>,
    pub recent_failed: bool,
    pub cities: Vec<String>,
    pub languages: Vec<String>,
    pub current_city: String,
    pub current_language: String,
}

/// GET /
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> Result<impl IntoResponse> {
    state.cart().load().await;
    super::menu::ensure_menu(&state).await;
    if let Err(err) = state.favorites().load().await {
        warn!(error = %err, "failed to load favorites");
    }
    let recent = super::recent::recent_board(&state).await;

    Ok(HomeTemplate {
        cart: views::cart_view(&state.cart().snapshot(), state.cart().badge()),
        tab: "pizzas",
        cards: super::menu::category_cards(&state, "pizzas"),
        filter_options: views::filter_options(
            &state.menu().ingredient_options(),
            &state.menu().filters(),
        ),
        recent: recent.cards,
        recent_failed: recent.failed,
        cities: locale::CITIES.iter().map(ToString::to_string).collect(),
        languages: locale::LANGUAGES.iter().map(ToString::to_string).collect(),
        current_city: locale::default_city().to_string(),
        current_language: locale::default_language().to_string(),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::api::types::CartSnapshot;

    fn template() -> HomeTemplate {
        HomeTemplate {
            cart: views::cart_view(&CartSnapshot::default(), 0),
            tab: "pizzas",
            cards: Vec::new(),
            filter_options: Vec::new(),
            recent: Vec::new(),
            recent_failed: false,
            cities: locale::CITIES.iter().map(ToString::to_string).collect(),
            languages: locale::LANGUAGES.iter().map(ToString::to_string).collect(),
            current_city: locale::default_city().to_string(),
            current_language: locale::default_language().to_string(),
        }
    }

    #[test]
    fn test_home_page_renders() {
        let html = template().render().unwrap();
        assert!(html.contains(r#"id="cart-content""#));
        assert!(html.contains(r#"id="menu-grids""#));
        assert!(html.contains(r#"id="filters-panel""#));
        assert!(html.contains("Your cart is empty."));
    }

    #[test]
    fn test_default_city_is_preselected() {
        let html = template().render().unwrap();
        assert!(html.contains(r#"<option value="Moscow" selected>Moscow</option>"#));
        assert!(!html.contains(r#"<option value="Kazan" selected>"#));
    }
}
