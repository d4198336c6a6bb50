//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page
//! GET  /health                 - Health check
//! GET  /health/ready           - Readiness check (pings the orders service)
//!
//! # Cart (HTMX fragments)
//! GET  /cart                   - Cart contents fragment
//! GET  /cart/count             - Cart count badge (fragment)
//! POST /cart/add               - Add one unit (returns count, triggers cart-updated)
//! POST /cart/increment         - Increment a line
//! POST /cart/decrement         - Decrement a line (removes at quantity 1)
//! POST /cart/remove            - Remove a line
//! POST /cart/clear             - Clear the cart
//! POST /cart/toggle-addition   - Toggle a topping on a line
//! POST /cart/checkout          - Place an order
//!
//! # Menu
//! GET  /menu/{tab}             - Grid for pizzas | snacks | drinks | favorites
//! POST /menu/filter            - Apply ingredient filters
//! POST /menu/reset             - Reset ingredient filters
//!
//! # Favorites
//! GET  /favorites              - Favorites grid fragment
//! POST /favorites/toggle       - Toggle favorite membership
//!
//! # Recent
//! GET  /recent                 - Recently/popularly ordered fragment
//!
//! # Locale pickers
//! GET  /locale/cities          - City dropdown options
//! POST /locale/city            - Select a city
//! GET  /locale/languages       - Language dropdown options
//! POST /locale/language        - Select a language
//! ```

pub mod cart;
pub mod favorites;
pub mod home;
pub mod locale;
pub mod menu;
pub mod recent;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/count", get(cart::count))
        .route("/add", post(cart::add))
        .route("/increment", post(cart::increment))
        .route("/decrement", post(cart::decrement))
        .route("/remove", post(cart::remove))
        .route("/clear", post(cart::clear))
        .route("/toggle-addition", post(cart::toggle_addition))
        .route("/checkout", post(cart::checkout))
}

/// Create the menu routes router.
pub fn menu_routes() -> Router<AppState> {
    Router::new()
        .route("/{tab}", get(menu::tab))
        .route("/filter", post(menu::filter))
        .route("/reset", post(menu::reset))
}

/// Create the favorites routes router.
pub fn favorites_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(favorites::show))
        .route("/toggle", post(favorites::toggle))
}

/// Create the locale picker routes router.
pub fn locale_routes() -> Router<AppState> {
    Router::new()
        .route("/cities", get(locale::cities))
        .route("/city", post(locale::select_city))
        .route("/languages", get(locale::languages))
        .route("/language", post(locale::select_language))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .nest("/cart", cart_routes())
        .nest("/menu", menu_routes())
        .nest("/favorites", favorites_routes())
        .route("/recent", get(recent::show))
        .nest("/locale", locale_routes())
}
