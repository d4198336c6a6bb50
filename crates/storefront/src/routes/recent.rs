//! Recently/popularly ordered board.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use axum::response::IntoResponse;
use tracing::{instrument, warn};

use crate::error::Result;
use crate::state::AppState;
use crate::views::{self, RecentCardView};

/// Recent board fragment, swapped into `#recent`.
#[derive(Template, WebTemplate)]
#[template(path = "partials/recent.html")]
pub struct RecentTemplate {
    pub cards: Vec<RecentCardView>,
    pub failed: bool,
}

pub(crate) async fn recent_board(state: &AppState) -> RecentTemplate {
    match state.catalog().get_recent().await {
        Ok(board) => RecentTemplate {
            cards: views::recent_cards(&board, |product| {
                state.favorites().is_favorite(product.id)
            }),
            failed: false,
        },
        Err(err) => {
            warn!(error = %err, "failed to load the recent board");
            RecentTemplate {
                cards: Vec::new(),
                failed: true,
            }
        }
    }
}

/// GET /recent
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> Result<impl IntoResponse> {
    Ok(recent_board(&state).await)
}
