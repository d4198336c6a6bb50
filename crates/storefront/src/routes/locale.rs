//! City and language pickers.
//!
//! The choice lists are fixed. Selections are echoed back as fragments
//! rather than stored server side; picking a city also refreshes the
//! delivery banner out of band.

use askama::Template;
use askama_web::WebTemplate;
use axum::Form;
use axum::extract::State;
use axum::response::IntoResponse;
use serde::Deserialize;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::locale::{CITIES, LANGUAGES, is_known};
use crate::state::AppState;

/// Dropdown option list for either picker.
#[derive(Template, WebTemplate)]
#[template(path = "partials/locale_options.html")]
pub struct LocaleOptionsTemplate {
    pub endpoint: &'static str,
    pub target: &'static str,
    pub choices: &'static [&'static str],
}

/// Selected city: the picker label plus an out-of-band update of the
/// delivery banner.
#[derive(Template, WebTemplate)]
#[template(path = "partials/city_label.html")]
pub struct CityLabelTemplate {
    pub label: String,
    pub delivery_oob: bool,
}

/// Selected language label.
#[derive(Template, WebTemplate)]
#[template(path = "partials/language_label.html")]
pub struct LanguageLabelTemplate {
    pub label: String,
}

#[derive(Debug, Deserialize)]
pub struct PickForm {
    pub label: String,
}

/// GET /locale/cities
#[instrument(skip(_state))]
pub async fn cities(State(_state): State<AppState>) -> Result<impl IntoResponse> {
    Ok(LocaleOptionsTemplate {
        endpoint: "/locale/city",
        target: "#city-label",
        choices: CITIES,
    })
}

/// POST /locale/city
#[instrument(skip(_state), fields(label = %form.label))]
pub async fn select_city(
    State(_state): State<AppState>,
    Form(form): Form<PickForm>,
) -> Result<impl IntoResponse> {
    if !is_known(CITIES, &form.label) {
        return Err(AppError::BadRequest(format!(
            "unknown city: {}",
            form.label
        )));
    }
    Ok(CityLabelTemplate {
        label: form.label,
        delivery_oob: true,
    })
}

/// GET /locale/languages
#[instrument(skip(_state))]
pub async fn languages(State(_state): State<AppState>) -> Result<impl IntoResponse> {
    Ok(LocaleOptionsTemplate {
        endpoint: "/locale/language",
        target: "#language-label",
        choices: LANGUAGES,
    })
}

/// POST /locale/language
#[instrument(skip(_state), fields(label = %form.label))]
pub async fn select_language(
    State(_state): State<AppState>,
    Form(form): Form<PickForm>,
) -> Result<impl IntoResponse> {
    if !is_known(LANGUAGES, &form.label) {
        return Err(AppError::BadRequest(format!(
            "unknown language: {}",
            form.label
        )));
    }
    Ok(LanguageLabelTemplate { label: form.label })
}
