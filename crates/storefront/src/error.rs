//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures errors to Sentry before
//! responding to the client. Route handlers return `Result<T, AppError>`;
//! failed HTMX mutations answer with a toast fragment and leave the page's
//! displayed state at its pre-operation value.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::api::ApiError;
use crate::store::CartError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Backend service call failed.
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Cart operation failed.
    #[error("Cart error: {0}")]
    Cart(#[from] CartError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Transient notification fragment swapped in on failures.
#[derive(Template, WebTemplate)]
#[template(path = "partials/toast.html")]
pub struct ToastTemplate {
    pub message: String,
    pub success: bool,
}

impl ToastTemplate {
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: false,
        }
    }

    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: true,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture server-side classes to Sentry
        if matches!(
            self,
            Self::Api(_) | Self::Internal(_) | Self::Cart(CartError::Api(_))
        ) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let status = match &self {
            Self::Api(_) | Self::Cart(CartError::Api(_)) => StatusCode::BAD_GATEWAY,
            Self::Cart(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Don't expose internal error details to clients
        let message = match &self {
            Self::Api(_) | Self::Cart(CartError::Api(_)) => {
                "Something went wrong. Please try again.".to_string()
            }
            Self::Internal(_) => "Internal server error".to_string(),
            Self::Cart(err) => err.to_string(),
            Self::NotFound(_) | Self::BadRequest(_) => self.to_string(),
        };

        (status, ToastTemplate::error(message)).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn get_status(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::NotFound("product-123".to_string());
        assert_eq!(err.to_string(), "Not found: product-123");

        let err = AppError::Cart(CartError::MissingStreet);
        assert_eq!(
            err.to_string(),
            "Cart error: Specify the street and house number"
        );
    }

    #[test]
    fn test_app_error_status_codes() {
        assert_eq!(
            get_status(AppError::NotFound("test".to_string())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_status(AppError::BadRequest("test".to_string())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(AppError::Cart(CartError::Empty)),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            get_status(AppError::Cart(CartError::MissingApartment)),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            get_status(AppError::Api(ApiError::Status {
                status: 500,
                body: String::new(),
            })),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            get_status(AppError::Internal("test".to_string())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_validation_message_survives_to_client() {
        let toast = match AppError::Cart(CartError::MissingStreet) {
            AppError::Cart(err @ (CartError::MissingStreet | CartError::MissingApartment)) => {
                ToastTemplate::error(err.to_string())
            }
            _ => ToastTemplate::error(""),
        };
        assert_eq!(toast.message, "Specify the street and house number");
    }
}
