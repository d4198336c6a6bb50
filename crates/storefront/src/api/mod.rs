//! Typed clients for the two backend REST services.
//!
//! # Architecture
//!
//! - The *orders* service owns the cart and order placement.
//! - The *catalog* service owns products, favorites, and the
//!   recently-ordered ranking.
//! - Both services are the source of truth - no local sync, direct API
//!   calls over `reqwest`, with the product catalog cached in-memory via
//!   `moka`.
//!
//! # Example
//!
//! ```rust,ignore
//! use ovenside_storefront::api::OrdersClient;
//!
//! let client = OrdersClient::new(config.orders_url.clone());
//!
//! let cart = client.fetch_cart().await?;
//! client.add_item(product_id).await?;
//! ```

pub mod catalog;
pub mod conversions;
pub mod orders;
pub mod types;
pub mod wire;

pub use catalog::CatalogClient;
pub use orders::OrdersClient;
pub use types::*;

use serde::de::DeserializeOwned;
use thiserror::Error;

/// Errors that can occur when talking to the backend services.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed (connect, timeout, protocol).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Service answered with a non-success status.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// Response body did not parse as the expected JSON.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ApiError {
    /// Whether this error is a 404 from the service.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Status { status: 404, .. })
    }
}

/// First part of a response body, for log context.
fn excerpt(body: &str) -> String {
    body.chars().take(200).collect()
}

/// Check the status and decode a JSON response body.
///
/// Reads the body as text first so failures can be logged with an excerpt.
pub(crate) async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        tracing::error!(
            status = %status,
            body = %excerpt(&body),
            "backend service returned non-success status"
        );
        return Err(ApiError::Status {
            status: status.as_u16(),
            body: excerpt(&body),
        });
    }

    serde_json::from_str(&body).map_err(|e| {
        tracing::error!(
            error = %e,
            body = %excerpt(&body),
            "failed to parse backend response"
        );
        ApiError::Parse(e)
    })
}
