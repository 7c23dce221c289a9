use std::any::Any;

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use portfolio_core::content::site;
use portfolio_core::error::CoreError;
use portfolio_pages::render_not_found;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Visitors are browsers, so every error renders as an HTML page.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `portfolio_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Core(CoreError::NotFound { entity, key }) => {
                tracing::debug!(entity, key = %key, "Not found");
                (
                    StatusCode::NOT_FOUND,
                    Html(render_not_found(site()).into_string()),
                )
                    .into_response()
            }
            AppError::Core(CoreError::Validation(msg)) | AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Html("<!DOCTYPE html><title>Error</title><p>An internal error occurred</p>"),
                )
                    .into_response()
            }
        }
    }
}

/// Response for a handler panic caught by `CatchPanicLayer`.
///
/// The panic payload is logged, never sent to the client.
pub fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic payload".to_string()
    };
    AppError::InternalError(format!("handler panicked: {detail}")).into_response()
}
