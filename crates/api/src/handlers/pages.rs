//! Handlers for the two site pages, the stylesheet and the 404 fallback.

use axum::extract::State;
use axum::http::header::{CACHE_CONTROL, CONTENT_TYPE};
use axum::http::Uri;
use axum::response::{Html, IntoResponse};
use chrono::Datelike;
use portfolio_core::error::CoreError;
use portfolio_pages::{render_covers, render_home, RenderContext, STYLESHEET};

use crate::error::AppError;
use crate::state::AppState;

fn render_context() -> RenderContext {
    RenderContext {
        year: chrono::Utc::now().year(),
    }
}

/// GET /
pub async fn home(State(state): State<AppState>) -> Html<String> {
    Html(render_home(state.site, &render_context()).into_string())
}

/// GET /covers
pub async fn covers(State(state): State<AppState>) -> Html<String> {
    let markup = render_covers(state.site, &render_context());
    tracing::debug!(covers = state.site.cover_count(), "Rendered covers index");
    Html(markup.into_string())
}

/// GET /assets/site.css
pub async fn stylesheet() -> impl IntoResponse {
    (
        [
            (CONTENT_TYPE, "text/css; charset=utf-8"),
            (CACHE_CONTROL, "public, max-age=3600"),
        ],
        STYLESHEET,
    )
}

/// Fallback for any unknown route.
pub async fn not_found(uri: Uri) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Page",
        key: uri.path().to_string(),
    })
}
