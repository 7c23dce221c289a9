//! Page routes.
//!
//! ```text
//! GET /                 -> home
//! GET /covers           -> covers
//! GET /assets/site.css  -> stylesheet
//! ```

use axum::routing::get;
use axum::Router;
use portfolio_pages::{COVERS_ROUTE, HOME_ROUTE, STYLESHEET_PATH};

use crate::handlers::pages;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(HOME_ROUTE, get(pages::home))
        .route(COVERS_ROUTE, get(pages::covers))
        .route(STYLESHEET_PATH, get(pages::stylesheet))
}
