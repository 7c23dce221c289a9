use portfolio_core::content::SiteContent;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone: the content is a `'static` borrow.
#[derive(Clone)]
pub struct AppState {
    /// Read-only site content rendered by every page.
    pub site: &'static SiteContent,
}
