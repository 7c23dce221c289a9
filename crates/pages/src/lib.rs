//! HTML rendering for the portfolio site.
//!
//! Each page is a pure function of the [`SiteContent`] snapshot and a small
//! [`RenderContext`]; nothing here touches I/O or mutates content.
//!
//! [`SiteContent`]: portfolio_core::content::SiteContent

pub mod components;
pub mod covers;
pub mod home;
pub mod layout;
pub mod not_found;

/// Public path of the stylesheet referenced by every page.
pub const STYLESHEET_PATH: &str = "/assets/site.css";

/// The site stylesheet, embedded at compile time.
pub const STYLESHEET: &str = include_str!("../assets/site.css");

/// Route of the home page.
pub const HOME_ROUTE: &str = "/";

/// Route of the covers index.
pub const COVERS_ROUTE: &str = "/covers";

/// Per-request inputs that are not part of the content.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext {
    /// Year shown in the copyright footer.
    pub year: i32,
}

pub use covers::render_covers;
pub use home::render_home;
pub use not_found::render_not_found;
