//! Fallback page for unknown routes.

use maud::{html, Markup};
use portfolio_core::content::SiteContent;

use crate::components::{nav, NavPage};
use crate::layout::{document, PageMeta};
use crate::HOME_ROUTE;

pub fn render_not_found(site: &SiteContent) -> Markup {
    let meta = PageMeta {
        title: format!("{} — Not found", site.artist.name),
        description: site.artist.tagline.to_string(),
    };

    document(
        &meta,
        html! {
            (nav(NavPage::Other))
            section.section {
                div.panel {
                    h2 { "Page not found" }
                    p.muted { "There is nothing at this address." }
                    a.pill href=(HOME_ROUTE) { "Back home" }
                }
            }
        },
    )
}

#[cfg(test)]
mod tests {
    use portfolio_core::content::SITE;

    use super::*;

    #[test]
    fn nav_links_home_and_covers() {
        let html = render_not_found(&SITE).into_string();
        assert!(html.contains("Page not found"));
        assert!(!html.contains("nav-current"));
        assert!(html.contains(r#"href="/">EP</a>"#));
        assert!(html.contains(r#"href="/covers">Covers</a>"#));
    }
}
