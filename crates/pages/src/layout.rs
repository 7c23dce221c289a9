//! Document shell and page metadata.

use maud::{html, Markup, DOCTYPE};
use portfolio_core::content::SiteContent;

use crate::STYLESHEET_PATH;

/// `<title>` and `<meta name="description">` for a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
}

impl PageMeta {
    pub fn home(site: &SiteContent) -> Self {
        Self {
            title: format!("{} — Music", site.artist.name),
            description: site.artist.biography.to_string(),
        }
    }

    pub fn covers(site: &SiteContent) -> Self {
        Self {
            title: format!("{} — Covers", site.artist.name),
            description: format!("Weekly covers by {}.", site.artist.name),
        }
    }
}

/// Wrap page content in the shared document shell.
pub fn document(meta: &PageMeta, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (meta.title) }
                meta name="description" content=(meta.description);
                link rel="stylesheet" href=(STYLESHEET_PATH);
            }
            body {
                main.page {
                    div.backdrop aria-hidden="true" {
                        div.glow.glow-center {}
                        div.glow.glow-left {}
                        div.glow.glow-right {}
                    }
                    div.container {
                        (body)
                    }
                }
            }
        }
    }
}
