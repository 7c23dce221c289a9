//! Small building blocks shared by both pages.

use maud::{html, Markup};
use portfolio_core::content::{CoverPlatform, Platform, TrackAction};

use crate::{COVERS_ROUTE, HOME_ROUTE};

// ---------------------------------------------------------------------------
// Icons
// ---------------------------------------------------------------------------

/// Brand mark rendered next to a link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Spotify,
    AppleMusic,
    Instagram,
    TikTok,
    YouTube,
    LinkedIn,
}

impl Icon {
    /// Value of the `data-icon` attribute.
    pub fn slug(self) -> &'static str {
        match self {
            Self::Spotify => "spotify",
            Self::AppleMusic => "apple-music",
            Self::Instagram => "instagram",
            Self::TikTok => "tiktok",
            Self::YouTube => "youtube",
            Self::LinkedIn => "linkedin",
        }
    }

    fn color(self) -> &'static str {
        match self {
            Self::Spotify => "#1DB954",
            Self::AppleMusic => "#FA243C",
            Self::Instagram => "#E1306C",
            Self::TikTok => "#69C9D0",
            Self::YouTube => "#FF0000",
            Self::LinkedIn => "#0A66C2",
        }
    }

    fn glyph(self) -> &'static str {
        match self {
            Self::Spotify => "♫",
            Self::AppleMusic => "♪",
            Self::Instagram => "◎",
            Self::TikTok => "♩",
            Self::YouTube => "▶",
            Self::LinkedIn => "in",
        }
    }

    pub fn render(self, size: u8) -> Markup {
        html! {
            span.icon
                data-icon=(self.slug())
                style={ "color:" (self.color()) ";--icon-size:" (size) "px" }
                aria-hidden="true" { (self.glyph()) }
        }
    }
}

impl From<Platform> for Icon {
    fn from(platform: Platform) -> Self {
        match platform {
            Platform::Spotify => Self::Spotify,
            Platform::AppleMusic => Self::AppleMusic,
            Platform::Instagram => Self::Instagram,
            Platform::TikTok => Self::TikTok,
            Platform::YouTube => Self::YouTube,
            Platform::LinkedIn => Self::LinkedIn,
        }
    }
}

impl From<TrackAction> for Icon {
    fn from(action: TrackAction) -> Self {
        match action {
            TrackAction::Spotify => Self::Spotify,
            TrackAction::AppleMusic => Self::AppleMusic,
            TrackAction::VisualVideo => Self::YouTube,
        }
    }
}

impl From<CoverPlatform> for Icon {
    fn from(platform: CoverPlatform) -> Self {
        match platform {
            CoverPlatform::Instagram => Self::Instagram,
            CoverPlatform::TikTok => Self::TikTok,
            CoverPlatform::YouTubeShorts => Self::YouTube,
        }
    }
}

// ---------------------------------------------------------------------------
// Links
// ---------------------------------------------------------------------------

/// Underlined inline link opening in a new tab.
pub fn external_link(href: &str, text: &str) -> Markup {
    html! {
        a.link href=(href) target="_blank" rel="noreferrer" { (text) }
    }
}

/// Rounded pill link with a text label.
pub fn pill_link(href: &str, text: &str) -> Markup {
    html! {
        a.pill href=(href) target="_blank" rel="noreferrer" { (text) }
    }
}

/// Round icon-only button. `label` is exposed to assistive tech.
pub fn icon_button(href: &str, label: &str, icon: Icon, size: u8) -> Markup {
    html! {
        a.icon-button href=(href) target="_blank" rel="noreferrer" aria-label=(label) title=(label) {
            (icon.render(size))
        }
    }
}

/// Icon followed by the platform name.
pub fn labelled_link(href: &str, label: &str, icon: Icon, size: u8) -> Markup {
    html! {
        a.brand-link href=(href) target="_blank" rel="noreferrer" {
            (icon.render(size))
            span { (label) }
        }
    }
}

// ---------------------------------------------------------------------------
// Page furniture
// ---------------------------------------------------------------------------

/// Which page the navigation bar is shown on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavPage {
    Home,
    Covers,
    /// A page outside the nav, such as the 404 page. Both entries are links.
    Other,
}

pub fn nav(current: NavPage) -> Markup {
    html! {
        nav.nav {
            @if current == NavPage::Home {
                span.nav-current { "EP" }
            } @else {
                a.nav-link href=(HOME_ROUTE) { "EP" }
            }
            @if current == NavPage::Covers {
                span.nav-current { "Covers" }
            } @else {
                a.nav-link href=(COVERS_ROUTE) { "Covers" }
            }
        }
    }
}

/// Rounded panel with a heading and optional subtitle.
pub fn section_panel(id: &str, title: &str, subtitle: Option<&str>, content: Markup) -> Markup {
    html! {
        section.section id=(id) {
            div.panel {
                div.panel-heading {
                    h2 { (title) }
                    @if let Some(subtitle) = subtitle {
                        p.muted { (subtitle) }
                    }
                }
                div.panel-body { (content) }
            }
        }
    }
}

pub fn copyright(year: i32, artist: &str) -> Markup {
    html! {
        div.copyright { "© " (year) " " (artist) }
    }
}
