//! Landing page: hero, EP roadmap, weekly covers promo and contact footer.

use maud::{html, Markup};
use portfolio_core::content::{EpTrack, SiteContent};

use crate::components::{
    copyright, external_link, icon_button, labelled_link, nav, pill_link, section_panel, Icon,
    NavPage,
};
use crate::layout::{document, PageMeta};
use crate::{RenderContext, COVERS_ROUTE};

const WEEKLY_COVERS_TITLE: &str = "Weekly covers";
const WEEKLY_COVERS_SUBTITLE: &str =
    "I post one cover per week — the full list lives on the covers page.";

/// Render the full home page document.
pub fn render_home(site: &SiteContent, ctx: &RenderContext) -> Markup {
    let body = html! {
        (nav(NavPage::Home))
        (hero(site))
        (section_panel("ep", site.ep.title, Some(site.ep.description), track_list(site)))
        (section_panel("covers", WEEKLY_COVERS_TITLE, Some(WEEKLY_COVERS_SUBTITLE), covers_promo(site)))
        (contact(site, ctx))
    };

    document(&PageMeta::home(site), body)
}

fn hero(site: &SiteContent) -> Markup {
    html! {
        header.hero {
            div.hero-text {
                h1 { (site.artist.name) }
                p.tagline { (site.artist.tagline) }
                p.bio { (site.artist.biography) }
                div.link-row.streaming {
                    @for link in site.streaming {
                        (labelled_link(link.href, link.label.label(), Icon::from(link.label), 22))
                    }
                }
                div.link-row.socials {
                    @for link in site.socials {
                        (labelled_link(link.href, link.label.label(), Icon::from(link.label), 22))
                    }
                }
            }
            div.hero-art {
                div.album-cover {
                    img src=(site.album_cover.src) alt=(site.album_cover.alt);
                }
            }
        }
    }
}

fn track_list(site: &SiteContent) -> Markup {
    html! {
        ol.tracks {
            @for (number, track) in site.ep.numbered_tracks() {
                (render_track(number, track))
            }
        }
    }
}

/// One EP roadmap entry. Released tracks are highlighted and carry their
/// action links; upcoming tracks are muted and never show links.
pub fn render_track(number: usize, track: &EpTrack) -> Markup {
    let released = track.status.is_released();
    let links = track.action_links();

    html! {
        li.track.track-released[released].track-upcoming[!released] data-status=(track.status.label()) {
            div.track-row {
                div.track-main {
                    div.track-number { (number) }
                    div {
                        div.track-heading {
                            h3 { (track.title) }
                            span.status-badge { (track.status.label()) }
                        }
                        p.track-description { (track.description) }
                    }
                }
                @if !links.is_empty() {
                    div.track-actions {
                        @for (action, href) in links {
                            (icon_button(href, action.label(), Icon::from(action), 18))
                        }
                    }
                }
            }
        }
    }
}

fn covers_promo(site: &SiteContent) -> Markup {
    html! {
        div.link-row {
            a.pill href=(COVERS_ROUTE) { "View all covers" }
            span.muted { "Quick links:" }
            @for channel in site.weekly_covers {
                (external_link(channel.href, channel.platform.label()))
            }
        }
    }
}

fn contact(site: &SiteContent, ctx: &RenderContext) -> Markup {
    html! {
        footer.section id="contact" {
            div.panel {
                h2 { (site.contact.heading) }
                p.muted { (site.contact.blurb) }
                div.link-row {
                    @for link in site.contact.links {
                        (pill_link(link.href, link.label.label()))
                    }
                }
                (copyright(ctx.year, site.artist.name))
            }
        }
    }
}
