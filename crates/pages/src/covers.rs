//! Covers index: channel cards and the newest-first grid of every cover.

use maud::{html, Markup};
use portfolio_core::assets::cover_image_path;
use portfolio_core::content::{CoveredSong, SiteContent};

use crate::components::{copyright, external_link, nav, Icon, NavPage};
use crate::layout::{document, PageMeta};
use crate::RenderContext;

/// Render the full covers index document.
pub fn render_covers(site: &SiteContent, ctx: &RenderContext) -> Markup {
    let body = html! {
        header.covers-header {
            (nav(NavPage::Covers))
            div.intro {
                h1 { "Covers" }
                p.muted { (site.covers_description) }
            }
            div.channel-grid {
                @for channel in site.weekly_covers {
                    div.channel-card data-platform=(channel.platform.label()) {
                        div.channel-name { (channel.platform.label()) }
                        div.muted { (channel.description) }
                        div.channel-link { (external_link(channel.href, "View")) }
                    }
                }
            }
        }

        section.section {
            div.index-heading {
                h2 { "Cover index" }
                div.muted.cover-count { (site.cover_count()) " total" }
            }
            div.cover-grid {
                @for song in site.covers_newest_first() {
                    (render_cover_tile(song))
                }
            }
        }

        footer.page-footer {
            (copyright(ctx.year, site.artist.name))
        }
    };

    document(&PageMeta::covers(site), body)
}

/// One tile of the cover grid.
pub fn render_cover_tile(song: &CoveredSong) -> Markup {
    let full_video = song.has_full_video();

    html! {
        div.cover-tile.has-video[full_video] data-key=(song.key()) {
            img.cover-bg src=(cover_image_path(song.title)) alt="" aria-hidden="true" loading="lazy";
            div.cover-overlay aria-hidden="true" {}

            div.cover-text {
                div.badges {
                    @if full_video {
                        span.badge.badge-video { "full video" }
                    }
                    @if let Some(guest) = song.featuring {
                        span.badge.badge-feat { "feat. " (guest) }
                    }
                }
                div.cover-title { (song.title) }
                @if let Some(artist) = song.artist {
                    div.cover-artist { (artist) }
                }
            }
            div.cover-links {
                a.round-link href=(song.instagram_post_url) target="_blank" rel="noreferrer" aria-label="Instagram post" {
                    (Icon::Instagram.render(14))
                }
                @if let Some(youtube) = song.youtube_url {
                    a.round-link href=(youtube) target="_blank" rel="noreferrer" aria-label="YouTube video" {
                        (Icon::YouTube.render(14))
                    }
                }
            }
        }
    }
}
