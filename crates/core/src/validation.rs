//! Load-time checks for the content literal.
//!
//! The content is compiled in, so a failure here is a defect in the data,
//! not something to recover from. The server runs [`validate_site`] once at
//! startup and refuses to serve broken content.

use std::collections::HashSet;

use crate::content::{CoverPlatform, SiteContent, SocialLink};
use crate::error::CoreError;

/// Validate that a text field is not blank.
pub fn validate_non_empty(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    Ok(())
}

/// Validate that a link is an absolute `http(s)` URL with a host.
pub fn validate_absolute_url(field: &str, url: &str) -> Result<(), CoreError> {
    if url.contains(char::is_whitespace) {
        return Err(CoreError::Validation(format!(
            "{field} must not contain whitespace, got: '{url}'"
        )));
    }

    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .ok_or_else(|| {
            CoreError::Validation(format!(
                "{field} must start with http:// or https://, got: '{url}'"
            ))
        })?;

    let host = rest.split(['/', '?', '#']).next().unwrap_or_default();
    if host.is_empty() {
        return Err(CoreError::Validation(format!(
            "{field} has no host: '{url}'"
        )));
    }
    Ok(())
}

fn validate_links(section: &str, links: &[SocialLink]) -> Result<(), CoreError> {
    let mut seen = HashSet::new();
    for link in links {
        validate_absolute_url(&format!("{section}.{}", link.label.label()), link.href)?;
        if !seen.insert(link.label) {
            return Err(CoreError::Validation(format!(
                "{section} lists {} more than once",
                link.label.label()
            )));
        }
    }
    Ok(())
}

fn validate_optional_url(field: &str, url: Option<&str>) -> Result<(), CoreError> {
    match url {
        Some(u) => validate_absolute_url(field, u),
        None => Ok(()),
    }
}

/// Check every invariant of the content aggregate.
pub fn validate_site(site: &SiteContent) -> Result<(), CoreError> {
    validate_non_empty("artist.name", site.artist.name)?;
    validate_non_empty("artist.tagline", site.artist.tagline)?;
    validate_non_empty("artist.biography", site.artist.biography)?;

    validate_links("streaming", site.streaming)?;
    validate_links("socials", site.socials)?;
    validate_links("contact", site.contact.links)?;

    let mut platforms = HashSet::new();
    for channel in site.weekly_covers {
        validate_absolute_url(channel.platform.label(), channel.href)?;
        if !platforms.insert(channel.platform) {
            return Err(CoreError::Validation(format!(
                "weekly covers list {} more than once",
                channel.platform.label()
            )));
        }
    }
    if let Some(missing) = CoverPlatform::ALL.iter().find(|p| !platforms.contains(*p)) {
        return Err(CoreError::Validation(format!(
            "weekly covers are missing a {} channel",
            missing.label()
        )));
    }

    validate_non_empty("album_cover.src", site.album_cover.src)?;

    if site.ep.tracks.is_empty() {
        return Err(CoreError::Validation("EP must list at least one track".into()));
    }
    for (number, track) in site.ep.numbered_tracks() {
        validate_non_empty(&format!("track {number} title"), track.title)?;
        validate_optional_url(&format!("track {number} spotify"), track.spotify_url)?;
        validate_optional_url(&format!("track {number} apple music"), track.apple_music_url)?;
        validate_optional_url(&format!("track {number} video"), track.visual_video_url)?;
    }

    // Thumbnails are keyed by title alone.
    let mut titles = HashSet::new();
    for song in site.cover_index {
        validate_non_empty("cover title", song.title)?;
        validate_absolute_url(song.title, song.instagram_post_url)?;
        validate_optional_url(song.title, song.youtube_url)?;
        if !titles.insert(song.title) {
            return Err(CoreError::Validation(format!(
                "cover '{}' is indexed more than once",
                song.title
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::content::{CoveredSong, SITE};

    #[test]
    fn shipped_content_is_valid() {
        assert_matches!(validate_site(&SITE), Ok(()));
    }

    #[test]
    fn https_url_accepted() {
        assert!(validate_absolute_url("x", "https://www.instagram.com/p/abc/").is_ok());
        assert!(validate_absolute_url("x", "http://example.com").is_ok());
    }

    #[test]
    fn relative_url_rejected() {
        assert_matches!(
            validate_absolute_url("x", "/images/Cover.png"),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn url_without_host_rejected() {
        assert_matches!(
            validate_absolute_url("x", "https:///path"),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn url_with_whitespace_rejected() {
        assert_matches!(
            validate_absolute_url("x", "https://example.com/a b"),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn blank_text_rejected() {
        assert_matches!(
            validate_non_empty("artist.name", "   "),
            Err(CoreError::Validation(msg)) if msg.contains("artist.name")
        );
    }

    #[test]
    fn duplicate_cover_rejected() {
        static DUPES: [CoveredSong; 2] = [
            CoveredSong {
                title: "Sparks",
                artist: None,
                featuring: None,
                instagram_post_url: "https://www.instagram.com/p/a/",
                youtube_url: None,
            },
            CoveredSong {
                title: "Sparks",
                artist: Some("Coldplay"),
                featuring: None,
                instagram_post_url: "https://www.instagram.com/p/a/",
                youtube_url: None,
            },
        ];
        let site = SiteContent {
            cover_index: &DUPES,
            ..SITE.clone()
        };
        assert_matches!(
            validate_site(&site),
            Err(CoreError::Validation(msg)) if msg.contains("Sparks")
        );
    }

    #[test]
    fn repeated_title_on_another_post_rejected() {
        static SAME_TITLE: [CoveredSong; 2] = [
            CoveredSong {
                title: "Sparks",
                artist: None,
                featuring: None,
                instagram_post_url: "https://www.instagram.com/p/a/",
                youtube_url: None,
            },
            CoveredSong {
                title: "Sparks",
                artist: None,
                featuring: None,
                instagram_post_url: "https://www.instagram.com/p/b/",
                youtube_url: None,
            },
        ];
        let site = SiteContent {
            cover_index: &SAME_TITLE,
            ..SITE.clone()
        };
        assert_matches!(
            validate_site(&site),
            Err(CoreError::Validation(msg)) if msg.contains("'Sparks' is indexed more than once")
        );
    }

    #[test]
    fn missing_channel_rejected() {
        let site = SiteContent {
            weekly_covers: &SITE.weekly_covers[..2],
            ..SITE.clone()
        };
        assert_matches!(
            validate_site(&site),
            Err(CoreError::Validation(msg)) if msg.contains("YouTube Shorts")
        );
    }
}
