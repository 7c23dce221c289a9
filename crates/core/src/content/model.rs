//! Typed content schema for the portfolio site.
//!
//! Every entity borrows `'static` data so the whole aggregate can live in a
//! `static` and be shared by reference without construction at runtime.

// ---------------------------------------------------------------------------
// Enumerations
// ---------------------------------------------------------------------------

/// Platform named by a streaming, social or contact link.
///
/// The label doubles as the key the renderer uses to pick an icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Spotify,
    AppleMusic,
    Instagram,
    TikTok,
    YouTube,
    LinkedIn,
}

impl Platform {
    /// Human-readable label, as shown next to the icon.
    pub fn label(self) -> &'static str {
        match self {
            Self::Spotify => "Spotify",
            Self::AppleMusic => "Apple Music",
            Self::Instagram => "Instagram",
            Self::TikTok => "TikTok",
            Self::YouTube => "YouTube",
            Self::LinkedIn => "LinkedIn",
        }
    }
}

/// Channel on which weekly covers are published.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoverPlatform {
    Instagram,
    TikTok,
    YouTubeShorts,
}

impl CoverPlatform {
    pub const ALL: [CoverPlatform; 3] = [Self::Instagram, Self::TikTok, Self::YouTubeShorts];

    pub fn label(self) -> &'static str {
        match self {
            Self::Instagram => "Instagram",
            Self::TikTok => "TikTok",
            Self::YouTubeShorts => "YouTube Shorts",
        }
    }
}

/// Release state of an EP track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackStatus {
    OutNow,
    Upcoming,
}

impl TrackStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::OutNow => "out now",
            Self::Upcoming => "upcoming",
        }
    }

    pub fn is_released(self) -> bool {
        matches!(self, Self::OutNow)
    }
}

// ---------------------------------------------------------------------------
// Entities
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct ArtistProfile {
    pub name: &'static str,
    pub tagline: &'static str,
    pub biography: &'static str,
}

/// An outbound link to one of the artist's profiles.
#[derive(Debug, Clone)]
pub struct SocialLink {
    pub label: Platform,
    pub href: &'static str,
}

/// Streaming links share the social link shape.
pub type StreamingLink = SocialLink;

#[derive(Debug, Clone)]
pub struct WeeklyCoverChannel {
    pub platform: CoverPlatform,
    pub description: &'static str,
    pub href: &'static str,
}

/// Kind of action link attached to a released track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackAction {
    Spotify,
    AppleMusic,
    VisualVideo,
}

impl TrackAction {
    pub fn label(self) -> &'static str {
        match self {
            Self::Spotify => "Spotify",
            Self::AppleMusic => "Apple Music",
            Self::VisualVideo => "Visual Video (YouTube)",
        }
    }
}

#[derive(Debug, Clone)]
pub struct EpTrack {
    pub title: &'static str,
    pub status: TrackStatus,
    pub description: &'static str,
    pub spotify_url: Option<&'static str>,
    pub apple_music_url: Option<&'static str>,
    pub visual_video_url: Option<&'static str>,
}

impl EpTrack {
    /// Action links that may be rendered for this track, in display order.
    ///
    /// Upcoming tracks never expose links, even when URLs are filled in.
    pub fn action_links(&self) -> Vec<(TrackAction, &'static str)> {
        if !self.status.is_released() {
            return Vec::new();
        }

        [
            (TrackAction::Spotify, self.spotify_url),
            (TrackAction::AppleMusic, self.apple_music_url),
            (TrackAction::VisualVideo, self.visual_video_url),
        ]
        .into_iter()
        .filter_map(|(action, url)| url.map(|u| (action, u)))
        .collect()
    }
}

#[derive(Debug, Clone)]
pub struct Ep {
    pub title: &'static str,
    pub description: &'static str,
    pub tracks: &'static [EpTrack],
}

impl Ep {
    /// Tracks paired with their 1-based position.
    pub fn numbered_tracks(&self) -> impl Iterator<Item = (usize, &EpTrack)> + '_ {
        self.tracks.iter().enumerate().map(|(idx, t)| (idx + 1, t))
    }
}

#[derive(Debug, Clone)]
pub struct ImageAsset {
    pub src: &'static str,
    pub alt: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct CoveredSong {
    pub title: &'static str,
    pub artist: Option<&'static str>,
    pub featuring: Option<&'static str>,
    pub instagram_post_url: &'static str,
    pub youtube_url: Option<&'static str>,
}

impl CoveredSong {
    /// Display/lookup key: title and origin post together.
    pub fn key(&self) -> String {
        format!("{}-{}", self.title, self.instagram_post_url)
    }

    pub fn has_full_video(&self) -> bool {
        self.youtube_url.is_some()
    }
}

/// Footer block inviting visitors to get in touch.
#[derive(Debug, Clone)]
pub struct ContactSection {
    pub heading: &'static str,
    pub blurb: &'static str,
    pub links: &'static [SocialLink],
}

// ---------------------------------------------------------------------------
// Aggregate root
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct SiteContent {
    pub artist: ArtistProfile,
    pub streaming: &'static [StreamingLink],
    pub socials: &'static [SocialLink],
    pub weekly_covers: &'static [WeeklyCoverChannel],
    pub album_cover: ImageAsset,
    pub ep: Ep,
    pub covers_description: &'static str,
    pub contact: ContactSection,
    /// Oldest first. Never reorder in place.
    pub cover_index: &'static [CoveredSong],
}

impl SiteContent {
    pub fn cover_count(&self) -> usize {
        self.cover_index.len()
    }

    /// Covers with the most recent first, leaving the stored order intact.
    pub fn covers_newest_first(
        &self,
    ) -> impl DoubleEndedIterator<Item = &CoveredSong> + ExactSizeIterator + '_ {
        self.cover_index.iter().rev()
    }

    pub fn weekly_cover(&self, platform: CoverPlatform) -> Option<&WeeklyCoverChannel> {
        self.weekly_covers.iter().find(|c| c.platform == platform)
    }
}
