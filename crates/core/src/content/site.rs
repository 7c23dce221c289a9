//! The site's content, defined once as a literal.
//!
//! To add a cover, append it to the end of [`COVER_INDEX`]. Pages derive the
//! count and the newest-first order from this list.

use super::model::{
    ArtistProfile, ContactSection, CoverPlatform, CoveredSong, Ep, EpTrack, ImageAsset, Platform,
    SiteContent, SocialLink, StreamingLink, TrackStatus, WeeklyCoverChannel,
};
use crate::assets::ALBUM_COVER_PATH;

const INSTAGRAM_PROFILE: &str = "https://www.instagram.com/terencedumas/";
const TIKTOK_PROFILE: &str = "https://www.tiktok.com/@terencedumasmusic";
const YOUTUBE_CHANNEL: &str = "https://www.youtube.com/@terencedumas";

static STREAMING: [StreamingLink; 2] = [
    SocialLink {
        label: Platform::Spotify,
        href: "https://open.spotify.com/artist/3EQzwSPbIFX0rWxWCP5ofw?si=rcyTIzviR7iNNiuLQJn_jw",
    },
    SocialLink {
        label: Platform::AppleMusic,
        href: "https://music.apple.com/us/artist/terence-dumas/1872041101",
    },
];

static SOCIALS: [SocialLink; 3] = [
    SocialLink {
        label: Platform::Instagram,
        href: INSTAGRAM_PROFILE,
    },
    SocialLink {
        label: Platform::TikTok,
        href: TIKTOK_PROFILE,
    },
    SocialLink {
        label: Platform::YouTube,
        href: YOUTUBE_CHANNEL,
    },
];

static WEEKLY_COVERS: [WeeklyCoverChannel; 3] = [
    WeeklyCoverChannel {
        platform: CoverPlatform::Instagram,
        description: "This is where I post my full covers. Definitely not algorithm friendly, but I'm doing this mainly as a self portfolio, and a way for friends and family to enjoy my work.",
        href: INSTAGRAM_PROFILE,
    },
    WeeklyCoverChannel {
        platform: CoverPlatform::TikTok,
        description: "This is where I try to optimize my videos for the algorithm. Not working super great so far, but I feel like I am slowly getting the hang of it.",
        href: TIKTOK_PROFILE,
    },
    WeeklyCoverChannel {
        platform: CoverPlatform::YouTubeShorts,
        description: "This is a sort of middle ground between my strategy for Instagram and Tiktok.",
        href: "https://www.youtube.com/@terencedumas/shorts",
    },
];

static EP_TRACKS: [EpTrack; 4] = [
    EpTrack {
        title: "It Can't Understand",
        status: TrackStatus::OutNow,
        description: "Track 1 of the EP. This is the intro song, with a visual video available.",
        spotify_url: Some("https://open.spotify.com/track/3NxBvEOmhce0gEupxAI9kt?si=ac7dfa59d87047f9"),
        apple_music_url: Some("https://music.apple.com/us/song/it-cant-understand/1872271006"),
        visual_video_url: Some("https://www.youtube.com/watch?v=w8b0pCX_ojw"),
    },
    upcoming("Track 2"),
    upcoming("Track 3"),
    upcoming("Track 4"),
];

const fn upcoming(title: &'static str) -> EpTrack {
    EpTrack {
        title,
        status: TrackStatus::Upcoming,
        description: "Upcoming track.",
        spotify_url: None,
        apple_music_url: None,
        visual_video_url: None,
    }
}

static CONTACT_LINKS: [SocialLink; 2] = [
    SocialLink {
        label: Platform::Instagram,
        href: INSTAGRAM_PROFILE,
    },
    SocialLink {
        label: Platform::LinkedIn,
        href: "https://www.linkedin.com/in/dumast/",
    },
];

const fn cover(
    title: &'static str,
    artist: &'static str,
    instagram_post_url: &'static str,
) -> CoveredSong {
    CoveredSong {
        title,
        artist: Some(artist),
        featuring: None,
        instagram_post_url,
        youtube_url: None,
    }
}

const fn with_video(song: CoveredSong, youtube_url: &'static str) -> CoveredSong {
    CoveredSong {
        youtube_url: Some(youtube_url),
        ..song
    }
}

const fn featuring(song: CoveredSong, guest: &'static str) -> CoveredSong {
    CoveredSong {
        featuring: Some(guest),
        ..song
    }
}

/// Every cover, oldest first.
pub static COVER_INDEX: [CoveredSong; 19] = [
    with_video(
        cover("Next Summer", "Damiano David", "https://www.instagram.com/p/DPo3vKyElJi/"),
        "https://www.youtube.com/watch?v=QyqnFLOXE8c",
    ),
    with_video(
        cover("Mon Amour", "Slimane", "https://www.instagram.com/p/DQpGjV_gK-h/"),
        "https://www.youtube.com/watch?v=w5OO7PpbFRE",
    ),
    cover("Glimpse of Us", "Joji", "https://www.instagram.com/p/DQuQcqGEWz5/"),
    cover("The A Team", "Ed Sheeran", "https://www.instagram.com/p/DQ7ER-EEQAB/"),
    cover("Lucky", "Channie Duffman", "https://www.instagram.com/p/DRNDKzwER3s/"),
    cover("Yesterday", "The Beatles", "https://www.instagram.com/p/DRfR5hgj9wb/"),
    with_video(
        featuring(
            cover("The Vow", "Ed Sheeran", "https://www.instagram.com/p/DRz0dcJEWM9/"),
            "Robin Dumas",
        ),
        "https://www.youtube.com/watch?v=5pxcGWEHCt4",
    ),
    cover("Break My Heart Again", "FINNEAS", "https://www.instagram.com/p/DSDQRU5kSjF/"),
    cover("I'd Rather Pretend", "Bryant Barnes", "https://www.instagram.com/p/DSVPR9tkcKG/"),
    cover("Photograph", "Cody Fry", "https://www.instagram.com/p/DSoHjx0CLO0/"),
    cover("Who Knows", "Daniel Caesar", "https://www.instagram.com/p/DS0xzwQDwWA/"),
    cover("Wherever You Go", "Max Allais", "https://www.instagram.com/p/DTHA0zxDBDY/"),
    cover("Sparks", "Coldplay", "https://www.instagram.com/p/DTZEO7hjIw9/"),
    with_video(
        cover("Someone You Loved", "Lewis Capaldi", "https://www.instagram.com/p/DTrCSCcD91S/"),
        "https://www.youtube.com/watch?v=ATpNmi7Ubjg",
    ),
    cover("Don't Want a Love Song", "Bryant Barnes", "https://www.instagram.com/p/DT8_hB4j6-h/"),
    cover("All I Ask", "Adele", "https://www.instagram.com/p/DUPGAUaD8TJ/"),
    cover("Ponyo", "Randjess", "https://www.instagram.com/p/DUdt4xqkTrJ/"),
    cover("Rewrite the Stars", "The Greatest Showman", "https://www.instagram.com/p/DUwcM-5j6xr/"),
    cover("So Good", "Weston Estate", "https://www.instagram.com/p/DVFF7lCjwHD/"),
];

/// The site content aggregate. Read-only for the life of the process.
pub static SITE: SiteContent = SiteContent {
    artist: ArtistProfile {
        name: "Terence Dumas",
        tagline: "Original EP in progress • Weekly covers",
        biography: "I'm currently a student at UT Austin studying Computer Science, Math and Robotics. Completely unrelated to school, music and video production are my favorite hobbies. I pride myself in doing everything from the ground up: I write, record, and produce my own songs and videos. As of right now, I am building an original EP (opener song out now). I also post weekly covers across Instagram, TikTok, and YouTube.",
    },
    streaming: &STREAMING,
    socials: &SOCIALS,
    weekly_covers: &WEEKLY_COVERS,
    album_cover: ImageAsset {
        src: ALBUM_COVER_PATH,
        alt: "Album cover art",
    },
    ep: Ep {
        title: "Myself First - EP roadmap",
        description: "Four tracks. Track 1 is out now — the next three are currently upcoming.",
        tracks: &EP_TRACKS,
    },
    covers_description: "I release one cover per week across platforms. Everything you hear has been actually played by me, whether that is on the keyboard, guitar, or cajon. Most of the times, all the instruments you hear are visible in the video as a camera angle, except for harmonies. Below is a running index linked to the Instagram post for each cover.",
    contact: ContactSection {
        heading: "Contact",
        blurb: "Best way to reach me is via Instagram DM.",
        links: &CONTACT_LINKS,
    },
    cover_index: &COVER_INDEX,
};

/// Borrow the site content.
pub fn site() -> &'static SiteContent {
    &SITE
}
