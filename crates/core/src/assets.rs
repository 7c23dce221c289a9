//! Image asset path conventions.
//!
//! Cover thumbnails are looked up by a slug derived from the song title. The
//! slug rules are deliberately narrow (lowercase, apostrophes, whitespace) so
//! they match the filenames the asset pipeline already produced; any other
//! punctuation is passed through untouched.

use std::sync::LazyLock;

use regex::Regex;

/// Directory under which cover thumbnails are served.
pub const COVER_IMAGE_DIR: &str = "/images/covers";

/// Size/format suffix shared by every cover thumbnail.
pub const COVER_IMAGE_SUFFIX: &str = "-web-500x307.webp";

/// Hero album cover.
pub const ALBUM_COVER_PATH: &str = "/images/Cover.png";

// The whitespace set of the asset pipeline's slugger, which differs from
// Unicode `\s`: U+FEFF counts as whitespace, U+0085 does not.
static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"[\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]+",
    )
    .expect("valid regex")
});

/// Derive the filename slug for a cover title.
///
/// Steps, in order: lowercase, replace every `'` with `-`, collapse each run
/// of whitespace into a single `-`.
///
/// ```
/// use portfolio_core::assets::cover_slug;
///
/// assert_eq!(cover_slug("Rewrite the Stars"), "rewrite-the-stars");
/// assert_eq!(cover_slug("I'd Rather Pretend"), "i-d-rather-pretend");
/// ```
pub fn cover_slug(title: &str) -> String {
    let lowered = title.to_lowercase().replace('\'', "-");
    WHITESPACE_RUN.replace_all(&lowered, "-").into_owned()
}

/// Resolve the thumbnail path for a cover title.
///
/// Convention: `/images/covers/{slug}-web-500x307.webp`. The file is not
/// checked for existence.
pub fn cover_image_path(title: &str) -> String {
    format!("{COVER_IMAGE_DIR}/{}{COVER_IMAGE_SUFFIX}", cover_slug(title))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multi_word_title() {
        assert_eq!(
            cover_image_path("Rewrite the Stars"),
            "/images/covers/rewrite-the-stars-web-500x307.webp"
        );
    }

    #[test]
    fn apostrophe_becomes_hyphen() {
        assert_eq!(
            cover_image_path("It Can't Understand"),
            "/images/covers/it-can-t-understand-web-500x307.webp"
        );
        assert_eq!(cover_slug("Don't Want a Love Song"), "don-t-want-a-love-song");
    }

    #[test]
    fn whitespace_runs_collapse_to_one_hyphen() {
        assert_eq!(cover_slug("Slow  \t Walk"), "slow-walk");
    }

    #[test]
    fn whitespace_set_matches_asset_filenames() {
        assert_eq!(cover_slug("Slow\u{FEFF}Walk"), "slow-walk");
        assert_eq!(cover_slug("Slow\u{A0}\u{3000}Walk"), "slow-walk");
        assert_eq!(cover_slug("Slow\u{85}Walk"), "slow\u{85}walk");
    }

    #[test]
    fn leading_and_trailing_whitespace_is_kept_as_hyphen() {
        assert_eq!(cover_slug(" Ponyo "), "-ponyo-");
    }

    #[test]
    fn other_punctuation_passes_through() {
        assert_eq!(cover_slug("Hello, World: Live"), "hello,-world:-live");
    }

    #[test]
    fn single_word_title() {
        assert_eq!(
            cover_image_path("Ponyo"),
            "/images/covers/ponyo-web-500x307.webp"
        );
    }

    #[test]
    fn empty_title() {
        assert_eq!(cover_image_path(""), "/images/covers/-web-500x307.webp");
    }

    #[test]
    fn deterministic_across_calls() {
        for song in crate::content::SITE.cover_index {
            assert_eq!(cover_image_path(song.title), cover_image_path(song.title));
        }
    }
}
