//! Per-platform extractor presets.

use std::fmt;

/// Best mp4 video muxed with m4a audio, falling back to a combined stream.
pub const FACEBOOK_FORMAT: &str = "bestvideo[ext=mp4]+bestaudio[ext=m4a]/best[ext=mp4]/best";

/// Format requested for generic reels.
pub const REEL_FORMAT: &str = "mp4";

/// Supported source platforms, one per entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// Facebook video posts, saved under a caller-chosen name.
    Facebook,
    /// Instagram posts and carousels.
    Instagram,
    /// Generic reel links, reported as JSON.
    Reel,
}

impl Platform {
    /// Format selector passed to the extractor, `None` for its default.
    pub fn format(&self) -> Option<&'static str> {
        match self {
            Platform::Facebook => Some(FACEBOOK_FORMAT),
            Platform::Instagram => None,
            Platform::Reel => Some(REEL_FORMAT),
        }
    }

    /// Whether a link pointing into a playlist should fetch the whole playlist.
    pub fn allow_playlist(&self) -> bool {
        !matches!(self, Platform::Facebook)
    }

    /// Whether failed sub-entries are skipped instead of aborting.
    pub fn ignore_errors(&self) -> bool {
        matches!(self, Platform::Instagram)
    }

    /// Whether the extractor's own progress output is suppressed.
    pub fn quiet(&self) -> bool {
        !matches!(self, Platform::Instagram)
    }

    /// Whether extractor warnings are suppressed.
    pub fn no_warnings(&self) -> bool {
        matches!(self, Platform::Facebook)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Facebook => write!(f, "facebook"),
            Platform::Instagram => write!(f, "instagram"),
            Platform::Reel => write!(f, "reel"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facebook_preset() {
        let p = Platform::Facebook;
        assert_eq!(p.format(), Some(FACEBOOK_FORMAT));
        assert!(!p.allow_playlist());
        assert!(!p.ignore_errors());
        assert!(p.quiet());
        assert!(p.no_warnings());
    }

    #[test]
    fn test_instagram_preset() {
        let p = Platform::Instagram;
        assert_eq!(p.format(), None);
        assert!(p.allow_playlist());
        assert!(p.ignore_errors());
        assert!(!p.quiet());
    }

    #[test]
    fn test_reel_preset() {
        let p = Platform::Reel;
        assert_eq!(p.format(), Some("mp4"));
        assert!(p.quiet());
        assert!(!p.ignore_errors());
        assert_eq!(p.to_string(), "reel");
    }
}
