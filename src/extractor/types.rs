//! yt-dlp info JSON type definitions.

use serde::Deserialize;

/// Info dictionary printed by `yt-dlp --dump-single-json`.
///
/// Only the fields this crate reads are modeled; everything is optional
/// because extractors fill in different subsets.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawInfo {
    /// `"playlist"`, `"multi_video"`, `"url"` or absent for a plain video.
    #[serde(rename = "_type")]
    pub kind: Option<String>,

    pub id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,

    /// Present on collections; `null` slots are entries that failed.
    pub entries: Option<Vec<Option<RawInfo>>>,

    /// Set by some extractors (Instagram) to tell videos from images.
    pub is_video: Option<bool>,

    pub vcodec: Option<String>,
    pub ext: Option<String>,

    pub filepath: Option<String>,
    #[serde(rename = "_filename")]
    pub legacy_filename: Option<String>,
    pub filename: Option<String>,

    #[serde(default)]
    pub requested_downloads: Vec<RequestedDownload>,
}

/// One completed download attached to an info dictionary.
#[derive(Debug, Clone, Deserialize)]
pub struct RequestedDownload {
    pub filepath: Option<String>,
}
