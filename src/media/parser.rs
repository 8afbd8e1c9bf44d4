//! Conversion of raw extractor output into extraction results.

use std::path::PathBuf;

use crate::extractor::types::RawInfo;
use crate::media::item::{ExtractionResult, MediaEntry, ResultShape};

/// Extensions treated as still images when the extractor doesn't say.
const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "heic", "gif"];

/// Convert a raw info dictionary into an [`ExtractionResult`].
///
/// Nested collections are flattened so entry order matches post order.
pub fn parse_extraction(mut info: RawInfo) -> ExtractionResult {
    let description = non_empty(info.description.take());
    let title = non_empty(info.title.take());

    let shape = match info.entries.take() {
        Some(entries) => {
            let mut flat = Vec::with_capacity(entries.len());
            flatten_entries(entries, &mut flat);
            ResultShape::Collection(flat)
        }
        None => ResultShape::Single(parse_entry(&info)),
    };

    ExtractionResult {
        shape,
        description,
        title,
    }
}

fn flatten_entries(entries: Vec<Option<RawInfo>>, out: &mut Vec<Option<MediaEntry>>) {
    for entry in entries {
        match entry {
            Some(RawInfo {
                entries: Some(nested),
                ..
            }) => flatten_entries(nested, out),
            Some(info) => out.push(Some(parse_entry(&info))),
            None => out.push(None),
        }
    }
}

fn parse_entry(info: &RawInfo) -> MediaEntry {
    MediaEntry {
        id: info.id.clone(),
        is_video: detect_video(info),
        resolved_file_path: resolve_path(info),
    }
}

/// Decide whether an entry is video media.
fn detect_video(info: &RawInfo) -> bool {
    if let Some(is_video) = info.is_video {
        return is_video;
    }

    if let Some(vcodec) = &info.vcodec {
        return vcodec != "none";
    }

    match &info.ext {
        Some(ext) => !IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()),
        None => true,
    }
}

/// Pick the path the extractor wrote, most specific field first.
fn resolve_path(info: &RawInfo) -> Option<PathBuf> {
    info.requested_downloads
        .iter()
        .rev()
        .find_map(|d| d.filepath.clone())
        .or_else(|| info.filepath.clone())
        .or_else(|| info.legacy_filename.clone())
        .or_else(|| info.filename.clone())
        .and_then(non_empty_path)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

fn non_empty_path(value: String) -> Option<PathBuf> {
    (!value.is_empty()).then(|| PathBuf::from(value))
}
