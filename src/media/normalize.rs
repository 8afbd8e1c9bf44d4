//! Reduction of extraction results to the videos that were downloaded.

use std::path::{Path, PathBuf};

use crate::media::item::{ExtractionResult, FetchOutcome};

/// Collect downloaded video paths and the caption from a result.
///
/// Images, failed entries and entries without a written file are skipped.
/// Relative paths are resolved against the working directory. The caption
/// prefers the description, then the title, then the empty string.
pub fn normalize(result: &ExtractionResult) -> FetchOutcome {
    let video_paths: Vec<PathBuf> = result
        .entries()
        .filter(|entry| entry.is_downloaded_video())
        .filter_map(|entry| entry.resolved_file_path.as_deref())
        .map(absolute)
        .collect();

    if video_paths.is_empty() {
        tracing::info!("No video entries in extraction result");
    } else {
        tracing::debug!("Normalized {} video path(s)", video_paths.len());
    }

    let caption = result
        .description
        .as_deref()
        .filter(|s| !s.is_empty())
        .or_else(|| result.title.as_deref().filter(|s| !s.is_empty()))
        .unwrap_or_default()
        .to_string();

    FetchOutcome {
        video_paths,
        caption,
    }
}

fn absolute(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }

    match std::env::current_dir() {
        Ok(cwd) => cwd.join(path),
        Err(_) => path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::item::MediaEntry;

    #[test]
    fn test_normalize_interleaved_collection() {
        let result = ExtractionResult::collection(vec![
            Some(MediaEntry::image("/d/1.jpg")),
            Some(MediaEntry::video("/d/2.mp4")),
            None,
            Some(MediaEntry::image("/d/3.webp")),
            Some(MediaEntry::video("/d/4.mp4")),
            Some(MediaEntry::video("/d/5.mp4")),
        ]);

        let outcome = normalize(&result);
        assert_eq!(
            outcome.video_paths,
            vec![
                PathBuf::from("/d/2.mp4"),
                PathBuf::from("/d/4.mp4"),
                PathBuf::from("/d/5.mp4"),
            ]
        );
    }

    #[test]
    fn test_normalize_no_videos() {
        let result = ExtractionResult::collection(vec![
            Some(MediaEntry::image("/d/1.jpg")),
            None,
        ]);

        let outcome = normalize(&result);
        assert!(outcome.video_paths.is_empty());
        assert_eq!(outcome.caption, "");
    }

    #[test]
    fn test_normalize_skips_unwritten_video() {
        let placeholder = MediaEntry {
            id: Some("x".into()),
            is_video: true,
            resolved_file_path: None,
        };
        let outcome = normalize(&ExtractionResult::single(placeholder));
        assert!(outcome.video_paths.is_empty());
    }

    #[test]
    fn test_normalize_relative_path_made_absolute() {
        let outcome = normalize(&ExtractionResult::single(MediaEntry::video(
            "downloads/x.mp4",
        )));

        assert_eq!(outcome.video_paths.len(), 1);
        assert!(outcome.video_paths[0].is_absolute());
        assert!(outcome.video_paths[0].ends_with("downloads/x.mp4"));
    }

    #[test]
    fn test_caption_fallback_chain() {
        let entry = MediaEntry::video("/d/x.mp4");

        let both = ExtractionResult::single(entry.clone())
            .with_description("long text")
            .with_title("short");
        assert_eq!(normalize(&both).caption, "long text");

        let empty_description = ExtractionResult::single(entry.clone())
            .with_description("")
            .with_title("short");
        assert_eq!(normalize(&empty_description).caption, "short");

        let neither = ExtractionResult::single(entry);
        assert_eq!(normalize(&neither).caption, "");
    }
}
