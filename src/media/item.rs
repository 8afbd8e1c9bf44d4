//! Extraction result representation.

use std::path::PathBuf;

/// One media item reported by the extractor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaEntry {
    /// Extractor-assigned identifier, if any.
    pub id: Option<String>,

    /// Whether this entry is video media.
    pub is_video: bool,

    /// Where the extractor wrote the file, if it wrote one.
    pub resolved_file_path: Option<PathBuf>,
}

impl MediaEntry {
    /// Create a video entry written to `path`.
    pub fn video(path: impl Into<PathBuf>) -> Self {
        Self {
            id: None,
            is_video: true,
            resolved_file_path: Some(path.into()),
        }
    }

    /// Create a non-video entry (image, thumbnail) written to `path`.
    pub fn image(path: impl Into<PathBuf>) -> Self {
        Self {
            id: None,
            is_video: false,
            resolved_file_path: Some(path.into()),
        }
    }

    /// Whether this entry counts as a downloaded video.
    pub fn is_downloaded_video(&self) -> bool {
        self.is_video && self.resolved_file_path.is_some()
    }
}

/// Shape of an extraction result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultShape {
    /// A single post.
    Single(MediaEntry),
    /// A carousel or playlist. `None` marks an entry whose extraction failed
    /// while failures were tolerated.
    Collection(Vec<Option<MediaEntry>>),
}

/// Everything the extractor reported for one URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionResult {
    pub shape: ResultShape,

    /// Long-form description of the post.
    pub description: Option<String>,

    /// Short title of the post.
    pub title: Option<String>,
}

impl ExtractionResult {
    /// Wrap a single entry.
    pub fn single(entry: MediaEntry) -> Self {
        Self {
            shape: ResultShape::Single(entry),
            description: None,
            title: None,
        }
    }

    /// Wrap a collection of entries.
    pub fn collection(entries: Vec<Option<MediaEntry>>) -> Self {
        Self {
            shape: ResultShape::Collection(entries),
            description: None,
            title: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Whether this result describes more than one post entry.
    pub fn is_collection(&self) -> bool {
        matches!(self.shape, ResultShape::Collection(_))
    }

    /// Iterate over the entries that were extracted successfully, in order.
    pub fn entries(&self) -> Box<dyn Iterator<Item = &MediaEntry> + '_> {
        match &self.shape {
            ResultShape::Single(entry) => Box::new(std::iter::once(entry)),
            ResultShape::Collection(entries) => Box::new(entries.iter().flatten()),
        }
    }
}

/// Terminal result of one fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchOutcome {
    /// Absolute paths of downloaded videos, in extractor order.
    pub video_paths: Vec<PathBuf>,

    /// Post caption, possibly empty.
    pub caption: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_skip_failed_slots() {
        let result = ExtractionResult::collection(vec![
            Some(MediaEntry::video("/d/a.mp4")),
            None,
            Some(MediaEntry::image("/d/b.jpg")),
        ]);

        assert!(result.is_collection());
        assert_eq!(result.entries().count(), 2);
    }

    #[test]
    fn test_single_entries() {
        let result = ExtractionResult::single(MediaEntry::video("/d/a.mp4"));
        assert!(!result.is_collection());
        assert_eq!(result.entries().count(), 1);
    }

    #[test]
    fn test_is_downloaded_video() {
        assert!(MediaEntry::video("/d/a.mp4").is_downloaded_video());
        assert!(!MediaEntry::image("/d/a.jpg").is_downloaded_video());

        let placeholder = MediaEntry {
            is_video: true,
            ..Default::default()
        };
        assert!(!placeholder.is_downloaded_video());
    }
}
