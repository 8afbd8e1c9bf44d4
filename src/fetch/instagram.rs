//! Instagram post download.

use std::io::Write;
use std::path::Path;

use crate::config::Platform;
use crate::error::{exit_codes, Result};
use crate::extractor::{ExtractOptions, Extractor};
use crate::fetch::FetchRequest;
use crate::fs::OutputTarget;
use crate::media::normalize;
use crate::output::{write_path_lines, write_status};

/// Download the videos of an Instagram post and print one path per line.
///
/// Carousel entries that fail are skipped by the extractor. Any error the
/// extractor does raise is returned to the caller.
pub async fn fetch_instagram(
    extractor: &dyn Extractor,
    downloads_dir: &Path,
    request: &FetchRequest,
    out: &mut impl Write,
) -> Result<u8> {
    let target = OutputTarget::prepare(
        downloads_dir,
        Platform::Instagram,
        &request.source_url,
        request.output_name_hint.as_deref(),
    )?;
    let options = ExtractOptions::for_platform(Platform::Instagram, &target);

    tracing::info!("Fetching {} into {}", request.source_url, target.directory.display());

    let Some(extraction) = extractor.extract(&request.source_url, &options).await? else {
        write_status(out, "No media found in this post.")?;
        return Ok(exit_codes::SUCCESS);
    };

    let outcome = normalize(&extraction);
    write_path_lines(out, &outcome)?;

    Ok(exit_codes::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::extractor::testing::MockExtractor;
    use crate::media::{ExtractionResult, MediaEntry};

    #[test]
    fn test_carousel_prints_only_videos() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("downloads");
        let extractor = MockExtractor::returning(ExtractionResult::collection(vec![
            Some(MediaEntry::image(dir.join("ABC123_00001.jpg"))),
            Some(MediaEntry::video(dir.join("ABC123_00002.mp4"))),
        ]));
        let request = FetchRequest::new("https://instagram.com/p/ABC123/", None);

        let mut out = Vec::new();
        let code =
            tokio_test::block_on(fetch_instagram(&extractor, &dir, &request, &mut out)).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(code, exit_codes::SUCCESS);
        assert_eq!(lines, vec![dir.join("ABC123_00002.mp4").display().to_string()]);

        let calls = extractor.calls.lock().unwrap();
        assert_eq!(
            calls[0].1.output_template,
            dir.join("ABC123_%(autonumber)s.%(ext)s")
        );
        assert!(calls[0].1.ignore_errors);
    }

    #[test]
    fn test_custom_name_used_verbatim() {
        let root = tempfile::tempdir().unwrap();
        let extractor = MockExtractor::returning(ExtractionResult::single(MediaEntry::video(
            root.path().join("clip.mp4"),
        )));
        let request = FetchRequest::new(
            "https://instagram.com/reel/XYZ/",
            Some("clip.mp4".to_string()),
        );

        let mut out = Vec::new();
        tokio_test::block_on(fetch_instagram(&extractor, root.path(), &request, &mut out))
            .unwrap();

        let calls = extractor.calls.lock().unwrap();
        assert_eq!(calls[0].1.output_template, root.path().join("clip.mp4"));
    }

    #[test]
    fn test_nothing_extracted() {
        let root = tempfile::tempdir().unwrap();
        let extractor = MockExtractor::empty();
        let request = FetchRequest::new("https://instagram.com/p/ABC123/", None);

        let mut out = Vec::new();
        let code =
            tokio_test::block_on(fetch_instagram(&extractor, root.path(), &request, &mut out))
                .unwrap();

        assert_eq!(code, exit_codes::SUCCESS);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "No media found in this post.\n"
        );
    }

    #[test]
    fn test_image_only_post_prints_nothing() {
        let root = tempfile::tempdir().unwrap();
        let extractor = MockExtractor::returning(ExtractionResult::single(MediaEntry::image(
            root.path().join("a.jpg"),
        )));
        let request = FetchRequest::new("https://instagram.com/p/ABC123/", None);

        let mut out = Vec::new();
        tokio_test::block_on(fetch_instagram(&extractor, root.path(), &request, &mut out))
            .unwrap();

        assert!(out.is_empty());
    }

    #[test]
    fn test_extractor_error_propagates() {
        let root = tempfile::tempdir().unwrap();
        let extractor = MockExtractor::failing("unsupported URL");
        let request = FetchRequest::new("https://instagram.com/p/ABC123/", None);

        let mut out = Vec::new();
        let err =
            tokio_test::block_on(fetch_instagram(&extractor, root.path(), &request, &mut out))
                .unwrap_err();

        assert!(matches!(err, Error::Download(_)));
        assert!(out.is_empty());
    }
}
