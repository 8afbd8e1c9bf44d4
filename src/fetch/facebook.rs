//! Facebook video download.

use std::io::Write;
use std::path::Path;

use crate::config::Platform;
use crate::error::{exit_codes, Result};
use crate::extractor::{ExtractOptions, Extractor};
use crate::fetch::FetchRequest;
use crate::fs::OutputTarget;
use crate::media::normalize;
use crate::output::{create_spinner, print_error, write_status};

/// Download a Facebook post video and report progress as text.
///
/// Returns the exit code: success when the extractor finished, failure
/// when it reported an error. Filesystem errors are returned as `Err`.
pub async fn fetch_facebook(
    extractor: &dyn Extractor,
    downloads_dir: &Path,
    request: &FetchRequest,
    out: &mut impl Write,
) -> Result<u8> {
    let target = OutputTarget::prepare(
        downloads_dir,
        Platform::Facebook,
        &request.source_url,
        request.output_name_hint.as_deref(),
    )?;
    let output_path = target.template_path();
    let options = ExtractOptions::for_platform(Platform::Facebook, &target);

    write_status(out, &format!("Starting download from: {}", request.source_url))?;

    let spinner = create_spinner("Downloading...");
    let result = extractor.extract(&request.source_url, &options).await;
    spinner.finish_and_clear();

    match result {
        Ok(extraction) => {
            if let Some(extraction) = extraction {
                let outcome = normalize(&extraction);
                tracing::debug!("Extractor wrote {:?}", outcome.video_paths);
            }
            write_status(
                out,
                &format!("Successfully downloaded video to {}", output_path.display()),
            )?;
            Ok(exit_codes::SUCCESS)
        }
        Err(e) => {
            print_error(&format!("Error downloading video: {}", e));
            Ok(exit_codes::FAILURE)
        }
    }
}
