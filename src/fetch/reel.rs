//! Reel download with a JSON report.

use std::io::Write;
use std::path::Path;

use crate::config::Platform;
use crate::error::{exit_codes, Result};
use crate::extractor::{ExtractOptions, Extractor};
use crate::fs::OutputTarget;
use crate::media::{normalize, FetchOutcome};
use crate::output::{print_error, write_json_line};

/// Download a reel and print `{"videos": [...], "caption": "..."}`.
///
/// The JSON line is printed even when there is no URL or the extractor
/// fails; extraction errors only go to stderr. Filesystem errors are
/// returned as `Err`.
pub async fn fetch_reel(
    extractor: &dyn Extractor,
    downloads_dir: &Path,
    url: Option<&str>,
    out: &mut impl Write,
) -> Result<u8> {
    let Some(url) = url else {
        write_json_line(out, &FetchOutcome::default())?;
        return Ok(exit_codes::SUCCESS);
    };

    let target = OutputTarget::prepare(downloads_dir, Platform::Reel, url, None)?;
    let options = ExtractOptions::for_platform(Platform::Reel, &target);

    let outcome = match extractor.extract(url, &options).await {
        Ok(Some(extraction)) => normalize(&extraction),
        Ok(None) => FetchOutcome::default(),
        Err(e) => {
            print_error(&format!("Error downloading video: {}", e));
            FetchOutcome::default()
        }
    };

    write_json_line(out, &outcome)?;
    Ok(exit_codes::SUCCESS)
}
