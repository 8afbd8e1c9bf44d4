//! Output name template generation.

use crate::config::Platform;
use crate::media::extract_post_id;

/// Extractor placeholder for the per-download counter.
pub const AUTONUMBER: &str = "%(autonumber)s";

/// Extractor placeholder for the file extension.
pub const EXT: &str = "%(ext)s";

/// Extractor placeholder for the media identifier.
pub const ID: &str = "%(id)s";

/// Build the default name template for a platform.
///
/// - Facebook: `None`, the caller always supplies a name
/// - Instagram: `<post id>_<autonumber>.<ext>`
/// - Reel: `<media id>.<ext>`
pub fn default_template(platform: Platform, url: &str) -> Option<String> {
    match platform {
        Platform::Facebook => None,
        Platform::Instagram => Some(format!("{}_{}.{}", extract_post_id(url), AUTONUMBER, EXT)),
        Platform::Reel => Some(format!("{}.{}", ID, EXT)),
    }
}
