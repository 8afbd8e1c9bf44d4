//! Configuration validation logic.

use crate::config::loader::Config;
use crate::error::{Error, Result};

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    if config.extractor.binary.as_os_str().is_empty() {
        return Err(Error::Config(
            "extractor.binary must name the yt-dlp executable".to_string(),
        ));
    }

    // The output template is owned by the entry point
    if config
        .extractor
        .extra_args
        .iter()
        .any(|arg| arg == "-o" || arg == "--output" || arg.starts_with("--output="))
    {
        return Err(Error::Config(
            "extractor.extra_args must not override the output template".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_empty_binary_rejected() {
        let mut config = Config::default();
        config.extractor.binary = PathBuf::new();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_output_override_rejected() {
        let mut config = Config::default();
        config.extractor.extra_args = vec!["-o".into(), "x.mp4".into()];
        assert!(validate_config(&config).is_err());

        config.extractor.extra_args = vec!["--output=x.mp4".into()];
        assert!(validate_config(&config).is_err());

        config.extractor.extra_args = vec!["--cookies".into(), "c.txt".into()];
        assert!(validate_config(&config).is_ok());
    }
}
