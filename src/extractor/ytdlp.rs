//! yt-dlp subprocess driver.

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, AsyncReadExt, BufReader};
use tokio::process::Command;

use crate::config::ExtractorConfig;
use crate::error::{Error, Result};
use crate::extractor::types::RawInfo;
use crate::extractor::{ExtractOptions, Extractor};
use crate::media::{parse_extraction, ExtractionResult};

/// Prefix yt-dlp puts on fatal diagnostics.
const ERROR_PREFIX: &str = "ERROR:";

/// Extractor backed by the `yt-dlp` executable.
#[derive(Debug, Clone)]
pub struct YtDlp {
    binary: PathBuf,
    extra_args: Vec<String>,
}

impl YtDlp {
    /// Create a driver for the given executable.
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
            extra_args: Vec::new(),
        }
    }

    /// Create a driver from configuration.
    pub fn from_config(config: &ExtractorConfig) -> Self {
        Self {
            binary: config.binary.clone(),
            extra_args: config.extra_args.clone(),
        }
    }

    /// Build the command line for one run.
    ///
    /// The final info JSON is printed on stdout once downloads finish.
    pub fn build_args(&self, url: &str, options: &ExtractOptions) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec![
            "--dump-single-json".into(),
            "--no-simulate".into(),
            "-o".into(),
            options.output_template.clone().into_os_string(),
        ];

        if let Some(format) = &options.format {
            args.push("-f".into());
            args.push(format.into());
        }

        args.push(if options.allow_playlist {
            "--yes-playlist".into()
        } else {
            "--no-playlist".into()
        });

        args.push(if options.ignore_errors {
            "--ignore-errors".into()
        } else {
            "--abort-on-error".into()
        });

        if options.quiet {
            args.push("--quiet".into());
        } else {
            args.push("--progress".into());
        }

        if options.no_warnings {
            args.push("--no-warnings".into());
        }

        args.extend(self.extra_args.iter().map(OsString::from));

        args.push("--".into());
        args.push(url.into());
        args
    }
}

#[async_trait]
impl Extractor for YtDlp {
    async fn extract(&self, url: &str, options: &ExtractOptions) -> Result<Option<ExtractionResult>> {
        let args = self.build_args(url, options);
        tracing::debug!("Running {} {:?}", self.binary.display(), args);

        let mut child = Command::new(&self.binary)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    Error::ExtractorNotFound(self.binary.display().to_string())
                } else {
                    Error::Io(e)
                }
            })?;

        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| Error::Download("Failed to capture yt-dlp stdout".to_string()))?;
        let stderr = child
            .stderr
            .take()
            .ok_or_else(|| Error::Download("Failed to capture yt-dlp stderr".to_string()))?;

        let forward = !options.quiet;

        let read_stdout = async {
            let mut buf = Vec::new();
            BufReader::new(stdout).read_to_end(&mut buf).await?;
            Ok::<_, std::io::Error>(buf)
        };

        let read_stderr = async {
            let mut lines = BufReader::new(stderr).lines();
            let mut last_error = None;
            while let Some(line) = lines.next_line().await? {
                if forward {
                    eprintln!("{}", line);
                } else {
                    tracing::debug!("yt-dlp: {}", line);
                }
                if let Some(message) = line.strip_prefix(ERROR_PREFIX) {
                    last_error = Some(message.trim().to_string());
                }
            }
            Ok::<_, std::io::Error>(last_error)
        };

        let (stdout_bytes, last_error) = tokio::try_join!(read_stdout, read_stderr)?;
        let status = child.wait().await?;

        interpret_output(
            status.success(),
            status.code(),
            &stdout_bytes,
            last_error,
            options.ignore_errors,
        )
    }
}

/// Turn a finished yt-dlp run into an extraction result.
fn interpret_output(
    success: bool,
    code: Option<i32>,
    stdout: &[u8],
    last_error: Option<String>,
    ignore_errors: bool,
) -> Result<Option<ExtractionResult>> {
    let failure_message = || {
        last_error.clone().unwrap_or_else(|| match code {
            Some(code) => format!("yt-dlp exited with status {}", code),
            None => "yt-dlp was terminated by a signal".to_string(),
        })
    };

    if !success && !ignore_errors {
        return Err(Error::Download(failure_message()));
    }

    let text = String::from_utf8_lossy(stdout);
    let json = text.trim();

    if json.is_empty() || json == "null" {
        if !success {
            tracing::warn!("Nothing extracted: {}", failure_message());
        }
        return Ok(None);
    }

    if !success {
        tracing::warn!("Some entries failed: {}", failure_message());
    }

    let info: RawInfo = serde_json::from_str(json)?;
    Ok(Some(parse_extraction(info)))
}
