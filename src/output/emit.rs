//! Result emitters.

use std::io::{self, Write};

use serde::Serialize;

use crate::media::FetchOutcome;
use crate::output::json::to_python_json;

/// JSON payload read by downstream processes.
#[derive(Debug, Serialize)]
struct VideosPayload<'a> {
    videos: Vec<String>,
    caption: &'a str,
}

/// Write the outcome as one `{"videos": [...], "caption": "..."}` line.
pub fn write_json_line(out: &mut impl Write, outcome: &FetchOutcome) -> io::Result<()> {
    let payload = VideosPayload {
        videos: outcome
            .video_paths
            .iter()
            .map(|p| p.to_string_lossy().into_owned())
            .collect(),
        caption: &outcome.caption,
    };

    let line = to_python_json(&payload).map_err(io::Error::from)?;
    writeln!(out, "{}", line)?;
    out.flush()
}

/// Write each video path on its own line.
pub fn write_path_lines(out: &mut impl Write, outcome: &FetchOutcome) -> io::Result<()> {
    for path in &outcome.video_paths {
        writeln!(out, "{}", path.display())?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_json_line_empty() {
        let mut out = Vec::new();
        write_json_line(&mut out, &FetchOutcome::default()).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "{\"videos\": [], \"caption\": \"\"}\n"
        );
    }

    #[test]
    fn test_json_line_with_videos() {
        let outcome = FetchOutcome {
            video_paths: vec![PathBuf::from("/d/1.mp4"), PathBuf::from("/d/2.mp4")],
            caption: "Reel caption".into(),
        };

        let mut out = Vec::new();
        write_json_line(&mut out, &outcome).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "{\"videos\": [\"/d/1.mp4\", \"/d/2.mp4\"], \"caption\": \"Reel caption\"}\n"
        );
    }

    #[test]
    fn test_path_lines() {
        let outcome = FetchOutcome {
            video_paths: vec![PathBuf::from("/d/a.mp4"), PathBuf::from("/d/b.mp4")],
            caption: String::new(),
        };

        let mut out = Vec::new();
        write_path_lines(&mut out, &outcome).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "/d/a.mp4\n/d/b.mp4\n");
    }
}
