//! Reel downloader entry point.
//!
//! Always prints exactly one JSON line on stdout unless a fatal error occurs.

use std::process::ExitCode;

use media_fetch::{
    cli::{init_logging, parse_args, ReelArgs, REEL_USAGE},
    error::{exit_codes, Result},
    fetch_reel,
    output::{print_error, write_json_line},
    FetchOutcome, YtDlp,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let Some(args) = parse_args::<ReelArgs, _, _>(std::env::args_os(), REEL_USAGE) else {
        // Nothing to fetch
        return match write_json_line(&mut std::io::stdout().lock(), &FetchOutcome::default()) {
            Ok(()) => ExitCode::from(exit_codes::SUCCESS),
            Err(_) => ExitCode::from(exit_codes::FAILURE),
        };
    };

    init_logging(args.common.debug);

    match run(args).await {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            print_error(&format!("{}", e));
            ExitCode::from(exit_codes::FAILURE)
        }
    }
}

async fn run(args: ReelArgs) -> Result<u8> {
    let config = args.common.load_config()?;
    let extractor = YtDlp::from_config(&config.extractor);

    let mut stdout = std::io::stdout().lock();
    fetch_reel(
        &extractor,
        &config.download_directory(),
        args.post_url.as_deref(),
        &mut stdout,
    )
    .await
}
