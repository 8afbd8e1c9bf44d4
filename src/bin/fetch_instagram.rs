//! Instagram post downloader entry point.

use std::process::ExitCode;

use media_fetch::{
    cli::{init_logging, parse_args, InstagramArgs, INSTAGRAM_USAGE},
    error::{exit_codes, Result},
    fetch_instagram,
    output::print_error,
    FetchRequest, YtDlp,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let Some(args) = parse_args::<InstagramArgs, _, _>(std::env::args_os(), INSTAGRAM_USAGE)
    else {
        return ExitCode::from(exit_codes::FAILURE);
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

async fn run(args: InstagramArgs) -> Result<u8> {
    let config = args.common.load_config()?;
    let extractor = YtDlp::from_config(&config.extractor);
    let request = FetchRequest::new(args.post_url, args.custom_name);

    let mut stdout = std::io::stdout().lock();
    fetch_instagram(&extractor, &config.download_directory(), &request, &mut stdout).await
}
