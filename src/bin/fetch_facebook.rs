//! Facebook video downloader entry point.

use std::process::ExitCode;

use media_fetch::{
    cli::{init_logging, parse_args, FacebookArgs, FACEBOOK_USAGE},
    error::{exit_codes, Result},
    fetch_facebook,
    output::print_error,
    FetchRequest, YtDlp,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let Some(args) = parse_args::<FacebookArgs, _, _>(std::env::args_os(), FACEBOOK_USAGE) else {
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

async fn run(args: FacebookArgs) -> Result<u8> {
    let config = args.common.load_config()?;
    let extractor = YtDlp::from_config(&config.extractor);
    let request = FetchRequest::new(args.post_url, Some(args.output_filename));

    let mut stdout = std::io::stdout().lock();
    fetch_facebook(&extractor, &config.download_directory(), &request, &mut stdout).await
}
