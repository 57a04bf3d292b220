// stapictl - SpaceTraders API command-line client
use clap::Parser;
use std::process::ExitCode;

use stapictl::cli::{self, Args};
use stapictl::logging;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let argv: Vec<String> = std::env::args().collect();
    let args = Args::parse_from(&argv);
    logging::init(args.verbose);

    match cli::run(&args, &argv).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
