use std::io;
use std::process::ExitCode;

use goutline::cli::Args;
use goutline::{diag, run, OutlineConfig};

fn main() -> ExitCode {
    let config = OutlineConfig::from(Args::parse_go_style());

    match run(&config, io::stdin().lock(), io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            diag::fatal(&err);
            ExitCode::FAILURE
        }
    }
}
