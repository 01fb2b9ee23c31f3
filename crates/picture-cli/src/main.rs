//! `picture` - apply a transformation to image files.
//!
//! ```text
//! picture invert SRC DST
//! picture grayscale SRC DST
//! picture rotate ANGLE SRC DST
//! picture flip (H|V) SRC DST
//! picture blend SRC1 SRC2 ... DST
//! picture blur SRC DST
//! ```

mod cli;
mod run;

use std::process::ExitCode;

use clap::Parser;
use log::LevelFilter;

use crate::cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run::run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Configure `env_logger`; `RUST_LOG` takes precedence over `-v`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}
