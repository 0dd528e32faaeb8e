// src/bin/cli.rs
use std::process::ExitCode;

use clap::Parser;
use goal500::{cli, log};

fn main() -> ExitCode {
    if let Err(e) = color_eyre::install() {
        eprintln!("Error: {e}");
    }

    let args = cli::Cli::parse();
    if let Err(e) = log::init(args.verbose, args.log_file.as_deref()) {
        eprintln!("Logging disabled: {e}");
    }

    match cli::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(report) => {
            eprintln!("Error: {report:?}");
            ExitCode::from(cli::exit_code(&report))
        }
    }
}
