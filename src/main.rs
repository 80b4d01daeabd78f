use std::process::ExitCode;

use apigen::cli::{Arguments, ExitStatus};
use apigen::logger::setup_logging;
use clap::Parser;

fn main() -> ExitCode {
    let args = Arguments::parse();
    setup_logging(args.verbose);

    match apigen::cli::run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitStatus::Error.into()
        }
    }
}
