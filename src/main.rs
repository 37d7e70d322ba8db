//! pisim CLI - Monte Carlo pi estimation
//!
//! Command-line interface for running and exporting sampling runs.

use pisim::cli::{run_cli, Args};
use pisim::logging::init_tracing;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose());
    run_cli(args)
}
