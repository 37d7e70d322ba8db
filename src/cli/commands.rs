//! CLI command handlers.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::process::ExitCode;
use tracing::{error, info};

use super::args::Overrides;
use super::output::{print_help, print_report, print_version};
use super::{Args, Command};
use crate::config::SimConfig;
use crate::engine::rng::random_seed;
use crate::engine::{PointRecord, SamplingEngine};
use crate::error::SimResult;
use crate::runner::{RunReport, SimulationRun};

/// Main CLI entry point.
#[must_use]
pub fn run_cli(args: Args) -> ExitCode {
    match args.command {
        Command::Run {
            config_path,
            overrides,
            verbose,
        } => run_command(&config_path, &overrides, verbose),
        Command::Export {
            config_path,
            output_path,
            overrides,
        } => export_command(&config_path, &output_path, &overrides),
        Command::Help => {
            print_help();
            ExitCode::SUCCESS
        }
        Command::Version => {
            print_version();
            ExitCode::SUCCESS
        }
    }
}

/// Load a configuration file and apply command-line overrides.
///
/// # Errors
///
/// Returns error if the file cannot be loaded or the result fails validation.
pub fn load_config(path: &Path, overrides: &Overrides) -> SimResult<SimConfig> {
    let mut config = SimConfig::load(path)?;
    apply_overrides(&mut config, overrides);
    config.validate_semantic()?;
    Ok(config)
}

/// Apply overrides; zero target or batch sizes are ignored.
///
/// `--random-seed` wins over `--seed`.
pub fn apply_overrides(config: &mut SimConfig, overrides: &Overrides) {
    if overrides.random_seed {
        let seed = random_seed();
        info!(seed, "randomized seed");
        config.reproducibility.seed = Some(seed);
    } else if let Some(seed) = overrides.seed {
        config.reproducibility.seed = Some(seed);
    }
    if let Some(target) = overrides.target_points.filter(|&t| t > 0) {
        config.run.target_points = target;
    }
    if let Some(batch) = overrides.batch_size.filter(|&b| b > 0) {
        config.run.batch_size = batch;
    }
}

/// Run a configuration to completion.
///
/// # Errors
///
/// Returns error if the configuration cannot be loaded.
pub fn execute_run(path: &Path, overrides: &Overrides) -> SimResult<RunReport> {
    let config = load_config(path, overrides)?;
    let mut run = SimulationRun::new(config)?;
    Ok(run.run_to_completion())
}

/// Write every point of `engine` to `writer` as a JSON array of records.
///
/// # Errors
///
/// Returns error on serialization or I/O failure.
pub fn write_point_records<W: Write>(engine: &SamplingEngine, writer: W) -> SimResult<usize> {
    let records: Vec<PointRecord> = engine.point_records().collect();
    let mut writer = BufWriter::new(writer);
    serde_json::to_writer(&mut writer, &records)?;
    writer.flush()?;
    Ok(records.len())
}

/// Run a configuration and export its points to `output`.
///
/// # Errors
///
/// Returns error if loading, running or writing fails.
pub fn execute_export(path: &Path, output: &Path, overrides: &Overrides) -> SimResult<usize> {
    let config = load_config(path, overrides)?;
    let mut run = SimulationRun::new(config)?;
    run.run_to_completion();
    let file = File::create(output)?;
    let count = write_point_records(run.engine(), file)?;
    info!(count, path = %output.display(), "points exported");
    Ok(count)
}

fn run_command(path: &Path, overrides: &Overrides, verbose: bool) -> ExitCode {
    match execute_run(path, overrides) {
        Ok(report) => {
            print_report(&report, verbose);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(path = %path.display(), "run failed: {e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn export_command(path: &Path, output: &Path, overrides: &Overrides) -> ExitCode {
    match execute_export(path, output, overrides) {
        Ok(count) => {
            println!("Exported {count} points to {}", output.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(path = %path.display(), "export failed: {e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
