//! CLI argument parsing.
//!
//! Hand-rolled so that parsing is testable from any iterator of strings.

use std::path::PathBuf;

/// CLI arguments container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    /// The command to execute.
    pub command: Command,
}

/// Overrides applied on top of a loaded configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    /// Seed override.
    pub seed: Option<u64>,
    /// Target point count override.
    pub target_points: Option<u64>,
    /// Batch size override.
    pub batch_size: Option<u64>,
    /// Replace the seed with a freshly drawn one.
    pub random_seed: bool,
}

/// Available CLI commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Run a configuration to its target and print the statistics.
    Run {
        /// Path to the run YAML file.
        config_path: PathBuf,
        /// Command-line overrides.
        overrides: Overrides,
        /// Enable verbose output.
        verbose: bool,
    },
    /// Run a configuration and write every point as JSON.
    Export {
        /// Path to the run YAML file.
        config_path: PathBuf,
        /// Destination JSON file.
        output_path: PathBuf,
        /// Command-line overrides.
        overrides: Overrides,
    },
    /// Show help
    Help,
    /// Show version
    Version,
}

impl Args {
    /// Parse command-line arguments from an iterator.
    #[must_use]
    pub fn parse_from<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();
        Self::parse_from_vec(&args)
    }

    /// Parse command-line arguments from the environment.
    #[must_use]
    pub fn parse() -> Self {
        Self::parse_from(std::env::args())
    }

    /// Whether the parsed command asked for verbose output.
    #[must_use]
    pub const fn verbose(&self) -> bool {
        matches!(self.command, Command::Run { verbose: true, .. })
    }

    fn parse_from_vec(args: &[String]) -> Self {
        if args.len() < 2 {
            return Self {
                command: Command::Help,
            };
        }

        let command = match args[1].as_str() {
            "run" => Self::parse_run_command(args),
            "export" => Self::parse_export_command(args),
            "-h" | "--help" | "help" => Command::Help,
            "-V" | "--version" | "version" => Command::Version,
            unknown => {
                eprintln!("Unknown command: {unknown}");
                Command::Help
            }
        };

        Self { command }
    }

    fn parse_run_command(args: &[String]) -> Command {
        if args.len() < 3 {
            eprintln!("Error: 'run' command requires a config path");
            return Command::Help;
        }

        let (overrides, verbose) = Self::parse_options(&args[3..]);
        Command::Run {
            config_path: PathBuf::from(&args[2]),
            overrides,
            verbose,
        }
    }

    fn parse_export_command(args: &[String]) -> Command {
        if args.len() < 4 {
            eprintln!("Error: 'export' command requires a config path and an output path");
            return Command::Help;
        }

        let (overrides, _) = Self::parse_options(&args[4..]);
        Command::Export {
            config_path: PathBuf::from(&args[2]),
            output_path: PathBuf::from(&args[3]),
            overrides,
        }
    }

    /// Parse `--seed`, `--random-seed`, `--target`, `--batch` and `-v`;
    /// unparsable values are ignored.
    fn parse_options(options: &[String]) -> (Overrides, bool) {
        let mut overrides = Overrides::default();
        let mut verbose = false;

        let mut i = 0;
        while i < options.len() {
            let value = options.get(i + 1).and_then(|v| v.parse::<u64>().ok());
            match options[i].as_str() {
                "--seed" => {
                    overrides.seed = value.or(overrides.seed);
                    i += 2;
                }
                "--random-seed" => {
                    overrides.random_seed = true;
                    i += 1;
                }
                "--target" => {
                    overrides.target_points = value.or(overrides.target_points);
                    i += 2;
                }
                "--batch" => {
                    overrides.batch_size = value.or(overrides.batch_size);
                    i += 2;
                }
                "-v" | "--verbose" => {
                    verbose = true;
                    i += 1;
                }
                _ => i += 1,
            }
        }

        (overrides, verbose)
    }
}
