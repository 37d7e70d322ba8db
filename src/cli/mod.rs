//! CLI module for pisim.
//!
//! All CLI logic lives here rather than in main.rs so it can be tested.

mod args;
mod commands;
mod output;

pub use args::{Args, Command, Overrides};
pub use commands::{
    apply_overrides, execute_export, execute_run, load_config, run_cli, write_point_records,
};
pub use output::{format_slice_estimate, print_help, print_report, print_version, version_string};
