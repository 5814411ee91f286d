use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::ui::OutputFormat;

/// Defines the top-level interface for the filter CLI with clap.
#[derive(Parser, Debug)]
#[command(name = "filterctl")]
#[command(version, about = "Inspect admin list filter definitions.")]
pub struct FilterCli {
    /// Enable verbose output?
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value_t = OutputFormat::default())]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: FilterCliCommand,
}

/// Defines the available subcommands of the filter CLI.
#[derive(Subcommand, Debug, PartialEq)]
pub enum FilterCliCommand {
    /// Build every filter in a definition file and report missing options.
    Check {
        /// JSON file with a `filters` array
        file: PathBuf,
    },
    /// Show the merged options, value and condition of one filter.
    Describe {
        /// JSON file with a `filters` array
        file: PathBuf,
        /// Filter name (e.g. author.name)
        name: String,
    },
    /// List the registered filter kinds.
    Kinds,
}
