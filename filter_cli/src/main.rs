mod cli;
mod commands;
mod errors;
mod files;
mod ui;

use clap::Parser;
use std::process::ExitCode;

use cli::{FilterCli, FilterCliCommand};

fn main() -> ExitCode {
    let cli = FilterCli::parse();
    initialize_logging(cli.verbose);

    let result = match cli.command {
        FilterCliCommand::Check { file } => commands::check(&file, cli.format),
        FilterCliCommand::Describe { file, name } => commands::describe(&file, &name, cli.format),
        FilterCliCommand::Kinds => commands::list_kinds(cli.format),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => error.exit_code(),
    }
}

fn initialize_logging(verbose: bool) {
    let env_filter = std::env::var(env_logger::DEFAULT_FILTER_ENV).ok();
    logging_builder(verbose, env_filter.as_deref()).init();
}

/// Warn unless `RUST_LOG` says otherwise. `--verbose` forces Debug.
fn logging_builder(verbose: bool, env_filter: Option<&str>) -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();
    builder.parse_filters(env_filter.unwrap_or("warn"));
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }

    builder
        .format_timestamp_secs()
        .target(env_logger::Target::Stderr);
    builder
}
