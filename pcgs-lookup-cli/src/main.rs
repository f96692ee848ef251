//! pcgs-lookup CLI
//!
//! Command-line frontend for looking up coins in a PCGS catalog registry
//! snapshot by number or by partial coin details.

mod cli_types;
mod commands;
mod error;

use std::io::Write;

use clap::Parser;
use log::{Level, LevelFilter};

use cli_types::{Cli, Commands};
use commands::lookup::run_lookup;
use commands::migrate::run_migrate;
use commands::path::run_path;
use commands::search::run_search;
use commands::stats::run_stats;
use commands::values::run_values;
pub(crate) use error::CliError;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.quiet, cli.verbose);

    if let Err(e) = run(cli) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let snapshot_path = pcgs_lookup_catalog::settings::resolve_snapshot_path(cli.snapshot);

    match cli.command {
        Commands::Lookup { number } => {
            let registry = commands::open_registry(&snapshot_path)?;
            run_lookup(&registry, &number).map(|_found| ())
        }
        Commands::Search { criteria } => {
            let registry = commands::open_registry(&snapshot_path)?;
            run_search(&registry, &criteria.into());
            Ok(())
        }
        Commands::Values { field, filter } => {
            let registry = commands::open_registry(&snapshot_path)?;
            run_values(&registry, field, filter.as_deref());
            Ok(())
        }
        Commands::Stats => {
            let registry = commands::open_registry(&snapshot_path)?;
            run_stats(&registry, &snapshot_path);
            Ok(())
        }
        Commands::Migrate { csv, output, force } => {
            run_migrate(&csv, &output.unwrap_or(snapshot_path), force)
        }
        Commands::Path { set, clear } => run_path(&snapshot_path, set, clear),
    }
}

/// Install the logger. Info records print as bare lines so command output
/// reads like plain text; `--verbose` switches to timestamped records.
fn init_logging(quiet: bool, verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level)
        .target(env_logger::Target::Stdout);

    if verbose {
        builder.format_timestamp_secs();
    } else {
        builder.format(|buf, record| match record.level() {
            Level::Info => writeln!(buf, "{}", record.args()),
            level => writeln!(buf, "{}: {}", level, record.args()),
        });
    }

    builder.init();
}

/// Print an empty line through the logger.
pub(crate) fn log_blank() {
    log::info!("");
}
