//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use pcgs_lookup_catalog::{Field, SearchCriteria};

#[derive(Parser)]
#[command(name = "pcgs-lookup")]
#[command(about = "Look up coins in the PCGS catalog registry", long_about = None)]
pub(crate) struct Cli {
    /// Registry snapshot file (defaults to settings, then next to the executable)
    #[arg(short, long, global = true)]
    pub snapshot: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Partial coin details for `search`. Omitted fields match anything.
#[derive(Args, Clone, Default)]
pub(crate) struct SearchArgs {
    /// Date substring, case-sensitive (e.g., 1926, 1926-S)
    #[arg(long)]
    pub date: Option<String>,

    /// Denomination substring, case-insensitive (e.g., 25C, quarter)
    #[arg(long)]
    pub denomination: Option<String>,

    /// Variety substring, case-insensitive (e.g., "doubled die")
    #[arg(long)]
    pub variety: Option<String>,

    /// Designation substring, case-insensitive (e.g., FH, RD, DMPL)
    #[arg(long)]
    pub designation: Option<String>,
}

impl From<SearchArgs> for SearchCriteria {
    fn from(args: SearchArgs) -> Self {
        SearchCriteria {
            date: args.date,
            denomination: args.denomination,
            variety: args.variety,
            designation: args.designation,
        }
    }
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Look up a coin by PCGS number
    Lookup {
        /// PCGS catalog number (e.g., 14018)
        number: String,
    },

    /// Search coins by date, denomination, variety and designation
    Search {
        #[command(flatten)]
        criteria: SearchArgs,
    },

    /// List the distinct values of a field
    Values {
        /// Field to list: date, denomination, variety or designation
        field: Field,

        /// Only show values containing this text (case-insensitive)
        #[arg(short, long)]
        filter: Option<String>,
    },

    /// Show registry statistics
    Stats,

    /// Convert a legacy CSV export into a registry snapshot
    ///
    /// Produce the export from a legacy cache with
    /// `scripts/export_legacy_csv.py pcgs_registry_cache.pkl export.csv`.
    Migrate {
        /// CSV export with columns number,date,denomination,variety,designation
        csv: PathBuf,

        /// Snapshot file to write (defaults to the resolved snapshot path)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Overwrite an existing snapshot
        #[arg(long)]
        force: bool,
    },

    /// Show or change the snapshot path setting
    Path {
        /// Save this snapshot path in settings.toml
        #[arg(long, conflicts_with = "clear")]
        set: Option<PathBuf>,

        /// Remove the saved snapshot path from settings.toml
        #[arg(long)]
        clear: bool,
    },
}
