pub(crate) mod lookup;
pub(crate) mod migrate;
pub(crate) mod path;
pub(crate) mod search;
pub(crate) mod stats;
pub(crate) mod values;

use std::path::Path;

use pcgs_lookup_catalog::{CatalogNumber, CoinRecord, LoadError, Registry};

use crate::CliError;

/// Load the registry snapshot, hinting at `migrate` when it is missing.
pub(crate) fn open_registry(snapshot_path: &Path) -> Result<Registry, CliError> {
    match pcgs_lookup_catalog::load_registry(snapshot_path) {
        Ok(registry) => Ok(registry),
        Err(e @ LoadError::Io { .. }) if !snapshot_path.exists() => {
            log::warn!("No registry snapshot found at {}", snapshot_path.display());
            log::info!("Run 'pcgs-lookup migrate <export.csv>' to create one.");
            Err(e.into())
        }
        Err(e) => Err(e.into()),
    }
}

/// Parse a catalog number typed by the user.
pub(crate) fn parse_catalog_number(input: &str) -> Result<CatalogNumber, CliError> {
    let trimmed = input.trim();
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
    digits
        .parse()
        .map_err(|_| CliError::invalid_query_input("Please enter a valid PCGS number"))
}

/// Format one result line: `PCGS #14018: 1926 25C`.
pub(crate) fn format_entry(number: CatalogNumber, coin: &CoinRecord) -> String {
    format!("PCGS #{number}: {coin}")
}
