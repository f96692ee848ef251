use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use pcgs_lookup_catalog::{Field, Registry};

pub(crate) fn run_stats(registry: &Registry, snapshot_path: &Path) {
    log::info!(
        "{}",
        "Registry Statistics".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("  Snapshot: {}", snapshot_path.display());
    crate::log_blank();
    log::info!("  {:<24}{:>8}", "Entries:", registry.len());
    log::info!("  {:<24}{:>8}", "Reverse entries:", registry.reverse_len());
    for &field in Field::all() {
        log::info!(
            "  {:<24}{:>8}",
            format!("Distinct {field} values:"),
            registry.distinct_values(field).len(),
        );
    }
}
