use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use pcgs_lookup_catalog::{Field, Registry};

/// List the distinct values of a field, optionally filtered.
pub(crate) fn run_values(registry: &Registry, field: Field, filter: Option<&str>) {
    let values = registry.filter_values(field, filter.unwrap_or(""));

    if values.is_empty() {
        log::info!(
            "{}",
            format!("No {field} values found.").if_supports_color(Stdout, |t| t.dimmed()),
        );
        return;
    }

    for value in &values {
        log::info!("{}", value);
    }
    log::debug!("{} distinct {} values", values.len(), field);
}
