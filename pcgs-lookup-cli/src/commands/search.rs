use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use pcgs_lookup_catalog::{Field, Registry, SearchCriteria};

use super::format_entry;

/// Search by coin details and print every match in registry order.
///
/// Returns the number of matches printed.
pub(crate) fn run_search(registry: &Registry, criteria: &SearchCriteria) -> usize {
    let matches = registry.search(criteria);

    if matches.is_empty() {
        log::info!(
            "{}",
            "No matches found.".if_supports_color(Stdout, |t| t.dimmed()),
        );
        return 0;
    }

    log::info!(
        "{}",
        format_summary(matches.len(), criteria).if_supports_color(Stdout, |t| t.bold()),
    );
    crate::log_blank();

    for (number, coin) in &matches {
        log::info!("{}", format_entry(*number, coin));
    }
    matches.len()
}

/// Header line above the matches: `Found 2 coins matching date "1926":`.
pub(crate) fn format_summary(count: usize, criteria: &SearchCriteria) -> String {
    let noun = if count == 1 { "coin" } else { "coins" };
    format!("Found {count} {noun} matching {}:", describe_criteria(criteria))
}

/// Summarize the active criteria, e.g. `date "1926", denomination "25C"`.
pub(crate) fn describe_criteria(criteria: &SearchCriteria) -> String {
    if criteria.is_empty() {
        return "all entries".to_string();
    }
    Field::all()
        .iter()
        .filter_map(|&field| criteria.get(field).map(|v| format!("{field} \"{v}\"")))
        .collect::<Vec<_>>()
        .join(", ")
}
