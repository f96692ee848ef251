use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use pcgs_lookup_catalog::Registry;

use super::parse_catalog_number;
use crate::CliError;

/// Look up a single coin by the PCGS number the user typed.
///
/// Returns whether the number is in the registry. An unknown number is not
/// an error.
pub(crate) fn run_lookup(registry: &Registry, input: &str) -> Result<bool, CliError> {
    let number = parse_catalog_number(input)?;

    let Some(coin) = registry.get_by_number(number) else {
        log::info!(
            "{}",
            format!("No coin found for PCGS #{number}").if_supports_color(Stdout, |t| t.dimmed()),
        );
        return Ok(false);
    };

    log::info!(
        "{}",
        format!("PCGS #{number}:").if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("  {}", coin.if_supports_color(Stdout, |t| t.cyan()));
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pcgs_lookup_catalog::CoinRecord;

    fn registry() -> Registry {
        Registry::from_records([
            (14018, CoinRecord::new("1926-S", "Quarter Dollar")),
            (5758, CoinRecord::new("1926", "25C").designation("FH")),
        ])
        .unwrap()
    }

    #[test]
    fn test_lookup_found() {
        assert!(run_lookup(&registry(), "14018").unwrap());
        assert!(run_lookup(&registry(), " #5758 ").unwrap());
    }

    #[test]
    fn test_lookup_unknown_number() {
        assert!(!run_lookup(&registry(), "99999").unwrap());
    }

    #[test]
    fn test_lookup_rejects_non_numeric_input() {
        for input in ["abc", "", "1926 25C"] {
            assert!(
                matches!(
                    run_lookup(&registry(), input),
                    Err(CliError::InvalidQueryInput(_))
                ),
                "accepted {input:?}"
            );
        }
    }
}
