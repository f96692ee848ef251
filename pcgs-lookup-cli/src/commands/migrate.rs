use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use pcgs_lookup_catalog::{legacy, save_registry};

use crate::CliError;

/// Convert a legacy CSV export into a snapshot file.
pub(crate) fn run_migrate(csv_path: &Path, output: &Path, force: bool) -> Result<(), CliError> {
    if output.exists() && !force {
        return Err(CliError::other(format!(
            "{} already exists (use --force to overwrite)",
            output.display()
        )));
    }

    let registry = legacy::import_csv(csv_path)?;
    save_registry(output, &registry)?;

    log::info!(
        "{} Migrated {} entries ({} display names) to {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        registry.len(),
        registry.reverse_len(),
        output.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const EXPORT: &str = "number,date,denomination,variety,designation\n14018,1926-S,25C,,\n";

    #[test]
    fn test_migrate_writes_snapshot() {
        let tmp = TempDir::new().unwrap();
        let csv = tmp.path().join("export.csv");
        std::fs::write(&csv, EXPORT).unwrap();
        let output = tmp.path().join("pcgs_registry.json");

        run_migrate(&csv, &output, false).unwrap();
        let registry = pcgs_lookup_catalog::load_registry(&output).unwrap();
        assert_eq!(registry.get_by_number(14018).unwrap().to_string(), "1926-S 25C");
    }

    #[test]
    fn test_migrate_refuses_to_overwrite() {
        let tmp = TempDir::new().unwrap();
        let csv = tmp.path().join("export.csv");
        std::fs::write(&csv, EXPORT).unwrap();
        let output = tmp.path().join("pcgs_registry.json");
        std::fs::write(&output, "keep me").unwrap();

        assert!(matches!(
            run_migrate(&csv, &output, false),
            Err(CliError::Other(_))
        ));
        assert_eq!(std::fs::read_to_string(&output).unwrap(), "keep me");

        run_migrate(&csv, &output, true).unwrap();
        assert!(pcgs_lookup_catalog::load_registry(&output).is_ok());
    }

    #[test]
    fn test_migrate_bad_export_leaves_no_snapshot() {
        let tmp = TempDir::new().unwrap();
        let csv = tmp.path().join("export.csv");
        std::fs::write(&csv, "number,date,denomination\nnope,1926,25C\n").unwrap();
        let output = tmp.path().join("pcgs_registry.json");

        assert!(matches!(
            run_migrate(&csv, &output, false),
            Err(CliError::Migration(_))
        ));
        assert!(!output.exists());
    }
}
