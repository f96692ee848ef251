use std::path::{Path, PathBuf};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use pcgs_lookup_catalog::settings;

use crate::CliError;

/// Show the resolved snapshot path, or update the saved setting.
pub(crate) fn run_path(
    snapshot_path: &Path,
    set: Option<PathBuf>,
    clear: bool,
) -> Result<(), CliError> {
    let settings_file = settings::settings_path();

    if let Some(path) = set {
        settings::save_snapshot_path(Some(&path)).map_err(|e| {
            CliError::config(format!("Failed to write {}: {}", settings_file.display(), e))
        })?;
        log::info!(
            "{} Snapshot path set to {}",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
            path.display(),
        );
        return Ok(());
    }

    if clear {
        settings::save_snapshot_path(None).map_err(|e| {
            CliError::config(format!("Failed to write {}: {}", settings_file.display(), e))
        })?;
        log::info!(
            "{} Snapshot path setting cleared",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        );
        return Ok(());
    }

    let status = if snapshot_path.exists() {
        "(exists)".if_supports_color(Stdout, |t| t.green()).to_string()
    } else {
        "(not found)".if_supports_color(Stdout, |t| t.dimmed()).to_string()
    };
    log::info!(
        "  Snapshot: {} {}",
        snapshot_path.display().if_supports_color(Stdout, |t| t.cyan()),
        status,
    );
    log::info!("  Settings: {}", settings_file.display());
    Ok(())
}
