//! Application settings and snapshot path resolution.
//!
//! The settings file is `~/.config/pcgs-lookup/settings.toml`:
//!
//! ```toml
//! [registry]
//! snapshot_path = "/opt/pcgs-lookup/pcgs_registry.json"
//! ```

use std::io;
use std::path::{Path, PathBuf};

use crate::snapshot::SNAPSHOT_FILE_NAME;

/// Canonical path to the settings file: `~/.config/pcgs-lookup/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("pcgs-lookup").join("settings.toml")
}

/// Resolve the snapshot path using a priority chain:
///
/// 1. CLI override (if `Some`)
/// 2. Saved `registry.snapshot_path` in `settings.toml`
/// 3. `pcgs_registry.json` next to the running executable
/// 4. `pcgs_registry.json` in the current directory
pub fn resolve_snapshot_path(cli_override: Option<PathBuf>) -> PathBuf {
    resolve_snapshot_path_with(cli_override, &settings_path())
}

/// Same as [`resolve_snapshot_path`], reading settings from `settings`.
pub fn resolve_snapshot_path_with(cli_override: Option<PathBuf>, settings: &Path) -> PathBuf {
    if let Some(p) = cli_override {
        return p;
    }
    if let Some(p) = load_snapshot_path(settings) {
        return p;
    }
    default_snapshot_path()
}

/// The snapshot file installed alongside the executable.
pub fn default_snapshot_path() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(SNAPSHOT_FILE_NAME)))
        .unwrap_or_else(|| PathBuf::from(SNAPSHOT_FILE_NAME))
}

/// Read `registry.snapshot_path` from a settings file, if set.
fn load_snapshot_path(settings: &Path) -> Option<PathBuf> {
    let contents = std::fs::read_to_string(settings).ok()?;
    let doc: toml::Value = match contents.parse() {
        Ok(doc) => doc,
        Err(e) => {
            log::warn!("Ignoring unreadable settings file {}: {}", settings.display(), e);
            return None;
        }
    };
    let path = doc.get("registry")?.get("snapshot_path")?.as_str()?;
    if path.is_empty() {
        None
    } else {
        Some(PathBuf::from(path))
    }
}

/// Save (or clear) the snapshot path in `settings.toml`.
pub fn save_snapshot_path(path: Option<&Path>) -> io::Result<()> {
    save_snapshot_path_to(&settings_path(), path)
}

/// Save (or clear) the snapshot path in the given settings file.
///
/// Only the `registry.snapshot_path` key is touched. A missing file starts
/// from an empty document; a file that cannot be read or parsed is left alone
/// and the save fails.
pub fn save_snapshot_path_to(settings: &Path, path: Option<&Path>) -> io::Result<()> {
    let mut doc = read_settings_document(settings)?;

    let registry = doc
        .as_table_mut()
        .ok_or_else(|| io::Error::other("settings.toml root is not a table"))?
        .entry("registry")
        .or_insert_with(|| toml::Value::Table(Default::default()))
        .as_table_mut()
        .ok_or_else(|| io::Error::other("[registry] in settings.toml is not a table"))?;

    if let Some(p) = path {
        registry.insert(
            "snapshot_path".to_string(),
            toml::Value::String(p.to_string_lossy().into_owned()),
        );
    } else {
        registry.remove("snapshot_path");
    }

    write_settings_document(settings, &doc)
}

fn read_settings_document(settings: &Path) -> io::Result<toml::Value> {
    match std::fs::read_to_string(settings) {
        Ok(contents) => contents.parse().map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("{} is not valid TOML: {e}", settings.display()),
            )
        }),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            Ok(toml::Value::Table(Default::default()))
        }
        Err(e) => Err(e),
    }
}

/// Write through a sibling temp file so a failed write never truncates
/// the existing settings.
fn write_settings_document(settings: &Path, doc: &toml::Value) -> io::Result<()> {
    if let Some(parent) = settings.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let serialized = toml::to_string_pretty(doc).map_err(io::Error::other)?;
    let tmp = settings.with_extension("toml.tmp");
    std::fs::write(&tmp, serialized)?;
    std::fs::rename(&tmp, settings).inspect_err(|_| {
        let _ = std::fs::remove_file(&tmp);
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn cli_override_wins() {
        let tmp = TempDir::new().unwrap();
        let settings = tmp.path().join("settings.toml");
        std::fs::write(&settings, "[registry]\nsnapshot_path = \"/from/settings.json\"\n").unwrap();

        let resolved =
            resolve_snapshot_path_with(Some(PathBuf::from("/from/cli.json")), &settings);
        assert_eq!(resolved, PathBuf::from("/from/cli.json"));
    }

    #[test]
    fn settings_path_used_when_no_override() {
        let tmp = TempDir::new().unwrap();
        let settings = tmp.path().join("settings.toml");
        std::fs::write(&settings, "[registry]\nsnapshot_path = \"/from/settings.json\"\n").unwrap();

        let resolved = resolve_snapshot_path_with(None, &settings);
        assert_eq!(resolved, PathBuf::from("/from/settings.json"));
    }

    #[test]
    fn falls_back_to_executable_dir() {
        let tmp = TempDir::new().unwrap();
        let settings = tmp.path().join("missing.toml");

        let resolved = resolve_snapshot_path_with(None, &settings);
        assert_eq!(resolved, default_snapshot_path());
        assert_eq!(resolved.file_name().unwrap(), SNAPSHOT_FILE_NAME);
    }

    #[test]
    fn empty_setting_is_ignored() {
        let tmp = TempDir::new().unwrap();
        let settings = tmp.path().join("settings.toml");
        std::fs::write(&settings, "[registry]\nsnapshot_path = \"\"\n").unwrap();

        assert_eq!(
            resolve_snapshot_path_with(None, &settings),
            default_snapshot_path()
        );
    }

    #[test]
    fn save_preserves_other_sections() {
        let tmp = TempDir::new().unwrap();
        let settings = tmp.path().join("nested").join("settings.toml");
        std::fs::create_dir_all(settings.parent().unwrap()).unwrap();
        std::fs::write(&settings, "[display]\ncolor = false\n").unwrap();

        save_snapshot_path_to(&settings, Some(Path::new("/data/registry.json"))).unwrap();
        assert_eq!(
            resolve_snapshot_path_with(None, &settings),
            PathBuf::from("/data/registry.json")
        );
        let contents = std::fs::read_to_string(&settings).unwrap();
        assert!(contents.contains("color = false"));

        save_snapshot_path_to(&settings, None).unwrap();
        assert_eq!(
            resolve_snapshot_path_with(None, &settings),
            default_snapshot_path()
        );
    }

    #[test]
    fn save_refuses_to_replace_unparseable_settings() {
        let tmp = TempDir::new().unwrap();
        let settings = tmp.path().join("settings.toml");
        let original = "[display]\ncolor = false\n[registry\nbroken = 1\n";
        std::fs::write(&settings, original).unwrap();

        let err = save_snapshot_path_to(&settings, Some(Path::new("/data/registry.json")))
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        assert_eq!(std::fs::read_to_string(&settings).unwrap(), original);
        assert!(!settings.with_extension("toml.tmp").exists());
    }

    #[test]
    fn save_creates_missing_settings_file() {
        let tmp = TempDir::new().unwrap();
        let settings = tmp.path().join("fresh").join("settings.toml");

        save_snapshot_path_to(&settings, Some(Path::new("/data/registry.json"))).unwrap();
        assert_eq!(
            resolve_snapshot_path_with(None, &settings),
            PathBuf::from("/data/registry.json")
        );
    }
}
