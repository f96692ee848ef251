//! Registry snapshot files.
//!
//! A snapshot is a versioned JSON document holding the registry triple:
//!
//! ```text
//! {
//!   "format": "pcgs-registry",
//!   "version": 1,
//!   "registry": [
//!     [[14018, {"date": "1926", "denomination": "25C", "variety": "", "designation": ""}]],
//!     {"1926 25C": 14018},
//!     null
//!   ]
//! }
//! ```
//!
//! The forward mapping is an ordered list of `[number, record]` pairs, the
//! reverse mapping maps display strings to numbers, and the third element is
//! reserved and ignored on load.

use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{LoadError, SnapshotWriteError};
use crate::registry::Registry;
use crate::types::{CatalogNumber, CoinRecord};

/// Format tag written at the top of every snapshot.
pub const SNAPSHOT_FORMAT: &str = "pcgs-registry";

/// Snapshot format version. Bump when changing the layout below.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Default snapshot file name.
pub const SNAPSHOT_FILE_NAME: &str = "pcgs_registry.json";

type RegistryTriple = (
    Vec<(CatalogNumber, CoinRecord)>,
    HashMap<String, CatalogNumber>,
    serde_json::Value,
);

#[derive(Debug, Deserialize)]
struct SnapshotFile {
    format: String,
    version: u32,
    registry: RegistryTriple,
}

#[derive(Serialize)]
struct SnapshotFileRef<'a> {
    format: &'a str,
    version: u32,
    registry: (
        Vec<(CatalogNumber, &'a CoinRecord)>,
        HashMap<&'a str, CatalogNumber>,
        serde_json::Value,
    ),
}

/// Load a registry from a snapshot file.
///
/// Fails if the file is missing, unreadable, or does not hold a well-formed
/// snapshot. No partially built registry is ever returned.
pub fn load_registry(path: &Path) -> Result<Registry, LoadError> {
    let file = File::open(path).map_err(|e| LoadError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    let snapshot: SnapshotFile =
        serde_json::from_reader(BufReader::new(file)).map_err(|e| LoadError::Parse {
            path: path.display().to_string(),
            source: e,
        })?;

    if snapshot.format != SNAPSHOT_FORMAT {
        return Err(LoadError::malformed(format!(
            "unexpected format tag '{}' in {}",
            snapshot.format,
            path.display()
        )));
    }
    if snapshot.version != SNAPSHOT_VERSION {
        return Err(LoadError::UnsupportedVersion {
            found: snapshot.version,
            expected: SNAPSHOT_VERSION,
        });
    }

    let (forward, reverse, _reserved) = snapshot.registry;
    let registry =
        Registry::from_parts(forward, reverse).map_err(|dup| LoadError::DuplicateNumber(dup.0))?;

    log::debug!(
        "Loaded {} registry entries from {}",
        registry.len(),
        path.display()
    );
    Ok(registry)
}

/// Write a registry to a snapshot file.
///
/// The file is written next to `path` under a temporary name and renamed
/// into place once complete. The temporary file is removed if either step
/// fails.
pub fn save_registry(path: &Path, registry: &Registry) -> Result<(), SnapshotWriteError> {
    let io_err = |e: std::io::Error| SnapshotWriteError::Io {
        path: path.display().to_string(),
        source: e,
    };

    let snapshot = SnapshotFileRef {
        format: SNAPSHOT_FORMAT,
        version: SNAPSHOT_VERSION,
        registry: (
            registry.iter().collect(),
            registry.reverse_iter().collect(),
            serde_json::Value::Null,
        ),
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_err)?;
    }

    let tmp = path.with_extension("json.tmp");
    let written = write_snapshot_file(&tmp, &snapshot)
        .and_then(|()| fs::rename(&tmp, path).map_err(io_err));
    if let Err(e) = written {
        let _ = fs::remove_file(&tmp);
        return Err(e);
    }

    log::debug!(
        "Wrote {} registry entries to {}",
        registry.len(),
        path.display()
    );
    Ok(())
}

fn write_snapshot_file(
    tmp: &Path,
    snapshot: &SnapshotFileRef<'_>,
) -> Result<(), SnapshotWriteError> {
    let io_err = |e: std::io::Error| SnapshotWriteError::Io {
        path: tmp.display().to_string(),
        source: e,
    };
    let mut writer = BufWriter::new(File::create(tmp).map_err(io_err)?);
    serde_json::to_writer_pretty(&mut writer, snapshot)?;
    writer.flush().map_err(io_err)
}
