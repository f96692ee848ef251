//! Migration from the legacy registry cache.
//!
//! The legacy cache is a pickled triple that only the legacy tool can read.
//! `scripts/export_legacy_csv.py` unpickles it and writes the forward mapping
//! as CSV, one row per entry in dictionary order:
//!
//! ```text
//! number,date,denomination,variety,designation
//! 14018,1926,25C,,
//! 5758,1926,25C,,FH
//! ```
//!
//! [`import_csv`] turns that export into a [`Registry`], which
//! [`save_registry`](crate::save_registry) then writes as a snapshot. Rows are
//! kept in file order and the reverse mapping is rebuilt from display strings.
//! The `variety` and `designation` columns may be left off short rows.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;

use crate::error::MigrationError;
use crate::registry::Registry;
use crate::types::{CatalogNumber, CoinRecord};

/// Column positions resolved from the export's header row.
struct Columns {
    number: usize,
    date: usize,
    denomination: usize,
    variety: Option<usize>,
    designation: Option<usize>,
}

impl Columns {
    fn from_headers(headers: &StringRecord) -> Result<Self, MigrationError> {
        let find = |name: &str| headers.iter().position(|h| h.eq_ignore_ascii_case(name));
        let require = |name: &str| {
            find(name).ok_or_else(|| {
                MigrationError::invalid_row(1, format!("missing '{name}' column in header"))
            })
        };

        Ok(Self {
            number: require("number")?,
            date: require("date")?,
            denomination: require("denomination")?,
            variety: find("variety"),
            designation: find("designation"),
        })
    }
}

/// Import a legacy CSV export from a file.
pub fn import_csv(path: &Path) -> Result<Registry, MigrationError> {
    let file = File::open(path).map_err(|e| MigrationError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    let registry = import_csv_reader(file)?;
    log::debug!(
        "Imported {} legacy entries from {}",
        registry.len(),
        path.display()
    );
    Ok(registry)
}

/// Import a legacy CSV export from any reader.
///
/// A bad catalog number, a row without date or denomination, or a repeated
/// catalog number fails the whole import.
pub fn import_csv_reader<R: Read>(reader: R) -> Result<Registry, MigrationError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);
    let columns = Columns::from_headers(reader.headers()?)?;

    let mut first_line: HashMap<CatalogNumber, u64> = HashMap::new();
    let mut records = Vec::new();

    for result in reader.records() {
        let record = result?;
        let line = record.position().map_or(0, |p| p.line());
        let required = |i: usize, name: &str| {
            record
                .get(i)
                .ok_or_else(|| MigrationError::invalid_row(line, format!("missing {name}")))
        };
        let optional = |i: Option<usize>| {
            i.and_then(|i| record.get(i))
                .unwrap_or_default()
                .to_string()
        };

        let raw_number = required(columns.number, "catalog number")?;
        let number: CatalogNumber = raw_number.parse().map_err(|_| {
            MigrationError::invalid_row(line, format!("invalid catalog number '{raw_number}'"))
        })?;
        if first_line.insert(number, line).is_some() {
            return Err(MigrationError::DuplicateNumber { number, line });
        }

        records.push((
            number,
            CoinRecord {
                date: required(columns.date, "date")?.to_string(),
                denomination: required(columns.denomination, "denomination")?.to_string(),
                variety: optional(columns.variety),
                designation: optional(columns.designation),
            },
        ));
    }

    // Duplicates were already rejected row by row; this only maps the type.
    Registry::from_records(records).map_err(|dup| MigrationError::DuplicateNumber {
        number: dup.0,
        line: first_line.get(&dup.0).copied().unwrap_or_default(),
    })
}
