//! In-memory coin registry and its query operations.
//!
//! Entries are kept in snapshot order in a `Vec`, with a hash index from
//! catalog number to position for direct lookups. The registry is never
//! mutated after construction, so shared reads need no locking.

use std::collections::{BTreeSet, HashMap};
use std::fmt;

use crate::types::{CatalogNumber, CoinRecord, Field, SearchCriteria};

/// A catalog number that appeared more than once while building a registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DuplicateNumber(pub CatalogNumber);

impl fmt::Display for DuplicateNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "duplicate catalog number {}", self.0)
    }
}

impl std::error::Error for DuplicateNumber {}

/// Load-once, read-only mapping from catalog numbers to coin records.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    entries: Vec<(CatalogNumber, CoinRecord)>,
    by_number: HashMap<CatalogNumber, usize>,
    coin_to_number: HashMap<String, CatalogNumber>,
}

impl Registry {
    /// Build a registry from a forward and a reverse mapping as stored in a
    /// snapshot. The reverse mapping is taken as-is.
    pub(crate) fn from_parts(
        entries: Vec<(CatalogNumber, CoinRecord)>,
        coin_to_number: HashMap<String, CatalogNumber>,
    ) -> Result<Self, DuplicateNumber> {
        let mut by_number = HashMap::with_capacity(entries.len());
        for (i, (number, _)) in entries.iter().enumerate() {
            if by_number.insert(*number, i).is_some() {
                return Err(DuplicateNumber(*number));
            }
        }

        Ok(Self {
            entries,
            by_number,
            coin_to_number,
        })
    }

    /// Build a registry from records in order, deriving the reverse mapping
    /// from each record's display string.
    ///
    /// When two records render identically, the reverse mapping keeps the
    /// first catalog number.
    pub fn from_records<I>(records: I) -> Result<Self, DuplicateNumber>
    where
        I: IntoIterator<Item = (CatalogNumber, CoinRecord)>,
    {
        let entries: Vec<_> = records.into_iter().collect();
        let mut coin_to_number = HashMap::with_capacity(entries.len());
        for (number, coin) in &entries {
            coin_to_number.entry(coin.to_string()).or_insert(*number);
        }
        Self::from_parts(entries, coin_to_number)
    }

    /// Look up the record stored for a catalog number.
    ///
    /// Any integer is a legal key; absence is `None`, not an error.
    pub fn get_by_number(&self, number: CatalogNumber) -> Option<&CoinRecord> {
        self.by_number.get(&number).map(|&i| &self.entries[i].1)
    }

    /// Return every entry matching all non-empty criteria, in load order.
    ///
    /// Denomination, variety and designation match as case-insensitive
    /// substrings. Date matches as a case-sensitive substring; this mirrors
    /// the legacy lookup tool and is kept so existing queries behave the same.
    /// Empty criteria match every entry.
    pub fn search(&self, criteria: &SearchCriteria) -> Vec<(CatalogNumber, &CoinRecord)> {
        let date = criteria.get(Field::Date);
        let folded: Vec<(Field, String)> =
            [Field::Denomination, Field::Variety, Field::Designation]
                .into_iter()
                .filter_map(|field| criteria.get(field).map(|v| (field, v.to_lowercase())))
                .collect();

        self.entries
            .iter()
            .filter(|(_, coin)| date.is_none_or(|d| coin.date.contains(d)))
            .filter(|(_, coin)| {
                folded
                    .iter()
                    .all(|(field, needle)| coin.field(*field).to_lowercase().contains(needle))
            })
            .map(|(number, coin)| (*number, coin))
            .collect()
    }

    /// Look up a catalog number by a record's display string.
    pub fn number_for_display(&self, display: &str) -> Option<CatalogNumber> {
        self.coin_to_number.get(display).copied()
    }

    /// Sorted, de-duplicated, non-empty values of one field.
    pub fn distinct_values(&self, field: Field) -> Vec<&str> {
        self.entries
            .iter()
            .map(|(_, coin)| coin.field(field))
            .filter(|v| !v.is_empty())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Distinct values of `field` containing `text`, ignoring case.
    ///
    /// Empty `text` returns every distinct value.
    pub fn filter_values(&self, field: Field, text: &str) -> Vec<&str> {
        let needle = text.to_lowercase();
        self.distinct_values(field)
            .into_iter()
            .filter(|v| needle.is_empty() || v.to_lowercase().contains(&needle))
            .collect()
    }

    /// Iterate over all entries in load order.
    pub fn iter(&self) -> impl Iterator<Item = (CatalogNumber, &CoinRecord)> {
        self.entries.iter().map(|(number, coin)| (*number, coin))
    }

    /// Iterate over the reverse mapping (display string to catalog number).
    pub fn reverse_iter(&self) -> impl Iterator<Item = (&str, CatalogNumber)> {
        self.coin_to_number
            .iter()
            .map(|(display, number)| (display.as_str(), *number))
    }

    /// Number of catalog entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the registry holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries in the reverse mapping.
    pub fn reverse_len(&self) -> usize {
        self.coin_to_number.len()
    }
}

#[cfg(test)]
#[path = "tests/registry_tests.rs"]
mod tests;
