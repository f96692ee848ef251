//! Data model types for the coin registry.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Catalog identifier of a registry entry (a "PCGS number").
pub type CatalogNumber = i64;

/// Descriptive record for one catalog number.
///
/// `variety` and `designation` are optional; an empty string means absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CoinRecord {
    pub date: String,
    pub denomination: String,
    #[serde(default)]
    pub variety: String,
    #[serde(default)]
    pub designation: String,
}

impl CoinRecord {
    pub fn new(date: impl Into<String>, denomination: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            denomination: denomination.into(),
            ..Default::default()
        }
    }

    pub fn variety(mut self, variety: impl Into<String>) -> Self {
        self.variety = variety.into();
        self
    }

    pub fn designation(mut self, designation: impl Into<String>) -> Self {
        self.designation = designation.into();
        self
    }

    /// Value of a single field.
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Date => &self.date,
            Field::Denomination => &self.denomination,
            Field::Variety => &self.variety,
            Field::Designation => &self.designation,
        }
    }
}

/// Renders the non-empty fields in order, space-separated.
impl fmt::Display for CoinRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for part in [
            &self.date,
            &self.denomination,
            &self.variety,
            &self.designation,
        ] {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }
            if !first {
                f.write_str(" ")?;
            }
            f.write_str(part)?;
            first = false;
        }
        Ok(())
    }
}

/// One of the four searchable record fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Date,
    Denomination,
    Variety,
    Designation,
}

const ALL_FIELDS: &[Field] = &[
    Field::Date,
    Field::Denomination,
    Field::Variety,
    Field::Designation,
];

impl Field {
    pub fn all() -> &'static [Field] {
        ALL_FIELDS
    }

    pub fn name(self) -> &'static str {
        match self {
            Field::Date => "date",
            Field::Denomination => "denomination",
            Field::Variety => "variety",
            Field::Designation => "designation",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string cannot be parsed into a [`Field`].
#[derive(Debug, Clone)]
pub struct FieldParseError(pub String);

impl fmt::Display for FieldParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown field: '{}' (expected date, denomination, variety or designation)",
            self.0
        )
    }
}

impl std::error::Error for FieldParseError {}

impl std::str::FromStr for Field {
    type Err = FieldParseError;

    /// Parse a field from its name (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        ALL_FIELDS
            .iter()
            .copied()
            .find(|field| field.name() == lower)
            .ok_or_else(|| FieldParseError(s.to_string()))
    }
}

/// Partial criteria for [`Registry::search`](crate::Registry::search).
///
/// Absent or empty values impose no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    pub date: Option<String>,
    pub denomination: Option<String>,
    pub variety: Option<String>,
    pub designation: Option<String>,
}

impl SearchCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    pub fn denomination(mut self, denomination: impl Into<String>) -> Self {
        self.denomination = Some(denomination.into());
        self
    }

    pub fn variety(mut self, variety: impl Into<String>) -> Self {
        self.variety = Some(variety.into());
        self
    }

    pub fn designation(mut self, designation: impl Into<String>) -> Self {
        self.designation = Some(designation.into());
        self
    }

    /// The criterion for `field`, if one is set and non-empty.
    pub fn get(&self, field: Field) -> Option<&str> {
        let value = match field {
            Field::Date => &self.date,
            Field::Denomination => &self.denomination,
            Field::Variety => &self.variety,
            Field::Designation => &self.designation,
        };
        value.as_deref().filter(|v| !v.is_empty())
    }

    /// True when no field carries a constraint.
    pub fn is_empty(&self) -> bool {
        Field::all().iter().all(|&field| self.get(field).is_none())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_base_fields() {
        let coin = CoinRecord::new("1926", "25C");
        assert_eq!(coin.to_string(), "1926 25C");
    }

    #[test]
    fn display_all_fields_in_order() {
        let coin = CoinRecord::new("1926-S", "25C")
            .variety("Doubled Die")
            .designation("FH");
        assert_eq!(coin.to_string(), "1926-S 25C Doubled Die FH");
    }

    #[test]
    fn display_skips_empty_variety() {
        let coin = CoinRecord::new("1937-D", "5C").designation("MS");
        assert_eq!(coin.to_string(), "1937-D 5C MS");
    }

    #[test]
    fn display_has_no_stray_whitespace() {
        let coin = CoinRecord::new("", "25C").designation("PL");
        assert_eq!(coin.to_string(), "25C PL");

        let coin = CoinRecord::new("1926", "").variety("Type 1");
        assert_eq!(coin.to_string(), "1926 Type 1");

        assert_eq!(CoinRecord::default().to_string(), "");
    }

    #[test]
    fn field_from_str_is_case_insensitive() {
        assert_eq!("date".parse::<Field>().unwrap(), Field::Date);
        assert_eq!("Denomination".parse::<Field>().unwrap(), Field::Denomination);
        assert_eq!("VARIETY".parse::<Field>().unwrap(), Field::Variety);
        assert_eq!("designation".parse::<Field>().unwrap(), Field::Designation);
        assert!("grade".parse::<Field>().is_err());
    }

    #[test]
    fn field_names_round_trip() {
        for &field in Field::all() {
            let parsed: Field = field.name().parse().unwrap();
            assert_eq!(parsed, field);
        }
    }

    #[test]
    fn criteria_ignores_empty_values() {
        let criteria = SearchCriteria::new().date("").variety("DDO");
        assert_eq!(criteria.get(Field::Date), None);
        assert_eq!(criteria.get(Field::Variety), Some("DDO"));
        assert!(!criteria.is_empty());
        assert!(SearchCriteria::new().date("").is_empty());
    }
}
