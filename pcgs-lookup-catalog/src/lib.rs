//! Coin catalog registry: record types, snapshot loading, and queries.
//!
//! A [`Registry`] is materialized once from a snapshot file with
//! [`load_registry`] and then queried read-only by catalog number or by
//! partial descriptive criteria. Frontends own all input parsing and display.

pub mod error;
pub mod legacy;
pub mod registry;
pub mod settings;
pub mod snapshot;
pub mod types;

pub use error::{LoadError, MigrationError, SnapshotWriteError};
pub use registry::{DuplicateNumber, Registry};
pub use snapshot::{load_registry, save_registry};
pub use types::{CatalogNumber, CoinRecord, Field, FieldParseError, SearchCriteria};
