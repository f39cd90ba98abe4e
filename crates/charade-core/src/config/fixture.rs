//! Fixture document types.

use crate::config::error::ConfigError;
use crate::storage::{Collection, Record};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One fixture file: a collection name and its seed records.
///
/// Records are plain JSON objects; each goes through normal record
/// validation when the fixture is turned into a collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixtureFile {
    /// Name the collection is registered under
    pub collection: String,
    /// Seed records, in file order
    #[serde(default)]
    pub records: Vec<Value>,
}

impl FixtureFile {
    /// Validate the seed records and build the collection they describe.
    /// The seeds become the collection's reset baseline.
    pub fn into_collection(self) -> Result<Collection, ConfigError> {
        let mut records = Vec::with_capacity(self.records.len());
        for raw in self.records {
            let record = Record::create(raw).map_err(|source| ConfigError::Record {
                collection: self.collection.clone(),
                source,
            })?;
            records.push(record);
        }
        Ok(Collection::with_records(self.collection, records))
    }
}
