//! Named, ordered, resettable record collections.

use crate::storage::error::StorageError;
use crate::storage::record::Record;
use serde_json::Value;

/// A named ordered set of records with identity-based CRUD and a snapshot
/// of its construction-time contents.
///
/// Mutations never reorder surviving items. Ids need not be unique: `get`
/// and `update` act on the first match, `remove` on every match.
#[derive(Debug, Clone, PartialEq)]
pub struct Collection {
    name: String,
    items: Vec<Record>,
    initial: Vec<Record>,
}

impl Collection {
    /// Create an empty collection.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_records(name, Vec::new())
    }

    /// Create a collection seeded with `initial` records.
    ///
    /// The initial contents are captured as the reset baseline; records are
    /// moved in, so no caller alias can reach the snapshot afterwards.
    pub fn with_records(name: impl Into<String>, initial: Vec<Record>) -> Self {
        Self {
            name: name.into(),
            items: initial.clone(),
            initial,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Validate `raw` as a record and append it.
    pub fn add(&mut self, raw: Value) -> Result<&mut Self, StorageError> {
        let record = Record::create(raw)?;
        Ok(self.add_record(record))
    }

    /// Append an already-constructed record unchanged.
    pub fn add_record(&mut self, record: Record) -> &mut Self {
        self.items.push(record);
        self
    }

    /// Remove every record whose id equals `id`. Absent ids are a no-op.
    pub fn remove(&mut self, id: impl Into<Value>) -> &mut Self {
        let id = id.into();
        self.items.retain(|record| record.id() != &id);
        self
    }

    /// Replace the first record whose id equals `id`, keeping its position.
    /// Absent ids are a no-op.
    pub fn update(&mut self, id: impl Into<Value>, next: Record) -> &mut Self {
        let id = id.into();
        if let Some(slot) = self.items.iter_mut().find(|record| record.id() == &id) {
            *slot = next;
        }
        self
    }

    /// The first record whose id equals `id`.
    pub fn get(&self, id: impl Into<Value>) -> Option<&Record> {
        let id = id.into();
        self.items.iter().find(|record| record.id() == &id)
    }

    /// Mutable access to the first record whose id equals `id`.
    pub fn get_mut(&mut self, id: impl Into<Value>) -> Option<&mut Record> {
        let id = id.into();
        self.items.iter_mut().find(|record| record.id() == &id)
    }

    /// All records, in insertion order.
    pub fn all(&self) -> &[Record] {
        &self.items
    }

    /// Discard every runtime mutation and restore an independent copy of the
    /// construction-time contents.
    pub fn reset(&mut self) -> &mut Self {
        self.items = self.initial.clone();
        self
    }
}
