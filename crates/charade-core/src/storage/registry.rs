//! Registry of collections, cross-collection resolution and projection.

use crate::storage::collection::Collection;
use crate::storage::field::Field;
use crate::storage::record::Record;
use serde_json::Value;

/// Options for [`Registry::assemble`].
///
/// A non-empty `schema` keeps only the named fields. It is a filter, not a
/// reorder: output fields follow the record's own order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssembleConfig {
    pub schema: Vec<String>,
}

impl AssembleConfig {
    /// Keep every field.
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep only the named fields.
    pub fn with_schema<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            schema: fields.into_iter().map(Into::into).collect(),
        }
    }
}

/// A named set of collections, living for one mock session.
///
/// Lookup is by exact name and returns `Option` rather than failing;
/// callers of `assemble` and link resolution handle the miss.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Registry {
    collections: Vec<Collection>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a collection.
    pub fn add_collection(&mut self, collection: Collection) -> &mut Self {
        self.collections.push(collection);
        self
    }

    /// The first collection registered under `name`.
    pub fn get_collection(&self, name: &str) -> Option<&Collection> {
        self.collections.iter().find(|c| c.name() == name)
    }

    /// Mutable access to the first collection registered under `name`.
    pub fn get_collection_mut(&mut self, name: &str) -> Option<&mut Collection> {
        self.collections.iter_mut().find(|c| c.name() == name)
    }

    /// All collections, in registration order.
    pub fn all(&self) -> &[Collection] {
        &self.collections
    }

    /// Reset every collection to its construction-time contents, in
    /// registration order. Collections themselves are never added or removed.
    pub fn reset_all(&mut self) -> &mut Self {
        for collection in &mut self.collections {
            collection.reset();
        }
        self
    }

    /// Project `record` into plain, link-free JSON.
    ///
    /// Links resolve against the current collection contents, one level
    /// deep: a to-one link becomes the target's data (or disappears when the
    /// target is missing), a to-many link becomes a list in the supplied id
    /// order with a null slot per missing id. A resolved target's own links
    /// stay unresolved and are left out of its data.
    pub fn assemble(&self, record: &Record, config: &AssembleConfig) -> Value {
        let mut out = serde_json::Map::new();

        for (key, field) in record.fields() {
            if !config.schema.is_empty() && !config.schema.iter().any(|f| f == key) {
                continue;
            }

            match field {
                Field::Value(value) => {
                    out.insert(key.clone(), value.clone());
                }
                Field::LinkOne { collection, id } => {
                    let target = self
                        .get_collection(collection)
                        .and_then(|c| c.get(id.clone()));
                    if let Some(target) = target {
                        out.insert(key.clone(), target.plain_data());
                    }
                }
                Field::LinkMany { collection, ids } => {
                    let store = self.get_collection(collection);
                    let resolved = ids
                        .iter()
                        .map(|id| {
                            store
                                .and_then(|c| c.get(id.clone()))
                                .map_or(Value::Null, Record::plain_data)
                        })
                        .collect();
                    out.insert(key.clone(), Value::Array(resolved));
                }
            }
        }

        Value::Object(out)
    }
}
