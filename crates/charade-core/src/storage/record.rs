//! Validated, identity-bearing records.

use crate::storage::error::StorageError;
use crate::storage::field::Field;
use indexmap::IndexMap;
use serde_json::Value;

/// One stored fixture: an ordered field map with a stable `id`.
///
/// Records are created through validated construction, mutated only through
/// [`Record::merge`] (which can never touch `id`), and duplicated with
/// [`Clone`] into a record with fully independent storage.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    fields: IndexMap<String, Field>,
}

/// Check that a raw value is storable under `field`: scalars and nulls pass,
/// objects recurse, arrays fail. Callables have no representation here, so
/// the remaining JS failure mode is unreachable by construction.
fn check_value(field: &str, value: &Value) -> Result<(), StorageError> {
    match value {
        Value::Array(_) => Err(StorageError::UnsupportedValue {
            field: field.to_owned(),
        }),
        Value::Object(map) => {
            for nested in map.values() {
                check_value(field, nested)?;
            }
            Ok(())
        }
        _ => Ok(()),
    }
}

impl Record {
    /// Validate and wrap a raw JSON object.
    ///
    /// Fails if `raw` is not an object, lacks an `id` key, or holds an array
    /// anywhere in value position.
    pub fn create(raw: Value) -> Result<Self, StorageError> {
        let Value::Object(map) = raw else {
            return Err(StorageError::NotAnObject);
        };
        if !map.contains_key("id") {
            return Err(StorageError::MissingId);
        }

        let mut fields = IndexMap::with_capacity(map.len());
        for (key, value) in map {
            check_value(&key, &value)?;
            fields.insert(key, Field::Value(value));
        }
        Ok(Self { fields })
    }

    /// Build a record from explicit fields, allowing links among them.
    ///
    /// Plain values go through the same validation as [`Record::create`];
    /// the `id` field must be present and must be a plain value.
    pub fn from_fields<I, S>(fields: I) -> Result<Self, StorageError>
    where
        I: IntoIterator<Item = (S, Field)>,
        S: Into<String>,
    {
        let mut out = IndexMap::new();
        for (key, field) in fields {
            let key = key.into();
            if let Field::Value(value) = &field {
                check_value(&key, value)?;
            }
            out.insert(key, field);
        }
        if !matches!(out.get("id"), Some(Field::Value(_))) {
            return Err(StorageError::MissingId);
        }
        Ok(Self { fields: out })
    }

    /// The record identity.
    pub fn id(&self) -> &Value {
        match self.fields.get("id") {
            Some(Field::Value(id)) => id,
            _ => unreachable!("construction guarantees a plain id field"),
        }
    }

    /// All fields, in insertion order.
    pub fn fields(&self) -> &IndexMap<String, Field> {
        &self.fields
    }

    /// A single field by name.
    pub fn get(&self, key: &str) -> Option<&Field> {
        self.fields.get(key)
    }

    /// The plain-value fields as a fresh JSON object, links left out.
    /// Field order follows insertion order.
    pub fn plain_data(&self) -> Value {
        let mut map = serde_json::Map::new();
        for (key, field) in &self.fields {
            if let Field::Value(value) = field {
                map.insert(key.clone(), value.clone());
            }
        }
        Value::Object(map)
    }

    /// Shallow-overlay `partial` onto the current fields: overlapping keys
    /// are replaced wholesale, non-overlapping keys are kept. A payload
    /// carrying `id` fails, whatever its value.
    pub fn merge(&mut self, partial: Value) -> Result<&mut Self, StorageError> {
        let Value::Object(map) = partial else {
            return Err(StorageError::NotAnObject);
        };
        if map.contains_key("id") {
            return Err(StorageError::MergeChangesId);
        }
        for (key, value) in &map {
            check_value(key, value)?;
        }

        for (key, value) in map {
            self.fields.insert(key, Field::Value(value));
        }
        Ok(self)
    }
}
