//! Field values stored inside a record.

use serde_json::Value;

/// A single stored field of a record.
///
/// Plain values and links are distinguished by tag, so validation and
/// assembly switch on the variant instead of probing the value's shape.
/// Links carry the *name* of the target collection and are resolved through
/// the registry at read time, never cached, so they always reflect the
/// current (possibly mutated or reset) target state.
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    /// Scalar, null, or a nested object holding only scalars/nulls/objects
    Value(Value),
    /// Link to a single record of another collection
    LinkOne { collection: String, id: Value },
    /// Link to many records of another collection, in the supplied id order
    LinkMany { collection: String, ids: Vec<Value> },
}

impl Field {
    /// Wrap a plain value.
    pub fn value(value: impl Into<Value>) -> Self {
        Field::Value(value.into())
    }

    /// Link to one record of `collection`.
    pub fn to_one(collection: impl Into<String>, id: impl Into<Value>) -> Self {
        Field::LinkOne {
            collection: collection.into(),
            id: id.into(),
        }
    }

    /// Link to many records of `collection`, resolved in the given id order.
    pub fn to_many<I, V>(collection: impl Into<String>, ids: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Field::LinkMany {
            collection: collection.into(),
            ids: ids.into_iter().map(Into::into).collect(),
        }
    }

    /// True for both link variants.
    pub fn is_link(&self) -> bool {
        matches!(self, Field::LinkOne { .. } | Field::LinkMany { .. })
    }
}

impl From<Value> for Field {
    fn from(value: Value) -> Self {
        Field::Value(value)
    }
}
