//! Error types for record validation and merging.

use thiserror::Error;

/// Storage layer error.
///
/// Validation errors are raised at record construction, the merge error at
/// the call site of [`Record::merge`](crate::storage::Record::merge). All of
/// them are fatal to the call: the caller never receives a half-built record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// Record payload was not a JSON object
    #[error("a record must be created from an object")]
    NotAnObject,
    /// Record payload had no `id` key
    #[error("a record must have an id")]
    MissingId,
    /// Field value was neither scalar, null, nested object nor link
    #[error("unsupported value for field `{field}`")]
    UnsupportedValue { field: String },
    /// Merge payload tried to change the record identity
    #[error("a merge payload cannot carry an id")]
    MergeChangesId,
}
