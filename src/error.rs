//! Error types for schema conversion.

use thiserror::Error;

/// Result type for conversion operations.
pub type Result<T> = std::result::Result<T, ConvertError>;

/// Conversion errors.
///
/// Per-field enum symbol violations are recovered locally (the field
/// degrades to a nullable string) and never surface here; everything in
/// this enum aborts the whole conversion.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConvertError {
    #[error("no schema given")]
    MissingInput,

    #[error("no Avro mapping for JSON type `{type_name}` at `{field}`")]
    UnmappableType { field: String, type_name: String },

    #[error("node at `{field}` matches more than one shape")]
    AmbiguousNodeShape { field: String },
}
