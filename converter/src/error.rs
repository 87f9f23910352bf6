//! Error types for label loading and graph projection.

use thiserror::Error;

/// Errors raised while converting a graph into JSON.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// Neither the predicate nor its derived short name has a label entry.
    #[error("{predicate}: no json name available, provide a label entry with a proper 'name'")]
    UnresolvedPredicate {
        /// Full IRI of the offending predicate.
        predicate: String,
    },

    /// A field already holds values of another shape.
    #[error("field '{key}' holds {existing} values, cannot add {attempted} value")]
    ShapeConflict {
        /// Field name.
        key: String,
        /// Shape already stored under the key.
        existing: &'static str,
        /// Shape of the rejected write.
        attempted: &'static str,
    },

    /// The RDF input could not be parsed.
    #[error("failed to parse {format} input: {message}")]
    Parse {
        /// Name of the syntax being parsed.
        format: &'static str,
        /// Parser diagnostic.
        message: String,
    },
}

/// Errors raised while loading label entries.
#[derive(Error, Debug)]
pub enum LabelError {
    /// The label source could not be read.
    #[error("failed to read label entries: {0}")]
    Io(#[from] std::io::Error),

    /// The label source is not a JSON array of label entries.
    #[error("malformed label entries: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias for projection operations.
pub type Result<T> = std::result::Result<T, ConvertError>;
