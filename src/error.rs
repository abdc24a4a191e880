//! Error types for strict-mode edits.

use thiserror::Error;

/// Result type alias for strict edit operations.
pub type EditResult<T> = Result<T, EditError>;

/// Errors surfaced by the strict `try_*` edit operations.
///
/// The default operations never return these; they fall back to the
/// original tree instead.
#[derive(Debug, Error)]
pub enum EditError {
    /// The path does not resolve against this document.
    #[error("unresolved path: {path}")]
    Unresolved {
        /// The path string that failed to resolve.
        path: String,
    },

    /// Append targeted a value that is not an array.
    #[error("append requires array at {path}, found {found}")]
    AppendRequiresArray {
        /// The path that resolved to a non-array.
        path: String,
        /// The actual type found.
        found: &'static str,
    },

    /// Merge targeted, or was given, a value that is not an object.
    #[error("merge requires object at {path}, found {found}")]
    MergeRequiresObject {
        /// The path involved in the merge.
        path: String,
        /// The actual type found.
        found: &'static str,
    },
}

impl EditError {
    /// Create an unresolved path error.
    #[inline]
    pub fn unresolved(path: impl Into<String>) -> Self {
        EditError::Unresolved { path: path.into() }
    }

    /// Create an append-requires-array error.
    #[inline]
    pub fn append_requires_array(path: impl Into<String>, found: &'static str) -> Self {
        EditError::AppendRequiresArray {
            path: path.into(),
            found,
        }
    }

    /// Create a merge-requires-object error.
    #[inline]
    pub fn merge_requires_object(path: impl Into<String>, found: &'static str) -> Self {
        EditError::MergeRequiresObject {
            path: path.into(),
            found,
        }
    }
}

/// Get the type name of a JSON value.
#[inline]
pub fn value_type_name(v: &serde_json::Value) -> &'static str {
    match v {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
