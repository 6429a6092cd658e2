//! Core types for the patch module.

use confpatch_path::{parse_path, Path, PathError};
use serde_json::Value;
use thiserror::Error;

// ── Error ─────────────────────────────────────────────────────────────────

#[derive(Debug, Error, Clone, PartialEq)]
pub enum PatchError {
    /// A path segment tried to descend into a scalar.
    #[error("INVALID_DESCENT: {0}")]
    InvalidDescent(String),
    #[error("INVALID_INDEX")]
    InvalidIndex,
    #[error("MALFORMED_PATH: {0}")]
    MalformedPath(#[from] PathError),
    /// An edit spec that is not a JSON object.
    #[error("INVALID_SPEC")]
    InvalidSpec,
}

// ── Edit ──────────────────────────────────────────────────────────────────

/// A single `(path, value)` edit instruction.
#[derive(Debug, Clone, PartialEq)]
pub struct Edit {
    pub path: Path,
    pub value: Value,
}

impl Edit {
    /// Build an edit from a path string.
    ///
    /// # Example
    ///
    /// ```
    /// use confpatch::patch::Edit;
    /// use serde_json::json;
    ///
    /// let edit = Edit::new("clasp/scriptId", json!("abc")).unwrap();
    /// assert_eq!(edit.path, vec!["clasp", "scriptId"]);
    /// ```
    pub fn new(path: &str, value: Value) -> Result<Self, PatchError> {
        Ok(Edit {
            path: parse_path(path)?,
            value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn edit_new_parses_path() {
        let edit = Edit::new("a/b/c", json!(5)).unwrap();
        assert_eq!(edit.path, vec!["a", "b", "c"]);
        assert_eq!(edit.value, json!(5));
    }

    #[test]
    fn edit_new_rejects_empty_path() {
        let err = Edit::new("", json!(1)).unwrap_err();
        assert_eq!(err, PatchError::MalformedPath(PathError::EmptyPath));
    }

    #[test]
    fn edit_new_rejects_empty_step() {
        let err = Edit::new("a//b", json!(1)).unwrap_err();
        assert_eq!(err, PatchError::MalformedPath(PathError::EmptyStep));
    }
}
