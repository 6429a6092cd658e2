//! Slash-delimited config path utilities.
//!
//! A config path addresses one slot inside a JSON configuration document.
//! Segments are separated by `/`, a segment is either a mapping key, a
//! sequence index, or the append sentinel `-1`. There is no escaping:
//! config keys never contain `/`, so a path splits plainly on the
//! delimiter.
//!
//! # Example
//!
//! ```
//! use confpatch_path::{parse_path, format_path, get};
//!
//! // Parse a path string into segments
//! let path = parse_path("webapp/access").unwrap();
//! assert_eq!(path, vec!["webapp".to_string(), "access".to_string()]);
//!
//! // Format segments back into a path string
//! assert_eq!(format_path(&path), "webapp/access");
//!
//! // Read a value out of a document
//! let doc = serde_json::json!({"webapp": {"access": "ANYONE"}});
//! assert_eq!(get(&doc, &path), Some(&serde_json::json!("ANYONE")));
//! ```

use serde_json::Value;
use thiserror::Error;

// Re-export types
pub mod types;
pub use types::{Path, PathStep, APPEND};

// Re-export validation
pub mod validate;
pub use validate::validate_path;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("EMPTY_PATH")]
    EmptyPath,
    #[error("EMPTY_STEP")]
    EmptyStep,
    #[error("PATH_TOO_LONG")]
    PathTooLong,
}

/// Parse a path string into segments.
///
/// # Errors
///
/// An empty path or an empty segment (`"a//b"`, leading or trailing `/`)
/// is a usage error.
///
/// # Example
///
/// ```
/// use confpatch_path::{parse_path, PathError};
///
/// assert_eq!(parse_path("scriptId").unwrap(), vec!["scriptId"]);
/// assert_eq!(parse_path("oauthScopes/-1").unwrap(), vec!["oauthScopes", "-1"]);
/// assert_eq!(parse_path(""), Err(PathError::EmptyPath));
/// assert_eq!(parse_path("a//b"), Err(PathError::EmptyStep));
/// ```
pub fn parse_path(path: &str) -> Result<Path, PathError> {
    if path.is_empty() {
        return Err(PathError::EmptyPath);
    }
    let segments: Path = path.split('/').map(str::to_string).collect();
    if segments.iter().any(|s| s.is_empty()) {
        return Err(PathError::EmptyStep);
    }
    Ok(segments)
}

/// Format path segments into a path string.
///
/// # Example
///
/// ```
/// use confpatch_path::format_path;
///
/// assert_eq!(format_path(&["a".to_string(), "b".to_string()]), "a/b");
/// ```
pub fn format_path(path: &[String]) -> String {
    path.join("/")
}

/// Check if a segment is the append sentinel.
pub fn is_append(step: &str) -> bool {
    step == APPEND
}

/// Check if a string represents a valid non-negative integer sequence index.
///
/// # Example
///
/// ```
/// use confpatch_path::is_valid_index;
///
/// assert!(is_valid_index("0"));
/// assert!(is_valid_index("123"));
/// assert!(!is_valid_index("-1"));
/// assert!(!is_valid_index("1.5"));
/// assert!(!is_valid_index("abc"));
/// ```
pub fn is_valid_index(index: &str) -> bool {
    if index.is_empty() {
        return false;
    }
    let bytes = index.as_bytes();
    // First char can't be a leading zero unless it's just "0"
    if bytes.len() > 1 && bytes[0] == b'0' {
        return false;
    }
    bytes.iter().all(|&b| b.is_ascii_digit())
}

/// Parse a segment as a sequence index. The append sentinel is not an
/// index.
pub fn parse_index(step: &str) -> Option<usize> {
    if !is_valid_index(step) {
        return None;
    }
    step.parse().ok()
}

/// Get a value from a document by path.
///
/// Returns `None` if the path doesn't exist or doesn't address a concrete
/// slot (the append sentinel never does).
///
/// # Example
///
/// ```
/// use confpatch_path::get;
/// use serde_json::json;
///
/// let doc = json!({"clasp": {"scriptId": "abc"}});
/// let path = vec!["clasp".to_string(), "scriptId".to_string()];
/// assert_eq!(get(&doc, &path), Some(&json!("abc")));
///
/// assert_eq!(get(&doc, &["missing".to_string()]), None);
/// ```
pub fn get<'a>(val: &'a Value, path: &[String]) -> Option<&'a Value> {
    let mut current = val;
    for step in path {
        match current {
            Value::Array(arr) => {
                let idx = parse_index(step)?;
                current = arr.get(idx)?;
            }
            Value::Object(map) => {
                current = map.get(step)?;
            }
            _ => return None,
        }
    }
    Some(current)
}

/// Get a mutable reference to a value in a document by path.
///
/// Returns `None` if the path doesn't exist or is invalid.
pub fn get_mut<'a>(val: &'a mut Value, path: &[String]) -> Option<&'a mut Value> {
    let mut current = val;
    for step in path {
        match current {
            Value::Array(arr) => {
                let idx = parse_index(step)?;
                current = arr.get_mut(idx)?;
            }
            Value::Object(map) => {
                current = map.get_mut(step)?;
            }
            _ => return None,
        }
    }
    Some(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_path() {
        assert_eq!(parse_path("foo").unwrap(), vec!["foo"]);
        assert_eq!(parse_path("foo/bar").unwrap(), vec!["foo", "bar"]);
        assert_eq!(parse_path("-1/name").unwrap(), vec!["-1", "name"]);
        assert_eq!(parse_path("a/0/b").unwrap(), vec!["a", "0", "b"]);
    }

    #[test]
    fn test_parse_path_empty() {
        assert_eq!(parse_path(""), Err(PathError::EmptyPath));
    }

    #[test]
    fn test_parse_path_empty_step() {
        assert_eq!(parse_path("a//b"), Err(PathError::EmptyStep));
        assert_eq!(parse_path("/a"), Err(PathError::EmptyStep));
        assert_eq!(parse_path("a/"), Err(PathError::EmptyStep));
        assert_eq!(parse_path("/"), Err(PathError::EmptyStep));
    }

    #[test]
    fn test_format_path() {
        assert_eq!(format_path(&["foo".to_string()]), "foo");
        assert_eq!(
            format_path(&["foo".to_string(), "bar".to_string()]),
            "foo/bar"
        );
        assert_eq!(format_path(&[]), "");
    }

    #[test]
    fn test_roundtrip() {
        for path in ["foo", "foo/bar", "-1/name", "a/0/b/-1"] {
            let parsed = parse_path(path).unwrap();
            assert_eq!(format_path(&parsed), path, "failed roundtrip for {path:?}");
        }
    }

    #[test]
    fn test_is_append() {
        assert!(is_append("-1"));
        assert!(!is_append("-"));
        assert!(!is_append("1"));
        assert!(!is_append("-11"));
    }

    #[test]
    fn test_is_valid_index() {
        assert!(is_valid_index("0"));
        assert!(is_valid_index("123"));
        assert!(!is_valid_index("-1"));
        assert!(!is_valid_index("1.5"));
        assert!(!is_valid_index("abc"));
        assert!(!is_valid_index(""));
        assert!(!is_valid_index("01")); // Leading zero not allowed
    }

    #[test]
    fn test_parse_index() {
        assert_eq!(parse_index("0"), Some(0));
        assert_eq!(parse_index("42"), Some(42));
        assert_eq!(parse_index("-1"), None);
        assert_eq!(parse_index("x"), None);
    }

    #[test]
    fn test_get_object_key() {
        let doc = json!({"foo": "bar"});
        assert_eq!(get(&doc, &["foo".to_string()]), Some(&json!("bar")));
        assert_eq!(get(&doc, &["missing".to_string()]), None);
    }

    #[test]
    fn test_get_nested() {
        let doc = json!({"foo": {"bar": {"baz": "qux"}}});
        assert_eq!(
            get(
                &doc,
                &["foo".to_string(), "bar".to_string(), "baz".to_string()]
            ),
            Some(&json!("qux"))
        );
    }

    #[test]
    fn test_get_array_element() {
        let doc = json!({"a": [1, 2, 3]});
        assert_eq!(
            get(&doc, &["a".to_string(), "1".to_string()]),
            Some(&json!(2))
        );
        assert_eq!(get(&doc, &["a".to_string(), "3".to_string()]), None);
    }

    #[test]
    fn test_get_append_step() {
        let doc = json!([1, 2, 3]);
        assert_eq!(get(&doc, &["-1".to_string()]), None);
    }

    #[test]
    fn test_get_through_scalar() {
        let doc = json!({"a": 1});
        assert_eq!(get(&doc, &["a".to_string(), "b".to_string()]), None);
    }

    #[test]
    fn test_get_mut() {
        let mut doc = json!({"a": {"b": 1}});
        let slot = get_mut(&mut doc, &["a".to_string(), "b".to_string()]).unwrap();
        *slot = json!(2);
        assert_eq!(doc, json!({"a": {"b": 2}}));
    }
}
