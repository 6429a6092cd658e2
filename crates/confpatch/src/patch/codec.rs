//! Edit-spec codec.
//!
//! An edit spec is a JSON object mapping path strings to values:
//!
//! ```json
//! {
//!   "clasp/scriptId": "NEW123",
//!   "oauthScopes/-1": "https://www.googleapis.com/auth/drive"
//! }
//! ```
//!
//! Object order is the application order (the document model preserves
//! insertion order).

use confpatch_path::{format_path, parse_path};
use serde_json::{Map, Value};

use super::types::{Edit, PatchError};

/// Decode an edit-spec object into an ordered edit list.
pub fn from_edit_map(map: &Map<String, Value>) -> Result<Vec<Edit>, PatchError> {
    let mut edits = Vec::with_capacity(map.len());
    for (path, value) in map {
        edits.push(Edit {
            path: parse_path(path)?,
            value: value.clone(),
        });
    }
    Ok(edits)
}

/// Decode an edit spec supplied as a raw JSON value.
///
/// # Errors
///
/// `InvalidSpec` if the value is not an object; `MalformedPath` if any
/// key fails to parse.
pub fn from_edit_spec(spec: &Value) -> Result<Vec<Edit>, PatchError> {
    let map = spec.as_object().ok_or(PatchError::InvalidSpec)?;
    from_edit_map(map)
}

/// Encode an edit list back into an edit-spec object.
pub fn to_edit_spec(edits: &[Edit]) -> Value {
    let mut map = Map::new();
    for edit in edits {
        map.insert(format_path(&edit.path), edit.value.clone());
    }
    Value::Object(map)
}
