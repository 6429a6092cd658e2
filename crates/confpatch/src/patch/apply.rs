//! Edit apply logic.

use confpatch_path::{self as path, PathError, APPEND};
use serde_json::{Map, Value};

use super::types::{Edit, PatchError};

fn empty_mapping() -> Value {
    Value::Object(Map::new())
}

// ── Descent ───────────────────────────────────────────────────────────────

/// Resolve one non-final path segment, auto-vivifying missing containers.
fn step_into<'a>(cursor: &'a mut Value, step: &str) -> Result<&'a mut Value, PatchError> {
    if path::is_append(step) {
        return append_step(cursor);
    }
    match cursor {
        Value::Object(map) => Ok(map
            .entry(step.to_string())
            .or_insert_with(empty_mapping)),
        Value::Array(arr) => {
            // A sequence has no string keys to vivify; only an existing
            // index can be descended into.
            let idx = path::parse_index(step).ok_or(PatchError::InvalidIndex)?;
            arr.get_mut(idx).ok_or(PatchError::InvalidIndex)
        }
        _ => Err(PatchError::InvalidDescent(step.to_string())),
    }
}

/// Resolve an append segment in descent position.
///
/// On a sequence: append a fresh mapping and descend into it. On an empty
/// mapping: coerce the slot into a one-element sequence first. A mapping
/// that already has entries takes the sentinel as a literal key.
fn append_step(cursor: &mut Value) -> Result<&mut Value, PatchError> {
    let coerce = matches!(cursor, Value::Object(map) if map.is_empty());
    if coerce {
        *cursor = Value::Array(Vec::new());
    }
    match cursor {
        Value::Array(arr) => {
            arr.push(empty_mapping());
            let last = arr.len() - 1;
            Ok(&mut arr[last])
        }
        Value::Object(map) => Ok(map
            .entry(APPEND.to_string())
            .or_insert_with(empty_mapping)),
        _ => Err(PatchError::InvalidDescent(APPEND.to_string())),
    }
}

// ── Leaf assignment ───────────────────────────────────────────────────────

/// Write `value` at the final segment under `cursor`, overwriting any
/// existing value there.
fn assign(cursor: &mut Value, step: &str, value: Value) -> Result<(), PatchError> {
    if path::is_append(step) {
        let coerce = matches!(cursor, Value::Object(map) if map.is_empty());
        if coerce {
            *cursor = Value::Array(Vec::new());
        }
        return match cursor {
            Value::Array(arr) => {
                arr.push(value);
                Ok(())
            }
            Value::Object(map) => {
                map.insert(APPEND.to_string(), value);
                Ok(())
            }
            _ => Err(PatchError::InvalidDescent(APPEND.to_string())),
        };
    }
    match cursor {
        Value::Object(map) => {
            map.insert(step.to_string(), value);
            Ok(())
        }
        Value::Array(arr) => {
            let idx = path::parse_index(step).ok_or(PatchError::InvalidIndex)?;
            if idx < arr.len() {
                arr[idx] = value;
                Ok(())
            } else if idx == arr.len() {
                arr.push(value);
                Ok(())
            } else {
                Err(PatchError::InvalidIndex)
            }
        }
        _ => Err(PatchError::InvalidDescent(step.to_string())),
    }
}

// ── Main apply functions ──────────────────────────────────────────────────

/// Apply a single edit to the document (in-place mutation).
pub fn apply_edit(doc: &mut Value, edit: &Edit) -> Result<(), PatchError> {
    let (last, walk) = edit.path.split_last().ok_or(PathError::EmptyPath)?;
    if edit.path.iter().any(|s| s.is_empty()) {
        return Err(PathError::EmptyStep.into());
    }
    let mut cursor = doc;
    for step in walk {
        cursor = step_into(cursor, step)?;
    }
    assign(cursor, last, edit.value.clone())
}

/// Apply a sequence of edits strictly in order. The first failing edit
/// aborts the run; earlier edits stay applied.
pub fn apply_edits(doc: &mut Value, edits: &[Edit]) -> Result<(), PatchError> {
    for edit in edits {
        apply_edit(doc, edit)?;
    }
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────
