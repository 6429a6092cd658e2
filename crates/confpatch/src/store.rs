//! Document load/save.
//!
//! Configs are read from and written back to disk as JSON text. A source
//! that is missing or unreadable yields an empty mapping, so patching a
//! config from scratch is valid. Output is pretty-printed with a trailing
//! newline; the destination may equal the source.

use std::fs;
use std::io;
use std::path::Path;

use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO: {0}")]
    Io(#[from] io::Error),
    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Read and parse a JSON document.
pub fn load(path: &Path) -> Result<Value, StoreError> {
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

/// Read a JSON document, substituting an empty mapping when the source is
/// missing, unreadable, or not valid JSON.
pub fn load_or_empty(path: &Path) -> Value {
    load(path).unwrap_or_else(|_| Value::Object(Map::new()))
}

/// Serialize a document to `path`, pretty-printed with a trailing newline.
pub fn save(path: &Path, doc: &Value) -> Result<(), StoreError> {
    let mut text = serde_json::to_string_pretty(doc)?;
    text.push('\n');
    fs::write(path, text)?;
    Ok(())
}
