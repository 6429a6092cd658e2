//! Core logic behind the `confpatch` binary.
//!
//! Kept in the library so the string-in/string-out paths are unit
//! testable; the binary entry point only parses arguments and pipes
//! stdin/stdout.

use std::path::Path;

use serde_json::Value;

use crate::patch::{apply_edits, from_edit_spec, PatchError};
use crate::store;
use crate::target::{self, TargetError};

// ── Errors ────────────────────────────────────────────────────────────────

#[derive(Debug)]
pub enum CliError {
    Json(serde_json::Error),
    Patch(PatchError),
    Store(store::StoreError),
    Target(TargetError),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Json(e) => write!(f, "{e}"),
            CliError::Patch(e) => write!(f, "{e}"),
            CliError::Store(e) => write!(f, "{e}"),
            CliError::Target(e) => write!(f, "{e}"),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Json(e)
    }
}

impl From<PatchError> for CliError {
    fn from(e: PatchError) -> Self {
        CliError::Patch(e)
    }
}

impl From<store::StoreError> for CliError {
    fn from(e: store::StoreError) -> Self {
        CliError::Store(e)
    }
}

impl From<TargetError> for CliError {
    fn from(e: TargetError) -> Self {
        CliError::Target(e)
    }
}

// ── Commands ──────────────────────────────────────────────────────────────

/// Apply an edit spec to a JSON document string.
///
/// `doc_json`: the document as a JSON string.
/// `spec_json`: the edit spec as a JSON object string.
///
/// Returns the patched document as a pretty-printed JSON string.
pub fn patch_document(doc_json: &str, spec_json: &str) -> Result<String, CliError> {
    let mut doc: Value = serde_json::from_str(doc_json)?;
    let spec: Value = serde_json::from_str(spec_json)?;
    let edits = from_edit_spec(&spec)?;
    apply_edits(&mut doc, &edits)?;
    Ok(serde_json::to_string_pretty(&doc)?)
}

/// Patch a config file on disk. A missing source starts from an empty
/// mapping; `dest` may equal `src`.
pub fn patch_file(spec_json: &str, src: &Path, dest: &Path) -> Result<(), CliError> {
    let spec: Value = serde_json::from_str(spec_json)?;
    let edits = from_edit_spec(&spec)?;
    let mut doc = store::load_or_empty(src);
    apply_edits(&mut doc, &edits)?;
    store::save(dest, &doc)?;
    Ok(())
}

/// Run one named target from a target-set file.
pub fn run_from_file(targets_path: &Path, name: &str) -> Result<(), CliError> {
    let targets = target::load_targets(targets_path)?;
    target::run_target(&targets, name)?;
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────
