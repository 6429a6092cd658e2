//! Deploy targets.
//!
//! A target names one config document and the edits that turn it into a
//! per-environment variant (`dev`, `prod`, ...). A target set is a JSON
//! document keyed by target name:
//!
//! ```json
//! {
//!   "prod": {
//!     "src": "built/.clasp.json",
//!     "edits": { "scriptId": "PROD_SCRIPT_ID" }
//!   },
//!   "dev": {
//!     "src": "built/.clasp.json",
//!     "dest": "built/dev/.clasp.json",
//!     "edits": { "scriptId": "DEV_SCRIPT_ID" }
//!   }
//! }
//! ```
//!
//! The set is an explicit value threaded through calls; there is no
//! process-wide registry.

use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::patch::{apply_edits, from_edit_map, PatchError};
use crate::store::{self, StoreError};

#[derive(Debug, Error)]
pub enum TargetError {
    #[error("UNKNOWN_TARGET: {0}")]
    UnknownTarget(String),
    #[error(transparent)]
    Patch(#[from] PatchError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// One named deploy configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Target {
    /// Config document to patch.
    pub src: PathBuf,
    /// Destination; omitted means patch `src` in place.
    #[serde(default)]
    pub dest: Option<PathBuf>,
    /// Edit spec: path string → value, applied in declaration order.
    pub edits: Map<String, Value>,
}

impl Target {
    /// The path the patched document is written to.
    pub fn dest(&self) -> &Path {
        self.dest.as_deref().unwrap_or(&self.src)
    }
}

/// Named targets in declaration order.
pub type TargetSet = IndexMap<String, Target>;

/// Load a target set from a JSON file.
pub fn load_targets(path: &Path) -> Result<TargetSet, TargetError> {
    let text = fs::read_to_string(path).map_err(StoreError::Io)?;
    let set = serde_json::from_str(&text).map_err(StoreError::Json)?;
    Ok(set)
}

/// Run one named target: load-or-default the source config, apply its
/// edits in order, write the result to the destination.
pub fn run_target(targets: &TargetSet, name: &str) -> Result<(), TargetError> {
    let target = targets
        .get(name)
        .ok_or_else(|| TargetError::UnknownTarget(name.to_string()))?;
    let mut doc = store::load_or_empty(&target.src);
    let edits = from_edit_map(&target.edits)?;
    apply_edits(&mut doc, &edits)?;
    store::save(target.dest(), &doc)?;
    Ok(())
}
