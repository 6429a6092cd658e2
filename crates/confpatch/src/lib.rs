//! Patch JSON configuration documents with per-target values.
//!
//! The core is a path patcher: an edit is a `(path, value)` pair where the
//! path is `/`-delimited and `-1` appends to a sequence. Applying an edit
//! walks the path, auto-vivifying missing intermediate mappings, and
//! writes the value at the leaf. Around it, thin orchestration: load a
//! config (a missing source is an empty mapping), apply an ordered edit
//! set, write the result back pretty-printed.
//!
//! # Example
//!
//! ```
//! use confpatch::{apply_edits, Edit};
//! use serde_json::json;
//!
//! let mut doc = json!({"scriptId": "OLD"});
//! let edits = vec![
//!     Edit::new("scriptId", json!("NEW123")).unwrap(),
//!     Edit::new("oauthScopes/-1", json!("https://www.googleapis.com/auth/drive")).unwrap(),
//! ];
//! apply_edits(&mut doc, &edits).unwrap();
//! assert_eq!(doc, json!({
//!     "scriptId": "NEW123",
//!     "oauthScopes": ["https://www.googleapis.com/auth/drive"]
//! }));
//! ```

pub mod cli;
pub mod patch;
pub mod store;
pub mod target;

pub use patch::{apply_edit, apply_edits, from_edit_map, from_edit_spec, Edit, PatchError};
pub use store::{load, load_or_empty, save, StoreError};
pub use target::{load_targets, run_target, Target, TargetError, TargetSet};
