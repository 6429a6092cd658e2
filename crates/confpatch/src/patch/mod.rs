//! The path patcher.
//!
//! An edit is a `(path, value)` pair; applying it walks the path into the
//! document, creating missing intermediate mappings on the way down, and
//! writes the value at the leaf. The `-1` segment appends to the sequence
//! at that point, creating one if the slot holds an empty mapping.
//!
//! Edits apply strictly in the order given; later edits may land inside
//! containers created by earlier ones. Edits only add or overwrite, never
//! delete.

pub mod apply;
pub mod codec;
pub mod types;

pub use apply::{apply_edit, apply_edits};
pub use codec::{from_edit_map, from_edit_spec, to_edit_spec};
pub use types::{Edit, PatchError};
