//! Type definitions for config paths.

/// A single segment of a config path: a mapping key, a sequence index, or
/// the append sentinel.
pub type PathStep = String;

/// A parsed config path.
pub type Path = Vec<PathStep>;

/// The append sentinel. As a path segment it means "the next free slot at
/// the end of the sequence here, creating the sequence if needed".
pub const APPEND: &str = "-1";
