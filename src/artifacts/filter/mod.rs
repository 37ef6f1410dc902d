//! Path selection
//!
//! A path takes part in a snapshot iff it matches the include pattern and,
//! when an exclude pattern is given, does not match it. Both patterns are
//! case-insensitive and unanchored: a match anywhere in the canonical path
//! counts.

pub mod path_filter;

/// Include pattern used when none is given
pub const DEFAULT_INCLUDE: &str = ".*";
