//! Snapshot data structures and algorithms
//!
//! - `core`: binary encoding traits
//! - `diff`: classification of differences between two snapshots
//! - `errors`: error taxonomy
//! - `filter`: include/exclude path selection
//! - `hashing`: digest algorithms and fingerprints
//! - `snapshot`: in-memory snapshot and its on-disk framing

pub mod core;
pub mod diff;
pub mod errors;
pub mod filter;
pub mod hashing;
pub mod snapshot;
