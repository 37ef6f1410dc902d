//! Directory integrity snapshots
//!
//! Walk a tree, fingerprint the content of every selected file, persist the
//! result, and later report which files were added, removed or modified
//! relative to a stored snapshot.

pub mod areas;
pub mod artifacts;
pub mod commands;
