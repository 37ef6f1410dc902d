//! Pipeline implementations
//!
//! - `create`: walk, hash and persist a snapshot
//! - `compare`: load a stored snapshot, walk again and report the differences

pub mod compare;
pub mod create;
