//! Components that touch the filesystem
//!
//! - `store`: snapshot persistence
//! - `tracker`: per-run context tying the workspace, filter and output together
//! - `workspace`: tree walking and file hashing

pub mod store;
pub mod tracker;
pub mod workspace;
