//! Error taxonomy
//!
//! Only whole-run conditions surface as errors from the pipelines. A per-file
//! [`FsnapError::Io`] is recovered by the walker and reported as a warning.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FsnapError {
    /// A filter pattern is not a valid regular expression.
    #[error("Invalid {role} pattern '{pattern}': {source}")]
    Configuration {
        role: &'static str,
        pattern: String,
        source: regex::Error,
    },
    /// The root to walk, or the snapshot to compare against, cannot be read.
    #[error("Cannot read {}: {reason}", .path.display())]
    Input { path: PathBuf, reason: String },
    /// A single file could not be opened or read.
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The snapshot could not be written.
    #[error("Failed to write snapshot {}: {source}", .path.display())]
    Persistence {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The snapshot could not be parsed back.
    #[error("Corrupt snapshot {}: {reason}", .path.display())]
    CorruptSnapshot { path: PathBuf, reason: String },
}

pub type FsnapResult<T> = Result<T, FsnapError>;
