//! Content fingerprints
//!
//! Digests are computed over the full byte content of a file and rendered as
//! lower-case hex. No metadata takes part in the fingerprint.

pub mod digest;
pub mod hash_algorithm;

/// Read buffer used while streaming a file into the hasher
pub const READ_BUFFER_SIZE: usize = 64 * 1024;
