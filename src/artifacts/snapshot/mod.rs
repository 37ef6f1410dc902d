//! Snapshot file format
//!
//! A snapshot maps canonical absolute paths to content digests. On disk it
//! uses a framing similar to the git index:
//!
//! ```text
//! Header (24 bytes):
//!   - Signature: "FSNP" (4 bytes)
//!   - Version: 1 (4 bytes)
//!   - Digest algorithm tag (4 bytes)
//!   - Entry count (4 bytes)
//!   - Compressed body length (8 bytes)
//!
//! Body (zlib):
//!   - Path length (4 bytes), path bytes, raw digest
//!
//! Checksum (20 bytes):
//!   - SHA-1 hash of all preceding bytes
//! ```

pub mod checksum;
pub mod file_record;
pub mod path_snapshot;
pub mod snapshot_header;

/// Size of SHA-1 checksum in bytes
pub const CHECKSUM_SIZE: usize = 20;

/// Size of snapshot header in bytes
pub const HEADER_SIZE: usize = 24;

/// Magic signature identifying snapshot files
pub const SIGNATURE: &str = "FSNP";

/// Snapshot file format version
pub const VERSION: u32 = 1;
