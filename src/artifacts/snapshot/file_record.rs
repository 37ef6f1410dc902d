use crate::artifacts::hashing::digest::Digest;
use derive_new::new;

/// One hashed file
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct FileRecord {
    /// Canonical absolute path
    pub path: String,
    pub digest: Digest,
}
