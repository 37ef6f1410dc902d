//! Snapshot persistence
//!
//! Snapshots are written to a temporary sibling file under an exclusive lock
//! and renamed over the destination, so a failed write never leaves a
//! half-written snapshot behind. Loading verifies the header, the body size
//! and the trailing SHA-1 checksum before decoding any entry.

use crate::artifacts::core::{Packable, Unpackable};
use crate::artifacts::errors::{FsnapError, FsnapResult};
use crate::artifacts::hashing::hash_algorithm::HashAlgorithm;
use crate::artifacts::snapshot::checksum::Checksum;
use crate::artifacts::snapshot::path_snapshot::Snapshot;
use crate::artifacts::snapshot::snapshot_header::SnapshotHeader;
use crate::artifacts::snapshot::{CHECKSUM_SIZE, HEADER_SIZE, SIGNATURE, VERSION};
use anyhow::{Context, anyhow};
use bytes::Bytes;
use flate2::Compression;
use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug)]
pub struct SnapshotStore {
    path: Box<Path>,
}

impl SnapshotStore {
    pub fn new(path: Box<Path>) -> Self {
        SnapshotStore { path }
    }

    /// Absolute location of the snapshot file, if its directory exists
    pub fn resolved_path(&self) -> Option<PathBuf> {
        let file_name = self.path.file_name()?;
        let parent = self.parent_dir();

        Some(std::fs::canonicalize(parent).ok()?.join(file_name))
    }

    fn parent_dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    /// Persist `snapshot`, returning the absolute path that was written
    pub fn save(&self, snapshot: &Snapshot) -> FsnapResult<PathBuf> {
        let persistence_error = |source| FsnapError::Persistence {
            path: self.path.to_path_buf(),
            source,
        };

        let destination = self.resolved_path().ok_or_else(|| {
            persistence_error(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "destination directory does not exist",
            ))
        })?;
        let temp_path = Self::temp_path_for(&destination);

        if let Err(e) = Self::write_snapshot(&temp_path, snapshot) {
            // the destination was never touched, only the temp file needs cleanup
            let _ = std::fs::remove_file(&temp_path);
            return Err(persistence_error(std::io::Error::other(e)));
        }

        if let Err(e) = std::fs::rename(&temp_path, &destination) {
            let _ = std::fs::remove_file(&temp_path);
            return Err(persistence_error(e));
        }

        debug!(path = %destination.display(), entries = snapshot.len(), "snapshot saved");

        Ok(destination)
    }

    fn temp_path_for(destination: &Path) -> PathBuf {
        let file_name = destination
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default();

        destination.with_file_name(format!(".{}.tmp-{}", file_name, std::process::id()))
    }

    fn write_snapshot(temp_path: &Path, snapshot: &Snapshot) -> anyhow::Result<()> {
        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(&snapshot.pack_records()?)?;
        let body = encoder.finish()?;

        let entries_count = u32::try_from(snapshot.len())
            .map_err(|_| anyhow!("Too many entries: {}", snapshot.len()))?;
        let header =
            SnapshotHeader::current(snapshot.algorithm().as_u32(), entries_count, body.len() as u64);

        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(temp_path)
            .with_context(|| format!("Unable to open {}", temp_path.display()))?;
        let lock = file_guard::lock(&mut file, file_guard::Lock::Exclusive, 0, 1)?;

        let mut writer = Checksum::new(lock);
        writer.write_all(&header.serialize()?)?;
        writer.write_all(&body)?;
        writer.finish()?;

        Ok(())
    }

    /// Read back a snapshot written by [`SnapshotStore::save`]
    pub fn load(&self) -> FsnapResult<Snapshot> {
        let mut file = std::fs::File::open(&self.path).map_err(|e| FsnapError::Input {
            path: self.path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let snapshot = Self::read_snapshot(&mut file).map_err(|e| FsnapError::CorruptSnapshot {
            path: self.path.to_path_buf(),
            reason: format!("{e:#}"),
        })?;

        debug!(path = %self.path.display(), entries = snapshot.len(), "snapshot loaded");

        Ok(snapshot)
    }

    fn read_snapshot(file: &mut std::fs::File) -> anyhow::Result<Snapshot> {
        let file_len = file.metadata()?.len();
        if file_len == 0 {
            return Err(anyhow!("File is empty"));
        }
        if file_len < (HEADER_SIZE + CHECKSUM_SIZE) as u64 {
            return Err(anyhow!("File is too short ({file_len} bytes)"));
        }

        let lock = file_guard::lock(file, file_guard::Lock::Shared, 0, 1)?;
        let mut reader = Checksum::new(lock);

        let header = SnapshotHeader::deserialize(reader.read_bytes(HEADER_SIZE)?)?;
        let algorithm = Self::check_header(&header)?;

        let expected_len = header
            .body_len
            .checked_add((HEADER_SIZE + CHECKSUM_SIZE) as u64)
            .ok_or_else(|| anyhow!("Body length {} overflows", header.body_len))?;
        if expected_len != file_len {
            return Err(anyhow!(
                "File size {file_len} does not match header (expected {expected_len} bytes)"
            ));
        }

        let body = Self::decompress(&mut reader, header.body_len);
        // damage anywhere in the file is reported as a checksum mismatch first
        reader.verify()?;

        Snapshot::unpack_records(body?, header.entries_count, algorithm)
    }

    fn check_header(header: &SnapshotHeader) -> anyhow::Result<HashAlgorithm> {
        if header.marker != SIGNATURE {
            return Err(anyhow!("Invalid snapshot file signature"));
        }

        if header.version != VERSION {
            return Err(anyhow!(
                "Unsupported snapshot file version: {}",
                header.version
            ));
        }

        HashAlgorithm::from_u32(header.algorithm)
            .ok_or_else(|| anyhow!("Unknown digest algorithm tag: {}", header.algorithm))
    }

    /// Inflate the next `body_len` bytes, hashing them on the way through
    fn decompress(reader: &mut Checksum, body_len: u64) -> anyhow::Result<Bytes> {
        let mut compressed = std::io::Read::by_ref(reader).take(body_len);
        let mut data = Vec::new();
        let inflated = ZlibDecoder::new(&mut compressed).read_to_end(&mut data);

        // whatever the inflater left unread still counts towards the checksum
        std::io::copy(&mut compressed, &mut std::io::sink())?;
        inflated.context("Unable to decompress snapshot body")?;

        Ok(Bytes::from(data))
    }
}
