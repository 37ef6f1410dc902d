use crate::artifacts::hashing::digest::Digest;
use crate::artifacts::hashing::hash_algorithm::HashAlgorithm;
use crate::artifacts::snapshot::file_record::FileRecord;
use anyhow::anyhow;
use byteorder::{NetworkEndian, ReadBytesExt, WriteBytesExt};
use bytes::Bytes;
use std::collections::HashMap;
use std::io::{Cursor, Read, Write};

/// Point-in-time mapping of canonical paths to content digests
///
/// Records keep the order in which they were produced by the walk. Lookups go
/// through a path index, and equality ignores record order.
#[derive(Debug, Clone)]
pub struct Snapshot {
    algorithm: HashAlgorithm,
    records: Vec<FileRecord>,
    positions: HashMap<String, usize>,
}

impl Snapshot {
    pub fn empty(algorithm: HashAlgorithm) -> Self {
        Snapshot {
            algorithm,
            records: Vec::new(),
            positions: HashMap::new(),
        }
    }

    /// Build a snapshot, rejecting duplicate paths
    pub fn from_records(
        algorithm: HashAlgorithm,
        records: impl IntoIterator<Item = FileRecord>,
    ) -> anyhow::Result<Self> {
        let mut snapshot = Snapshot::empty(algorithm);

        for record in records {
            if snapshot.positions.contains_key(&record.path) {
                return Err(anyhow!("Duplicate path in snapshot: {}", record.path));
            }
            snapshot
                .positions
                .insert(record.path.clone(), snapshot.records.len());
            snapshot.records.push(record);
        }

        Ok(snapshot)
    }

    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn digest(&self, path: &str) -> Option<&Digest> {
        self.positions
            .get(path)
            .map(|&position| &self.records[position].digest)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.positions.contains_key(path)
    }

    pub fn records(&self) -> impl Iterator<Item = &FileRecord> {
        self.records.iter()
    }

    /// Encode all records as the uncompressed snapshot body
    pub(crate) fn pack_records(&self) -> anyhow::Result<Bytes> {
        let mut bytes = Vec::new();

        for record in &self.records {
            let path = record.path.as_bytes();
            let path_len = u32::try_from(path.len())
                .map_err(|_| anyhow!("Path too long to store: {}", record.path))?;

            bytes.write_u32::<NetworkEndian>(path_len)?;
            bytes.write_all(path)?;
            record.digest.write_raw_to(&mut bytes)?;
        }

        Ok(Bytes::from(bytes))
    }

    /// Decode exactly `entries_count` records from an uncompressed body
    pub(crate) fn unpack_records(
        body: Bytes,
        entries_count: u32,
        algorithm: HashAlgorithm,
    ) -> anyhow::Result<Self> {
        let body_len = body.len() as u64;
        let mut reader = Cursor::new(body);
        let mut records = Vec::with_capacity(entries_count.min(1 << 16) as usize);

        for index in 0..entries_count {
            let path_len = reader
                .read_u32::<NetworkEndian>()
                .map_err(|_| anyhow!("Truncated entry {index}"))?;
            if reader.position() + path_len as u64 > body_len {
                return Err(anyhow!("Truncated path in entry {index}"));
            }

            let mut path = vec![0; path_len as usize];
            reader.read_exact(&mut path)?;
            let path = String::from_utf8(path)
                .map_err(|_| anyhow!("Path in entry {index} is not valid UTF-8"))?;
            let digest = Digest::read_raw_from(&mut reader, algorithm)
                .map_err(|_| anyhow!("Truncated digest in entry {index}"))?;

            records.push(FileRecord::new(path, digest));
        }

        if reader.position() != body_len {
            return Err(anyhow!(
                "Unexpected {} trailing bytes after {} entries",
                body_len - reader.position(),
                entries_count
            ));
        }

        Self::from_records(algorithm, records)
    }
}

impl PartialEq for Snapshot {
    fn eq(&self, other: &Self) -> bool {
        self.algorithm == other.algorithm
            && self.len() == other.len()
            && self
                .records()
                .all(|record| other.digest(&record.path) == Some(&record.digest))
    }
}

impl Eq for Snapshot {}
