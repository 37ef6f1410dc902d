use crate::artifacts::core::{Packable, Unpackable};
use crate::artifacts::snapshot::{HEADER_SIZE, SIGNATURE, VERSION};
use anyhow::anyhow;
use byteorder::{ByteOrder, WriteBytesExt};
use bytes::Bytes;
use derive_new::new;
use std::io::Write;

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct SnapshotHeader {
    pub(crate) marker: String,
    pub(crate) version: u32,
    pub(crate) algorithm: u32,
    pub(crate) entries_count: u32,
    pub(crate) body_len: u64,
}

impl SnapshotHeader {
    pub(crate) fn current(algorithm: u32, entries_count: u32, body_len: u64) -> Self {
        SnapshotHeader {
            marker: String::from(SIGNATURE),
            version: VERSION,
            algorithm,
            entries_count,
            body_len,
        }
    }
}

impl Packable for SnapshotHeader {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        let mut bytes = Vec::with_capacity(HEADER_SIZE);
        bytes.write_all(self.marker.as_bytes())?;
        bytes.write_u32::<byteorder::NetworkEndian>(self.version)?;
        bytes.write_u32::<byteorder::NetworkEndian>(self.algorithm)?;
        bytes.write_u32::<byteorder::NetworkEndian>(self.entries_count)?;
        bytes.write_u64::<byteorder::NetworkEndian>(self.body_len)?;

        Ok(Bytes::from(bytes))
    }
}

impl Unpackable for SnapshotHeader {
    fn deserialize(bytes: Bytes) -> anyhow::Result<Self> {
        if bytes.len() < HEADER_SIZE {
            return Err(anyhow!("Invalid header size"));
        }

        let marker = String::from_utf8(bytes[0..4].to_vec())
            .map_err(|_| anyhow!("Invalid marker in snapshot header"))?;
        let version = byteorder::NetworkEndian::read_u32(&bytes[4..8]);
        let algorithm = byteorder::NetworkEndian::read_u32(&bytes[8..12]);
        let entries_count = byteorder::NetworkEndian::read_u32(&bytes[12..16]);
        let body_len = byteorder::NetworkEndian::read_u64(&bytes[16..24]);

        Ok(SnapshotHeader {
            marker,
            version,
            algorithm,
            entries_count,
            body_len,
        })
    }
}
