//! Core utilities and shared types
//!
//! Binary encoding traits shared by the snapshot header and body.

use bytes::Bytes;

pub trait Packable {
    fn serialize(&self) -> anyhow::Result<Bytes>;
}

pub trait Unpackable {
    fn deserialize(bytes: Bytes) -> anyhow::Result<Self>
    where
        Self: Sized;
}
