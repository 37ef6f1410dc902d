use crate::artifacts::snapshot::CHECKSUM_SIZE;
use anyhow::anyhow;
use bytes::Bytes;
use file_guard::FileGuard;
use sha1::{Digest, Sha1};
use std::io::{self, Read, Write};
use std::ops::DerefMut;

/// Locked snapshot file that hashes every byte passing through it
///
/// Implements [`Read`] and [`Write`] so the snapshot body can be streamed
/// straight through a zlib coder. The trailer itself is never hashed.
#[derive(Debug)]
pub struct Checksum<'f> {
    file: FileGuard<&'f mut std::fs::File>,
    digest: Sha1,
}

impl<'f> Checksum<'f> {
    pub(crate) fn new(file: FileGuard<&'f mut std::fs::File>) -> Self {
        Checksum {
            file,
            digest: Sha1::new(),
        }
    }

    /// Read exactly `size` bytes, failing on a short file
    pub(crate) fn read_bytes(&mut self, size: usize) -> anyhow::Result<Bytes> {
        let mut buffer = vec![0; size];
        self.read_exact(&mut buffer)
            .map_err(|_| anyhow!("Unexpected end-of-file while reading snapshot"))?;

        Ok(Bytes::from(buffer))
    }

    /// Append the SHA-1 of everything written so far and flush to disk
    pub(crate) fn finish(mut self) -> anyhow::Result<()> {
        let checksum = self.digest.clone().finalize();
        let file = self.file.deref_mut();
        file.write_all(checksum.as_slice())
            .map_err(|e| anyhow!("Failed to write snapshot checksum: {e}"))?;
        file.sync_all()?;

        Ok(())
    }

    /// Compare the trailer against the SHA-1 of everything read so far
    pub(crate) fn verify(mut self) -> anyhow::Result<()> {
        let mut stored = [0u8; CHECKSUM_SIZE];
        self.file
            .deref_mut()
            .read_exact(&mut stored)
            .map_err(|_| anyhow!("Missing checksum at end of snapshot"))?;

        if stored != self.digest.finalize().as_slice() {
            return Err(anyhow!("Checksum does not match value stored on disk"));
        }

        Ok(())
    }
}

impl Read for Checksum<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let read = self.file.deref_mut().read(buf)?;
        self.digest.update(&buf[..read]);
        Ok(read)
    }
}

impl Write for Checksum<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let written = self.file.deref_mut().write(buf)?;
        self.digest.update(&buf[..written]);
        Ok(written)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.deref_mut().flush()
    }
}
