use crate::artifacts::hashing::hash_algorithm::HashAlgorithm;
use std::io;

/// Lower-case hex fingerprint of a file's content
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digest(String);

impl Digest {
    pub(crate) fn from_raw(bytes: &[u8]) -> Self {
        Self(bytes.iter().map(|byte| format!("{byte:02x}")).collect())
    }

    pub fn write_raw_to<W: io::Write>(&self, writer: &mut W) -> anyhow::Result<()> {
        let hex = self.as_ref();

        for i in (0..hex.len()).step_by(2) {
            let byte = u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "Invalid hex digit"))?;
            writer.write_all(&[byte])?;
        }

        Ok(())
    }

    pub fn read_raw_from<R: io::Read + ?Sized>(
        reader: &mut R,
        algorithm: HashAlgorithm,
    ) -> anyhow::Result<Self> {
        let mut buffer = vec![0; algorithm.digest_size()];
        reader.read_exact(&mut buffer)?;

        Ok(Self::from_raw(&buffer))
    }
}

impl AsRef<str> for Digest {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Digest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
