use crate::artifacts::hashing::READ_BUFFER_SIZE;
use crate::artifacts::hashing::digest::Digest;
use sha1::Sha1;
use sha2::Sha256;
use std::io::Read;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
pub enum HashAlgorithm {
    Sha1,
    #[default]
    Sha256,
}

impl HashAlgorithm {
    /// Number of raw bytes in a digest
    pub fn digest_size(&self) -> usize {
        match self {
            HashAlgorithm::Sha1 => 20,
            HashAlgorithm::Sha256 => 32,
        }
    }

    /// Number of hex characters in a rendered digest
    pub fn hex_len(&self) -> usize {
        self.digest_size() * 2
    }

    /// Tag stored in the snapshot header
    pub fn as_u32(&self) -> u32 {
        match self {
            HashAlgorithm::Sha1 => 1,
            HashAlgorithm::Sha256 => 2,
        }
    }

    pub fn from_u32(tag: u32) -> Option<Self> {
        match tag {
            1 => Some(HashAlgorithm::Sha1),
            2 => Some(HashAlgorithm::Sha256),
            _ => None,
        }
    }

    pub fn digest_bytes(&self, data: &[u8]) -> Digest {
        let mut hasher = Hasher::new(*self);
        hasher.update(data);
        hasher.finalize()
    }

    /// Stream everything from `reader` into the hasher
    pub fn digest_reader(&self, mut reader: impl Read) -> std::io::Result<Digest> {
        let mut hasher = Hasher::new(*self);
        let mut buffer = vec![0u8; READ_BUFFER_SIZE];

        loop {
            let read = match reader.read(&mut buffer) {
                Ok(0) => break,
                Ok(read) => read,
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            hasher.update(&buffer[..read]);
        }

        Ok(hasher.finalize())
    }
}

impl std::fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HashAlgorithm::Sha1 => write!(f, "sha1"),
            HashAlgorithm::Sha256 => write!(f, "sha256"),
        }
    }
}

enum Hasher {
    Sha1(Sha1),
    Sha256(Sha256),
}

impl Hasher {
    fn new(algorithm: HashAlgorithm) -> Self {
        use sha1::Digest as _;

        match algorithm {
            HashAlgorithm::Sha1 => Hasher::Sha1(Sha1::new()),
            HashAlgorithm::Sha256 => Hasher::Sha256(Sha256::new()),
        }
    }

    fn update(&mut self, data: &[u8]) {
        use sha1::Digest as _;

        match self {
            Hasher::Sha1(hasher) => hasher.update(data),
            Hasher::Sha256(hasher) => hasher.update(data),
        }
    }

    fn finalize(self) -> Digest {
        use sha1::Digest as _;

        match self {
            Hasher::Sha1(hasher) => Digest::from_raw(&hasher.finalize()),
            Hasher::Sha256(hasher) => Digest::from_raw(&hasher.finalize()),
        }
    }
}
