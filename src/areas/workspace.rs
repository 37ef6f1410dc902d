use crate::artifacts::errors::{FsnapError, FsnapResult};
use crate::artifacts::filter::path_filter::PathFilter;
use crate::artifacts::hashing::digest::Digest;
use crate::artifacts::hashing::hash_algorithm::HashAlgorithm;
use derive_new::new;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// An entry the walk could not visit or hash
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

/// Regular files selected by a walk, in traversal order
#[derive(Debug, Default)]
pub struct Listing {
    pub files: Vec<PathBuf>,
    pub skipped: Vec<SkippedFile>,
}

#[derive(Debug)]
pub struct Workspace {
    root: Box<Path>,
}

impl Workspace {
    /// Resolve `root` to its canonical form and make sure it can be listed
    pub fn open(root: &Path) -> FsnapResult<Self> {
        let input_error = |reason: String| FsnapError::Input {
            path: root.to_path_buf(),
            reason,
        };

        let root = std::fs::canonicalize(root).map_err(|e| input_error(e.to_string()))?;
        let metadata = std::fs::metadata(&root).map_err(|e| input_error(e.to_string()))?;

        if metadata.is_dir() {
            std::fs::read_dir(&root).map_err(|e| input_error(e.to_string()))?;
        } else if !metadata.is_file() {
            return Err(input_error(
                "not a regular file or directory".to_string(),
            ));
        }

        Ok(Workspace {
            root: root.into_boxed_path(),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Walk the tree and keep the regular files accepted by `filter`
    ///
    /// Directory entries are visited in file name order. Symlinks are
    /// followed; loops and unreadable entries end up in `skipped`.
    pub fn list_files(&self, filter: &PathFilter, ignored: Option<&Path>) -> Listing {
        let mut listing = Listing::default();

        for entry in WalkDir::new(&self.root)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    let path = e
                        .path()
                        .map(Path::to_path_buf)
                        .unwrap_or_else(|| self.root.to_path_buf());
                    listing.skipped.push(SkippedFile::new(path, e.to_string()));
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                if !entry.file_type().is_dir() {
                    debug!(path = %entry.path().display(), "ignoring special file");
                }
                continue;
            }

            if ignored.is_some_and(|ignored| ignored == entry.path()) {
                debug!(path = %entry.path().display(), "ignoring snapshot file");
                continue;
            }

            if filter.accepts(&entry.path().to_string_lossy()) {
                listing.files.push(entry.into_path());
            }
        }

        listing
    }

    /// Digest of the full content of `path`, read from disk on every call
    pub fn hash_file(path: &Path, algorithm: HashAlgorithm) -> FsnapResult<Digest> {
        let io_error = |source| FsnapError::Io {
            path: path.to_path_buf(),
            source,
        };

        let file = std::fs::File::open(path).map_err(io_error)?;
        algorithm.digest_reader(file).map_err(io_error)
    }
}
