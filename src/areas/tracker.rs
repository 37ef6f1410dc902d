use crate::areas::workspace::{SkippedFile, Workspace};
use crate::artifacts::filter::path_filter::{FilterSpec, PathFilter};
use crate::artifacts::hashing::hash_algorithm::HashAlgorithm;
use crate::artifacts::snapshot::file_record::FileRecord;
use crate::artifacts::snapshot::path_snapshot::Snapshot;
use derive_new::new;
use futures::StreamExt;
use std::cell::{RefCell, RefMut};
use std::collections::HashSet;
use std::io::Write;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Immutable settings for one run
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct ScanOptions {
    pub filter: FilterSpec,
    pub algorithm: HashAlgorithm,
    /// Upper bound on files hashed concurrently
    pub jobs: NonZeroUsize,
    /// Echo every computed digest to the output writer
    pub debug: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        ScanOptions {
            filter: FilterSpec::default(),
            algorithm: HashAlgorithm::default(),
            jobs: std::thread::available_parallelism().unwrap_or(NonZeroUsize::MIN),
            debug: false,
        }
    }
}

/// Result of walking and hashing the tree once
#[derive(Debug)]
pub struct ScanOutcome {
    pub snapshot: Snapshot,
    pub skipped: Vec<SkippedFile>,
}

pub struct Tracker {
    writer: RefCell<Box<dyn Write>>,
    workspace: Workspace,
    filter: PathFilter,
    options: ScanOptions,
}

impl Tracker {
    /// Validate the filter patterns, then open the root
    pub fn new(
        root: &Path,
        options: ScanOptions,
        writer: Box<dyn Write>,
    ) -> anyhow::Result<Self> {
        let filter = PathFilter::compile(&options.filter)?;
        let workspace = Workspace::open(root)?;

        Ok(Tracker {
            writer: RefCell::new(writer),
            workspace,
            filter,
            options,
        })
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn Write>> {
        self.writer.borrow_mut()
    }

    pub fn options(&self) -> &ScanOptions {
        &self.options
    }

    /// Walk the root and hash every selected file with `algorithm`
    ///
    /// Hashing fans out over at most `jobs` blocking tasks; results are
    /// gathered back in walk order. Files that cannot be read are reported
    /// and left out of the snapshot.
    pub async fn scan(
        &self,
        algorithm: HashAlgorithm,
        ignored: Option<&Path>,
    ) -> anyhow::Result<ScanOutcome> {
        let listing = self.workspace.list_files(&self.filter, ignored);
        let mut skipped = listing.skipped;
        for skip in &skipped {
            warn!(path = %skip.path.display(), reason = %skip.reason, "skipping entry");
        }

        let mut hashed = futures::stream::iter(listing.files)
            .map(|path: PathBuf| {
                tokio::task::spawn_blocking(move || {
                    let digest = Workspace::hash_file(&path, algorithm);
                    (path, digest)
                })
            })
            .buffered(self.options.jobs.get());

        let mut records = Vec::new();
        let mut keys = HashSet::new();
        while let Some(joined) = hashed.next().await {
            let (path, digest) = joined?;
            let key = path.to_string_lossy().to_string();

            // distinct non-UTF-8 names can share a lossy key
            if keys.contains(&key) {
                warn!(path = %key, "skipping file whose name collides after UTF-8 conversion");
                skipped.push(SkippedFile::new(
                    path,
                    format!("name collides with another file as {key}"),
                ));
                continue;
            }

            match digest {
                Ok(digest) => {
                    debug!(path = %key, %digest, "hashed");
                    if self.options.debug {
                        writeln!(self.writer(), "{}  {}", digest, key)?;
                    }
                    keys.insert(key.clone());
                    records.push(FileRecord::new(key, digest));
                }
                Err(e) => {
                    warn!(path = %key, reason = %e, "skipping unreadable file");
                    skipped.push(SkippedFile::new(path, e.to_string()));
                }
            }
        }

        let snapshot = Snapshot::from_records(algorithm, records)?;
        info!(
            root = %self.workspace.root().display(),
            hashed = snapshot.len(),
            skipped = skipped.len(),
            %algorithm,
            "scan finished"
        );

        Ok(ScanOutcome { snapshot, skipped })
    }
}
