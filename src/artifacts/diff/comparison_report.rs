use crate::artifacts::diff::diff_entry::{DiffEntry, DiffKind};
use crate::artifacts::snapshot::path_snapshot::Snapshot;

/// Differences between a stored and a freshly walked snapshot
///
/// Added and modified entries come first, in the order of the current walk,
/// followed by removed entries in the order of the stored snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComparisonReport {
    entries: Vec<DiffEntry>,
    unchanged: usize,
}

impl ComparisonReport {
    pub fn compare(stored: &Snapshot, current: &Snapshot) -> Self {
        let mut report = ComparisonReport::default();

        for record in current.records() {
            match stored.digest(&record.path) {
                None => report
                    .entries
                    .push(DiffEntry::added(record.path.clone(), record.digest.clone())),
                Some(stored_digest) if *stored_digest != record.digest => {
                    report.entries.push(DiffEntry::modified(
                        record.path.clone(),
                        stored_digest.clone(),
                        record.digest.clone(),
                    ))
                }
                Some(_) => report.unchanged += 1,
            }
        }

        report.entries.extend(
            stored
                .records()
                .filter(|record| !current.contains(&record.path))
                .map(|record| DiffEntry::removed(record.path.clone(), record.digest.clone())),
        );

        report
    }

    pub fn entries(&self) -> &[DiffEntry] {
        &self.entries
    }

    /// Number of added, modified and removed entries
    pub fn difference_count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_identical(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn unchanged(&self) -> usize {
        self.unchanged
    }

    pub fn count_of(&self, kind: DiffKind) -> usize {
        self.entries.iter().filter(|entry| entry.kind == kind).count()
    }

    pub fn summary(&self) -> String {
        if self.is_identical() {
            "Comparison completed, no different files found.".to_string()
        } else {
            format!(
                "Total of {} different files were found!",
                self.difference_count()
            )
        }
    }
}
