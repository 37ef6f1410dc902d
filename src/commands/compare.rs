use crate::areas::store::SnapshotStore;
use crate::areas::tracker::Tracker;
use crate::artifacts::diff::comparison_report::ComparisonReport;
use crate::artifacts::diff::diff_entry::DiffKind;
use std::io::Write;
use std::path::Path;
use tracing::info;

impl Tracker {
    /// Compare the tree against the snapshot stored at `source`
    ///
    /// The stored snapshot is loaded before walking, and its digest algorithm
    /// is used for the fresh walk so both sides are comparable.
    pub async fn compare(&self, source: &Path) -> anyhow::Result<ComparisonReport> {
        let store = SnapshotStore::new(source.into());
        let stored = store.load()?;

        let outcome = self
            .scan(stored.algorithm(), store.resolved_path().as_deref())
            .await?;
        let report = ComparisonReport::compare(&stored, &outcome.snapshot);

        let digest_width = stored.algorithm().hex_len();
        for entry in report.entries() {
            writeln!(self.writer(), "{}", entry.render_colored(digest_width))?;
        }
        writeln!(self.writer(), "{}", report.summary())?;

        info!(
            scanned = outcome.snapshot.len(),
            unchanged = report.unchanged(),
            added = report.count_of(DiffKind::Added),
            modified = report.count_of(DiffKind::Modified),
            removed = report.count_of(DiffKind::Removed),
            skipped = outcome.skipped.len(),
            "comparison finished"
        );

        Ok(report)
    }
}
