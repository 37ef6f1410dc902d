use crate::areas::store::SnapshotStore;
use crate::areas::tracker::Tracker;
use crate::artifacts::snapshot::path_snapshot::Snapshot;
use std::io::Write;
use std::path::Path;

impl Tracker {
    pub async fn create(&self, destination: &Path) -> anyhow::Result<Snapshot> {
        let store = SnapshotStore::new(destination.into());

        // a snapshot stored inside the walked tree must not fingerprint itself
        let outcome = self
            .scan(self.options().algorithm, store.resolved_path().as_deref())
            .await?;

        let written = store.save(&outcome.snapshot)?;

        writeln!(
            self.writer(),
            "Snapshot of {} files written, save path is: {}",
            outcome.snapshot.len(),
            written.display()
        )?;

        Ok(outcome.snapshot)
    }
}
