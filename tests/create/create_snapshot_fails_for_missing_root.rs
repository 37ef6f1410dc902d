use crate::common::command::{fsnap_create, snapshot_dir, snapshot_path, tree_dir};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn create_snapshot_fails_for_missing_root(
    tree_dir: TempDir,
    snapshot_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let missing = tree_dir.path().join("does-not-exist");
    let snapshot = snapshot_path(&snapshot_dir);

    fsnap_create(&missing, &snapshot, &[])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot read"))
        .stderr(predicate::str::contains("does-not-exist"));

    assert!(!snapshot.exists());

    Ok(())
}
