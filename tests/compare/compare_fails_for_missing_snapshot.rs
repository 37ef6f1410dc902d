use crate::common::command::{fsnap_compare, populated_tree_dir, snapshot_dir};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn compare_fails_for_missing_snapshot(
    populated_tree_dir: TempDir,
    snapshot_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let snapshot = snapshot_dir.path().join("never-created.fsnap");

    fsnap_compare(populated_tree_dir.path(), &snapshot, &[])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot read"))
        .stderr(predicate::str::contains("never-created.fsnap"));

    Ok(())
}
