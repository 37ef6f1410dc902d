use crate::common::command::{fsnap_create, populated_tree_dir, snapshot_dir, snapshot_path};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
#[case::include(&["--filter", "(unclosed"], "Invalid include pattern '(unclosed'")]
#[case::exclude(&["--not-filter", "*.tmp"], "Invalid exclude pattern '*.tmp'")]
fn create_snapshot_fails_for_invalid_filter(
    populated_tree_dir: TempDir,
    snapshot_dir: TempDir,
    #[case] filter_args: &[&str],
    #[case] message: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let snapshot = snapshot_path(&snapshot_dir);

    fsnap_create(populated_tree_dir.path(), &snapshot, filter_args)
        .assert()
        .failure()
        .stderr(predicate::str::contains(message));

    assert!(!snapshot.exists());

    Ok(())
}
