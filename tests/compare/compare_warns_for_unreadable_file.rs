use crate::common::command::{
    fsnap_compare, fsnap_create, populated_tree_dir, snapshot_dir, snapshot_path,
};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[cfg(unix)]
#[rstest]
fn compare_warns_for_unreadable_file(
    populated_tree_dir: TempDir,
    snapshot_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    use crate::common::file::make_unreadable;

    let root = populated_tree_dir.path();
    let snapshot = snapshot_path(&snapshot_dir);
    fsnap_create(root, &snapshot, &[]).assert().success();

    let locked = root.join("a").join("2.txt");
    make_unreadable(&locked);
    // privileged users can read anything
    if std::fs::read(&locked).is_ok() {
        return Ok(());
    }

    // a file that cannot be hashed now counts as removed
    fsnap_compare(root, &snapshot, &[])
        .assert()
        .success()
        .stderr(predicate::str::contains("2.txt"))
        .stdout(predicate::str::contains("Total of 1 different files were found!"));

    Ok(())
}
