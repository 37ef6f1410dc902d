use crate::common::command::{fsnap_compare, fsnap_create, snapshot_dir, snapshot_path, stdout_of, tree_dir};
use crate::common::file::{FileSpec, write_file};
use crate::common::snapshot_key;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn compare_with_exclude_filter(
    tree_dir: TempDir,
    snapshot_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = tree_dir.path();
    write_file(FileSpec::new(root.join("keep.txt"), "keep".to_string()));
    write_file(FileSpec::new(root.join("scratchpad").join("draft.txt"), "1".to_string()));
    write_file(FileSpec::new(root.join("notes_Scratch.txt"), "2".to_string()));

    let filters = ["--filter", r"\.txt$", "--not-filter", "SCRATCH"];
    let snapshot = snapshot_path(&snapshot_dir);
    fsnap_create(root, &snapshot, &filters)
        .assert()
        .success();

    write_file(FileSpec::new(root.join("scratchpad").join("draft.txt"), "11".to_string()));
    write_file(FileSpec::new(root.join("notes_Scratch.txt"), "22".to_string()));
    write_file(FileSpec::new(root.join("keep.txt"), "kept".to_string()));

    let actual_output = stdout_of(&mut fsnap_compare(root, &snapshot, &filters));
    let lines = actual_output.lines().collect::<Vec<_>>();

    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with(&format!(" | {}", snapshot_key(root, "keep.txt"))));
    assert_eq!(lines[1], "Total of 1 different files were found!");

    Ok(())
}
