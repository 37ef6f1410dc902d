use crate::common::command::{
    fsnap_compare, fsnap_create, populated_tree_dir, snapshot_dir, snapshot_path, stdout_of,
};
use crate::common::file::{FileSpec, delete_file, write_file};
use crate::common::snapshot_key;
use assert_fs::TempDir;
use fsnap::artifacts::hashing::hash_algorithm::HashAlgorithm;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn report_added_and_deleted_files(
    populated_tree_dir: TempDir,
    snapshot_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = populated_tree_dir.path();
    let snapshot = snapshot_path(&snapshot_dir);
    fsnap_create(root, &snapshot, &[]).assert().success();

    delete_file(&root.join("a").join("b").join("3.txt"));
    write_file(FileSpec::new(root.join("a").join("new.txt"), "fresh".to_string()));

    let digest = |content: &str| HashAlgorithm::Sha256.digest_bytes(content.as_bytes());
    let placeholder = "-".repeat(64);
    let expected_output = format!(
        "{} | {} | {}\n{} | {} | {}\nTotal of 2 different files were found!\n",
        digest("fresh"),
        placeholder,
        snapshot_key(root, "a/new.txt"),
        placeholder,
        digest("three"),
        snapshot_key(root, "a/b/3.txt"),
    );
    let actual_output = stdout_of(&mut fsnap_compare(root, &snapshot, &[]));

    assert_eq!(actual_output, expected_output);

    Ok(())
}
