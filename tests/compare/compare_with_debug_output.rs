use crate::common::command::{
    fsnap_compare, fsnap_create, populated_tree_dir, snapshot_dir, snapshot_path, stdout_of,
};
use crate::common::file::{FileSpec, write_file};
use crate::common::snapshot_key;
use assert_fs::TempDir;
use fsnap::artifacts::hashing::hash_algorithm::HashAlgorithm;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn compare_with_debug_output(
    populated_tree_dir: TempDir,
    snapshot_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = populated_tree_dir.path();
    let snapshot = snapshot_path(&snapshot_dir);
    fsnap_create(root, &snapshot, &[]).assert().success();

    write_file(FileSpec::new(root.join("a").join("2.txt"), "deux".to_string()));

    let actual_output = stdout_of(&mut fsnap_compare(root, &snapshot, &["--debug"]));

    let digest = |content: &str| HashAlgorithm::Sha256.digest_bytes(content.as_bytes());
    // every computed digest in walk order, then the differences and the summary
    let expected_output = format!(
        "{}  {}\n{}  {}\n{}  {}\n{} | {} | {}\nTotal of 1 different files were found!\n",
        digest("one"),
        snapshot_key(root, "1.txt"),
        digest("deux"),
        snapshot_key(root, "a/2.txt"),
        digest("three"),
        snapshot_key(root, "a/b/3.txt"),
        digest("deux"),
        digest("two"),
        snapshot_key(root, "a/2.txt"),
    );
    assert_eq!(actual_output, expected_output);

    Ok(())
}
