use crate::common::file::{FileSpec, write_file};
use crate::common::redirect_temp_dir;
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::{Path, PathBuf};

#[fixture]
pub fn tree_dir() -> TempDir {
    redirect_temp_dir();
    TempDir::new().expect("Failed to create temp dir")
}

#[fixture]
pub fn snapshot_dir() -> TempDir {
    redirect_temp_dir();
    TempDir::new().expect("Failed to create temp dir")
}

/// Tree with `1.txt`, `a/2.txt` and `a/b/3.txt`
#[fixture]
pub fn populated_tree_dir(tree_dir: TempDir) -> TempDir {
    write_file(FileSpec::new(tree_dir.path().join("1.txt"), "one".to_string()));
    write_file(FileSpec::new(
        tree_dir.path().join("a").join("2.txt"),
        "two".to_string(),
    ));
    write_file(FileSpec::new(
        tree_dir.path().join("a").join("b").join("3.txt"),
        "three".to_string(),
    ));

    tree_dir
}

pub fn run_fsnap_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("fsnap").expect("Failed to find fsnap binary");
    cmd.env_remove("RUST_LOG");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn fsnap_create(tree: &Path, snapshot: &Path, extra_args: &[&str]) -> Command {
    let tree = tree.to_string_lossy();
    let snapshot = snapshot.to_string_lossy();
    let mut args = vec!["-d", &*tree, "-o", &*snapshot];
    args.extend_from_slice(extra_args);

    run_fsnap_command(Path::new("."), &args)
}

pub fn fsnap_compare(tree: &Path, snapshot: &Path, extra_args: &[&str]) -> Command {
    let tree = tree.to_string_lossy();
    let snapshot = snapshot.to_string_lossy();
    let mut args = vec!["-d", &*tree, "--db", &*snapshot];
    args.extend_from_slice(extra_args);

    run_fsnap_command(Path::new("."), &args)
}

pub fn snapshot_path(snapshot_dir: &TempDir) -> PathBuf {
    snapshot_dir.path().join("tree.fsnap")
}

pub fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.assert().success();
    String::from_utf8(output.get_output().stdout.clone()).expect("stdout is not UTF-8")
}
