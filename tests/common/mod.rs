#![allow(dead_code)]

pub mod command;

const TMPDIR: &str = "target/playground";

pub fn redirect_temp_dir() {
    unsafe {
        std::env::set_var("TMPDIR", TMPDIR);
    }

    // Ensure the TMPDIR exists
    if !std::path::Path::new(TMPDIR).exists() {
        std::fs::create_dir_all(TMPDIR).expect("Failed to create TMPDIR");
    }
}

/// Canonical key under which `relative` is stored for a tree rooted at `root`
pub fn snapshot_key(root: &std::path::Path, relative: &str) -> String {
    root.canonicalize()
        .expect("Failed to canonicalize root")
        .join(relative)
        .to_string_lossy()
        .to_string()
}
