//! Shared helpers for architecture tests.

use std::fs;
use std::path::{Path, PathBuf};

/// Find the workspace root by looking for Cargo.toml with [workspace].
pub fn workspace_root() -> PathBuf {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));

    let mut dir = manifest_dir.as_path();
    loop {
        let cargo_toml = dir.join("Cargo.toml");
        if cargo_toml.exists()
            && let Ok(content) = fs::read_to_string(&cargo_toml)
            && content.contains("[workspace]")
        {
            return dir.to_path_buf();
        }

        match dir.parent() {
            Some(parent) => dir = parent,
            None => return manifest_dir,
        }
    }
}

/// All `.rs` files under `crates/`, skipping build output and this crate.
pub fn crate_sources(root: &Path) -> Vec<PathBuf> {
    walkdir::WalkDir::new(root.join("crates"))
        .into_iter()
        .filter_entry(|e| {
            let name = e.file_name();
            name != "target" && name != "architecture-tests"
        })
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "rs"))
        .map(|e| e.into_path())
        .collect()
}

/// Path relative to the workspace root, for messages.
pub fn relative(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .into_owned()
}
