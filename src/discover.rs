//! Model file discovery.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{NmlGraphError, Result};

/// File name suffix of NeuroML model descriptions.
pub const MODEL_FILE_SUFFIX: &str = ".nml";

fn is_model_file(path: &Path) -> bool {
    path.file_name()
        .is_some_and(|name| name.to_string_lossy().ends_with(MODEL_FILE_SUFFIX))
}

/// Find model files under `root`.
///
/// Without `recursive` only the immediate children of `root` are listed.
/// Only regular files (or symlinks to them) are returned, sorted by path.
/// Symlinked directories are not descended into.
pub fn find_model_files(root: &Path, recursive: bool) -> Result<Vec<PathBuf>> {
    let mut files = if recursive {
        walk_tree(root)?
    } else {
        list_dir(root)?
    };
    files.sort();
    Ok(files)
}

fn list_dir(root: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(root).map_err(|e| NmlGraphError::discovery(root, e))? {
        let entry = entry.map_err(|e| NmlGraphError::discovery(root, e))?;
        let path = entry.path();
        if path.is_file() && is_model_file(&path) {
            files.push(path);
        }
    }
    Ok(files)
}

fn walk_tree(root: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = entry.map_err(|e| NmlGraphError::discovery(root, e))?;
        if entry.path().is_file() && is_model_file(entry.path()) {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}
