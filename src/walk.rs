//! Resource tree traversal.

use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

use crate::density::is_density_dir;
use crate::error::Result;

/// A regular file somewhere below a density-qualified drawable folder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DensityFile {
    pub path: PathBuf,
    pub file_name: String,
    /// Nearest density folder on the way from the root to this file
    pub density_dir: PathBuf,
}

impl DensityFile {
    pub fn new(path: PathBuf, density_dir: PathBuf) -> Option<Self> {
        let file_name = path.file_name()?.to_str()?.to_string();
        Some(Self {
            path,
            file_name,
            density_dir,
        })
    }

    /// The folder holding this file
    pub fn dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new(""))
    }
}

/// Nearest ancestor of `path`, not above `root`, that is a density folder
fn density_ancestor(root: &Path, path: &Path) -> Option<PathBuf> {
    path.parent()?
        .ancestors()
        .take_while(|dir| dir.starts_with(root))
        .find(|dir| is_density_dir(dir))
        .map(Path::to_path_buf)
}

/// Collect every file under `root` that has a density folder among its
/// ancestors, sorted by path. Non-UTF-8 file names and symlinks are skipped.
pub fn density_files(root: &Path) -> Result<Vec<DensityFile>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        let path = entry.path();
        let file_type = entry.file_type();
        if file_type.is_symlink() {
            debug!("Skipping symlink: {}", path.display());
            continue;
        }
        if !file_type.is_file() {
            continue;
        }
        let Some(density_dir) = density_ancestor(root, path) else {
            continue;
        };
        match DensityFile::new(path.to_path_buf(), density_dir) {
            Some(file) => files.push(file),
            None => debug!("Skipping non-UTF-8 file name: {}", path.display()),
        }
    }

    debug!(
        "Found {} files in density folders under {}",
        files.len(),
        root.display()
    );
    Ok(files)
}
