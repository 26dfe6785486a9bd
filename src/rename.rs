//! Pass 1: append the alpha marker to prefixed assets.
//!
//! Planning is pure: it reads the file list and returns the renames to
//! perform. `apply_renames` is the only function here that touches disk.

use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info};

use crate::conventions::Conventions;
use crate::error::{DrawableError, Result};
use crate::naming::{needs_alpha_marker, with_alpha_marker};
use crate::walk::DensityFile;

/// A single planned rename
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameOp {
    pub from: PathBuf,
    pub to: PathBuf,
}

impl fmt::Display for RenameOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rename {} -> {}", self.from.display(), self.to.display())
    }
}

/// Plan the renames for a set of density-folder files.
///
/// Fails before anything is renamed if a target name is already taken.
pub fn plan_renames(files: &[DensityFile], conventions: &Conventions) -> Result<Vec<RenameOp>> {
    let existing: HashSet<&PathBuf> = files.iter().map(|f| &f.path).collect();
    let mut ops = Vec::new();

    for file in files {
        if !needs_alpha_marker(&file.file_name, conventions) {
            continue;
        }
        let to = file
            .dir()
            .join(with_alpha_marker(&file.file_name, conventions));
        if existing.contains(&to) {
            return Err(DrawableError::Collision(to));
        }
        ops.push(RenameOp {
            from: file.path.clone(),
            to,
        });
    }

    debug!("Planned {} renames", ops.len());
    Ok(ops)
}

/// The file list as it will look once `ops` are applied
pub fn after_renames(files: &[DensityFile], ops: &[RenameOp]) -> Vec<DensityFile> {
    let mut renamed: Vec<DensityFile> = files
        .iter()
        .map(|file| match ops.iter().find(|op| op.from == file.path) {
            Some(op) => DensityFile {
                file_name: op
                    .to
                    .file_name()
                    .and_then(|name| name.to_str())
                    .unwrap_or(file.file_name.as_str())
                    .to_string(),
                path: op.to.clone(),
                density_dir: file.density_dir.clone(),
            },
            None => file.clone(),
        })
        .collect();
    renamed.sort_by(|a, b| a.path.cmp(&b.path));
    renamed
}

/// Perform the planned renames. In dry-run mode nothing is touched.
pub fn apply_renames(ops: &[RenameOp], dry_run: bool) -> Result<usize> {
    for op in ops {
        if dry_run {
            info!("[dry-run] {}", op);
            continue;
        }
        if op.to.exists() {
            return Err(DrawableError::Collision(op.to.clone()));
        }
        fs::rename(&op.from, &op.to)?;
        info!("{}", op);
    }
    Ok(ops.len())
}
