//! Runs the two passes in order over a resource root.
//!
//! # Passes
//!
//! | Pass     | Effect |
//! |----------|--------|
//! | Rename   | `ic_foo.png` -> `ic_foo_alpha.png` in every density folder |
//! | Generate | `drawable/ic_foo.xml` wrapping `@drawable/ic_foo_alpha` |
//!
//! Generate always plans against the file names Rename leaves behind, so a
//! dry run of both passes previews exactly what a real run would write.

use serde::Serialize;
use std::path::{Path, PathBuf};
use strum::{Display, EnumString};
use tracing::info;

use crate::conventions::Conventions;
use crate::error::Result;
use crate::generate::{apply_wrappers, plan_wrappers};
use crate::rename::{after_renames, apply_renames, plan_renames};
use crate::walk::density_files;

/// Which passes to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[derive(Display, EnumString)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Passes {
    #[default]
    All,
    Rename,
    Generate,
}

impl Passes {
    pub fn renames(self) -> bool {
        matches!(self, Self::All | Self::Rename)
    }

    pub fn generates(self) -> bool {
        matches!(self, Self::All | Self::Generate)
    }
}

/// Outcome of a run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub root: PathBuf,
    pub passes: Passes,
    pub dry_run: bool,
    pub renamed: usize,
    pub wrappers_written: usize,
    pub skipped: Vec<PathBuf>,
}

/// Run the selected passes over `root`
pub fn run(
    root: &Path,
    conventions: &Conventions,
    passes: Passes,
    dry_run: bool,
) -> Result<RunSummary> {
    conventions.validate()?;
    info!(
        "Processing {} (passes: {}, dry run: {})",
        root.display(),
        passes,
        dry_run
    );

    let mut files = density_files(root)?;
    let mut summary = RunSummary {
        root: root.to_path_buf(),
        passes,
        dry_run,
        ..RunSummary::default()
    };

    if passes.renames() {
        let ops = plan_renames(&files, conventions)?;
        summary.renamed = apply_renames(&ops, dry_run)?;
        files = after_renames(&files, &ops);
    }

    if passes.generates() {
        let plan = plan_wrappers(&files, conventions)?;
        summary.wrappers_written = apply_wrappers(&plan.ops, dry_run)?;
        summary.skipped = plan.skipped;
    }

    info!(
        "Done: {} renamed, {} wrappers, {} skipped",
        summary.renamed,
        summary.wrappers_written,
        summary.skipped.len()
    );
    Ok(summary)
}
