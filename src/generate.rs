//! Pass 2: generate `<bitmap>` wrappers for suffixed assets.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info, warn};

use crate::conventions::Conventions;
use crate::density::output_dir_for;
use crate::error::{DrawableError, Result};
use crate::naming::{DrawableName, image_stem, validate_resource_name};
use crate::walk::DensityFile;
use crate::wrapper::BitmapWrapper;

/// A single planned wrapper file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrapperOp {
    /// Destination of the XML file
    pub path: PathBuf,
    pub wrapper: BitmapWrapper,
    /// First asset that produced this wrapper
    pub source: PathBuf,
}

impl fmt::Display for WrapperOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "write {} (src @drawable/{})",
            self.path.display(),
            self.wrapper.src
        )
    }
}

/// Wrappers to write, plus the assets that could not be wrapped
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WrapperPlan {
    pub ops: Vec<WrapperOp>,
    pub skipped: Vec<PathBuf>,
}

/// Plan one wrapper per distinct asset name.
///
/// Unmarked assets get a src-only wrapper unless `skip_unmarked` is set.
/// The same asset in several densities yields one wrapper. Two assets that
/// map to the same wrapper with different content is an error.
pub fn plan_wrappers(files: &[DensityFile], conventions: &Conventions) -> Result<WrapperPlan> {
    let mut planned: BTreeMap<PathBuf, WrapperOp> = BTreeMap::new();
    let mut skipped = Vec::new();

    for file in files {
        let Some(stem) = image_stem(&file.file_name, conventions) else {
            continue;
        };

        let parsed = DrawableName::parse(stem, conventions);
        if conventions.skip_unmarked && !parsed.has_suffix() {
            debug!("No marker suffix, not wrapping: {}", file.path.display());
            skipped.push(file.path.clone());
            continue;
        }
        if let Err(e) = validate_resource_name(&parsed.base) {
            warn!("Skipping {}: {}", file.path.display(), e);
            skipped.push(file.path.clone());
            continue;
        }

        let wrapper = BitmapWrapper::for_asset(stem, &parsed, conventions);
        let path = output_dir_for(&file.density_dir, &conventions.output_folder)
            .join(wrapper.file_name());

        match planned.get(&path) {
            Some(existing) if existing.wrapper == wrapper => {}
            Some(existing) => {
                return Err(DrawableError::Conflict {
                    path,
                    first: existing.source.display().to_string(),
                    second: file.path.display().to_string(),
                });
            }
            None => {
                planned.insert(
                    path.clone(),
                    WrapperOp {
                        path,
                        wrapper,
                        source: file.path.clone(),
                    },
                );
            }
        }
    }

    let ops: Vec<WrapperOp> = planned.into_values().collect();
    debug!("Planned {} wrappers, skipped {} assets", ops.len(), skipped.len());
    Ok(WrapperPlan { ops, skipped })
}

/// Write the planned wrappers. In dry-run mode nothing is touched.
pub fn apply_wrappers(ops: &[WrapperOp], dry_run: bool) -> Result<usize> {
    for op in ops {
        if dry_run {
            info!("[dry-run] {}", op);
            continue;
        }
        if let Some(dir) = op.path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(&op.path, op.wrapper.render())?;
        info!("{}", op);
    }
    Ok(ops.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn file(path: &str) -> DensityFile {
        let path = PathBuf::from(path);
        let density_dir = path.parent().unwrap().to_path_buf();
        DensityFile::new(path, density_dir).unwrap()
    }

    #[test]
    fn test_one_wrapper_across_densities() {
        let files = vec![
            file("res/drawable-hdpi/ic_wifi_alpha.png"),
            file("res/drawable-xhdpi/ic_wifi_alpha.png"),
            file("res/drawable-xxhdpi/ic_wifi_alpha.png"),
        ];
        let plan = plan_wrappers(&files, &Conventions::default()).unwrap();
        assert_eq!(plan.ops.len(), 1);
        assert_eq!(plan.ops[0].path, PathBuf::from("res/drawable/ic_wifi.xml"));
        assert_eq!(
            plan.ops[0].source,
            PathBuf::from("res/drawable-hdpi/ic_wifi_alpha.png")
        );
    }

    #[test]
    fn test_separate_res_roots_get_separate_wrappers() {
        let files = vec![
            file("app/res/drawable-hdpi/ic_wifi_alpha.png"),
            file("lib/res/drawable-hdpi/ic_wifi_alpha.png"),
        ];
        let plan = plan_wrappers(&files, &Conventions::default()).unwrap();
        let paths: Vec<_> = plan.ops.iter().map(|op| op.path.clone()).collect();
        assert_eq!(
            paths,
            vec![
                PathBuf::from("app/res/drawable/ic_wifi.xml"),
                PathBuf::from("lib/res/drawable/ic_wifi.xml"),
            ]
        );
    }

    #[test]
    fn test_conflict_is_an_error() {
        let files = vec![
            file("res/drawable-hdpi/ic_back_alpha.png"),
            file("res/drawable-xhdpi/ic_back_am_alpha.png"),
        ];
        let err = plan_wrappers(&files, &Conventions::default()).unwrap_err();
        assert!(matches!(err, DrawableError::Conflict { .. }));
    }

    #[test]
    fn test_unmarked_image_gets_plain_wrapper() {
        let files = vec![file("res/drawable-hdpi/logo.png")];
        let plan = plan_wrappers(&files, &Conventions::default()).unwrap();
        assert!(plan.skipped.is_empty());
        assert_eq!(plan.ops.len(), 1);

        let op = &plan.ops[0];
        assert_eq!(op.path, PathBuf::from("res/drawable/logo.xml"));
        assert_eq!(op.wrapper.src, "logo");
        assert_eq!(op.wrapper.tint, None);
        assert!(!op.wrapper.auto_mirrored);
    }

    #[test]
    fn test_skip_unmarked_option() {
        let conventions = Conventions {
            skip_unmarked: true,
            ..Conventions::default()
        };
        let files = vec![
            file("res/drawable-hdpi/logo.png"),
            file("res/drawable-hdpi/ic_wifi_alpha.png"),
        ];
        let plan = plan_wrappers(&files, &conventions).unwrap();
        assert_eq!(plan.ops.len(), 1);
        assert_eq!(plan.skipped, vec![PathBuf::from("res/drawable-hdpi/logo.png")]);
    }

    #[test]
    fn test_skips_invalid_and_non_images() {
        let files = vec![
            file("res/drawable-hdpi/ic_launcher.png"),
            file("res/drawable-hdpi/_alpha.png"),
            file("res/drawable-hdpi/Ic_Bad_alpha.png"),
            file("res/drawable-hdpi/ic_panel.9.png"),
            file("res/drawable-hdpi/ic_shape.xml"),
        ];
        let plan = plan_wrappers(&files, &Conventions::default()).unwrap();
        assert_eq!(plan.ops.len(), 1);
        assert_eq!(plan.ops[0].wrapper.name, "ic_launcher");
        assert_eq!(plan.skipped.len(), 2);
    }

    #[test]
    fn test_nested_asset_wraps_next_to_density_folder() {
        let path = PathBuf::from("res/drawable-hdpi/extra/ic_a_alpha.png");
        let files = vec![DensityFile::new(path, PathBuf::from("res/drawable-hdpi")).unwrap()];
        let plan = plan_wrappers(&files, &Conventions::default()).unwrap();
        assert_eq!(plan.ops[0].path, PathBuf::from("res/drawable/ic_a.xml"));
    }

    #[test]
    fn test_apply_writes_files() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("res/drawable-hdpi/ic_a_alpha.png");
        let density_dir = dir.path().join("res/drawable-hdpi");
        let files = vec![DensityFile::new(source, density_dir).unwrap()];
        let plan = plan_wrappers(&files, &Conventions::default()).unwrap();

        assert_eq!(apply_wrappers(&plan.ops, true).unwrap(), 1);
        let out = dir.path().join("res/drawable/ic_a.xml");
        assert!(!out.exists());

        assert_eq!(apply_wrappers(&plan.ops, false).unwrap(), 1);
        let xml = fs::read_to_string(out).unwrap();
        assert!(xml.contains("@drawable/ic_a_alpha"));
    }
}
