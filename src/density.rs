//! Screen density qualifiers for drawable folders.

use std::path::{Path, PathBuf};
use strum::{Display, EnumIter, EnumString};

/// Screen pixel density qualifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Density {
    Ldpi,
    Mdpi,
    Tvdpi,
    Hdpi,
    Xhdpi,
    Xxhdpi,
    Xxxhdpi,
    /// Bitmaps that must not be scaled
    Nodpi,
    Anydpi,
}

/// Find the density qualifier of a drawable folder name, if any.
///
/// `drawable-xhdpi`, `drawable-ldrtl-hdpi` and `drawable-night-xxhdpi-v21`
/// all carry a density; `drawable`, `drawable-v21` and `mipmap-hdpi` do not.
pub fn folder_density(dir_name: &str) -> Option<Density> {
    let mut parts = dir_name.split('-');
    if parts.next() != Some("drawable") {
        return None;
    }
    parts.find_map(|qualifier| qualifier.parse().ok())
}

/// Check whether a folder name is a density-qualified drawable folder
pub fn is_density_folder(dir_name: &str) -> bool {
    folder_density(dir_name).is_some()
}

/// Check whether `path` is a density-qualified drawable folder
pub fn is_density_dir(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(is_density_folder)
}

/// The sibling folder of `density_dir` that receives generated wrappers
pub fn output_dir_for(density_dir: &Path, output_folder: &str) -> PathBuf {
    match density_dir.parent() {
        Some(parent) => parent.join(output_folder),
        None => PathBuf::from(output_folder),
    }
}
