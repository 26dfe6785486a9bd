//! File-name suffix parsing for drawable assets.
//!
//! Asset stems encode two flags as suffixes, always in this order:
//! `<base>[<auto-mirror marker>][<alpha marker>]`. Parsing strips the alpha
//! marker first and the auto-mirror marker second.

use crate::conventions::Conventions;
use crate::error::{DrawableError, Result};

/// A drawable stem split into its base resource name and suffix flags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawableName {
    pub base: String,
    pub alpha: bool,
    pub auto_mirrored: bool,
}

impl DrawableName {
    /// Parse a file stem (the file name without its extension)
    pub fn parse(stem: &str, conventions: &Conventions) -> Self {
        let (rest, alpha) = match stem.strip_suffix(conventions.alpha_marker.as_str()) {
            Some(rest) => (rest, true),
            None => (stem, false),
        };
        let (base, auto_mirrored) =
            match rest.strip_suffix(conventions.auto_mirror_marker.as_str()) {
                Some(base) => (base, true),
                None => (rest, false),
            };

        Self {
            base: base.to_string(),
            alpha,
            auto_mirrored,
        }
    }

    /// True when at least one recognised suffix was present
    pub fn has_suffix(&self) -> bool {
        self.alpha || self.auto_mirrored
    }
}

/// Split a file name into stem and extension at the last dot.
pub fn split_file_name(file_name: &str) -> Option<(&str, &str)> {
    match file_name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => Some((stem, ext)),
        _ => None,
    }
}

/// Split an image file name into stem and extension.
///
/// Returns `None` for non-images and for nine-patch files (`*.9.png`),
/// which a `<bitmap>` element cannot wrap.
pub fn image_stem<'a>(file_name: &'a str, conventions: &Conventions) -> Option<&'a str> {
    let (stem, ext) = split_file_name(file_name)?;
    if !conventions.is_image_extension(ext) || stem.ends_with(".9") {
        return None;
    }
    Some(stem)
}

/// Split any file name into stem and extension for renaming.
///
/// Nine-patch names keep `.9` as part of the extension (`ic_a.9.png` ->
/// `("ic_a", "9.png")`) so a marker lands before it. Names without an
/// extension are all stem.
pub fn split_asset_name(file_name: &str) -> (&str, Option<&str>) {
    let Some((stem, ext)) = split_file_name(file_name) else {
        return (file_name, None);
    };
    match stem.strip_suffix(".9") {
        Some(base) if !base.is_empty() => (base, Some(&file_name[base.len() + 1..])),
        _ => (stem, Some(ext)),
    }
}

/// Check whether pass 1 should append the alpha marker to this file
pub fn needs_alpha_marker(file_name: &str, conventions: &Conventions) -> bool {
    if !file_name.starts_with(conventions.prefix.as_str()) {
        return false;
    }
    let (stem, _) = split_asset_name(file_name);
    !stem.ends_with(conventions.alpha_marker.as_str())
}

/// Insert the alpha marker before the extension: `ic_foo.png` -> `ic_foo_alpha.png`
pub fn with_alpha_marker(file_name: &str, conventions: &Conventions) -> String {
    match split_asset_name(file_name) {
        (stem, Some(ext)) => format!("{}{}.{}", stem, conventions.alpha_marker, ext),
        (stem, None) => format!("{}{}", stem, conventions.alpha_marker),
    }
}

/// Validate an Android resource name (file-based resources are stricter
/// than Java identifiers: lowercase letters, digits and `_` only).
pub fn validate_resource_name(name: &str) -> Result<()> {
    let Some(first) = name.chars().next() else {
        return Err(DrawableError::invalid_name(name, "name is empty"));
    };
    if !first.is_ascii_lowercase() {
        return Err(DrawableError::invalid_name(
            name,
            "must start with a lowercase letter",
        ));
    }
    if let Some(bad) = name
        .chars()
        .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '_'))
    {
        return Err(DrawableError::invalid_name(
            name,
            format!("contains '{}'; only a-z, 0-9 and '_' are allowed", bad),
        ));
    }
    Ok(())
}
