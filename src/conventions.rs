//! Naming conventions used by both passes, and their JSON file form.
//!
//! The defaults reproduce the conventions the tool was written for; a
//! conventions file only needs to name the fields it changes.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::density::is_density_folder;
use crate::error::DrawableError;

/// Naming conventions that can be saved/loaded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Conventions {
    /// Only files starting with this prefix are renamed by pass 1
    pub prefix: String,
    /// Suffix marking a tintable alpha-mask asset
    pub alpha_marker: String,
    /// Suffix marking an asset mirrored in RTL layouts
    pub auto_mirror_marker: String,
    /// Lowercase extensions (without the dot) treated as images
    pub image_extensions: Vec<String>,
    /// Sibling folder that receives the generated wrappers
    pub output_folder: String,
    /// Value of `android:tint` for alpha assets
    pub tint: String,
    /// Write no wrapper for assets without a marker suffix. Such a wrapper
    /// shares its resource name with the asset it references.
    pub skip_unmarked: bool,
}

impl Default for Conventions {
    fn default() -> Self {
        Self {
            prefix: "ic_".to_string(),
            alpha_marker: "_alpha".to_string(),
            auto_mirror_marker: "_am".to_string(),
            image_extensions: vec!["png".to_string()],
            output_folder: "drawable".to_string(),
            tint: "?android:attr/colorControlNormal".to_string(),
            skip_unmarked: false,
        }
    }
}

impl Conventions {
    /// Save conventions to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .context("Failed to serialize conventions to JSON")?;

        fs::write(&path, json)
            .with_context(|| format!("Failed to write conventions to {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Load conventions from a JSON file and validate them
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read conventions from {:?}", path.as_ref()))?;

        let conventions: Self =
            serde_json::from_str(&content).context("Failed to parse conventions JSON")?;

        conventions
            .validate()
            .with_context(|| format!("Invalid conventions in {:?}", path.as_ref()))?;

        Ok(conventions)
    }

    /// Validate the conventions
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.prefix.is_empty() {
            return Err(DrawableError::config("prefix must not be empty"));
        }

        for (label, marker) in [
            ("alpha marker", &self.alpha_marker),
            ("auto-mirror marker", &self.auto_mirror_marker),
        ] {
            if marker.len() < 2 || !marker.starts_with('_') {
                return Err(DrawableError::config(format!(
                    "{} must start with '_' and name something: {:?}",
                    label, marker
                )));
            }
            if !marker[1..]
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
            {
                return Err(DrawableError::config(format!(
                    "{} can only contain lowercase letters, digits and underscores: {:?}",
                    label, marker
                )));
            }
        }
        if self.alpha_marker == self.auto_mirror_marker {
            return Err(DrawableError::config(
                "alpha marker and auto-mirror marker must differ",
            ));
        }

        if self.image_extensions.is_empty() {
            return Err(DrawableError::config("at least one image extension is required"));
        }
        if let Some(ext) = self
            .image_extensions
            .iter()
            .find(|ext| ext.is_empty() || ext.starts_with('.'))
        {
            return Err(DrawableError::config(format!(
                "image extensions are written without the dot: {:?}",
                ext
            )));
        }

        let output = self.output_folder.trim();
        if output.is_empty() || output.contains(['/', '\\']) {
            return Err(DrawableError::config(
                "output folder must be a single folder name",
            ));
        }
        if is_density_folder(output) {
            return Err(DrawableError::config(format!(
                "output folder {:?} is density-qualified and would be scanned as input",
                output
            )));
        }

        if self.tint.trim().is_empty() {
            return Err(DrawableError::config("tint must not be empty"));
        }

        Ok(())
    }

    /// Check whether a file extension names an image
    pub fn is_image_extension(&self, ext: &str) -> bool {
        self.image_extensions
            .iter()
            .any(|known| known.eq_ignore_ascii_case(ext))
    }
}
