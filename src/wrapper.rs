//! `<bitmap>` wrapper resource rendering.

use crate::conventions::Conventions;
use crate::naming::DrawableName;

const ANDROID_NS: &str = "http://schemas.android.com/apk/res/android";

/// An XML `<bitmap>` resource pointing at a density-qualified asset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitmapWrapper {
    /// Resource name of the wrapper (its file stem)
    pub name: String,
    /// Drawable referenced by `android:src`
    pub src: String,
    pub tint: Option<String>,
    pub auto_mirrored: bool,
}

impl BitmapWrapper {
    /// Build the wrapper for an asset whose stem parsed to `parsed`
    pub fn for_asset(stem: &str, parsed: &DrawableName, conventions: &Conventions) -> Self {
        Self {
            name: parsed.base.clone(),
            src: stem.to_string(),
            tint: parsed.alpha.then(|| conventions.tint.clone()),
            auto_mirrored: parsed.auto_mirrored,
        }
    }

    pub fn file_name(&self) -> String {
        format!("{}.xml", self.name)
    }

    /// Render the resource file contents
    pub fn render(&self) -> String {
        let mut attrs = vec![
            format!("xmlns:android=\"{}\"", ANDROID_NS),
            format!("android:src=\"@drawable/{}\"", self.src),
        ];
        if let Some(tint) = &self.tint {
            attrs.push(format!("android:tint=\"{}\"", escape_attr(tint)));
        }
        if self.auto_mirrored {
            attrs.push("android:autoMirrored=\"true\"".to_string());
        }

        let mut xml = String::from("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<bitmap ");
        xml.push_str(&attrs.join("\n    "));
        xml.push_str(" />\n");
        xml
    }
}

fn escape_attr(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
