//! drawable-wrap library
//!
//! Renames density-qualified Android drawable assets to the alpha-marker
//! convention and generates `<bitmap>` wrapper resources referencing them.

pub mod cli;
pub mod conventions;
pub mod density;
pub mod error;
pub mod generate;
pub mod naming;
pub mod pipeline;
pub mod rename;
pub mod walk;
pub mod wrapper;

// Re-export main types for convenience
pub use conventions::Conventions;
pub use density::{Density, folder_density, is_density_folder};
pub use error::{DrawableError, Result};
pub use generate::{WrapperOp, WrapperPlan, apply_wrappers, plan_wrappers};
pub use naming::DrawableName;
pub use pipeline::{Passes, RunSummary, run};
pub use rename::{RenameOp, apply_renames, plan_renames};
pub use walk::{DensityFile, density_files};
pub use wrapper::BitmapWrapper;
