//! imgfuse - Image composition pipeline
//!
//! A library for merging multiple raster images into one composite image
//! (vertical stack, horizontal strip, or two-column grid) and exporting
//! it as PNG, JPEG, or WebP.

pub mod cli;
pub mod compose;
pub mod error;
pub mod export;
pub mod output;
pub mod preset;
pub mod source;
pub mod types;

pub use compose::{compose, LayoutMode, LayoutPlan, Placement, GRID_COLUMNS};
pub use error::{FuseError, Result};
pub use export::{encode, unique_destination, OutputFormat};
pub use preset::MergePreset;
pub use source::{collect_inputs, decode, is_supported, probe, AlphaMode, ImageInfo};
pub use types::{Background, Colour};
