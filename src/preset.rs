//! Merge presets (YAML).
//!
//! A preset captures the settings the original tool carried as application
//! defaults: layout mode, spacing, background, output format, and quality.
//! CLI flags override preset values; the preset fills whatever is unset.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::compose::LayoutMode;
use crate::error::{FuseError, Result};
use crate::export::OutputFormat;

/// Default export quality.
pub const DEFAULT_QUALITY: u8 = 90;

/// A bundle of merge settings loaded from a YAML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MergePreset {
    /// Layout mode.
    pub mode: LayoutMode,

    /// Pixels between adjacent images.
    pub spacing: u32,

    /// Background: a colour name, hex value, or "transparent".
    pub background: String,

    /// Output format; inferred from the destination when absent.
    pub format: Option<OutputFormat>,

    /// Export quality, 1-100.
    pub quality: u8,

    /// Apply the quality-reduction policy on export.
    pub compress: bool,
}

impl Default for MergePreset {
    fn default() -> Self {
        Self {
            mode: LayoutMode::Vertical,
            spacing: 0,
            background: "white".to_string(),
            format: None,
            quality: DEFAULT_QUALITY,
            compress: false,
        }
    }
}

impl MergePreset {
    /// Load a preset from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| FuseError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read preset: {e}"),
        })?;

        Self::parse(&content)
    }

    /// Parse a preset from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| FuseError::Config {
            message: format!("Invalid preset: {e}"),
            help: Some("Check the preset YAML syntax".to_string()),
        })
    }
}
