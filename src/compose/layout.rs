//! Layout computation for composite canvases.
//!
//! Pure placement math: given the input image dimensions, a layout mode,
//! and a spacing value, compute the canvas size and the top-left corner of
//! every image. Blitting happens separately in `canvas`.

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{FuseError, Result};

/// Number of columns in grid mode.
pub const GRID_COLUMNS: u32 = 2;

/// How images are arranged on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    /// Stack top-to-bottom, horizontally centred.
    Vertical,
    /// Place left-to-right, vertically centred.
    Horizontal,
    /// Two-column grid with uniform cells, centred within each cell.
    Grid,
}

impl fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vertical => write!(f, "vertical"),
            Self::Horizontal => write!(f, "horizontal"),
            Self::Grid => write!(f, "grid"),
        }
    }
}

/// Top-left corner of one pasted image, in input order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Placement {
    pub x: u32,
    pub y: u32,
}

/// Canvas dimensions plus one placement per input image.
#[derive(Debug, Clone, Serialize)]
pub struct LayoutPlan {
    pub width: u32,
    pub height: u32,
    pub placements: Vec<Placement>,
}

impl LayoutPlan {
    /// Compute the canvas size and per-image placements.
    ///
    /// `sizes` holds `(width, height)` per input image, in paste order.
    /// Centring offsets use integer floor division, so for an odd size
    /// difference the extra pixel lands on the trailing side.
    ///
    /// # Errors
    ///
    /// Returns `FuseError::EmptyInput` when `sizes` is empty.
    pub fn compute(mode: LayoutMode, sizes: &[(u32, u32)], spacing: u32) -> Result<Self> {
        if sizes.is_empty() {
            return Err(FuseError::EmptyInput);
        }

        Ok(match mode {
            LayoutMode::Vertical => Self::vertical(sizes, spacing),
            LayoutMode::Horizontal => Self::horizontal(sizes, spacing),
            LayoutMode::Grid => Self::grid(sizes, spacing),
        })
    }

    fn vertical(sizes: &[(u32, u32)], spacing: u32) -> Self {
        let count = sizes.len() as u32;
        let width = sizes.iter().map(|&(w, _)| w).max().unwrap_or(0);
        let height = sizes.iter().map(|&(_, h)| h).sum::<u32>() + spacing * (count - 1);

        let mut placements = Vec::with_capacity(sizes.len());
        let mut y = 0;
        for &(w, h) in sizes {
            placements.push(Placement {
                x: (width - w) / 2,
                y,
            });
            y += h + spacing;
        }

        Self {
            width,
            height,
            placements,
        }
    }

    fn horizontal(sizes: &[(u32, u32)], spacing: u32) -> Self {
        let count = sizes.len() as u32;
        let width = sizes.iter().map(|&(w, _)| w).sum::<u32>() + spacing * (count - 1);
        let height = sizes.iter().map(|&(_, h)| h).max().unwrap_or(0);

        let mut placements = Vec::with_capacity(sizes.len());
        let mut x = 0;
        for &(w, h) in sizes {
            placements.push(Placement {
                x,
                y: (height - h) / 2,
            });
            x += w + spacing;
        }

        Self {
            width,
            height,
            placements,
        }
    }

    fn grid(sizes: &[(u32, u32)], spacing: u32) -> Self {
        let rows = (sizes.len() as u32).div_ceil(GRID_COLUMNS);
        // Every cell shares one uniform size: the maximum over all inputs.
        let cell_w = sizes.iter().map(|&(w, _)| w).max().unwrap_or(0);
        let cell_h = sizes.iter().map(|&(_, h)| h).max().unwrap_or(0);

        let width = cell_w * GRID_COLUMNS + spacing * (GRID_COLUMNS - 1);
        let height = cell_h * rows + spacing * (rows - 1);

        let placements = sizes
            .iter()
            .enumerate()
            .map(|(i, &(w, h))| {
                let col = i as u32 % GRID_COLUMNS;
                let row = i as u32 / GRID_COLUMNS;
                Placement {
                    x: col * (cell_w + spacing) + (cell_w - w) / 2,
                    y: row * (cell_h + spacing) + (cell_h - h) / 2,
                }
            })
            .collect();

        Self {
            width,
            height,
            placements,
        }
    }
}
