//! Inspect command implementation.
//!
//! Probes image files and reports their dimensions, container format,
//! colour mode, and size.

use std::path::PathBuf;

use clap::Args;

use crate::error::{FuseError, Result};
use crate::output::Printer;
use crate::source::{collect_inputs, probe, ImageInfo};

/// Show information about image files
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Image files or directories to inspect
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Print machine-readable JSON to stdout
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: InspectArgs, printer: &Printer) -> Result<()> {
    let files = collect_inputs(&args.inputs)?;

    if files.is_empty() {
        printer.warning("Inspect", "no supported images found");
        return Ok(());
    }

    let mut infos: Vec<ImageInfo> = Vec::with_capacity(files.len());
    for file in &files {
        infos.push(probe(file)?);
    }

    if args.json {
        let json = serde_json::to_string_pretty(&infos).map_err(|e| FuseError::Config {
            message: format!("Failed to serialize report: {e}"),
            help: None,
        })?;
        println!("{json}");
        return Ok(());
    }

    for info in &infos {
        printer.info(
            &info.format,
            &format!(
                "{} {}  {} KB  {}",
                info.path.display(),
                printer.dim(&format!("{}x{} px", info.width, info.height)),
                info.size_kb,
                info.color_mode,
            ),
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use image::{Rgb, RgbImage};
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_inspect_probes_every_input() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a.png");
        let b = dir.path().join("b.png");
        RgbImage::from_pixel(4, 4, Rgb([0, 0, 0])).save(&a).unwrap();
        RgbImage::from_pixel(8, 2, Rgb([0, 0, 0])).save(&b).unwrap();

        let args = InspectArgs {
            inputs: vec![a, b],
            json: true,
        };
        run(args, &Printer::new()).unwrap();
    }

    #[test]
    fn test_inspect_fails_on_corrupt_input() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.png");
        std::fs::write(&path, b"garbage").unwrap();

        let args = InspectArgs {
            inputs: vec![path],
            json: false,
        };
        let result = run(args, &Printer::new());
        assert!(matches!(result, Err(FuseError::Decode { .. })));
    }
}
