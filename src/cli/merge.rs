//! Merge command implementation.
//!
//! Runs the composition pipeline: collect inputs, decode, compose, encode.
//! The pipeline aborts on the first failure and writes no partial output.

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::mpsc;

use clap::Args;
use image::{DynamicImage, GenericImageView};
use notify::{RecursiveMode, Watcher};

use crate::compose::{compose, LayoutMode};
use crate::error::{FuseError, Result};
use crate::export::{encode, unique_destination, OutputFormat};
use crate::output::Printer;
use crate::preset::MergePreset;
use crate::source::{collect_inputs, decode, AlphaMode};
use crate::types::Background;

/// Quality reduction applied by `--compress`.
const COMPRESS_OFFSET: u8 = 30;

/// Lower bound for compressed quality.
const COMPRESS_FLOOR: u8 = 40;

/// Merge images into one composite and write it out
#[derive(Args, Debug)]
pub struct MergeArgs {
    /// Image files or directories to merge, in paste order
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Destination file for the composite
    #[arg(long, short)]
    pub output: PathBuf,

    /// Layout mode
    #[arg(long, short, value_enum)]
    pub mode: Option<LayoutMode>,

    /// Pixels between adjacent images
    #[arg(long, short)]
    pub spacing: Option<u32>,

    /// Background colour: a name (white, black, light-gray), hex, or "transparent"
    #[arg(long, short)]
    pub background: Option<String>,

    /// Output format (inferred from the destination extension when omitted)
    #[arg(long, short, value_enum)]
    pub format: Option<OutputFormat>,

    /// Export quality, 1-100
    #[arg(long, short)]
    pub quality: Option<u8>,

    /// Trade quality for size: reduces quality by 30, floored at 40
    #[arg(long)]
    pub compress: bool,

    /// Keep alpha channels from source images instead of flattening to RGB
    #[arg(long)]
    pub keep_alpha: bool,

    /// Never overwrite an existing destination; pick a unique name instead
    #[arg(long)]
    pub no_clobber: bool,

    /// Preset file supplying defaults for unset options
    #[arg(long)]
    pub preset: Option<PathBuf>,

    /// Re-run the merge whenever an input file changes
    #[arg(long)]
    pub watch: bool,
}

/// Fully resolved merge settings: CLI flags over preset over defaults.
#[derive(Debug)]
struct MergeSettings {
    mode: LayoutMode,
    spacing: u32,
    background: Background,
    format: OutputFormat,
    quality: u8,
    compress: bool,
    alpha: AlphaMode,
}

impl MergeSettings {
    fn resolve(args: &MergeArgs) -> Result<Self> {
        let preset = match &args.preset {
            Some(path) => MergePreset::load(path)?,
            None => MergePreset::default(),
        };

        let background = args.background.as_deref().unwrap_or(&preset.background);
        let format = args
            .format
            .or_else(|| OutputFormat::from_path(&args.output))
            .or(preset.format)
            .unwrap_or(OutputFormat::Png);

        Ok(Self {
            mode: args.mode.unwrap_or(preset.mode),
            spacing: args.spacing.unwrap_or(preset.spacing),
            background: Background::from_str(background)?,
            format,
            quality: args.quality.unwrap_or(preset.quality),
            compress: args.compress || preset.compress,
            alpha: if args.keep_alpha {
                AlphaMode::Preserve
            } else {
                AlphaMode::Discard
            },
        })
    }

    /// Effective export quality after the optional compress policy.
    fn effective_quality(&self) -> u8 {
        if self.compress {
            self.quality.saturating_sub(COMPRESS_OFFSET).max(COMPRESS_FLOOR)
        } else {
            self.quality
        }
    }
}

pub fn run(args: MergeArgs, printer: &Printer) -> Result<()> {
    let settings = MergeSettings::resolve(&args)?;
    let files = collect_inputs(&args.inputs)?;

    if files.len() < 2 {
        return Err(FuseError::Validation {
            message: format!("At least 2 images are required, found {}", files.len()),
            help: Some("Pass more image files, or a directory containing them".to_string()),
        });
    }

    run_merge(&files, &args.output, &settings, args.no_clobber, printer)?;

    if args.watch {
        watch_loop(&files, &args.output, &settings, args.no_clobber, printer)?;
    }

    Ok(())
}

/// Run the decode -> compose -> encode pipeline once.
fn run_merge(
    files: &[PathBuf],
    output: &Path,
    settings: &MergeSettings,
    no_clobber: bool,
    printer: &Printer,
) -> Result<()> {
    let mut images: Vec<DynamicImage> = Vec::with_capacity(files.len());
    for (index, file) in files.iter().enumerate() {
        printer.status(
            "Decoding",
            &format!("{} ({}/{})", file.display(), index + 1, files.len()),
        );
        images.push(decode(file, settings.alpha)?);
    }

    printer.status(
        "Composing",
        &format!("{} images, {} layout", images.len(), settings.mode),
    );
    let composite = compose(&images, settings.mode, settings.spacing, settings.background)?;

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| FuseError::Io {
                path: parent.to_path_buf(),
                message: format!("Failed to create output directory: {e}"),
            })?;
        }
    }

    let destination = if no_clobber {
        unique_destination(output)
    } else {
        output.to_path_buf()
    };

    printer.status("Writing", &format!("{} ({})", destination.display(), settings.format));
    encode(
        &composite,
        &destination,
        settings.format,
        settings.effective_quality(),
    )?;

    printer.success(
        "Finished",
        &format!(
            "{} images -> {} ({}x{} px, {})",
            files.len(),
            destination.display(),
            composite.width(),
            composite.height(),
            settings.format,
        ),
    );

    Ok(())
}

/// Re-run the merge whenever an input file changes.
///
/// Coarse-grained: a merge already in progress is never interrupted, and
/// events that arrive while one runs trigger a single run afterwards.
fn watch_loop(
    files: &[PathBuf],
    output: &Path,
    settings: &MergeSettings,
    no_clobber: bool,
    printer: &Printer,
) -> Result<()> {
    let (tx, rx) = mpsc::channel();
    let mut watcher = notify::recommended_watcher(tx).map_err(|e| FuseError::Watch {
        message: e.to_string(),
    })?;

    for file in files {
        watcher
            .watch(file, RecursiveMode::NonRecursive)
            .map_err(|e| FuseError::Watch {
                message: format!("{}: {e}", file.display()),
            })?;
    }

    printer.info(
        "Watching",
        &format!("{} file(s), Ctrl-C to stop", files.len()),
    );

    for event in &rx {
        let event = event.map_err(|e| FuseError::Watch {
            message: e.to_string(),
        })?;

        if !(event.kind.is_modify() || event.kind.is_create() || event.kind.is_remove()) {
            continue;
        }

        // Collapse event bursts from a single save into one run.
        while rx.try_recv().is_ok() {}

        if let Err(error) = run_merge(files, output, settings, no_clobber, printer) {
            printer.error("Error", &error.to_string());
        }
    }

    Ok(())
}
