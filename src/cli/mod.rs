pub mod completions;
pub mod inspect;
pub mod merge;

use clap::{Parser, Subcommand};

/// imgfuse - merge raster images into a single composite
#[derive(Parser, Debug)]
#[command(name = "imgfuse")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Merge images into one composite and write it out
    Merge(merge::MergeArgs),

    /// Show information about image files
    Inspect(inspect::InspectArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
