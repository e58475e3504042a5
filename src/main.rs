use clap::Parser;
use miette::Result;

use imgfuse::cli::{Cli, Commands};
use imgfuse::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Merge(args) => imgfuse::cli::merge::run(args, &printer)?,
        Commands::Inspect(args) => imgfuse::cli::inspect::run(args, &printer)?,
        Commands::Completions(args) => imgfuse::cli::completions::run(args)?,
    }

    Ok(())
}
