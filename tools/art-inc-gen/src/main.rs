//! art-inc-gen - ASCII art include-table generator
//!
//! Converts a `*`-delimited multi-frame art file into `<OUTPUT>` (wide
//! glyph table) and `<OUTPUT>.compat` (space/`#` table) for `#include`.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use art_inc_gen::GenerateOptions;

#[derive(Parser)]
#[command(name = "art-inc-gen")]
#[command(about = "Generate C include tables from multi-frame ASCII art", long_about = None)]
#[command(version)]
struct Cli {
    /// Art file with frames separated by `*` lines (UTF-8)
    input: PathBuf,

    /// Output include file (the compat table goes to <OUTPUT>.compat)
    output: PathBuf,

    /// Fail if any frame differs in size from the first one
    #[arg(long)]
    strict: bool,

    /// Verify existing output is up to date instead of writing it
    #[arg(long)]
    check: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    let options = GenerateOptions { strict: cli.strict };

    if cli.check {
        if !art_inc_gen::check(&cli.input, &cli.output, options)? {
            anyhow::bail!(
                "Tables are out of sync with {}. Run without --check to regenerate.",
                cli.input.display()
            );
        }
        tracing::info!("All tables are in sync!");
        return Ok(());
    }

    let report = art_inc_gen::generate(&cli.input, &cli.output, options)?;
    tracing::debug!(
        "Wrote {} frames {} to {} file(s)",
        report.frames,
        report.dimensions,
        report.written.len()
    );

    Ok(())
}
