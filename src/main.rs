//! PDF renaming CLI.
//!
//! Thin shell over the retitle library: argument parsing, a stdout
//! observer, and summary output. Runs in preview mode unless `--execute`
//! is passed.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use retitle::{FilenameTemplate, RenameService, RunObserver, RunOptions};

/// Rename PDF files from their extracted title and publication year.
///
/// Titles are taken from embedded metadata when present, otherwise from
/// heuristics over the first page's text. By default the intended renames
/// are only previewed; pass --execute to apply them.
#[derive(Parser)]
#[command(name = "retitle")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Folder containing the PDF files to rename
    folder: Option<PathBuf>,

    /// Filename pattern; {title} and {year} are substituted
    #[arg(short, long, default_value = "{title}.pdf", value_name = "PATTERN")]
    template: String,

    /// Perform the renames instead of previewing them
    #[arg(long)]
    execute: bool,

    /// Print per-file progress to stderr
    #[arg(short, long)]
    verbose: bool,

    /// List the preset filename patterns and exit
    #[arg(long)]
    list_templates: bool,
}

/// Observer that prints pipeline output to stdout.
struct ConsoleObserver {
    verbose: bool,
}

impl RunObserver for ConsoleObserver {
    fn log(&mut self, line: &str) {
        println!("{line}");
    }

    fn progress(&mut self, current: usize, total: usize, filename: &str) {
        if self.verbose {
            eprintln!("[{current}/{total}] {filename}");
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.list_templates {
        for preset in FilenameTemplate::presets() {
            println!("{preset}");
        }
        return Ok(());
    }

    let folder = cli
        .folder
        .ok_or_else(|| anyhow::anyhow!("a folder to process is required"))?;
    if !folder.is_dir() {
        anyhow::bail!("'{}' is not a directory", folder.display());
    }

    let options = RunOptions {
        template: FilenameTemplate::new(cli.template),
        dry_run: !cli.execute,
    };

    let service = RenameService::with_default_sources();
    let mut observer = ConsoleObserver {
        verbose: cli.verbose,
    };
    let report = service
        .process(&folder, &options, &mut observer)
        .with_context(|| format!("failed to process '{}'", folder.display()))?;

    if let Some(fatal) = &report.fatal {
        anyhow::bail!("{fatal}");
    }

    let verb = if options.dry_run {
        "would be renamed"
    } else {
        "renamed"
    };
    if report.failed.is_empty() {
        println!("✓ {} file(s) {}", report.renamed, verb);
    } else {
        println!(
            "⚠ {} file(s) {}, {} failed",
            report.renamed,
            verb,
            report.failed.len()
        );
    }

    Ok(())
}
