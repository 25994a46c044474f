//! Batch extraction of one file or a directory into a single workbook.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, error, warn};

use orderx_core::processor::display_name;
use orderx_core::{
    DocumentOutcome, DocumentProcessor, OrderParser, PdfReader, SheetStyle, XlsxWorkbook,
};

/// A document that could not be turned into a sheet.
struct Failure {
    path: PathBuf,
    error: String,
}

pub fn run(input: PathBuf, output: Option<PathBuf>, config_path: Option<&Path>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = super::load_config(config_path)?;

    if !input.exists() {
        println!("Invalid: The path does not exist.");
        return Ok(());
    }
    println!("Valid: The path exists.");

    let files = input_files(&input)?;
    debug!("Found {} entries under {}", files.len(), input.display());

    let output = output.unwrap_or_else(|| config.output.default_path.clone());
    let mut workbook = XlsxWorkbook::create(&output, SheetStyle::from(&config.output))
        .map_err(|e| anyhow::anyhow!("Cannot open output workbook: {}", e))?;

    let parser = OrderParser::from_config(&config);
    let reader = PdfReader;
    let processor = DocumentProcessor::new(&reader, &parser).with_page(config.extraction.page);

    let pb = if files.len() > 1 {
        let pb = ProgressBar::new(files.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")?
                .progress_chars("=>-"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let mut processed: Vec<DocumentOutcome> = Vec::with_capacity(files.len());
    let mut failed: Vec<Failure> = Vec::new();

    for path in files {
        let file_name = display_name(&path);
        pb.suspend(|| println!("{} Found {}!", style("ℹ").blue(), file_name));

        match processor.process(&path, &mut workbook) {
            Ok(outcome) => {
                let note = if outcome.warnings.is_empty() {
                    String::new()
                } else {
                    format!(" ({} fields or sections unavailable)", outcome.warnings.len())
                };
                pb.suspend(|| {
                    println!(
                        "{} {} rows -> sheet {:?}{}",
                        style("✓").green(),
                        outcome.rows,
                        outcome.sheet,
                        note
                    )
                });
                processed.push(outcome);
            }
            Err(e) => {
                warn!("Skipping {}: {}", path.display(), e);
                pb.suspend(|| println!("{} Couldn't read {}: {}", style("✗").red(), file_name, e));
                failed.push(Failure {
                    path,
                    error: e.to_string(),
                });
            }
        }

        pb.inc(1);
    }

    pb.finish_and_clear();

    if let Err(e) = workbook.close() {
        error!("Failed to save {}: {}", output.display(), e);
        anyhow::bail!("Failed to save {}: {}", output.display(), e);
    }

    // Print summary
    println!();
    println!(
        "{} Wrote {} sheets to {} in {:?}",
        style("✓").green(),
        processed.len(),
        output.display(),
        start.elapsed()
    );
    println!(
        "   {} rows, {} skipped",
        style(processed.iter().map(|o| o.rows).sum::<usize>()).green(),
        style(failed.len()).red()
    );

    if !failed.is_empty() {
        println!();
        println!("{}", style("Skipped files:").red());
        for failure in &failed {
            println!("  - {}: {}", failure.path.display(), failure.error);
        }
    }

    Ok(())
}

/// The file itself, or every entry of the directory (non-recursive, no
/// extension filtering) in the order the file system returns them.
fn input_files(input: &Path) -> anyhow::Result<Vec<PathBuf>> {
    if !input.is_dir() {
        return Ok(vec![input.to_path_buf()]);
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(input)? {
        files.push(entry?.path());
    }
    Ok(files)
}
