//! Inspect command - extract a single order and print its rows.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use serde::Serialize;
use tracing::{debug, info};

use orderx_core::{ExtractionResult, OrderParser, OrderRow, PageReader, PdfReader};

/// Arguments for the inspect command.
#[derive(Args)]
pub struct InspectArgs {
    /// Input PDF file
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Page to read (default: from config)
    #[arg(short, long)]
    page: Option<u32>,

    /// Print extraction warnings
    #[arg(long)]
    show_warnings: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Plain text table
    Text,
}

/// JSON view of one document.
#[derive(Serialize)]
struct InspectReport<'a> {
    file: String,
    rows: &'a [OrderRow],
    warnings: &'a [String],
}

pub fn run(args: InspectArgs, config_path: Option<&Path>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = super::load_config(config_path)?;

    // Check input file exists
    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    let page = args.page.unwrap_or(config.extraction.page);
    info!("Reading page {} of {}", page, args.input.display());

    let text = PdfReader.read_page(&args.input, page)?;
    debug!("Page {} has {} characters", page, text.len());

    let result = OrderParser::from_config(&config).parse(&text);

    // Format output
    let output = format_result(&args.input, &result, args.format)?;

    // Write output
    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    if args.show_warnings {
        if result.warnings.is_empty() {
            eprintln!("{} All fields and sections extracted", style("ℹ").blue());
        } else {
            eprintln!("{}", style("Extraction warnings:").yellow());
            for warning in &result.warnings {
                eprintln!("  - {}", warning);
            }
        }
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

fn format_result(
    input: &Path,
    result: &ExtractionResult,
    format: OutputFormat,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => {
            let report = InspectReport {
                file: input.display().to_string(),
                rows: &result.table.rows,
                warnings: &result.warnings,
            };
            Ok(serde_json::to_string_pretty(&report)?)
        }
        OutputFormat::Text => Ok(result.table.to_text()),
    }
}
