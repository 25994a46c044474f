//! CLI application for purchase-order PDF extraction.

mod commands;

use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use commands::{config, extract, inspect};

/// Purchase-order extraction - Turn order PDFs into one Excel workbook
#[derive(Parser)]
#[command(name = "orderx")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true, arg_required_else_help = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// PDF file or directory of PDF files
    input: Option<PathBuf>,

    /// Output workbook [default: output.xlsx]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract a single order and print its rows
    Inspect(inspect::InspectArgs),

    /// Manage configuration
    Config(config::ConfigArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    // Execute command
    match cli.command {
        Some(Commands::Inspect(args)) => inspect::run(args, cli.config.as_deref()),
        Some(Commands::Config(args)) => config::run(args, cli.config.as_deref()),
        None => {
            let Some(input) = cli.input else {
                Cli::command()
                    .error(ErrorKind::MissingRequiredArgument, "no input path provided")
                    .exit();
            };
            extract::run(input, cli.output, cli.config.as_deref())
        }
    }
}
