use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

use quote_extract::output::summary_lines;
use quote_extract::{extract_from_pdf, ExtractConfig};

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Extract Hindi text from a PDF book and split it into quotes",
    after_help = "Example:\n  extract-quotes my_hindi_book.pdf"
)]
struct Cli {
    /// Path to the PDF book
    pdf: PathBuf,
}

fn main() -> Result<ExitCode> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config = ExtractConfig::default();
    config.validate();
    info!("Configuration: {}", config);

    let report = match extract_from_pdf(&cli.pdf, &config) {
        Ok(report) => report,
        Err(e) if e.is_input_error() => {
            eprintln!("❌ Error: {}", e);
            eprintln!("\n❌ Extraction failed");
            return Ok(ExitCode::FAILURE);
        }
        Err(e) => return Err(anyhow::Error::new(e).context("Failed to save extraction output")),
    };

    for line in summary_lines(&report, &config.preview) {
        println!("{}", line);
    }

    Ok(ExitCode::SUCCESS)
}
