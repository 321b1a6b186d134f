use std::path::{Path, PathBuf};
use tracing::info;

use crate::config::ExtractConfig;
use crate::error::Result;
use crate::output::{write_sentences, write_text};
use crate::utils::{clean_text, split_into_sentences, PdfDocument};

/// Summary of one extraction run
#[derive(Debug, Clone)]
pub struct ExtractionReport {
    pub total_pages: usize,
    pub pages_with_text: usize,
    pub character_count: usize,
    pub text_output: PathBuf,
    pub json_output: PathBuf,
    pub sentences: Vec<String>,
}

/// Extract a PDF into the text and JSON outputs named by `config`
pub fn extract_from_pdf(path: &Path, config: &ExtractConfig) -> Result<ExtractionReport> {
    let document = PdfDocument::open(path)?;
    run(document, config)
}

/// Same as [`extract_from_pdf`] for page texts that are already extracted
pub fn extract_from_pages(pages: Vec<String>, config: &ExtractConfig) -> Result<ExtractionReport> {
    run(PdfDocument::from_pages("<memory>", pages), config)
}

fn run(document: PdfDocument, config: &ExtractConfig) -> Result<ExtractionReport> {
    let raw = document.into_raw_text();

    let normalized = clean_text(&raw.text);
    let character_count = normalized.chars().count();
    info!("Normalized text: {} characters", character_count);

    write_text(&config.text_output, &normalized)?;

    let sentences = split_into_sentences(&normalized, &config.segment);
    info!("Split into {} sentences", sentences.len());

    write_sentences(&config.json_output, &sentences)?;

    Ok(ExtractionReport {
        total_pages: raw.total_pages,
        pages_with_text: raw.pages_with_text,
        character_count,
        text_output: config.text_output.clone(),
        json_output: config.json_output.clone(),
        sentences,
    })
}
