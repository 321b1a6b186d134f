use std::fs;
use std::path::Path;
use tracing::info;

use crate::config::PreviewConfig;
use crate::error::{ExtractError, Result};
use crate::pipeline::ExtractionReport;

/// Write the normalized text verbatim
pub fn write_text(path: &Path, text: &str) -> Result<()> {
    fs::write(path, text).map_err(|source| ExtractError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Saved full text to {:?}", path);
    Ok(())
}

/// Write sentences as a pretty-printed JSON array of strings
pub fn write_sentences(path: &Path, sentences: &[String]) -> Result<()> {
    let json = serde_json::to_string_pretty(sentences)?;
    fs::write(path, json).map_err(|source| ExtractError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Saved {} sentences to {:?}", sentences.len(), path);
    Ok(())
}

/// First `max_chars` characters, with "..." appended when cut
pub fn preview_line(sentence: &str, max_chars: usize) -> String {
    match sentence.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &sentence[..cut]),
        None => sentence.to_string(),
    }
}

pub fn preview_lines(sentences: &[String], preview: &PreviewConfig) -> Vec<String> {
    sentences
        .iter()
        .take(preview.count)
        .enumerate()
        .map(|(i, sentence)| format!("  {}. {}", i + 1, preview_line(sentence, preview.max_chars)))
        .collect()
}

/// Console summary of a finished run, ending with the hint to start the quote server
pub fn summary_lines(report: &ExtractionReport, preview: &PreviewConfig) -> Vec<String> {
    let mut lines = vec![
        format!(
            "✅ Extracted text from {} pages ({} with text)",
            report.total_pages, report.pages_with_text
        ),
        format!(
            "💾 Saved full text to {} ({} characters)",
            report.text_output.display(),
            report.character_count
        ),
        format!("✂️  Split into {} sentences", report.sentences.len()),
        format!("💾 Saved sentences to {}", report.json_output.display()),
        String::new(),
        "📝 Sample sentences:".to_string(),
    ];
    lines.extend(preview_lines(&report.sentences, preview));
    lines.push(String::new());
    lines.push("✅ Extraction complete! You can now start the server:".to_string());
    lines.push("   node server.js".to_string());
    lines
}
