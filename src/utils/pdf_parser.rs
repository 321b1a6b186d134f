use std::fs;
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::error::{ExtractError, Result};

/// An opened PDF: its path and the text of each page in document order
#[derive(Debug, Clone)]
pub struct PdfDocument {
    path: PathBuf,
    pages: Vec<String>,
}

/// Page texts concatenated before normalization
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawText {
    pub text: String,
    pub total_pages: usize,
    pub pages_with_text: usize,
}

impl PdfDocument {
    /// Open a PDF file and extract the text of every page
    pub fn open(path: &Path) -> Result<Self> {
        info!("Opening PDF: {:?}", path);

        if !path.exists() {
            return Err(ExtractError::NotFound(path.to_path_buf()));
        }

        let bytes = fs::read(path).map_err(|e| ExtractError::UnreadableDocument {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let pages = extract_pages(&bytes).map_err(|reason| ExtractError::UnreadableDocument {
            path: path.to_path_buf(),
            reason,
        })?;

        info!("Total pages: {}", pages.len());

        Ok(Self {
            path: path.to_path_buf(),
            pages,
        })
    }

    /// Wrap page texts that were extracted elsewhere
    pub fn from_pages(path: impl Into<PathBuf>, pages: Vec<String>) -> Self {
        Self {
            path: path.into(),
            pages,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Consume the document, returning the harvested text of all pages
    pub fn into_raw_text(self) -> RawText {
        let raw = harvest_pages(&self.pages);
        info!(
            "Extracted text from {} pages ({} with text): {:?}",
            raw.total_pages, raw.pages_with_text, self.path
        );
        raw
    }
}

/// `pdf_extract` panics on some malformed files instead of returning an error
fn extract_pages(bytes: &[u8]) -> std::result::Result<Vec<String>, String> {
    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        pdf_extract::extract_text_from_mem_by_pages(bytes)
    }));

    match result {
        Ok(Ok(pages)) => Ok(pages),
        Ok(Err(e)) => Err(e.to_string()),
        Err(_) => Err("PDF extraction panicked (malformed document)".to_string()),
    }
}

/// Join page texts in order, each followed by a newline.
/// Pages without text contribute nothing.
pub fn harvest_pages<S: AsRef<str>>(pages: &[S]) -> RawText {
    let total_pages = pages.len();
    let mut raw = RawText {
        text: String::new(),
        total_pages,
        pages_with_text: 0,
    };

    for (idx, page) in pages.iter().enumerate() {
        info!("Processing page {}/{}...", idx + 1, total_pages);

        let page_text = page.as_ref();
        if page_text.trim().is_empty() {
            debug!("Page {} has no extractable text", idx + 1);
            continue;
        }

        raw.text.push_str(page_text);
        raw.text.push('\n');
        raw.pages_with_text += 1;
    }

    if total_pages > 0 && raw.pages_with_text == 0 {
        warn!("No page yielded any text; the PDF may be scanned");
    }

    raw
}
