// Library exports for the extract-quotes binary and other callers

pub mod config;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod utils;

// Re-export commonly used types
pub use config::{ExtractConfig, PreviewConfig, SegmentRules};
pub use error::ExtractError;
pub use pipeline::{extract_from_pages, extract_from_pdf, ExtractionReport};
