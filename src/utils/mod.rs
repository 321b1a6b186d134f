pub mod pdf_parser;
pub mod text_processor;

pub use pdf_parser::{harvest_pages, PdfDocument, RawText};
pub use text_processor::{clean_text, is_allowed_char, split_into_sentences};
