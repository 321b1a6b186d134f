use std::path::PathBuf;
use thiserror::Error;

/// Failures that can end an extraction run
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("PDF file not found at {0:?}")]
    NotFound(PathBuf),

    #[error("Error reading PDF {path:?}: {reason}")]
    UnreadableDocument { path: PathBuf, reason: String },

    #[error("Failed to write {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode sentences as JSON: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl ExtractError {
    /// True for problems with the input PDF, as opposed to the output side.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            ExtractError::NotFound(_) | ExtractError::UnreadableDocument { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, ExtractError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_errors_are_classified() {
        assert!(ExtractError::NotFound(PathBuf::from("book.pdf")).is_input_error());
        assert!(ExtractError::UnreadableDocument {
            path: PathBuf::from("book.pdf"),
            reason: "bad xref".to_string(),
        }
        .is_input_error());

        let write = ExtractError::Write {
            path: PathBuf::from("book.txt"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(!write.is_input_error());
    }

    #[test]
    fn test_not_found_message_names_path() {
        let err = ExtractError::NotFound(PathBuf::from("missing.pdf"));
        assert!(err.to_string().contains("missing.pdf"));
    }
}
