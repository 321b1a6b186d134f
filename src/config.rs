use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// Length thresholds a sentence candidate must pass
#[derive(Debug, Clone, Serialize)]
pub struct SegmentRules {
    pub min_tokens: usize,
    pub max_tokens: usize,
    /// Candidates must be strictly longer than this, in characters
    pub min_chars: usize,
}

impl Default for SegmentRules {
    fn default() -> Self {
        Self {
            min_tokens: 5,
            max_tokens: 200,
            min_chars: 20,
        }
    }
}

impl SegmentRules {
    pub fn validate(&self) {
        assert!(self.min_tokens > 0, "min_tokens must be > 0");
        assert!(self.max_tokens >= self.min_tokens, "max_tokens must be >= min_tokens");
    }

    pub fn accepts(&self, sentence: &str) -> bool {
        let tokens = sentence.split_whitespace().count();
        (self.min_tokens..=self.max_tokens).contains(&tokens)
            && sentence.chars().count() > self.min_chars
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PreviewConfig {
    pub count: usize,
    pub max_chars: usize,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            count: 3,
            max_chars: 100,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ExtractConfig {
    // Output files
    pub text_output: PathBuf,
    pub json_output: PathBuf,

    pub segment: SegmentRules,
    pub preview: PreviewConfig,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            text_output: PathBuf::from("book.txt"),
            json_output: PathBuf::from("quotes.json"),
            segment: SegmentRules::default(),
            preview: PreviewConfig::default(),
        }
    }
}

impl ExtractConfig {
    /// Default configuration with both output files placed under `dir`
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        let defaults = Self::default();
        Self {
            text_output: dir.join(&defaults.text_output),
            json_output: dir.join(&defaults.json_output),
            ..defaults
        }
    }

    pub fn validate(&self) {
        assert!(
            self.text_output != self.json_output,
            "text_output and json_output must differ"
        );
        self.segment.validate();
    }
}

impl fmt::Display for ExtractConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match serde_json::to_string(self) {
            Ok(json) => f.write_str(&json),
            // non UTF-8 output paths
            Err(_) => write!(f, "{:?}", self),
        }
    }
}
