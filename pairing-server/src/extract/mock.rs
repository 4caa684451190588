//! Canned extractor for tests.

use super::{ExtractError, TextExtractor};

/// Extractor that ignores the document bytes and returns canned lines, or
/// a canned failure. Useful for exercising callers without real documents.
#[derive(Debug, Clone)]
pub struct MockExtractor {
    result: Result<Vec<String>, String>,
}

impl MockExtractor {
    /// An extractor that always yields the given lines.
    pub fn with_lines<S: Into<String>>(lines: impl IntoIterator<Item = S>) -> Self {
        Self {
            result: Ok(lines.into_iter().map(Into::into).collect()),
        }
    }

    /// An extractor that always fails with the given message.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            result: Err(message.into()),
        }
    }
}

impl TextExtractor for MockExtractor {
    fn extract(&self, _document: &[u8]) -> Result<Vec<String>, ExtractError> {
        match &self.result {
            Ok(lines) => Ok(lines.clone()),
            Err(message) => Err(ExtractError::Failed(message.clone())),
        }
    }
}
