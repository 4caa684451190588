//! Plain-text extraction.

use super::{ExtractError, TextExtractor};

/// Extractor for documents that are already plain UTF-8 text, one line per
/// newline. Windows line endings are tolerated.
pub struct Utf8Extractor;

impl TextExtractor for Utf8Extractor {
    fn extract(&self, document: &[u8]) -> Result<Vec<String>, ExtractError> {
        let text = std::str::from_utf8(document)?;
        Ok(text.lines().map(str::to_string).collect())
    }
}
