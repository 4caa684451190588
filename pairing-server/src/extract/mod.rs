//! Text-extraction boundary.
//!
//! The parser core never touches the binary document format. An extractor
//! turns the raw document bytes into the sequence of text lines the parser
//! consumes; the production deployment feeds the server plain-text exports,
//! and tests use a canned extractor.

mod mock;
mod plain;

pub use mock::MockExtractor;
pub use plain::Utf8Extractor;

/// Errors from text extraction.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ExtractError {
    /// The document bytes are not valid text in the expected encoding.
    #[error("document is not valid UTF-8 text: {0}")]
    InvalidEncoding(#[from] std::str::Utf8Error),

    /// The extraction backend reported a failure.
    #[error("text extraction failed: {0}")]
    Failed(String),
}

/// Extracts the text lines of a pairing document from its raw bytes.
pub trait TextExtractor: Send + Sync {
    /// Extract the document's text as an ordered sequence of lines.
    fn extract(&self, document: &[u8]) -> Result<Vec<String>, ExtractError>;
}
