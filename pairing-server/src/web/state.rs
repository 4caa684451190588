//! Application state for the web layer.

use std::path::PathBuf;
use std::sync::Arc;

use crate::cache::PairingCache;
use crate::extract::TextExtractor;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Memoizing parser front-end.
    pub cache: Arc<PairingCache>,

    /// Text extractor for uploaded documents.
    pub extractor: Arc<dyn TextExtractor>,

    /// Directory holding the published pairing documents.
    pub data_dir: Arc<PathBuf>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(
        cache: PairingCache,
        extractor: Arc<dyn TextExtractor>,
        data_dir: PathBuf,
    ) -> Self {
        Self {
            cache: Arc::new(cache),
            extractor,
            data_dir: Arc::new(data_dir),
        }
    }
}
