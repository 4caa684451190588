//! Caching layer for parsed documents.
//!
//! Pairing files change monthly but are re-requested constantly, so parsed
//! results are memoized. Entries are keyed by a SHA-256 digest of the
//! document bytes rather than by name and size: two uploads with the same
//! content share an entry, and a re-upload with changed content never
//! serves stale results. The requested pairing limit is part of the key,
//! since it changes the result.
//!
//! `try_get_with` gives the compute-once contract: for a given key at most
//! one parse runs to completion, and concurrent callers for the same key
//! observe the same shared result. Failed extractions are not cached.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;
use sha2::{Digest, Sha256};

use crate::extract::{ExtractError, TextExtractor};
use crate::parser::{ParseOutcome, parse_document};

/// Cache key: (content digest, pairing limit).
type DocumentKey = (String, Option<usize>);

/// Configuration for the pairing cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached documents.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            // Pairing files are republished monthly; a day is plenty.
            ttl: Duration::from_secs(24 * 60 * 60),
            max_capacity: 64,
        }
    }
}

/// Hex-encoded SHA-256 digest of the document bytes.
pub fn content_key(document: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(document);
    hex::encode(hasher.finalize())
}

/// Memoizing wrapper around the parser.
pub struct PairingCache {
    entries: MokaCache<DocumentKey, Arc<ParseOutcome>>,
}

impl PairingCache {
    /// Create a new cache with the given configuration.
    pub fn new(config: &CacheConfig) -> Self {
        let entries = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { entries }
    }

    /// Parse a document, reusing a cached result when the same content has
    /// been parsed with the same limit before.
    pub async fn get_or_parse(
        &self,
        extractor: &dyn TextExtractor,
        document: &[u8],
        limit: Option<usize>,
    ) -> Result<Arc<ParseOutcome>, Arc<ExtractError>> {
        let key = (content_key(document), limit);

        self.entries
            .try_get_with(key, async {
                parse_document(extractor, document, limit).map(Arc::new)
            })
            .await
    }

    /// Number of cached documents (for monitoring).
    pub fn entry_count(&self) -> u64 {
        self.entries.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_all(&self) {
        self.entries.invalidate_all();
    }
}
