//! Per-run material deduplication

use std::collections::HashSet;

/// Tracks material tokens already emitted during one export run
///
/// Scoped to a single export call; a fresh instance is created per run so
/// no state leaks between snapshots.
#[derive(Debug, Default)]
pub struct MaterialDeduplicator {
    seen: HashSet<String>,
}

impl MaterialDeduplicator {
    /// Create an empty deduplicator
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True exactly once per token, recording it as emitted
    pub fn should_emit(&mut self, token: &str) -> bool {
        if self.seen.contains(token) {
            return false;
        }
        self.seen.insert(token.to_string());
        true
    }

    /// Number of distinct tokens emitted so far
    #[must_use]
    pub fn emitted_count(&self) -> usize {
        self.seen.len()
    }
}
