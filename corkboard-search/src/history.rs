//! Recent search history

use crate::error::Result;
use corkboard_config::SearchConfig;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, warn};

/// Most-recent-first list of distinct queries, capped at a fixed length
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentSearches {
    entries: Vec<String>,
    limit: usize,
}

impl RecentSearches {
    /// Empty history holding at most `limit` queries
    pub fn new(limit: usize) -> Self {
        Self {
            entries: Vec::new(),
            limit,
        }
    }

    pub fn from_config(config: &SearchConfig) -> Self {
        Self::new(config.history_limit)
    }

    /// Queries, newest first
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Put `query` at the front, dropping an earlier identical entry and
    /// anything beyond the limit. Blank queries are ignored.
    ///
    /// Returns false if the query was ignored.
    pub fn record(&mut self, query: &str) -> bool {
        if query.trim().is_empty() {
            return false;
        }
        self.entries.retain(|q| q != query);
        self.entries.insert(0, query.to_string());
        self.entries.truncate(self.limit);
        true
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Load a history file written by [`save`](Self::save).
    ///
    /// A missing file is an empty history. So is a file that cannot be parsed;
    /// that case is logged and otherwise ignored.
    pub fn load(path: &Path, limit: usize) -> Result<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Self::new(limit)),
            Err(e) => return Err(e.into()),
        };

        let entries: Vec<String> = match serde_json::from_str(&content) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("failed to load recent searches from {}: {}", path.display(), e);
                return Ok(Self::new(limit));
            }
        };

        let mut history = Self::new(limit);
        // Oldest first so the newest ends up at the front
        for query in entries.iter().rev() {
            history.record(query);
        }
        debug!(count = history.entries.len(), "loaded recent searches");
        Ok(history)
    }

    /// Write the history as a JSON array (atomic write via temp file)
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string(&self.entries)?;
        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, content)?;
        fs::rename(&temp_path, path)?;
        Ok(())
    }
}
