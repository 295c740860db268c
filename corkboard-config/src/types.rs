//! Configuration types

use crate::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CorkboardConfig {
    pub storage: StorageConfig,
    pub boards: BoardsConfig,
    pub search: SearchConfig,
    pub activity: ActivityConfig,
}

impl CorkboardConfig {
    /// Reject values the engine cannot work with
    pub fn validate(&self) -> ConfigResult<()> {
        if self.search.max_results == 0 {
            return Err(ConfigError::validation("search.max_results must be at least 1"));
        }
        if self.search.history_limit == 0 {
            return Err(ConfigError::validation(
                "search.history_limit must be at least 1",
            ));
        }
        if self.storage.store_file.trim().is_empty() {
            return Err(ConfigError::validation("storage.store_file must not be empty"));
        }
        if self.storage.history_file.trim().is_empty() {
            return Err(ConfigError::validation(
                "storage.history_file must not be empty",
            ));
        }
        Ok(())
    }
}

/// Where snapshots and search history are kept.
///
/// Without a `data_dir` everything stays in memory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub data_dir: Option<PathBuf>,
    pub store_file: String,
    pub history_file: String,
}

impl StorageConfig {
    /// Full path of the board snapshot file, if persistence is enabled
    pub fn store_path(&self) -> Option<PathBuf> {
        self.data_dir.as_ref().map(|dir| dir.join(&self.store_file))
    }

    /// Full path of the recent-search history file, if persistence is enabled
    pub fn history_path(&self) -> Option<PathBuf> {
        self.data_dir.as_ref().map(|dir| dir.join(&self.history_file))
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            store_file: "kanban-store.json".to_string(),
            history_file: "recent-searches.json".to_string(),
        }
    }
}

/// Board creation policy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardsConfig {
    /// Add the welcome cards to every new board
    pub seed_sample_cards: bool,
}

impl Default for BoardsConfig {
    fn default() -> Self {
        Self {
            seed_sample_cards: true,
        }
    }
}

/// Search ranking and history limits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub max_results: usize,
    pub history_limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_results: 50,
            history_limit: 5,
        }
    }
}

/// In-memory activity feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivityConfig {
    pub capacity: usize,
}

impl Default for ActivityConfig {
    fn default() -> Self {
        Self { capacity: 200 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = CorkboardConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.search.max_results, 50);
        assert_eq!(config.search.history_limit, 5);
        assert!(config.boards.seed_sample_cards);
        assert!(config.storage.store_path().is_none());
    }

    #[test]
    fn test_paths_join_data_dir() {
        let storage = StorageConfig {
            data_dir: Some(PathBuf::from("/var/lib/corkboard")),
            ..StorageConfig::default()
        };
        assert_eq!(
            storage.store_path(),
            Some(PathBuf::from("/var/lib/corkboard/kanban-store.json"))
        );
        assert_eq!(
            storage.history_path(),
            Some(PathBuf::from("/var/lib/corkboard/recent-searches.json"))
        );
    }

    #[test]
    fn test_zero_limits_rejected() {
        let mut config = CorkboardConfig::default();
        config.search.max_results = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation { .. })
        ));

        let mut config = CorkboardConfig::default();
        config.search.history_limit = 0;
        assert!(config.validate().is_err());
    }
}
