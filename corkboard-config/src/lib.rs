//! Corkboard configuration
//!
//! Configuration is layered with figment, later sources overriding earlier ones:
//!
//! 1. Built-in defaults ([`CorkboardConfig::default`])
//! 2. `corkboard.toml`, `corkboard.yaml`, `corkboard.json` in the config directory
//! 3. Environment variables prefixed with `CORKBOARD_`, using `__` between
//!    section and key (`CORKBOARD_SEARCH__MAX_RESULTS=20`)

mod error;
mod provider;
mod types;

pub use error::{ConfigError, ConfigResult};
pub use provider::{ConfigProvider, CONFIG_FILE_STEM, ENV_PREFIX};
pub use types::{ActivityConfig, BoardsConfig, CorkboardConfig, SearchConfig, StorageConfig};
