//! Configuration provider using Figment

use crate::{ConfigResult, CorkboardConfig};
use figment::{
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
    Figment,
};
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Environment variable prefix
pub const ENV_PREFIX: &str = "CORKBOARD_";

/// File name (without extension) searched for in the config directory
pub const CONFIG_FILE_STEM: &str = "corkboard";

/// Loads [`CorkboardConfig`] from defaults, config files and the environment.
///
/// No caching is performed; every `load` reads the sources again.
#[derive(Debug, Clone, Default)]
pub struct ConfigProvider {
    dir: Option<PathBuf>,
}

impl ConfigProvider {
    /// Provider that reads only defaults and environment variables
    pub fn new() -> Self {
        Self { dir: None }
    }

    /// Provider that also reads `corkboard.{toml,yaml,json}` from `dir`
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: Some(dir.into()),
        }
    }

    /// Load and validate the configuration
    pub fn load(&self) -> ConfigResult<CorkboardConfig> {
        let config: CorkboardConfig = self.figment().extract()?;
        config.validate()?;
        debug!(
            data_dir = ?config.storage.data_dir,
            max_results = config.search.max_results,
            "loaded corkboard configuration"
        );
        Ok(config)
    }

    /// Build the figment with all sources in precedence order
    pub fn figment(&self) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(CorkboardConfig::default()));

        if let Some(dir) = &self.dir {
            figment = Self::merge_config_files(figment, dir);
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Merge whichever config files exist; TOML, then YAML, then JSON
    fn merge_config_files(mut figment: Figment, dir: &Path) -> Figment {
        let toml = dir.join(format!("{CONFIG_FILE_STEM}.toml"));
        let yaml = dir.join(format!("{CONFIG_FILE_STEM}.yaml"));
        let json = dir.join(format!("{CONFIG_FILE_STEM}.json"));

        if toml.is_file() {
            trace!("Loading config file: {}", toml.display());
            figment = figment.merge(Toml::file(toml));
        }
        if yaml.is_file() {
            trace!("Loading config file: {}", yaml.display());
            figment = figment.merge(Yaml::file(yaml));
        }
        if json.is_file() {
            trace!("Loading config file: {}", json.display());
            figment = figment.merge(Json::file(json));
        }
        figment
    }
}
