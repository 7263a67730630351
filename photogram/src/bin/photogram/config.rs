use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use photogram::GraphOptions;
use photogram::seed::SeedConfig;

/// Environment variable naming the configuration file.
pub const CONFIG_ENV: &str = "PHOTOGRAM_CONFIG";
/// File looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "photogram.toml";

/// Contents of `photogram.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub graph: GraphOptions,
    #[serde(default)]
    pub seed: SeedConfig,
}

/// Where the active configuration came from.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigSource {
    File(PathBuf),
    Defaults,
}

impl AppConfig {
    /// Load configuration from the first of: `explicit`, `$PHOTOGRAM_CONFIG`,
    /// `<dir>/photogram.toml`. Falls back to defaults when none applies.
    pub fn resolve(explicit: Option<&Path>, dir: &Path) -> Result<(Self, ConfigSource)> {
        let from_env = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        let path = match explicit.map(Path::to_path_buf).or(from_env) {
            Some(path) => path,
            None => {
                let candidate = dir.join(DEFAULT_CONFIG_FILE);
                if !candidate.exists() {
                    return Ok((Self::default(), ConfigSource::Defaults));
                }
                candidate
            }
        };

        let config = Self::from_file(&path)?;
        Ok((config, ConfigSource::File(path)))
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).with_context(|| format!("Failed to read config file {}", path.display()))?;
        let mut config: AppConfig =
            toml::from_str(&content).with_context(|| format!("Failed to parse config file {}", path.display()))?;

        // fixture paths are relative to the config file
        if let Some(fixtures) = config.seed.fixtures.take() {
            let resolved = match path.parent() {
                Some(parent) if fixtures.is_relative() => parent.join(fixtures),
                _ => fixtures,
            };
            config.seed.fixtures = Some(resolved);
        }
        Ok(config)
    }
}
