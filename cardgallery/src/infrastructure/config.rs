// src/infrastructure/config.rs
use crate::constants::{DEFAULT_ASSETS_DIR, DEFAULT_BIND, DEFAULT_CARDS_FILE, DEFAULT_CONFIG_FILE};
use crate::ports::SiteText;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// TOML configuration for the gallery
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub site: SiteText,
    #[serde(default)]
    pub presentation: PresentationConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct DataConfig {
    #[serde(default = "default_cards")]
    pub cards: PathBuf,
    #[serde(default = "default_assets")]
    pub assets: PathBuf,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct PresentationConfig {
    #[serde(default = "default_decor")]
    pub decor: bool,
}

// Default value functions
fn default_cards() -> PathBuf { PathBuf::from(DEFAULT_CARDS_FILE) }
fn default_assets() -> PathBuf { PathBuf::from(DEFAULT_ASSETS_DIR) }
fn default_bind() -> String { DEFAULT_BIND.to_string() }
fn default_decor() -> bool { true }

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            cards: default_cards(),
            assets: default_assets(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self {
            decor: default_decor(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML config {}", path.display()))?;

        Ok(config)
    }

    /// Explicit path must load; otherwise fall back to `./cardgallery.toml`, then defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            debug!(?path, "Loading explicit config");
            return Self::load(path);
        }

        let default_path = Path::new(DEFAULT_CONFIG_FILE);
        if default_path.is_file() {
            debug!(path = ?default_path, "Loading config from working directory");
            return Self::load(default_path);
        }

        debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config to TOML")
    }

    /// Save configuration to TOML file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path.as_ref(), self.to_toml()?).context("Failed to write config file")?;
        Ok(())
    }
}
