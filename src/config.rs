// Configuration loading module

use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

use crate::core::{TabItem, TabPanelError};
use crate::ui::TabStyle;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid tab set: {0}")]
    TabPanel(#[from] TabPanelError),
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub panel: PanelConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PanelConfig {
    /// Accessible name of the tab list
    pub aria_label: String,

    /// Overrides the compiled-in tab style
    #[serde(default)]
    pub style: Option<TabStyle>,

    pub tabs: Vec<TabItem>,
}

/// `src/config.yaml` in the crate directory
pub fn default_config_path() -> PathBuf {
    let mut default_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    default_path.push("src");
    default_path.push("config.yaml");
    default_path
}

pub fn parse_config(contents: &str) -> Result<AppConfig, ConfigError> {
    Ok(serde_yaml::from_str(contents)?)
}

pub fn load_config(config_path: Option<PathBuf>) -> Result<AppConfig, ConfigError> {
    let path = config_path.unwrap_or_else(default_config_path);

    let contents = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
        path: path.clone(),
        source,
    })?;
    parse_config(&contents)
}
