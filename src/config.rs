use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use directories::ProjectDirs;
use anyhow::Result;
use std::fs;
use thiserror::Error;
use crate::matcher::default_synonyms;
use crate::model::{is_external_path, CatalogEntry};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("catalog item #{index} has an empty title")]
    EmptyTitle { index: usize },
    #[error("catalog item '{title}' has an empty path")]
    EmptyPath { title: String },
}

#[derive(Deserialize, Debug, Clone)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub catalog: Vec<CatalogItem>,
    #[serde(default = "default_synonyms")]
    pub synonyms: HashMap<String, Vec<String>>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct GeneralConfig {
    /// Prefix for internal paths, e.g. `https://example.dev`.
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default = "default_opener")]
    pub opener: String,
    #[serde(default = "default_true")]
    pub include_builtin: bool,
}

fn default_opener() -> String { "xdg-open".to_string() }
fn default_true() -> bool { true }

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            opener: default_opener(),
            include_builtin: true,
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct CatalogItem {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub path: String,
    pub external: Option<bool>,
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl CatalogItem {
    pub fn to_entry(&self, index: usize) -> Result<CatalogEntry, ConfigError> {
        if self.title.trim().is_empty() {
            return Err(ConfigError::EmptyTitle { index });
        }
        if self.path.trim().is_empty() {
            return Err(ConfigError::EmptyPath { title: self.title.clone() });
        }
        Ok(CatalogEntry {
            title: self.title.clone(),
            description: self.description.clone(),
            path: self.path.clone(),
            external: self.external.unwrap_or_else(|| is_external_path(&self.path)),
            keywords: self.keywords.clone(),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            catalog: Vec::new(),
            synonyms: default_synonyms(),
        }
    }
}

pub fn default_config_path() -> PathBuf {
    match ProjectDirs::from("dev", "folio", "folio-palette") {
        Some(dirs) => dirs.config_dir().join("config.toml"),
        None => PathBuf::from("config.toml"),
    }
}

/// Reads the config at `path`, or the default location. A missing file yields defaults.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let config_path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);

    if !config_path.exists() {
        log::debug!("No config at {:?}, using defaults", config_path);
        return Ok(Config::default());
    }

    let content = fs::read_to_string(&config_path)?;
    let config = parse_config(&content)?;
    log::info!("Loaded config from {:?} ({} catalog items)", config_path, config.catalog.len());
    Ok(config)
}

pub fn parse_config(content: &str) -> Result<Config> {
    let config: Config = toml::from_str(content)?;
    Ok(config)
}
