use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::days::DisplayOption;
use crate::days::plural::{LocaleResources, ResourceProvider};
use crate::items::SortOrder;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub list: ListConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Used for items whose own option is the default.
    #[serde(default)]
    pub default_option: DisplayOption,
    #[serde(default = "default_true")]
    pub show_minus: bool,
    #[serde(default = "default_locale")]
    pub locale: String,
    /// TOML locale bundle that replaces the built-in one.
    #[serde(default)]
    pub resources: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StorageConfig {
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ListConfig {
    #[serde(default)]
    pub sort_order: SortOrder,
}

fn default_true() -> bool {
    true
}
fn default_locale() -> String {
    "ru".to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            default_option: DisplayOption::default(),
            show_minus: true,
            locale: default_locale(),
            resources: None,
        }
    }
}

impl AppConfig {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::read(path);
        }

        // Search candidate paths in order
        let mut candidates = Vec::new();

        // 1. ~/.config/dayscount/config.toml (standard XDG on all platforms)
        if let Some(home) = std::env::var_os("HOME") {
            candidates.push(PathBuf::from(home).join(".config/dayscount/config.toml"));
        }

        // 2. Platform-specific path from `directories` crate
        if let Some(proj_dirs) = ProjectDirs::from("", "", "dayscount") {
            candidates.push(proj_dirs.config_dir().join("config.toml"));
        }

        for config_path in &candidates {
            if config_path.exists() {
                return Self::read(config_path);
            }
        }

        Ok(AppConfig::default())
    }

    fn read(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content).with_context(|| "Failed to parse config file")
    }

    pub fn data_dir(&self) -> PathBuf {
        if let Some(ref dir) = self.storage.dir {
            return dir.clone();
        }
        if let Some(proj_dirs) = ProjectDirs::from("", "", "dayscount") {
            return proj_dirs.data_dir().to_path_buf();
        }
        PathBuf::from(".local/share/dayscount")
    }

    pub fn log_dir(&self) -> PathBuf {
        self.data_dir().join("logs")
    }

    /// Resources named by the config: the bundle file if set, else the locale.
    pub fn resources(&self) -> Result<Box<dyn ResourceProvider>> {
        let resources = match &self.display.resources {
            Some(path) => LocaleResources::from_path(path),
            None => LocaleResources::for_locale(&self.display.locale),
        }
        .context("Failed to load locale resources")?;
        Ok(Box::new(resources))
    }
}
