//! Backup files shared with the iOS version of the app.
//!
//! A backup is a JSON array of entries with camelCase keys. Colours travel as
//! `#RRGGBB` strings and display options as `day` / `monthDay` /
//! `yearMonthDay`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

use super::models::{ColorTag, Item};
use super::store::{ItemStore, StoreError};
use crate::days::DisplayOption;

#[derive(Debug, Error)]
pub enum BackupError {
    #[error("failed to access backup file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("backup file is not valid JSON")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupItem {
    pub title: String,
    #[serde(default)]
    pub details: Option<String>,
    pub timestamp: i64,
    #[serde(default)]
    pub color_tag: Option<String>,
    pub display_option: String,
}

impl From<&Item> for BackupItem {
    fn from(item: &Item) -> Self {
        Self {
            title: item.title.clone(),
            details: Some(item.details.clone()),
            timestamp: item.timestamp,
            color_tag: item.color_tag.map(|c| c.to_string()),
            display_option: item.display_option.as_str().to_string(),
        }
    }
}

impl BackupItem {
    /// `None` when the display option is unknown. A bad colour is dropped.
    pub fn to_item(&self) -> Option<Item> {
        let display_option = match self.display_option.as_str() {
            "day" => DisplayOption::Day,
            "monthDay" => DisplayOption::MonthDay,
            "yearMonthDay" => DisplayOption::YearMonthDay,
            _ => return None,
        };
        let color_tag = self.color_tag.as_deref().and_then(|raw| raw.parse::<ColorTag>().ok());

        Some(Item {
            id: 0,
            title: self.title.clone(),
            details: self.details.clone().unwrap_or_default(),
            timestamp: self.timestamp,
            color_tag,
            display_option,
        })
    }
}

pub fn to_json(items: &[Item]) -> Result<String, BackupError> {
    let entries: Vec<BackupItem> = items.iter().map(BackupItem::from).collect();
    Ok(serde_json::to_string_pretty(&entries)?)
}

/// Write every stored item to `path`. Returns the number written.
pub fn export(store: &ItemStore, path: &Path) -> Result<usize, BackupError> {
    let items = store.list()?;
    let content = to_json(&items)?;
    std::fs::write(path, content).map_err(|source| BackupError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!(count = items.len(), path = %path.display(), "Backup exported");
    Ok(items.len())
}

/// Items from a backup that are not already present in `existing`.
pub fn new_items(content: &str, existing: &[Item]) -> Result<Vec<Item>, BackupError> {
    let entries: Vec<BackupItem> = serde_json::from_str(content)?;
    debug!(count = entries.len(), "Backup entries read");

    let mut fresh: Vec<Item> = Vec::new();
    for entry in &entries {
        let Some(item) = entry.to_item() else {
            warn!(
                title = %entry.title,
                display_option = %entry.display_option,
                "Skipping backup entry with unknown display option"
            );
            continue;
        };
        if item.title.trim().is_empty() {
            warn!(timestamp = item.timestamp, "Skipping backup entry without a title");
            continue;
        }
        if !existing.iter().any(|known| known.same_event(&item)) {
            fresh.push(item);
        }
    }
    Ok(fresh)
}

/// Add the items from the backup at `path`, skipping duplicates.
/// Returns the number imported.
pub fn import(store: &ItemStore, path: &Path) -> Result<usize, BackupError> {
    let content = std::fs::read_to_string(path).map_err(|source| BackupError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let existing = store.list()?;
    let fresh = new_items(&content, &existing)?;

    let mut imported = 0;
    for item in fresh {
        store.insert(item)?;
        imported += 1;
    }
    info!(imported, path = %path.display(), "Backup imported");
    Ok(imported)
}
