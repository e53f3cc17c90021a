use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::debug;

use super::models::Item;

const ITEMS_FILE: &str = "items.json";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("item {0} not found")]
    NotFound(u64),
    #[error("item title must not be empty")]
    EmptyTitle,
    #[error("failed to access item file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("item file {} is corrupted", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to serialize items")]
    Serialize(#[source] serde_json::Error),
}

/// Items kept as one JSON file inside a data directory.
#[derive(Debug, Clone)]
pub struct ItemStore {
    dir: PathBuf,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct ItemFile {
    next_id: u64,
    items: Vec<Item>,
}

impl ItemStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn path(&self) -> PathBuf {
        self.dir.join(ITEMS_FILE)
    }

    fn load(&self) -> Result<ItemFile, StoreError> {
        let path = self.path();
        let content = match std::fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "No item file yet");
                return Ok(ItemFile::default());
            }
            Err(source) => return Err(StoreError::Io { path, source }),
        };
        serde_json::from_str(&content).map_err(|source| StoreError::Parse { path, source })
    }

    fn save(&self, file: &ItemFile) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.dir).map_err(|source| StoreError::Io {
            path: self.dir.clone(),
            source,
        })?;

        let content = serde_json::to_string_pretty(file).map_err(StoreError::Serialize)?;
        let path = self.path();

        // Readers only ever see the old or the new file.
        let mut tmp = NamedTempFile::new_in(&self.dir).map_err(|source| StoreError::Io {
            path: self.dir.clone(),
            source,
        })?;
        tmp.write_all(content.as_bytes())
            .and_then(|()| tmp.as_file().sync_all())
            .map_err(|source| StoreError::Io {
                path: tmp.path().to_path_buf(),
                source,
            })?;
        tmp.persist(&path).map_err(|e| StoreError::Io {
            path,
            source: e.error,
        })?;
        Ok(())
    }

    /// All items in insertion order.
    pub fn list(&self) -> Result<Vec<Item>, StoreError> {
        Ok(self.load()?.items)
    }

    pub fn get(&self, id: u64) -> Result<Item, StoreError> {
        self.load()?
            .items
            .into_iter()
            .find(|item| item.id == id)
            .ok_or(StoreError::NotFound(id))
    }

    /// Store a new item under a fresh id, ignoring `item.id`.
    pub fn insert(&self, mut item: Item) -> Result<u64, StoreError> {
        if item.title.trim().is_empty() {
            return Err(StoreError::EmptyTitle);
        }
        let mut file = self.load()?;
        let max_id = file.items.iter().map(|i| i.id).max().unwrap_or(0);
        let id = file.next_id.max(max_id) + 1;
        item.id = id;
        file.next_id = id;
        file.items.push(item);
        self.save(&file)?;
        debug!(id, "Item inserted");
        Ok(id)
    }

    pub fn update(&self, item: Item) -> Result<(), StoreError> {
        if item.title.trim().is_empty() {
            return Err(StoreError::EmptyTitle);
        }
        let id = item.id;
        let mut file = self.load()?;
        let slot = file
            .items
            .iter_mut()
            .find(|existing| existing.id == item.id)
            .ok_or(StoreError::NotFound(id))?;
        *slot = item;
        self.save(&file)?;
        debug!(id, "Item updated");
        Ok(())
    }

    pub fn delete(&self, id: u64) -> Result<(), StoreError> {
        let mut file = self.load()?;
        let before = file.items.len();
        file.items.retain(|item| item.id != id);
        if file.items.len() == before {
            return Err(StoreError::NotFound(id));
        }
        self.save(&file)?;
        debug!(id, "Item deleted");
        Ok(())
    }
}
