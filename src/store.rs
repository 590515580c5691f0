use crate::error::StoreError;
use crate::model::{EntryKind, RegisteredEntry};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "launcher_config.json";

/// The persisted list of registered entries, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigDocument {
    #[serde(default)]
    pub items: Vec<RegisteredEntry>,
    /// Top-level keys other than `items`, written back untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ConfigDocument {
    pub fn contains(&self, path: &Path) -> bool {
        self.items.iter().any(|item| item.path == path)
    }

    /// Appends a new entry. A path that is already present leaves the document untouched.
    pub fn add_entry(&mut self, path: impl Into<PathBuf>, kind: EntryKind) -> Result<(), StoreError> {
        let path = path.into();
        if self.contains(&path) {
            return Err(StoreError::AlreadyRegistered(path));
        }
        self.items.push(RegisteredEntry::new(path, kind));
        Ok(())
    }

    /// Drops every entry with this path and returns how many went away.
    pub fn remove_entry(&mut self, path: &Path) -> usize {
        let before = self.items.len();
        self.items.retain(|item| item.path != path);
        before - self.items.len()
    }
}

/// JSON file backing a [`ConfigDocument`]. Every save rewrites the whole file.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<ConfigDocument, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No config at {:?}, starting empty", self.path);
                return Ok(ConfigDocument::default());
            }
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        let doc: ConfigDocument =
            serde_json::from_str(&content).map_err(|source| StoreError::Parse {
                path: self.path.clone(),
                source,
            })?;
        doc.items.iter().for_each(RegisteredEntry::warn_if_untabbed);
        debug!("Loaded {} entries from {:?}", doc.items.len(), self.path);
        Ok(doc)
    }

    pub fn save(&self, doc: &ConfigDocument) -> Result<(), StoreError> {
        let io_err = |source: std::io::Error| StoreError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(dir) = self.path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir).map_err(io_err)?;
        }

        let mut content = serde_json::to_string_pretty(doc).map_err(|e| io_err(e.into()))?;
        content.push('\n');
        fs::write(&self.path, content).map_err(io_err)?;

        info!("Saved {} entries to {:?}", doc.items.len(), self.path);
        Ok(())
    }
}
