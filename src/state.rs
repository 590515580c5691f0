use crate::config::Settings;
use crate::error::{LaunchError, LauncherError, StoreError};
use crate::executor;
use crate::icons::IconResolver;
use crate::matcher::FuzzyMatcher;
use crate::model::{DesktopEntryInfo, EntryKind};
use crate::sources::{RegisteredSource, Source, desktop};
use crate::store::{ConfigDocument, ConfigStore};
use log::{debug, info};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// One row of a tab: the parsed entry plus its icon, if any was found.
#[derive(Debug, Clone, Serialize)]
pub struct Listed {
    #[serde(flatten)]
    pub info: DesktopEntryInfo,
    pub icon_path: Option<PathBuf>,
}

/// Owns the in-memory document and flushes it after every mutation.
pub struct Launcher {
    store: ConfigStore,
    document: ConfigDocument,
    settings: Settings,
    icons: IconResolver,
}

impl Launcher {
    pub fn open(store: ConfigStore, settings: Settings) -> Result<Self, StoreError> {
        let document = store.load()?;
        let icons = settings.icon_resolver();
        debug!("Opened {:?} with {} entries", store.path(), document.items.len());
        Ok(Self {
            store,
            document,
            settings,
            icons,
        })
    }

    #[cfg(test)]
    pub fn document(&self) -> &ConfigDocument {
        &self.document
    }

    /// Re-reads every registered file. `None` lists both tabs.
    pub fn list_entries(&self, kind: Option<EntryKind>) -> Vec<Listed> {
        RegisteredSource::new(&self.document)
            .scan()
            .into_iter()
            .filter(|info| kind.is_none_or(|k| info.kind == k))
            .map(|info| {
                let icon_path = self.icons.resolve(&info.icon);
                Listed { info, icon_path }
            })
            .collect()
    }

    /// Registers `path`, made absolute first so the key does not depend on the
    /// working directory.
    pub fn add_entry(&mut self, path: impl Into<PathBuf>, kind: EntryKind) -> Result<(), StoreError> {
        let path = absolute_path(&path.into());
        self.document.add_entry(path.clone(), kind)?;
        self.store.save(&self.document)?;
        info!("Registered {:?} as {}", path, kind);
        Ok(())
    }

    /// Returns the number of entries removed. Nothing is written when it is zero.
    pub fn remove_entry(&mut self, path: &Path) -> Result<usize, StoreError> {
        let path = absolute_path(path);
        let removed = self.document.remove_entry(&path);
        if removed > 0 {
            self.store.save(&self.document)?;
            info!("Removed {:?}", path);
        }
        Ok(removed)
    }

    /// Finds a registered entry by path, or by display name ignoring case.
    pub fn find(&self, target: &str) -> Option<DesktopEntryInfo> {
        let target_path = absolute_path(Path::new(target));
        if let Some(entry) = self.document.items.iter().find(|e| e.path == target_path) {
            return desktop::resolve(entry);
        }

        RegisteredSource::new(&self.document)
            .scan()
            .into_iter()
            .find(|info| info.name.eq_ignore_ascii_case(target))
    }

    pub fn launch(&self, target: &str) -> Result<u32, LauncherError> {
        let info = self
            .find(target)
            .ok_or_else(|| LauncherError::UnknownEntry(target.to_string()))?;
        Ok(self.launch_command(&info.exec)?)
    }

    pub fn launch_command(&self, command: &str) -> Result<u32, LaunchError> {
        executor::launch(command, &self.settings.launch)
    }
}

fn absolute_path(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

/// Narrows `rows` to those whose name fuzzy-matches `query`, best first.
pub fn filter(rows: Vec<Listed>, query: &str) -> Vec<Listed> {
    let names: Vec<&str> = rows.iter().map(|r| r.info.name.as_str()).collect();
    let order = FuzzyMatcher::new().rank(query, &names);

    let mut slots: Vec<Option<Listed>> = rows.into_iter().map(Some).collect();
    order.into_iter().filter_map(|i| slots[i].take()).collect()
}
