use crate::error::SettingsError;
use crate::icons::IconResolver;
use crate::store::CONFIG_FILE_NAME;
use directories::ProjectDirs;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

pub const SETTINGS_FILE_NAME: &str = "settings.toml";

#[derive(Deserialize, Debug, Clone, Default)]
pub struct Settings {
    #[serde(default)]
    pub store: StoreSettings,
    #[serde(default)]
    pub icons: IconSettings,
    #[serde(default)]
    pub launch: LaunchSettings,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct StoreSettings {
    /// Where the registered entries live. Defaults to the project config dir.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct IconSettings {
    #[serde(default)]
    pub dirs: Option<Vec<PathBuf>>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct LaunchSettings {
    /// Extra environment for launched processes.
    #[serde(default)]
    pub env: HashMap<String, String>,
}

impl Settings {
    pub fn config_path(&self) -> PathBuf {
        self.store.path.clone().unwrap_or_else(default_config_path)
    }

    pub fn icon_resolver(&self) -> IconResolver {
        match &self.icons.dirs {
            Some(dirs) => IconResolver::with_dirs(dirs.clone()),
            None => IconResolver::default(),
        }
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("org", "shelf", "shelf")
}

pub fn default_config_path() -> PathBuf {
    match project_dirs() {
        Some(dirs) => dirs.config_dir().join(CONFIG_FILE_NAME),
        None => PathBuf::from(CONFIG_FILE_NAME),
    }
}

pub fn default_settings_path() -> PathBuf {
    match project_dirs() {
        Some(dirs) => dirs.config_dir().join(SETTINGS_FILE_NAME),
        None => PathBuf::from(SETTINGS_FILE_NAME),
    }
}

pub fn load_settings(path: &Path) -> Result<Settings, SettingsError> {
    if !path.exists() {
        return Ok(Settings::default());
    }

    let content = fs::read_to_string(path).map_err(|source| SettingsError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let settings: Settings = toml::from_str(&content).map_err(|source| SettingsError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(settings)
}
