use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::path::PathBuf;

/// Which tab an entry is shown under.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    #[default]
    App,
    Game,
}

impl EntryKind {
    pub const ALL: [EntryKind; 2] = [EntryKind::App, EntryKind::Game];

    pub fn label(&self) -> &'static str {
        match self {
            EntryKind::App => "App",
            EntryKind::Game => "Game",
        }
    }

    /// Reads a persisted `type` tag. Case and surrounding blanks are ignored.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "app" => Some(EntryKind::App),
            "game" => Some(EntryKind::Game),
            _ => None,
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKind::App => f.write_str("app"),
            EntryKind::Game => f.write_str("game"),
        }
    }
}

/// A `.desktop` file the user registered. The path is the key.
///
/// The `type` tag and any unknown fields are kept as written so a save
/// never loses what another tool (or a hand edit) put there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisteredEntry {
    pub path: PathBuf,
    #[serde(rename = "type", default = "default_tag")]
    pub tag: Value,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn default_tag() -> Value {
    Value::String(EntryKind::App.to_string())
}

impl RegisteredEntry {
    pub fn new(path: impl Into<PathBuf>, kind: EntryKind) -> Self {
        Self {
            path: path.into(),
            tag: Value::String(kind.to_string()),
            extra: Map::new(),
        }
    }

    /// `None` when the tag names neither tab; such entries are listed nowhere.
    pub fn kind(&self) -> Option<EntryKind> {
        self.tag.as_str().and_then(EntryKind::from_tag)
    }

    pub fn warn_if_untabbed(&self) {
        if self.kind().is_none() {
            warn!("{:?} has unknown type {}, shown in no tab", self.path, self.tag);
        }
    }
}

/// Display data derived from a registered entry's file. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DesktopEntryInfo {
    pub name: String,       // Name= or the file's base name
    pub exec: String,       // First token of Exec=
    pub icon: String,       // Icon= as written (name or absolute path)
    pub source_path: PathBuf,
    #[serde(rename = "type")]
    pub kind: EntryKind,
}

impl DesktopEntryInfo {
    pub fn defaults_for(path: &std::path::Path) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.to_string_lossy().to_string());

        Self {
            name,
            exec: String::new(),
            icon: String::new(),
            source_path: path.to_path_buf(),
            kind: EntryKind::App,
        }
    }
}
