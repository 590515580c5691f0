use log::debug;
use std::path::{Path, PathBuf};

pub const DEFAULT_ICON_DIRS: [&str; 2] = [
    "/usr/share/icons/hicolor/48x48/apps/",
    "/usr/share/pixmaps/",
];

// Probe order matters: first hit wins.
pub const ICON_EXTENSIONS: [&str; 3] = ["png", "svg", "xpm"];

/// Maps an `Icon=` value to an image file on disk.
#[derive(Debug, Clone)]
pub struct IconResolver {
    icon_dirs: Vec<PathBuf>,
}

impl Default for IconResolver {
    fn default() -> Self {
        Self::with_dirs(DEFAULT_ICON_DIRS.iter().map(PathBuf::from).collect())
    }
}

impl IconResolver {
    pub fn with_dirs(icon_dirs: Vec<PathBuf>) -> Self {
        Self { icon_dirs }
    }

    pub fn dirs(&self) -> &[PathBuf] {
        &self.icon_dirs
    }

    /// `None` means no image was found; callers show a placeholder.
    pub fn resolve(&self, icon_name: &str) -> Option<PathBuf> {
        if icon_name.is_empty() {
            return None;
        }

        let path = Path::new(icon_name);
        if path.is_absolute() {
            // An absolute Icon= is taken literally, never probed.
            return path.exists().then(|| path.to_path_buf());
        }

        for dir in &self.icon_dirs {
            for ext in ICON_EXTENSIONS {
                let candidate = dir.join(format!("{}.{}", icon_name, ext));
                if candidate.exists() {
                    debug!("Icon {:?} -> {:?}", icon_name, candidate);
                    return Some(candidate);
                }
            }
        }

        debug!("Icon {:?} not found in {:?}", icon_name, self.icon_dirs);
        None
    }
}
