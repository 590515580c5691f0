use log::debug;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub const DEFAULT_BROWSE_ROOT: &str = "/usr/share/applications/";

/// Every `.desktop` file under `roots`, sorted and deduplicated.
/// Missing or unreadable directories are skipped.
pub fn candidates(roots: &[PathBuf]) -> Vec<PathBuf> {
    let mut found = Vec::new();

    for root in roots {
        if !root.exists() {
            debug!("Browse root {:?} does not exist, skipping", root);
            continue;
        }

        debug!("Scanning desktop files in {:?}", root);
        for entry in WalkDir::new(root).follow_links(true).into_iter().flatten() {
            let path = entry.path();
            if entry.file_type().is_file() && is_desktop_file(path) {
                found.push(path.to_path_buf());
            }
        }
    }

    found.sort();
    found.dedup();
    found
}

fn is_desktop_file(path: &Path) -> bool {
    path.extension().and_then(|s| s.to_str()) == Some("desktop")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_candidates_recurses_and_filters() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("kde")).unwrap();
        fs::write(root.join("b.desktop"), "").unwrap();
        fs::write(root.join("a.desktop"), "").unwrap();
        fs::write(root.join("kde/c.desktop"), "").unwrap();
        fs::write(root.join("readme.txt"), "").unwrap();
        fs::create_dir_all(root.join("dir.desktop")).unwrap();

        let found = candidates(&[root.to_path_buf(), root.join("missing")]);
        assert_eq!(
            found,
            vec![
                root.join("a.desktop"),
                root.join("b.desktop"),
                root.join("kde/c.desktop"),
            ]
        );
    }
}
