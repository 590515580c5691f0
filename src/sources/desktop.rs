use crate::model::{DesktopEntryInfo, RegisteredEntry};
use log::{debug, warn};
use std::fs;
use std::path::Path;

const DESKTOP_ENTRY_HEADER: &str = "[Desktop Entry]";

/// Reads `path` and extracts Name, Exec and Icon from its `[Desktop Entry]` group.
///
/// Never fails: an unreadable file is logged and yields the defaults
/// (base name as the name, empty exec and icon).
pub fn parse(path: &Path) -> DesktopEntryInfo {
    match fs::read_to_string(path) {
        Ok(content) => parse_content(&content, path),
        Err(e) => {
            warn!("Error reading {:?}: {}", path, e);
            DesktopEntryInfo::defaults_for(path)
        }
    }
}

/// Like [`parse`], with the tab taken from the registration rather than the file.
/// Entries whose type names no tab resolve to `None`.
pub fn resolve(entry: &RegisteredEntry) -> Option<DesktopEntryInfo> {
    let kind = entry.kind()?;
    let mut info = parse(&entry.path);
    info.kind = kind;
    Some(info)
}

pub fn parse_content(content: &str, path: &Path) -> DesktopEntryInfo {
    let mut info = DesktopEntryInfo::defaults_for(path);
    let mut in_desktop_entry = false;

    for line in content.lines() {
        let line = line.trim();

        if line == DESKTOP_ENTRY_HEADER {
            in_desktop_entry = true;
            continue;
        }

        if line.starts_with('[') {
            in_desktop_entry = false;
            continue;
        }

        if !in_desktop_entry {
            continue;
        }

        if let Some(value) = line.strip_prefix("Name=") {
            info.name = value.to_string();
        } else if let Some(value) = line.strip_prefix("Exec=") {
            // Arguments and field codes (%u, %F, ...) are dropped.
            info.exec = value.split_whitespace().next().unwrap_or("").to_string();
        } else if let Some(value) = line.strip_prefix("Icon=") {
            info.icon = value.to_string();
        }
    }

    debug!(
        "Parsed {:?}: name={:?} exec={:?} icon={:?}",
        path, info.name, info.exec, info.icon
    );
    info
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EntryKind;
    use tempfile::TempDir;

    #[test]
    fn test_parse_chess() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("chess.desktop");
        fs::write(
            &path,
            "[Desktop Entry]\nName=Chess\nExec=/usr/bin/chess --fullscreen\nIcon=chess-icon\n",
        )
        .unwrap();

        let info = parse(&path);
        assert_eq!(info.name, "Chess");
        assert_eq!(info.exec, "/usr/bin/chess");
        assert_eq!(info.icon, "chess-icon");
        assert_eq!(info.source_path, path);
        assert_eq!(info.kind, EntryKind::App);
    }

    #[test]
    fn test_missing_name_uses_base_name() {
        let path = Path::new("/opt/apps/tool.desktop");
        let info = parse_content("[Desktop Entry]\nExec=tool\n", path);
        assert_eq!(info.name, "tool.desktop");
        assert_eq!(info.exec, "tool");
        assert_eq!(info.icon, "");
    }

    #[test]
    fn test_other_sections_are_ignored() {
        let content = "\
[Desktop Entry]
Name=Firefox
Exec=firefox %u
Icon=firefox

[Desktop Action new-window]
Name=New Window
Exec=firefox --new-window %u
Icon=other
";
        let info = parse_content(content, Path::new("/x/firefox.desktop"));
        assert_eq!(info.name, "Firefox");
        assert_eq!(info.exec, "firefox");
        assert_eq!(info.icon, "firefox");
    }

    #[test]
    fn test_keys_before_header_are_ignored() {
        let content = "Name=Outside\n[Desktop Entry]\nIcon=inside\n";
        let info = parse_content(content, Path::new("/x/a.desktop"));
        assert_eq!(info.name, "a.desktop");
        assert_eq!(info.icon, "inside");
    }

    #[test]
    fn test_reentering_section_keeps_later_values() {
        let content = "[Desktop Entry]\nName=First\n[Other]\nName=Skip\n[Desktop Entry]\nName=Second\n";
        let info = parse_content(content, Path::new("/x/a.desktop"));
        assert_eq!(info.name, "Second");
    }

    #[test]
    fn test_tolerates_noise_and_whitespace() {
        let content = "\
# comment
  [Desktop Entry]
garbage line
Name[de]=Schach
  Name=Chess
Exec=
Type=Application
Icon==weird
";
        let info = parse_content(content, Path::new("/x/chess.desktop"));
        assert_eq!(info.name, "Chess");
        assert_eq!(info.exec, "");
        assert_eq!(info.icon, "=weird");
    }

    #[test]
    fn test_unreadable_file_returns_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("gone.desktop");

        let info = parse(&path);
        assert_eq!(info, DesktopEntryInfo::defaults_for(&path));
    }

    #[test]
    fn test_non_utf8_file_returns_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("binary.desktop");
        fs::write(&path, b"\xff\xfe\x00[").unwrap();

        let info = parse(&path);
        assert_eq!(info.name, "binary.desktop");
        assert!(info.exec.is_empty());
    }

    #[test]
    fn test_resolve_copies_kind() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("game.desktop");
        fs::write(&path, "[Desktop Entry]\nName=Game\nType=Game\n").unwrap();

        let info = resolve(&RegisteredEntry::new(&path, EntryKind::Game)).unwrap();
        assert_eq!(info.kind, EntryKind::Game);
        assert_eq!(info.source_path, path);
    }

    #[test]
    fn test_resolve_skips_unknown_type() {
        let mut entry = RegisteredEntry::new("/x/tool.desktop", EntryKind::App);
        entry.tag = serde_json::Value::from("tool");

        assert!(resolve(&entry).is_none());
    }
}
