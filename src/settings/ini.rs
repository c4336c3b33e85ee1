//! The `[global]` key=value file format shared with earlier releases.

use std::fmt::Write;

use super::{
    yes_no, Settings, KEY_DESKTOP_SHORTCUT, KEY_INSTALL_PATH, KEY_REMOVE_ARCHIVE,
    KEY_SYSTEM_DICTIONARIES,
};

pub(super) const SECTION: &str = "global";

/// Entries of the global section in file order. Lines before any section
/// header count as global, so a file without `[global]` still parses.
pub(super) fn parse(content: &str) -> Vec<(String, String)> {
    let mut in_global = true;
    let mut entries = Vec::new();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
            continue;
        }
        if let Some(name) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
            in_global = name.trim().eq_ignore_ascii_case(SECTION);
            continue;
        }
        if !in_global {
            continue;
        }
        let Some(split) = line.find(['=', ':']) else {
            continue;
        };
        let (key, value) = line.split_at(split);
        entries.push((key.trim().to_string(), value[1..].trim().to_string()));
    }
    entries
}

/// Serialize every known field. Unset flags are left out.
pub(super) fn render(settings: &Settings) -> String {
    let mut out = format!("[{SECTION}]\n");
    let _ = writeln!(out, "{KEY_INSTALL_PATH}={}", settings.install_path.display());
    let flags = [
        (KEY_DESKTOP_SHORTCUT, settings.install_desktop_shortcut),
        (KEY_SYSTEM_DICTIONARIES, settings.use_system_dictionaries),
        (KEY_REMOVE_ARCHIVE, settings.remove_archive),
    ];
    for (key, value) in flags {
        if let Some(v) = value {
            let _ = writeln!(out, "{key}={}", yes_no(v));
        }
    }
    out
}
