use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::variant::Variant;

const TEMPLATE: &str = include_str!("../../assets/waterfox.desktop.in");

/// Fill in the menu entry template for `variant`.
#[must_use]
pub fn render(variant: Variant, launcher: &Path) -> String {
    TEMPLATE
        .replace("{{variant}}", &variant.slug())
        .replace("{{Variant}}", &variant.to_string())
        .replace("{{launcher}}", &exec_argument(launcher))
}

/// Quote a path for an `Exec=` key: reserved characters are escaped inside
/// double quotes, then backslashes are escaped again for the string value.
fn exec_argument(path: &Path) -> String {
    let mut quoted = String::from("\"");
    for c in path.display().to_string().chars() {
        match c {
            '"' | '`' | '$' | '\\' => {
                quoted.push('\\');
                quoted.push(c);
            }
            '%' => quoted.push_str("%%"),
            _ => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted.replace('\\', "\\\\")
}

/// Write `waterfox-<variant>.desktop` into `applications_dir` with mode 0644.
pub(super) fn write(applications_dir: &Path, variant: Variant, launcher: &Path) -> Result<PathBuf> {
    use std::os::unix::fs::PermissionsExt;

    std::fs::create_dir_all(applications_dir)
        .with_context(|| format!("Failed to create {}", applications_dir.display()))?;
    let path = applications_dir.join(variant.desktop_file_name());
    std::fs::write(&path, render(variant, launcher))
        .with_context(|| format!("Failed to write desktop file to {}", path.display()))?;
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o644))
        .with_context(|| format!("Failed to set permissions on {}", path.display()))?;
    log::debug!("Wrote desktop entry {}", path.display());
    Ok(path)
}

/// Symlink the menu entry onto the desktop. An existing link is kept.
pub(super) fn link_shortcut(entry: &Path, desktop_dir: &Path) -> Result<PathBuf> {
    let file_name = entry.file_name().context("Desktop entry has no file name")?;
    let shortcut = desktop_dir.join(file_name);
    if shortcut.is_symlink() {
        log::debug!("Desktop shortcut {} already exists", shortcut.display());
        return Ok(shortcut);
    }
    std::fs::create_dir_all(desktop_dir)
        .with_context(|| format!("Failed to create {}", desktop_dir.display()))?;
    std::os::unix::fs::symlink(entry, &shortcut)
        .with_context(|| format!("Failed to create {}", shortcut.display()))?;
    Ok(shortcut)
}
