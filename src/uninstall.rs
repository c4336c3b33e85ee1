//! Remove an installed variant and everything install created for it.
//!
//! Paths are recomputed from the variant and the fixed layout rather than
//! read from a record of what install wrote. Files placed in system
//! locations by a distribution package are removed through the host's
//! [`Elevator`](crate::host::Elevator).

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::host::Host;
use crate::layout::ICON_SIZES;
use crate::progress::{Progress, SEPARATOR};
use crate::variant::Variant;

/// One installed variant to remove.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UninstallRequest {
    /// Directory holding `waterfox-<variant>`.
    pub install_root: PathBuf,
    /// Variant to remove.
    pub variant: Variant,
    /// Settings file, removed when `remove_config` is set.
    pub config_file: PathBuf,
    /// Also delete the settings file.
    pub remove_config: bool,
}

/// Remove `req.variant`, reporting each step to `progress`.
///
/// # Errors
///
/// Fails at the first file that cannot be removed.
pub fn uninstall(req: &UninstallRequest, host: &Host, progress: &dyn Progress) -> Result<()> {
    let layout = &host.layout;
    let variant = req.variant;
    log::info!("Uninstalling Waterfox {variant} from {}", req.install_root.display());

    let app_dir = req.install_root.join(variant.dir_name());
    progress.step(&format!("Removing {} directory...", app_dir.display()));
    std::fs::remove_dir_all(&app_dir)
        .with_context(|| format!("Failed to remove {}", app_dir.display()))?;

    let launchers = [layout.system_launcher(variant), layout.launcher(variant)];
    if launchers.iter().any(|p| present(p)) {
        progress.step("Removing executable file...");
    }
    remove_pair(host, &launchers, progress)?;

    let entries = [layout.system_desktop_entry(variant), layout.desktop_entry(variant)];
    if entries.iter().any(|p| present(p)) {
        progress.step("Removing start menu shortcut...");
    }
    remove_pair(host, &entries, progress)?;

    let shortcut = host.tools.desktop_dir()?.join(variant.desktop_file_name());
    if present(&shortcut) {
        progress.step("Removing desktop shortcut...");
        remove_file(&shortcut)?;
    }

    for &size in ICON_SIZES {
        let icons = [layout.system_icon_link(variant, size), layout.icon_link(variant, size)];
        for (i, icon) in icons.iter().enumerate() {
            if !icon.is_symlink() {
                continue;
            }
            progress.step(&format!("Removing {} ...", icon.display()));
            if i == 0 {
                progress.step("Root privileges are required to remove symlinks to icons!");
                host.elevator.remove(icon)?;
            } else {
                remove_file(icon)?;
            }
        }
    }

    if is_empty_dir(&req.install_root)? {
        progress.step(&format!(
            "Removing empty {} directory...",
            req.install_root.display()
        ));
        std::fs::remove_dir(&req.install_root)
            .with_context(|| format!("Failed to remove {}", req.install_root.display()))?;
    }

    if req.remove_config && req.config_file.is_file() {
        progress.step("Removing file with installer settings...");
        remove_file(&req.config_file)?;
    }

    log::info!("Uninstalled Waterfox {variant}");
    progress.step(SEPARATOR);
    progress.step(&format!("Waterfox {variant} has been uninstalled \u{1F61E}."));
    Ok(())
}

/// `[system, user]`: the system copy goes through the elevator.
fn remove_pair(host: &Host, paths: &[PathBuf; 2], progress: &dyn Progress) -> Result<()> {
    let [system, user] = paths;
    if present(system) {
        progress.step(&format!(
            "Root privileges are required to remove {}!",
            system.display()
        ));
        host.elevator.remove(system)?;
    }
    if present(user) {
        remove_file(user)?;
    }
    Ok(())
}

/// True for existing files and for symlinks whose target is gone.
fn present(path: &Path) -> bool {
    path.exists() || path.is_symlink()
}

fn remove_file(path: &Path) -> Result<()> {
    log::debug!("Removing {}", path.display());
    std::fs::remove_file(path).with_context(|| format!("Failed to remove {}", path.display()))
}

/// Unrelated files keep the root in place.
fn is_empty_dir(path: &Path) -> Result<bool> {
    if !path.is_dir() {
        return Ok(false);
    }
    let mut entries =
        std::fs::read_dir(path).with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(entries.next().is_none())
}
