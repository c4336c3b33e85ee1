//! The installer's `settings.conf`.

mod ini;
mod ops;

#[cfg(test)]
mod tests;

use serde::Serialize;
use std::path::PathBuf;

/// Options remembered between runs. The three flags stay `None` until a
/// value has been saved, so front ends know to ask instead of guessing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Settings {
    /// Directory that receives `waterfox-<variant>`.
    pub install_path: PathBuf,
    /// Link the menu entry onto the desktop.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub install_desktop_shortcut: Option<bool>,
    /// Point the spell checker at the system's dictionaries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_system_dictionaries: Option<bool>,
    /// Delete the package once installed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remove_archive: Option<bool>,
}

impl Settings {
    /// Settings with only the installation path filled in.
    #[must_use]
    pub const fn with_install_path(install_path: PathBuf) -> Self {
        Self {
            install_path,
            install_desktop_shortcut: None,
            use_system_dictionaries: None,
            remove_archive: None,
        }
    }
}

/// Key of [`Settings::install_path`].
pub const KEY_INSTALL_PATH: &str = "InstallPath";
/// Key of [`Settings::install_desktop_shortcut`].
pub const KEY_DESKTOP_SHORTCUT: &str = "InstallDesktopShortcut";
/// Key of [`Settings::use_system_dictionaries`].
pub const KEY_SYSTEM_DICTIONARIES: &str = "UseSystemDictionaries";
/// Key of [`Settings::remove_archive`].
pub const KEY_REMOVE_ARCHIVE: &str = "RemoveArchive";

/// `yes`/`no` as stored in the config file.
#[must_use]
pub const fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

/// Anything other than `yes` reads as false.
#[must_use]
pub fn parse_yes_no(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("yes")
}
