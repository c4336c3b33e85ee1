//! Where launchers, menu entries, icons and dictionaries live.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::variant::Variant;

/// Pixel sizes of the icons shipped in `browser/chrome/icons/default`.
pub const ICON_SIZES: &[u32] = &[16, 22, 24, 32, 48, 128, 256];

/// Fixed filesystem locations the installer writes to (per user) and
/// cleans up from (per user and system wide).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    /// The user's home directory.
    pub home: PathBuf,
    /// Per-user executables, `~/.local/bin`.
    pub bin_dir: PathBuf,
    /// Per-user desktop entries.
    pub applications_dir: PathBuf,
    /// Root of the per-user hicolor icon theme.
    pub icons_dir: PathBuf,
    /// `/usr/bin`.
    pub system_bin_dir: PathBuf,
    /// `/usr/share/applications`.
    pub system_applications_dir: PathBuf,
    /// `/usr/share/icons/hicolor`.
    pub system_icons_dir: PathBuf,
    /// Spell-check data directories, in order of preference.
    pub dictionary_dirs: Vec<PathBuf>,
}

impl Layout {
    /// Locations for the current user, honouring `XDG_DATA_HOME` and
    /// `XDG_BIN_HOME` when they are set.
    ///
    /// # Errors
    ///
    /// Fails when the home directory cannot be determined.
    pub fn current_user() -> Result<Self> {
        let home = dirs::home_dir().context("Could not determine home directory")?;
        let mut layout = Self::for_home(&home);
        if let Some(bin) = dirs::executable_dir() {
            layout.bin_dir = bin;
        }
        if let Some(data) = dirs::data_local_dir() {
            layout.applications_dir = data.join("applications");
            layout.icons_dir = data.join("icons").join("hicolor");
        }
        Ok(layout)
    }

    /// Conventional `~/.local` locations under `home` and system locations
    /// under `/`.
    #[must_use]
    pub fn for_home(home: &Path) -> Self {
        let share = home.join(".local").join("share");
        Self {
            home: home.to_path_buf(),
            bin_dir: home.join(".local").join("bin"),
            applications_dir: share.join("applications"),
            icons_dir: share.join("icons").join("hicolor"),
            system_bin_dir: PathBuf::new(),
            system_applications_dir: PathBuf::new(),
            system_icons_dir: PathBuf::new(),
            dictionary_dirs: Vec::new(),
        }
        .with_system_root(Path::new("/"))
    }

    /// Re-root the system-wide locations, e.g. into a scratch directory.
    #[must_use]
    pub fn with_system_root(mut self, root: &Path) -> Self {
        let share = root.join("usr").join("share");
        self.system_bin_dir = root.join("usr").join("bin");
        self.system_applications_dir = share.join("applications");
        self.system_icons_dir = share.join("icons").join("hicolor");
        self.dictionary_dirs = vec![share.join("hunspell"), share.join("myspell")];
        self
    }

    /// Default installation root: `~/.local/lib`.
    #[must_use]
    pub fn default_install_root(&self) -> PathBuf {
        self.home.join(".local").join("lib")
    }

    /// Per-user launcher script for `variant`.
    #[must_use]
    pub fn launcher(&self, variant: Variant) -> PathBuf {
        self.bin_dir.join(variant.dir_name())
    }

    /// Launcher a system-wide package may have left in `/usr/bin`.
    #[must_use]
    pub fn system_launcher(&self, variant: Variant) -> PathBuf {
        self.system_bin_dir.join(variant.dir_name())
    }

    /// Per-user menu entry for `variant`.
    #[must_use]
    pub fn desktop_entry(&self, variant: Variant) -> PathBuf {
        self.applications_dir.join(variant.desktop_file_name())
    }

    /// System-wide menu entry for `variant`.
    #[must_use]
    pub fn system_desktop_entry(&self, variant: Variant) -> PathBuf {
        self.system_applications_dir.join(variant.desktop_file_name())
    }

    /// `<icons>/<N>x<N>/apps/waterfox-<slug>.png`
    #[must_use]
    pub fn icon_link(&self, variant: Variant, size: u32) -> PathBuf {
        icon_path(&self.icons_dir, variant, size)
    }

    /// System-wide counterpart of [`Self::icon_link`].
    #[must_use]
    pub fn system_icon_link(&self, variant: Variant, size: u32) -> PathBuf {
        icon_path(&self.system_icons_dir, variant, size)
    }

    /// First existing spell-check directory, falling back to the last
    /// candidate when none exist.
    #[must_use]
    pub fn system_dictionaries(&self) -> Option<&Path> {
        self.dictionary_dirs
            .iter()
            .find(|d| d.is_dir())
            .or_else(|| self.dictionary_dirs.last())
            .map(PathBuf::as_path)
    }
}

fn icon_path(root: &Path, variant: Variant, size: u32) -> PathBuf {
    root.join(format!("{size}x{size}"))
        .join("apps")
        .join(format!("{}.png", variant.dir_name()))
}

/// Icon shipped inside an installed package for `size`.
#[must_use]
pub fn bundled_icon(app_dir: &Path, size: u32) -> PathBuf {
    app_dir
        .join("browser")
        .join("chrome")
        .join("icons")
        .join("default")
        .join(format!("default{size}.png"))
}
