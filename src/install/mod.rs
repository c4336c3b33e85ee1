//! Unpack a package and integrate it with the desktop.
//!
//! Steps run in a fixed order and stop at the first error. Nothing already
//! done is rolled back, so a failed run can leave a partial install behind;
//! running it again replaces the app directory and reuses existing links.

mod desktop_entry;
mod dictionaries;
mod icons;
mod launcher;

#[cfg(test)]
mod tests;

pub use desktop_entry::render as render_desktop_entry;
pub use launcher::render as render_launcher;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::archive;
use crate::host::{Host, SystemTools};
use crate::progress::{Progress, SEPARATOR};
use crate::settings::Settings;
use crate::variant::Variant;

/// Scratch directory created under the install root while unpacking.
const SCRATCH_DIR: &str = ".install-waterfox-tmp";

/// The three yes/no questions asked before installing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InstallOptions {
    /// Link the menu entry onto the desktop.
    pub desktop_shortcut: bool,
    /// Use the system's hunspell dictionaries instead of the bundled ones.
    pub system_dictionaries: bool,
    /// Delete the package once installed.
    pub remove_archive: bool,
}

impl InstallOptions {
    /// Answers remembered in `settings`; unset ones read as no.
    #[must_use]
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            desktop_shortcut: settings.install_desktop_shortcut.unwrap_or(false),
            system_dictionaries: settings.use_system_dictionaries.unwrap_or(false),
            remove_archive: settings.remove_archive.unwrap_or(false),
        }
    }
}

/// One package to install, with the answers given for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallRequest {
    /// Tarball or AppImage to install.
    pub source: PathBuf,
    /// Directory that receives `waterfox-<variant>`.
    pub install_root: PathBuf,
    /// Variant named by the package.
    pub variant: Variant,
    /// Answers to the install questions.
    pub options: InstallOptions,
    /// Settings file rewritten after a successful install.
    pub config_file: PathBuf,
}

impl InstallRequest {
    /// Settings persisted once this request has been carried out.
    #[must_use]
    pub fn settings(&self) -> Settings {
        Settings {
            install_path: self.install_root.clone(),
            install_desktop_shortcut: Some(self.options.desktop_shortcut),
            use_system_dictionaries: Some(self.options.system_dictionaries),
            remove_archive: Some(self.options.remove_archive),
        }
    }

    /// `<install_root>/waterfox-<variant>`.
    #[must_use]
    pub fn app_dir(&self) -> PathBuf {
        self.install_root.join(self.variant.dir_name())
    }
}

/// Paths created by a successful install. Not persisted: uninstall derives
/// the same paths from the variant and the fixed layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Installed {
    /// The unpacked browser.
    pub app_dir: PathBuf,
    /// Script in `~/.local/bin`.
    pub launcher: PathBuf,
    /// Menu entry.
    pub desktop_entry: PathBuf,
    /// Links in the hicolor icon theme.
    pub icon_links: Vec<PathBuf>,
    /// Link on the desktop, when one was asked for.
    pub desktop_shortcut: Option<PathBuf>,
}

/// Install `req.source`, reporting each step to `progress`.
///
/// # Errors
///
/// Fails at the first step that cannot be completed. The settings file is
/// only written after every other step succeeded.
pub fn install(req: &InstallRequest, host: &Host, progress: &dyn Progress) -> Result<Installed> {
    let started = Instant::now();
    let layout = &host.layout;
    let root = &req.install_root;
    let variant = req.variant;
    let app_dir = req.app_dir();
    log::info!("Installing Waterfox {variant} from {} into {}", req.source.display(), root.display());

    if !root.exists() {
        progress.step(&format!("Making {} directory...", root.display()));
        std::fs::create_dir_all(root)
            .with_context(|| format!("Failed to create {}", root.display()))?;
    }

    if app_dir.is_dir() {
        progress.step("Removing older installed version...");
        std::fs::remove_dir_all(&app_dir)
            .with_context(|| format!("Failed to remove {}", app_dir.display()))?;
    }

    let package = req.source.file_name().unwrap_or_default().to_string_lossy();
    progress.step(&format!("Unpacking {package} into {} directory...", root.display()));
    unpack_into(&req.source, root, &app_dir, variant, host.tools.as_ref())?;

    progress.step("Creating executable file...");
    let launcher = launcher::write(&layout.bin_dir, root, variant)?;

    progress.step("Generating start menu shortcut...");
    let desktop_entry = desktop_entry::write(&layout.applications_dir, variant, &launcher)?;

    progress.step("Creating symlinks to icons...");
    let icon_links = icons::link_all(layout, &app_dir, variant)?;

    progress.step("Refreshing icons cache...");
    host.tools.refresh_icon_cache(&layout.icons_dir)?;

    let desktop_shortcut = if req.options.desktop_shortcut {
        let desktop = host.tools.desktop_dir()?;
        progress.step("Installing desktop shortcut...");
        Some(desktop_entry::link_shortcut(&desktop_entry, &desktop)?)
    } else {
        None
    };

    if req.options.system_dictionaries {
        progress.step("Adding path to system's dictionaries...");
        let dicts = layout
            .system_dictionaries()
            .context("No system dictionary directory configured")?;
        dictionaries::use_system(&app_dir, dicts)?;
    }

    if req.options.remove_archive {
        progress.step(&format!("Removing {} ...", req.source.display()));
        std::fs::remove_file(&req.source)
            .with_context(|| format!("Failed to remove {}", req.source.display()))?;
    }

    progress.step("Saving settings...");
    req.settings().save_to(&req.config_file)?;

    let elapsed = Duration::from_secs(started.elapsed().as_secs());
    log::info!("Installed Waterfox {variant} in {}", humantime::format_duration(elapsed));
    progress.step(SEPARATOR);
    progress.step(&format!(
        "Waterfox {variant} has been installed in {} \u{1F600}!",
        root.display()
    ));

    Ok(Installed {
        app_dir,
        launcher,
        desktop_entry,
        icon_links,
        desktop_shortcut,
    })
}

/// Extract into a scratch directory, then move the result to `app_dir`.
/// A tarball's single top-level folder becomes `app_dir` itself; flattened
/// AppImage contents are moved inside a fresh `app_dir`.
fn unpack_into(
    source: &Path,
    root: &Path,
    app_dir: &Path,
    variant: Variant,
    tools: &dyn SystemTools,
) -> Result<()> {
    let scratch = root.join(SCRATCH_DIR);
    if scratch.exists() {
        std::fs::remove_dir_all(&scratch)
            .with_context(|| format!("Failed to remove {}", scratch.display()))?;
    }
    std::fs::create_dir_all(&scratch)
        .with_context(|| format!("Failed to create {}", scratch.display()))?;

    archive::extract(source, &scratch, variant, tools)?;

    let entries = std::fs::read_dir(&scratch)
        .with_context(|| format!("Failed to read {}", scratch.display()))?
        .collect::<std::io::Result<Vec<_>>>()?;
    match entries.as_slice() {
        [only] if only.path().is_dir() => {
            log::debug!("Moving {} to {}", only.path().display(), app_dir.display());
            std::fs::rename(only.path(), app_dir)
                .with_context(|| format!("Failed to move package to {}", app_dir.display()))?;
        }
        _ => {
            std::fs::create_dir_all(app_dir)
                .with_context(|| format!("Failed to create {}", app_dir.display()))?;
            archive::move_children(&scratch, app_dir)?;
        }
    }

    std::fs::remove_dir_all(&scratch)
        .with_context(|| format!("Failed to remove {}", scratch.display()))
}
