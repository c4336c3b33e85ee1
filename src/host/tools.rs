use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

/// External desktop utilities the install and uninstall procedures call.
pub trait SystemTools: Send + Sync {
    /// Run a self-extracting image with `--appimage-extract` inside `into`,
    /// producing `into/squashfs-root`.
    ///
    /// # Errors
    ///
    /// Fails when the image cannot be run or exits unsuccessfully.
    fn extract_appimage(&self, image: &Path, into: &Path) -> Result<()>;

    /// Rebuild the icon cache of the theme rooted at `icons_dir`.
    ///
    /// # Errors
    ///
    /// Fails when the cache tool cannot be run or exits unsuccessfully.
    fn refresh_icon_cache(&self, icons_dir: &Path) -> Result<()>;

    /// The user's desktop folder.
    ///
    /// # Errors
    ///
    /// Fails when the folder cannot be determined.
    fn desktop_dir(&self) -> Result<PathBuf>;
}

/// The real utilities: the image itself, `gtk-update-icon-cache` and
/// `xdg-user-dir`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DesktopTools;

impl SystemTools for DesktopTools {
    fn extract_appimage(&self, image: &Path, into: &Path) -> Result<()> {
        // The child starts in `into`, so a relative image path would miss.
        let image = std::path::absolute(image)
            .with_context(|| format!("Invalid package path {}", image.display()))?;
        let status = Command::new(&image)
            .arg("--appimage-extract")
            .current_dir(into)
            .stdout(std::process::Stdio::null())
            .status()
            .with_context(|| format!("Failed to run {}", image.display()))?;

        if !status.success() {
            bail!("{} --appimage-extract failed ({status})", image.display());
        }
        Ok(())
    }

    fn refresh_icon_cache(&self, icons_dir: &Path) -> Result<()> {
        let status = Command::new("gtk-update-icon-cache")
            .args(["-q", "-t", "-f"])
            .arg(icons_dir)
            .status()
            .context("Failed to run `gtk-update-icon-cache`")?;

        if !status.success() {
            bail!("gtk-update-icon-cache failed for {} ({status})", icons_dir.display());
        }
        Ok(())
    }

    fn desktop_dir(&self) -> Result<PathBuf> {
        let output = Command::new("xdg-user-dir")
            .arg("DESKTOP")
            .output()
            .context("Failed to run `xdg-user-dir DESKTOP`")?;

        if !output.status.success() {
            bail!("xdg-user-dir DESKTOP failed ({})", output.status);
        }
        let dir = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if dir.is_empty() {
            bail!("xdg-user-dir DESKTOP printed nothing");
        }
        Ok(PathBuf::from(dir))
    }
}
