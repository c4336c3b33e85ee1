//! Unpacking downloaded packages into a scratch directory.

use anyhow::{bail, Context, Result};
use bzip2::read::BzDecoder;
use flate2::read::GzDecoder;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tar::Archive;

use crate::host::SystemTools;
use crate::variant::Variant;

/// Package formats the installer unpacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveKind {
    /// Self-extracting `.AppImage`.
    AppImage,
    /// `.tar.bz2` or `.tbz2`.
    TarBz2,
    /// `.tar.gz` or `.tgz`.
    TarGz,
}

impl ArchiveKind {
    /// Detect the package format from the file name.
    ///
    /// # Errors
    ///
    /// Fails for any other extension.
    pub fn detect(path: &Path) -> Result<Self> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        if name.ends_with(".AppImage") {
            Ok(Self::AppImage)
        } else if name.ends_with(".tar.bz2") || name.ends_with(".tbz2") {
            Ok(Self::TarBz2)
        } else if name.ends_with(".tar.gz") || name.ends_with(".tgz") {
            Ok(Self::TarGz)
        } else {
            bail!("Unsupported package format: {}", path.display())
        }
    }
}

/// Extract `source` into the empty directory `scratch`. AppImages are
/// flattened so `scratch` holds the browser files directly, with the
/// variant binary renamed to `waterfox`.
///
/// # Errors
///
/// Fails when the package cannot be read or unpacked.
pub fn extract(
    source: &Path,
    scratch: &Path,
    variant: Variant,
    tools: &dyn SystemTools,
) -> Result<()> {
    match ArchiveKind::detect(source)? {
        ArchiveKind::AppImage => {
            make_executable(source)?;
            tools.extract_appimage(source, scratch)?;
            flatten_appimage(scratch, variant)
        }
        ArchiveKind::TarBz2 => {
            let file = open(source)?;
            unpack_tar(BzDecoder::new(file), source, scratch)
        }
        ArchiveKind::TarGz => {
            let file = open(source)?;
            unpack_tar(GzDecoder::new(file), source, scratch)
        }
    }
}

fn open(path: &Path) -> Result<File> {
    File::open(path).with_context(|| format!("Failed to open {}", path.display()))
}

fn unpack_tar<R: Read>(reader: R, source: &Path, dest: &Path) -> Result<()> {
    Archive::new(reader)
        .unpack(dest)
        .with_context(|| format!("Failed to extract {} to {}", source.display(), dest.display()))
}

fn make_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut perms = std::fs::metadata(path)
        .with_context(|| format!("Failed to stat {}", path.display()))?
        .permissions();
    perms.set_mode(perms.mode() | 0o111);
    std::fs::set_permissions(path, perms)
        .with_context(|| format!("Failed to make {} executable", path.display()))
}

/// `squashfs-root/usr/bin/*` becomes `scratch/*` and `squashfs-root` is
/// removed.
fn flatten_appimage(scratch: &Path, variant: Variant) -> Result<()> {
    let root = scratch.join("squashfs-root");
    let bin = root.join("usr").join("bin");
    let binary = bin.join(variant.dir_name());
    if !binary.exists() {
        bail!("AppImage does not contain usr/bin/{}", variant.dir_name());
    }
    std::fs::rename(&binary, bin.join("waterfox"))
        .with_context(|| format!("Failed to rename {}", binary.display()))?;

    move_children(&bin, scratch)?;
    std::fs::remove_dir_all(&root)
        .with_context(|| format!("Failed to remove {}", root.display()))
}

/// Move every entry of `from` into the existing directory `to`.
///
/// # Errors
///
/// Fails when `from` cannot be read or an entry cannot be renamed.
pub fn move_children(from: &Path, to: &Path) -> Result<()> {
    let entries =
        std::fs::read_dir(from).with_context(|| format!("Failed to read {}", from.display()))?;
    for entry in entries {
        let entry = entry?;
        let target = to.join(entry.file_name());
        std::fs::rename(entry.path(), &target).with_context(|| {
            format!("Failed to move {} to {}", entry.path().display(), target.display())
        })?;
    }
    Ok(())
}
