//! Finding installable packages and installed variants on disk.

use anyhow::{bail, Context, Result};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::variant::Variant;

/// A downloaded package and the variant its name implies.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Package {
    /// Location of the package file.
    pub path: PathBuf,
    /// Variant parsed from the file name.
    pub variant: Variant,
}

/// Packages at `source`: the file itself, or every matching file below the
/// directory, sorted by path.
///
/// # Errors
///
/// Fails when `source` does not exist or a directory cannot be scanned.
pub fn installable_packages(source: &Path) -> Result<Vec<Package>> {
    if !source.exists() {
        bail!("The specified path does not exist: {}", source.display());
    }
    if source.is_file() {
        let name = source.file_name().unwrap_or_default().to_string_lossy();
        return Ok(Variant::from_package_name(&name)
            .map(|variant| Package {
                path: source.to_path_buf(),
                variant,
            })
            .into_iter()
            .collect());
    }

    let mut packages = Vec::new();
    for entry in WalkDir::new(source).follow_links(true) {
        let entry = entry.with_context(|| format!("Failed to scan {}", source.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        if let Some(variant) = Variant::from_package_name(&entry.file_name().to_string_lossy()) {
            packages.push(Package {
                path: entry.into_path(),
                variant,
            });
        }
    }
    packages.sort();
    Ok(packages)
}

/// Distinct variants among `packages`, sorted.
#[must_use]
pub fn variants_of(packages: &[Package]) -> Vec<Variant> {
    packages
        .iter()
        .map(|p| p.variant)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Variants with an app directory under `install_root`, sorted.
///
/// # Errors
///
/// Fails when `install_root` is not a readable directory.
pub fn installed_variants(install_root: &Path) -> Result<Vec<Variant>> {
    if !install_root.is_dir() {
        bail!("The specified path does not exist: {}", install_root.display());
    }
    let entries = std::fs::read_dir(install_root)
        .with_context(|| format!("Failed to read {}", install_root.display()))?;
    let mut found = BTreeSet::new();
    for entry in entries {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        if let Some(variant) = Variant::from_dir_name(&entry.file_name().to_string_lossy()) {
            found.insert(variant);
        }
    }
    Ok(found.into_iter().collect())
}
