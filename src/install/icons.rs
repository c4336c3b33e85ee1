use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::layout::{bundled_icon, Layout, ICON_SIZES};
use crate::variant::Variant;

/// Link every icon size from the user's hicolor theme into `app_dir`.
/// Links that already exist are left as they are.
pub(super) fn link_all(layout: &Layout, app_dir: &Path, variant: Variant) -> Result<Vec<PathBuf>> {
    let mut links = Vec::with_capacity(ICON_SIZES.len());
    for &size in ICON_SIZES {
        let link = layout.icon_link(variant, size);
        if let Some(parent) = link.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        if !link.is_symlink() {
            std::os::unix::fs::symlink(bundled_icon(app_dir, size), &link)
                .with_context(|| format!("Failed to create icon link {}", link.display()))?;
            log::debug!("Linked {}", link.display());
        }
        links.push(link);
    }
    Ok(links)
}
