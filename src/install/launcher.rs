use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::variant::Variant;

/// Wrapper script that runs the installed binary. KDE sessions get
/// `GTK_USE_PORTAL=1` so file dialogs use the native portal.
#[must_use]
pub fn render(install_root: &Path, variant: Variant) -> String {
    let binary = install_root.join(variant.dir_name()).join("waterfox");
    format!(
        "#!/bin/bash\n\
         if [ \"$XDG_CURRENT_DESKTOP\" == \"KDE\" ]; then\n    \
         export GTK_USE_PORTAL=1\n\
         fi\n\
         exec {} \"$@\"\n",
        single_quote(&binary.display().to_string())
    )
}

/// Quote for bash so the path is never expanded.
fn single_quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', r"'\''"))
}

/// Write the launcher into `bin_dir` with mode 0755.
pub(super) fn write(bin_dir: &Path, install_root: &Path, variant: Variant) -> Result<PathBuf> {
    use std::os::unix::fs::PermissionsExt;

    std::fs::create_dir_all(bin_dir)
        .with_context(|| format!("Failed to create {}", bin_dir.display()))?;
    let path = bin_dir.join(variant.dir_name());
    std::fs::write(&path, render(install_root, variant))
        .with_context(|| format!("Failed to write launcher to {}", path.display()))?;
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
        .with_context(|| format!("Failed to make {} executable", path.display()))?;
    log::debug!("Wrote launcher {}", path.display());
    Ok(path)
}
