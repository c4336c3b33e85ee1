use anyhow::{Context, Result};
use std::path::Path;

/// Point the browser at the system's hunspell/myspell data and drop the
/// dictionaries shipped with the package.
pub(super) fn use_system(app_dir: &Path, system_dicts: &Path) -> Result<()> {
    let prefs = app_dir.join("browser").join("defaults").join("preferences");
    std::fs::create_dir_all(&prefs)
        .with_context(|| format!("Failed to create {}", prefs.display()))?;

    let pref_file = prefs.join("spellcheck.js");
    let content = format!(
        "pref(\"spellchecker.dictionary_path\", \"{}\");",
        system_dicts.display()
    );
    std::fs::write(&pref_file, content)
        .with_context(|| format!("Failed to write {}", pref_file.display()))?;

    let bundled = app_dir.join("dictionaries");
    if bundled.is_dir() {
        std::fs::remove_dir_all(&bundled)
            .with_context(|| format!("Failed to remove {}", bundled.display()))?;
    } else {
        log::debug!("{} has no bundled dictionaries", app_dir.display());
    }
    Ok(())
}
