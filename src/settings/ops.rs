use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use super::{
    ini, parse_yes_no, yes_no, Settings, KEY_DESKTOP_SHORTCUT, KEY_INSTALL_PATH,
    KEY_REMOVE_ARCHIVE, KEY_SYSTEM_DICTIONARIES,
};

impl Settings {
    /// `$XDG_CONFIG_HOME/install_waterfox/settings.conf`
    ///
    /// # Errors
    ///
    /// Fails when the config directory cannot be determined.
    pub fn path() -> Result<PathBuf> {
        let config = dirs::config_dir().context("Could not determine config directory")?;
        Ok(config.join("install_waterfox").join("settings.conf"))
    }

    /// Load from the default location.
    ///
    /// # Errors
    ///
    /// See [`Self::path`] and [`Self::load_from`].
    pub fn load(default_install_path: PathBuf) -> Result<Self> {
        Self::load_from(&Self::path()?, default_install_path)
    }

    /// Load from `path`, falling back to `default_install_path` when the file
    /// or its `InstallPath` key is missing.
    ///
    /// # Errors
    ///
    /// Fails when the file exists but cannot be read.
    pub fn load_from(path: &Path, default_install_path: PathBuf) -> Result<Self> {
        let mut settings = Self::with_install_path(default_install_path);
        if !path.is_file() {
            return Ok(settings);
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {}", path.display()))?;
        for (key, value) in ini::parse(&content) {
            // Unknown keys are ignored.
            let _ = settings.set_value(&key, &value);
        }
        Ok(settings)
    }

    /// Write all fields to `path`, replacing whatever was there.
    ///
    /// # Errors
    ///
    /// Fails when the parent directory or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
        }
        std::fs::write(path, ini::render(self))
            .with_context(|| format!("Failed to write settings to {}", path.display()))?;
        Ok(())
    }

    /// Get a value by its config file key (case-insensitive). Unset flags
    /// read as an empty string.
    ///
    /// # Errors
    ///
    /// Fails for a key that is not one of the four settings keys.
    pub fn get_value(&self, key: &str) -> Result<String> {
        let flag = |v: Option<bool>| v.map(yes_no).unwrap_or_default().to_string();
        match canonical_key(key)? {
            KEY_INSTALL_PATH => Ok(self.install_path.display().to_string()),
            KEY_DESKTOP_SHORTCUT => Ok(flag(self.install_desktop_shortcut)),
            KEY_SYSTEM_DICTIONARIES => Ok(flag(self.use_system_dictionaries)),
            _ => Ok(flag(self.remove_archive)),
        }
    }

    /// Set a value by its config file key (case-insensitive). An empty value
    /// unsets a flag.
    ///
    /// # Errors
    ///
    /// Fails for a key that is not one of the four settings keys.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        let flag = |v: &str| (!v.trim().is_empty()).then(|| parse_yes_no(v));
        match canonical_key(key)? {
            KEY_INSTALL_PATH => self.install_path = PathBuf::from(value.trim()),
            KEY_DESKTOP_SHORTCUT => self.install_desktop_shortcut = flag(value),
            KEY_SYSTEM_DICTIONARIES => self.use_system_dictionaries = flag(value),
            _ => self.remove_archive = flag(value),
        }
        Ok(())
    }
}

fn canonical_key(key: &str) -> Result<&'static str> {
    [
        KEY_INSTALL_PATH,
        KEY_DESKTOP_SHORTCUT,
        KEY_SYSTEM_DICTIONARIES,
        KEY_REMOVE_ARCHIVE,
    ]
    .into_iter()
    .find(|k| k.eq_ignore_ascii_case(key.trim()))
    .with_context(|| format!("Unknown settings key: {key}"))
}
