use anyhow::Result;
use clap::Subcommand;
use std::io::Write;
use std::path::Path;

use install_waterfox::{Layout, Settings};

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show the install path and the remembered answers
    Show,
    /// Print where settings.conf lives
    Path,
    /// Reset settings.conf: default install path, no remembered answers
    Init,
    /// Remember a value, e.g. `RemoveArchive yes` or `InstallPath /opt/waterfox`.
    /// An empty value forgets a yes/no answer.
    Set { key: String, value: String },
    /// Print one value; a forgotten answer prints an empty line
    Get { key: String },
}

pub fn cmd_config(action: ConfigAction) -> Result<()> {
    let path = Settings::path()?;
    let default_root = Layout::current_user()?.default_install_root();
    run(action, &path, default_root.as_path(), &mut std::io::stdout().lock())
}

fn run(action: ConfigAction, path: &Path, default_root: &Path, out: &mut impl Write) -> Result<()> {
    let load = || Settings::load_from(path, default_root.to_path_buf());
    match action {
        ConfigAction::Show => {
            write!(out, "{}", toml::to_string_pretty(&load()?)?)?;
        }
        ConfigAction::Path => writeln!(out, "{}", path.display())?,
        ConfigAction::Init => {
            Settings::with_install_path(default_root.to_path_buf()).save_to(path)?;
            writeln!(out, "Wrote default settings to {}", path.display())?;
        }
        ConfigAction::Set { key, value } => {
            let mut settings = load()?;
            settings.set_value(&key, &value)?;
            settings.save_to(path)?;
            let stored = settings.get_value(&key)?;
            if stored.is_empty() {
                writeln!(out, "Forgot {key}")?;
            } else {
                writeln!(out, "{key}={stored}")?;
            }
        }
        ConfigAction::Get { key } => writeln!(out, "{}", load()?.get_value(&key)?)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn config(action: ConfigAction, path: &Path) -> Result<String> {
        let mut out = Vec::new();
        run(action, path, Path::new("/home/ann/.local/lib"), &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    fn set(key: &str, value: &str) -> ConfigAction {
        ConfigAction::Set { key: key.into(), value: value.into() }
    }

    #[test]
    fn test_set_yes_no_answers() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("settings.conf");

        assert_eq!(config(set("removearchive", "YES"), &path).unwrap(), "removearchive=yes\n");
        assert_eq!(config(set("InstallDesktopShortcut", "maybe"), &path).unwrap(), "InstallDesktopShortcut=no\n");

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("InstallPath=/home/ann/.local/lib"));
        assert!(written.contains("RemoveArchive=yes"));
        assert!(written.contains("InstallDesktopShortcut=no"));
        assert!(!written.contains("UseSystemDictionaries"));

        let get = ConfigAction::Get { key: "RemoveArchive".into() };
        assert_eq!(config(get, &path).unwrap(), "yes\n");
    }

    #[test]
    fn test_empty_value_forgets_answer() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("settings.conf");

        config(set("UseSystemDictionaries", "yes"), &path).unwrap();
        assert_eq!(config(set("UseSystemDictionaries", ""), &path).unwrap(), "Forgot UseSystemDictionaries\n");
        assert!(!fs::read_to_string(&path).unwrap().contains("UseSystemDictionaries"));

        let get = ConfigAction::Get { key: "UseSystemDictionaries".into() };
        assert_eq!(config(get, &path).unwrap(), "\n");
    }

    #[test]
    fn test_set_install_path_and_init() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("nested/settings.conf");

        config(set("InstallPath", "/opt/waterfox"), &path).unwrap();
        config(set("RemoveArchive", "yes"), &path).unwrap();
        let get = || ConfigAction::Get { key: "installpath".into() };
        assert_eq!(config(get(), &path).unwrap(), "/opt/waterfox\n");

        config(ConfigAction::Init, &path).unwrap();
        assert_eq!(config(get(), &path).unwrap(), "/home/ann/.local/lib\n");
        assert!(!fs::read_to_string(&path).unwrap().contains("RemoveArchive"));
    }

    #[test]
    fn test_unknown_key() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("settings.conf");

        let err = config(set("Theme", "dark"), &path).unwrap_err();
        assert!(err.to_string().contains("Unknown settings key: Theme"));
        assert!(!path.exists());
    }
}
