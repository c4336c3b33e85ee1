pub mod checksum;
pub mod config;
#[cfg(feature = "gui")]
pub mod gui;
pub mod install;
pub mod menu;
pub mod uninstall;

use anyhow::{Context, Result};
use std::path::PathBuf;

use install_waterfox::{Host, Settings};

/// State shared by every front end: the host, the loaded settings and
/// where they live.
pub struct Session {
    pub host: Host,
    pub settings: Settings,
    pub config_file: PathBuf,
    /// `--ipath` when given, otherwise the remembered install path.
    pub install_root: PathBuf,
}

impl Session {
    pub fn load(install_path: Option<PathBuf>) -> Result<Self> {
        Self::new(Host::current()?, Settings::path()?, install_path)
    }

    /// Read settings from `config_file`; `install_path` overrides the
    /// remembered install path.
    pub fn new(host: Host, config_file: PathBuf, install_path: Option<PathBuf>) -> Result<Self> {
        let settings = Settings::load_from(&config_file, host.layout.default_install_root())?;
        let install_root = install_path.unwrap_or_else(|| settings.install_path.clone());
        let install_root = std::path::absolute(&install_root)
            .with_context(|| format!("Invalid installation path {}", install_root.display()))?;
        Ok(Self {
            host,
            settings,
            config_file,
            install_root,
        })
    }
}

/// Progress sink for the terminal front end.
pub fn print_step(message: &str) {
    println!("{message}");
}

/// No subcommand: ask what to do, or go straight to installing when silent.
pub fn cmd_menu(source: Option<PathBuf>, install_path: Option<PathBuf>, silent: bool) -> Result<()> {
    let session = Session::load(install_path)?;
    let mut prompt = menu::Prompt::stdio();

    if silent {
        return install::cmd_install(&session, source, true, &mut prompt);
    }

    let actions = ["Install", "Uninstall"];
    match prompt.choose("What do you want to do with Waterfox?", &actions, Some("Quit"))? {
        Some(0) => install::cmd_install(&session, source, false, &mut prompt),
        Some(_) => uninstall::cmd_uninstall(&session, &mut prompt),
        None => Ok(()),
    }
}
