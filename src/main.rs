//! Command-line and graphical front ends for `install_waterfox`.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use commands::config::ConfigAction;

#[derive(Parser)]
#[command(
    name = "install-waterfox",
    version,
    about = "Installation and uninstallation script for Waterfox"
)]
struct Cli {
    /// Package file, or a directory searched for packages [default: current directory]
    #[arg(short = 'p', long = "spath", value_name = "PATH", global = true)]
    source: Option<PathBuf>,

    /// Installation path (a folder named after the package goes here)
    #[arg(short = 'i', long = "ipath", value_name = "PATH", global = true)]
    install_path: Option<PathBuf>,

    /// Unattended installation: options come from the settings file and
    /// --spath must name a package file
    #[arg(short, long, global = true)]
    silent: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Install a downloaded tarball or AppImage
    Install,

    /// Remove an installed variant
    Uninstall,

    /// Manage the installer settings file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Write a SHA-256 digest file for a release archive
    Checksum {
        archive: PathBuf,

        /// Directory for the digest file [default: next to the archive]
        #[arg(long, value_name = "DIR")]
        out_dir: Option<PathBuf>,
    },

    /// Open the graphical installation wizard
    #[cfg(feature = "gui")]
    Gui,
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let cli = Cli::parse();

    match cli.command {
        None => commands::cmd_menu(cli.source, cli.install_path, cli.silent)?,

        Some(Commands::Install) => {
            let session = commands::Session::load(cli.install_path)?;
            let mut prompt = commands::menu::Prompt::stdio();
            commands::install::cmd_install(&session, cli.source, cli.silent, &mut prompt)?;
        }

        Some(Commands::Uninstall) => {
            let session = commands::Session::load(cli.install_path)?;
            let mut prompt = commands::menu::Prompt::stdio();
            commands::uninstall::cmd_uninstall(&session, &mut prompt)?;
        }

        Some(Commands::Config { action }) => commands::config::cmd_config(action)?,

        Some(Commands::Checksum { archive, out_dir }) => {
            commands::checksum::cmd_checksum(&archive, out_dir.as_deref())?;
        }

        #[cfg(feature = "gui")]
        Some(Commands::Gui) => commands::gui::cmd_gui(cli.install_path)?,
    }

    Ok(())
}
