use anyhow::{bail, Context, Result};
use std::io::{BufRead, Write};
use std::path::PathBuf;

use install_waterfox::discover::{installable_packages, variants_of};
use install_waterfox::{InstallOptions, InstallRequest, Plan};

use super::menu::Prompt;
use super::{print_step, Session};

const RELEASES_URL: &str = "https://github.com/hawkeye116477/waterfox-deb-rpm-arch-AppImage";

/// The message shown instead of installing when running as root.
pub fn root_refusal() -> Option<String> {
    nix::unistd::geteuid().is_root().then(|| {
        format!(
            "This program was created for installing Waterfox only for one user, \
             because updater of this package doesn't work correctly for root user. \
             If you wanted to install it for all users, then go to {RELEASES_URL} \
             for more information, otherwise run this program again as normal user."
        )
    })
}

pub fn cmd_install<R: BufRead, W: Write>(
    session: &Session,
    source: Option<PathBuf>,
    silent: bool,
    prompt: &mut Prompt<R, W>,
) -> Result<()> {
    if let Some(refusal) = root_refusal() {
        prompt.say(refusal)?;
        return Ok(());
    }
    match plan_install(session, source, silent, prompt)? {
        Some(plan) => plan.execute(&session.host, &print_step),
        None => Ok(()),
    }
}

/// Ask which package to install and how. `None` when there is nothing to
/// install or the user picked the exit entry.
fn plan_install<R: BufRead, W: Write>(
    session: &Session,
    source: Option<PathBuf>,
    silent: bool,
    prompt: &mut Prompt<R, W>,
) -> Result<Option<Plan>> {
    let source = match source {
        Some(path) => path,
        None => std::env::current_dir().context("Could not determine current directory")?,
    };
    if !source.exists() {
        prompt.say("The specified path does not exist!")?;
        return Ok(None);
    }
    if silent && !source.is_file() {
        bail!("Silent mode needs --spath pointing at a package file");
    }
    let source = std::path::absolute(&source)
        .with_context(|| format!("Invalid package path {}", source.display()))?;
    if source.is_dir() {
        prompt.say("Detecting installable packages...")?;
    }

    let packages = installable_packages(&source)?;
    let variants = variants_of(&packages);
    if variants.is_empty() {
        prompt.say("No installable packages found.")?;
        prompt.say(
            "Please place this program next to the tarball/AppImage packages \
             or launch it again with --spath=<path>.",
        )?;
        return Ok(None);
    }

    let variant = if variants.len() > 1 {
        match prompt.choose("Which package are you interested in?", &variants, Some("None"))? {
            Some(i) => variants[i],
            None => return Ok(None),
        }
    } else {
        variants[0]
    };

    let candidates: Vec<_> = packages.iter().filter(|p| p.variant == variant).collect();
    let package = if candidates.len() > 1 {
        let names: Vec<_> = candidates.iter().map(|p| p.path.display()).collect();
        match prompt.choose("Which package do you want to install?", &names, Some("None"))? {
            Some(i) => candidates[i],
            None => return Ok(None),
        }
    } else {
        candidates[0]
    };

    let options = ask_options(session, silent, prompt)?;
    Ok(Some(Plan::Install(InstallRequest {
        source: package.path.clone(),
        install_root: session.install_root.clone(),
        variant,
        options,
        config_file: session.config_file.clone(),
    })))
}

/// Silent runs reuse remembered answers and only ask for unset ones.
fn ask_options<R: BufRead, W: Write>(
    session: &Session,
    silent: bool,
    prompt: &mut Prompt<R, W>,
) -> Result<InstallOptions> {
    let settings = &session.settings;
    let mut ask = |remembered: Option<bool>, question: &str| -> Result<bool> {
        match remembered {
            Some(answer) if silent => Ok(answer),
            _ => prompt.confirm(question),
        }
    };
    Ok(InstallOptions {
        desktop_shortcut: ask(
            settings.install_desktop_shortcut,
            "Do you want to add a desktop shortcut?",
        )?,
        system_dictionaries: ask(
            settings.use_system_dictionaries,
            "Do you want to use system's dictionaries?",
        )?,
        remove_archive: ask(
            settings.remove_archive,
            "Do you want to remove tarball/AppImage package after completing the installation?",
        )?,
    })
}
