use anyhow::Result;
use std::io::{BufRead, Write};

use install_waterfox::discover::installed_variants;
use install_waterfox::{Plan, UninstallRequest};

use super::menu::Prompt;
use super::{print_step, Session};

pub fn cmd_uninstall<R: BufRead, W: Write>(
    session: &Session,
    prompt: &mut Prompt<R, W>,
) -> Result<()> {
    match plan_uninstall(session, prompt)? {
        Some(plan) => plan.execute(&session.host, &print_step),
        None => Ok(()),
    }
}

/// Pick the installed variant and confirm. `None` when nothing is installed
/// or the user backed out.
fn plan_uninstall<R: BufRead, W: Write>(
    session: &Session,
    prompt: &mut Prompt<R, W>,
) -> Result<Option<Plan>> {
    let root = &session.install_root;
    if !root.exists() {
        prompt.say("The specified path does not exist!")?;
        return Ok(None);
    }

    prompt.say("Detecting installed packages...")?;
    let variants = installed_variants(root)?;
    let variant = match variants.as_slice() {
        [] => {
            prompt.say("No installed packages found.")?;
            prompt.say("Please launch this program again with --ipath=<path>.")?;
            return Ok(None);
        }
        [only] => {
            prompt.say(format!("Detected Waterfox {only}."))?;
            *only
        }
        _ => match prompt.choose("Which package do you want to uninstall?", &variants, Some("None"))? {
            Some(i) => variants[i],
            None => return Ok(None),
        },
    };

    if !prompt.confirm(&format!("Are you sure that you want to uninstall Waterfox {variant}?"))? {
        return Ok(None);
    }
    let remove_config = prompt.confirm("Do you want to remove file with installer settings?")?;

    Ok(Some(Plan::Uninstall(UninstallRequest {
        install_root: root.clone(),
        variant,
        config_file: session.config_file.clone(),
        remove_config,
    })))
}
