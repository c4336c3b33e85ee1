use anyhow::{bail, Context, Result};
use std::path::Path;
use std::process::Command;

/// Performs filesystem operations that need root, such as removing files
/// left in `/usr` by a system-wide package.
pub trait Elevator: Send + Sync {
    /// Remove `path` recursively with root privileges.
    ///
    /// # Errors
    ///
    /// Fails when the removal cannot be started or exits unsuccessfully.
    fn remove(&self, path: &Path) -> Result<()>;
}

/// Runs `rm -rf` through a privilege-escalation program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElevationCommand {
    program: String,
}

impl ElevationCommand {
    /// Elevate through `program`, which runs `rm` as root.
    #[must_use]
    pub fn new(program: impl Into<String>) -> Self {
        Self { program: program.into() }
    }

    /// `pkexec` when a polkit agent binary is on PATH, otherwise `sudo`.
    #[must_use]
    pub fn detect() -> Self {
        if which::which("pkexec").is_ok() {
            Self::new("pkexec")
        } else {
            Self::new("sudo")
        }
    }

    /// Name of the escalation program.
    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Elevator for ElevationCommand {
    fn remove(&self, path: &Path) -> Result<()> {
        log::info!("Root privileges are required to remove {}", path.display());
        let status = Command::new(&self.program)
            .args(["rm", "-vrf"])
            .arg(path)
            .status()
            .with_context(|| format!("Failed to run `{} rm`", self.program))?;

        if !status.success() {
            bail!("{} rm -vrf {} failed ({status})", self.program, path.display());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_picks_known_program() {
        let cmd = ElevationCommand::detect();
        assert!(matches!(cmd.program(), "pkexec" | "sudo"));
    }

    #[test]
    fn test_failing_program_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let err = ElevationCommand::new("false")
            .remove(&tmp.path().join("nothing"))
            .unwrap_err();
        assert!(err.to_string().contains("false rm -vrf"));
    }
}
