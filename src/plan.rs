//! The decision a front end hands to the procedures.

use anyhow::Result;

use crate::host::Host;
use crate::install::{install, InstallRequest};
use crate::progress::Progress;
use crate::uninstall::{uninstall, UninstallRequest};

/// What a front end decided to do once all its questions were answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Plan {
    /// Install a package.
    Install(InstallRequest),
    /// Remove an installed variant.
    Uninstall(UninstallRequest),
}

impl Plan {
    /// Carry out the plan, reporting each step to `progress`.
    ///
    /// # Errors
    ///
    /// Returns the first error of the underlying procedure; earlier steps
    /// are not rolled back.
    pub fn execute(&self, host: &Host, progress: &dyn Progress) -> Result<()> {
        match self {
            Self::Install(req) => install(req, host, progress).map(|_| ()),
            Self::Uninstall(req) => uninstall(req, host, progress),
        }
    }
}
