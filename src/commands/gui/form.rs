use anyhow::{bail, Context, Result};
use std::fmt;
use std::path::{Path, PathBuf};

use install_waterfox::discover::installed_variants;
use install_waterfox::{InstallOptions, InstallRequest, Plan, UninstallRequest, Variant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Installation,
    Uninstallation,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Installation => f.write_str("Installation"),
            Self::Uninstallation => f.write_str("Uninstallation"),
        }
    }
}

/// Everything the wizard asks for before it can run.
#[derive(Debug, Clone)]
pub struct Form {
    pub mode: Mode,
    pub package_file: String,
    pub install_path: String,
    /// Variants found under `install_path`, for the uninstall chooser.
    pub installed: Vec<Variant>,
    pub variant: Option<Variant>,
    pub options: InstallOptions,
    pub remove_config: bool,
}

impl Form {
    pub fn new(install_path: &Path, options: InstallOptions) -> Self {
        let mut form = Self {
            mode: Mode::Installation,
            package_file: String::new(),
            install_path: install_path.display().to_string(),
            installed: Vec::new(),
            variant: None,
            options,
            remove_config: false,
        };
        form.refresh_installed();
        form
    }

    /// Rescan the install path. Keeps the chosen variant when it is still
    /// there, otherwise picks the first one found.
    pub fn refresh_installed(&mut self) {
        let root = Path::new(self.install_path.trim());
        self.installed = if root.is_dir() {
            installed_variants(root).unwrap_or_else(|e| {
                log::warn!("Could not scan {}: {e:#}", root.display());
                Vec::new()
            })
        } else {
            Vec::new()
        };
        if !self.variant.is_some_and(|v| self.installed.contains(&v)) {
            self.variant = self.installed.first().copied();
        }
    }

    pub fn plan(&self, config_file: &Path) -> Result<Plan> {
        let install_path = self.install_path.trim();
        if install_path.is_empty() {
            bail!("Choose an installation folder.");
        }
        let install_root = std::path::absolute(install_path)
            .with_context(|| format!("Invalid installation path {install_path}"))?;

        match self.mode {
            Mode::Installation => {
                let source = PathBuf::from(self.package_file.trim());
                if !source.is_file() {
                    bail!("The specified path does not exist!");
                }
                let source = std::path::absolute(&source)
                    .with_context(|| format!("Invalid package path {}", source.display()))?;
                let variant = source
                    .file_name()
                    .and_then(|name| name.to_str())
                    .and_then(Variant::from_package_name)
                    .with_context(|| {
                        format!("{} is not a Waterfox package.", source.display())
                    })?;
                Ok(Plan::Install(InstallRequest {
                    source,
                    install_root,
                    variant,
                    options: self.options,
                    config_file: config_file.to_path_buf(),
                }))
            }
            Mode::Uninstallation => {
                let variant = self.variant.context("No installed packages found.")?;
                Ok(Plan::Uninstall(UninstallRequest {
                    install_root,
                    variant,
                    config_file: config_file.to_path_buf(),
                    remove_config: self.remove_config,
                }))
            }
        }
    }
}
