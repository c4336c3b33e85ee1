//! Everything the procedures need from the machine they run on: fixed
//! paths, external desktop utilities and privileged removal.

mod elevate;
mod tools;

pub use elevate::{Elevator, ElevationCommand};
pub use tools::{DesktopTools, SystemTools};

use anyhow::Result;
use std::sync::Arc;

use crate::layout::Layout;

/// The machine as the procedures see it.
#[derive(Clone)]
pub struct Host {
    /// Fixed paths.
    pub layout: Layout,
    /// External desktop utilities.
    pub tools: Arc<dyn SystemTools>,
    /// Privileged removal.
    pub elevator: Arc<dyn Elevator>,
}

impl Host {
    /// Host for the current user, using the real external utilities.
    ///
    /// # Errors
    ///
    /// Fails when the home directory cannot be determined.
    pub fn current() -> Result<Self> {
        Ok(Self {
            layout: Layout::current_user()?,
            tools: Arc::new(DesktopTools),
            elevator: Arc::new(ElevationCommand::detect()),
        })
    }
}

impl std::fmt::Debug for Host {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Host").field("layout", &self.layout).finish_non_exhaustive()
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use anyhow::{Context, Result};
    use std::path::{Path, PathBuf};
    use std::sync::{Arc, Mutex};

    use super::{Elevator, Host, SystemTools};
    use crate::layout::Layout;

    /// In-process stand-in for the desktop utilities.
    pub struct FakeTools {
        pub desktop: PathBuf,
        pub refreshed: Mutex<Vec<PathBuf>>,
    }

    impl SystemTools for FakeTools {
        /// Mimics `--appimage-extract` by laying out a minimal squashfs-root.
        fn extract_appimage(&self, image: &Path, into: &Path) -> Result<()> {
            let name = image.file_name().context("no file name")?.to_string_lossy();
            let variant = crate::Variant::from_package_name(&name).context("not a package")?;
            let bin = into.join("squashfs-root").join("usr").join("bin");
            std::fs::create_dir_all(bin.join("browser"))?;
            std::fs::write(bin.join(variant.dir_name()), "#!/bin/sh\n")?;
            std::fs::write(bin.join("application.ini"), "[App]\n")?;
            Ok(())
        }

        fn refresh_icon_cache(&self, icons_dir: &Path) -> Result<()> {
            self.refreshed.lock().unwrap().push(icons_dir.to_path_buf());
            Ok(())
        }

        fn desktop_dir(&self) -> Result<PathBuf> {
            Ok(self.desktop.clone())
        }
    }

    /// Removes directly and remembers what it was asked to remove.
    #[derive(Default)]
    pub struct FakeElevator {
        pub removed: Mutex<Vec<PathBuf>>,
    }

    impl Elevator for FakeElevator {
        fn remove(&self, path: &Path) -> Result<()> {
            if path.is_dir() && !path.is_symlink() {
                std::fs::remove_dir_all(path)?;
            } else {
                std::fs::remove_file(path)?;
            }
            self.removed.lock().unwrap().push(path.to_path_buf());
            Ok(())
        }
    }

    pub struct Sandbox {
        pub host: Host,
        pub tools: Arc<FakeTools>,
        pub elevator: Arc<FakeElevator>,
    }

    /// A host whose home, system root and desktop all live under `root`.
    pub fn sandbox(root: &Path) -> Sandbox {
        let layout = Layout::for_home(&root.join("home")).with_system_root(&root.join("sys"));
        let tools = Arc::new(FakeTools {
            desktop: root.join("home").join("Desktop"),
            refreshed: Mutex::new(Vec::new()),
        });
        let elevator = Arc::new(FakeElevator::default());
        Sandbox {
            host: Host {
                layout,
                tools: tools.clone(),
                elevator: elevator.clone(),
            },
            tools,
            elevator,
        }
    }
}
