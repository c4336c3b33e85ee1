//! Install and uninstall Waterfox builds for a single Linux user.

pub mod archive;
pub mod checksum;
pub mod discover;
pub mod host;
pub mod install;
pub mod layout;
pub mod plan;
pub mod progress;
pub mod settings;
pub mod uninstall;
pub mod variant;

pub use host::Host;
pub use install::{install, InstallOptions, InstallRequest, Installed};
pub use layout::Layout;
pub use plan::Plan;
pub use progress::Progress;
pub use settings::Settings;
pub use uninstall::{uninstall, UninstallRequest};
pub use variant::Variant;
