//! Graphical installation wizard.
//!
//! The window runs on the main thread. The chosen [`Plan`] runs on a worker
//! thread that streams progress lines back over a channel.
//!
//! - `form`: the fields the wizard collects and their validation
//! - `wizard`: the [`eframe::App`] and its page state
//! - `panels`: page rendering
//! - `worker`: the background thread
//!
//! [`Plan`]: install_waterfox::Plan

mod form;
mod panels;
mod wizard;
mod worker;

use anyhow::{anyhow, Result};
use eframe::egui;
use std::path::PathBuf;

use super::Session;
use wizard::Wizard;

pub fn cmd_gui(install_path: Option<PathBuf>) -> Result<()> {
    let session = Session::load(install_path)?;
    let title = format!(
        "GUI installer of Waterfox for Linux {}",
        env!("CARGO_PKG_VERSION")
    );

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([560.0, 480.0])
            .with_title(title),
        ..Default::default()
    };

    eframe::run_native(
        "install_waterfox",
        native_options,
        Box::new(move |_cc| Ok(Box::new(Wizard::new(session)))),
    )
    .map_err(|e| anyhow!("Failed to open the installer window: {e}"))
}
