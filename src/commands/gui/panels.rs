//! Page rendering for the installation wizard

use eframe::egui;
use std::path::Path;

use super::form::Mode;
use super::wizard::{RunState, Wizard};

const LICENSE: &str = include_str!("../../../assets/LICENSE.txt");

const ERROR_COLOR: egui::Color32 = egui::Color32::from_rgb(220, 80, 80);

/// Mode chooser and license acceptance
pub fn show_mode_page(wizard: &mut Wizard, ui: &mut egui::Ui) {
    ui.heading("Welcome");
    ui.add_space(10.0);

    let before = wizard.form.mode;
    egui::ComboBox::from_label("What do you want to do?")
        .selected_text(wizard.form.mode.to_string())
        .show_ui(ui, |ui| {
            for mode in [Mode::Installation, Mode::Uninstallation] {
                ui.selectable_value(&mut wizard.form.mode, mode, mode.to_string());
            }
        });
    if wizard.form.mode != before {
        wizard.form.refresh_installed();
    }

    ui.add_space(10.0);
    ui.separator();
    egui::ScrollArea::vertical()
        .max_height(260.0)
        .show(ui, |ui| {
            ui.monospace(LICENSE);
        });
    ui.separator();
    ui.checkbox(&mut wizard.license_accepted, "I accept the license agreement");
}

/// Package or installed variant, install path and option checkboxes
pub fn show_options_page(wizard: &mut Wizard, ui: &mut egui::Ui) {
    let form = &mut wizard.form;
    ui.heading(form.mode.to_string());
    ui.add_space(10.0);

    egui::Grid::new("paths").num_columns(3).show(ui, |ui| {
        if form.mode == Mode::Installation {
            ui.label("Package:");
            ui.text_edit_singleline(&mut form.package_file);
            if ui.button("Choose…").clicked() {
                let picked = rfd::FileDialog::new()
                    .set_title("Choose a file")
                    .add_filter("AppImage", &["AppImage"])
                    .add_filter("Tar", &["bz2", "gz"])
                    .pick_file();
                if let Some(file) = picked {
                    form.package_file = file.display().to_string();
                }
            }
            ui.end_row();
        }

        ui.label("Installation path:");
        let mut changed = ui.text_edit_singleline(&mut form.install_path).changed();
        if ui.button("Browse…").clicked() {
            let picked = rfd::FileDialog::new()
                .set_title("Choose a folder")
                .set_directory(Path::new(form.install_path.trim()))
                .pick_folder();
            if let Some(folder) = picked {
                form.install_path = folder.display().to_string();
                changed = true;
            }
        }
        if changed {
            form.refresh_installed();
        }
        ui.end_row();
    });

    ui.add_space(10.0);
    ui.separator();

    match form.mode {
        Mode::Installation => {
            ui.checkbox(&mut form.options.desktop_shortcut, "Add a desktop shortcut");
            ui.checkbox(
                &mut form.options.system_dictionaries,
                "Use system's dictionaries",
            );
            ui.checkbox(
                &mut form.options.remove_archive,
                "Remove tarball/AppImage package after completing the installation",
            );
        }
        Mode::Uninstallation => {
            if form.installed.is_empty() {
                ui.colored_label(ERROR_COLOR, "No installed packages found.");
            } else {
                let selected = form
                    .variant
                    .map(|v| format!("Waterfox {v}"))
                    .unwrap_or_default();
                egui::ComboBox::from_label("Package")
                    .selected_text(selected)
                    .show_ui(ui, |ui| {
                        for variant in form.installed.clone() {
                            ui.selectable_value(
                                &mut form.variant,
                                Some(variant),
                                format!("Waterfox {variant}"),
                            );
                        }
                    });
            }
            ui.checkbox(
                &mut form.remove_config,
                "Remove file with installer settings",
            );
        }
    }
}

/// Summary before running, then progress and log
pub fn show_confirm_page(wizard: &mut Wizard, ui: &mut egui::Ui) {
    let verb = match wizard.form.mode {
        Mode::Installation => "Install",
        Mode::Uninstallation => "Uninstall",
    };

    match &wizard.run {
        RunState::Idle => {
            ui.label(format!(
                "Click {verb} to begin the {} or click Close if you want to review \
                 or change any settings.",
                wizard.form.mode.to_string().to_lowercase()
            ));
            if let Some(notice) = &wizard.notice {
                ui.add_space(10.0);
                ui.colored_label(ERROR_COLOR, notice);
            }
            return;
        }
        RunState::Running => {
            ui.add(
                egui::ProgressBar::new(0.0)
                    .desired_width(ui.available_width())
                    .animate(true),
            );
        }
        RunState::Done => {
            ui.add(egui::ProgressBar::new(1.0).desired_width(ui.available_width()));
        }
        RunState::Failed(e) => {
            ui.colored_label(ERROR_COLOR, e);
        }
    }

    ui.add_space(10.0);
    egui::ScrollArea::vertical()
        .stick_to_bottom(true)
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for line in &wizard.log {
                ui.monospace(line);
            }
        });
}
