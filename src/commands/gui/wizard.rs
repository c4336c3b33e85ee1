use eframe::egui;
use std::sync::mpsc;

use install_waterfox::InstallOptions;

use crate::commands::install::root_refusal;
use crate::commands::Session;

use super::form::{Form, Mode};
use super::worker::{self, WorkerEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Mode,
    Options,
    Confirm,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Running,
    Done,
    Failed(String),
}

pub struct Wizard {
    session: Session,
    pub form: Form,
    pub page: Page,
    pub license_accepted: bool,
    pub run: RunState,
    /// Validation problem shown on the confirmation page.
    pub notice: Option<String>,
    pub log: Vec<String>,
    events: Option<mpsc::Receiver<WorkerEvent>>,
}

impl Wizard {
    pub fn new(session: Session) -> Self {
        let options = InstallOptions::from_settings(&session.settings);
        let form = Form::new(&session.install_root, options);
        Self {
            session,
            form,
            page: Page::Mode,
            license_accepted: false,
            run: RunState::Idle,
            notice: None,
            log: Vec::new(),
            events: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.run == RunState::Running
    }

    fn start(&mut self, ctx: &egui::Context) {
        self.notice = None;
        if self.form.mode == Mode::Installation {
            if let Some(refusal) = root_refusal() {
                self.notice = Some(refusal);
                return;
            }
        }
        match self.form.plan(&self.session.config_file) {
            Ok(plan) => {
                self.log.clear();
                self.run = RunState::Running;
                self.events = Some(worker::spawn(
                    plan,
                    self.session.host.clone(),
                    ctx.clone(),
                ));
            }
            Err(e) => self.notice = Some(format!("{e:#}")),
        }
    }

    fn poll_worker(&mut self) {
        let Some(events) = &self.events else {
            return;
        };
        loop {
            match events.try_recv() {
                Ok(WorkerEvent::Step(line)) => self.log.push(line),
                Ok(WorkerEvent::Finished(Ok(()))) => self.run = RunState::Done,
                Ok(WorkerEvent::Finished(Err(e))) => self.run = RunState::Failed(e),
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => {
                    if self.is_running() {
                        self.run = RunState::Failed("The worker stopped unexpectedly.".into());
                    }
                    break;
                }
            }
        }
        if !self.is_running() {
            self.events = None;
        }
    }

    fn show_navigation(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let idle = self.run == RunState::Idle;
        ui.horizontal(|ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .add_enabled(!self.is_running(), egui::Button::new("Close"))
                    .clicked()
                {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }

                match self.page {
                    Page::Confirm => {
                        let label = match self.form.mode {
                            Mode::Installation => "Install",
                            Mode::Uninstallation => "Uninstall",
                        };
                        if ui.add_enabled(idle, egui::Button::new(label)).clicked() {
                            self.start(ctx);
                        }
                    }
                    page => {
                        let ready = page != Page::Mode || self.license_accepted;
                        if ui.add_enabled(ready, egui::Button::new("Next")).clicked() {
                            self.page = match page {
                                Page::Mode => Page::Options,
                                _ => Page::Confirm,
                            };
                        }
                    }
                }

                if self.page != Page::Mode
                    && ui.add_enabled(idle, egui::Button::new("Back")).clicked()
                {
                    self.notice = None;
                    self.page = match self.page {
                        Page::Confirm => Page::Options,
                        _ => Page::Mode,
                    };
                }
            });
        });
    }
}

impl eframe::App for Wizard {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_worker();

        // Closing mid-run would leave a half-written app directory.
        ctx.send_viewport_cmd(egui::ViewportCommand::EnableButtons {
            close: !self.is_running(),
            minimized: true,
            maximize: true,
        });

        egui::TopBottomPanel::bottom("navigation").show(ctx, |ui| {
            ui.add_space(6.0);
            self.show_navigation(ui, ctx);
            ui.add_space(6.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| match self.page {
            Page::Mode => super::panels::show_mode_page(self, ui),
            Page::Options => super::panels::show_options_page(self, ui),
            Page::Confirm => super::panels::show_confirm_page(self, ui),
        });
    }
}
