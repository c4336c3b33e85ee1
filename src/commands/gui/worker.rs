use eframe::egui;
use std::sync::mpsc;

use install_waterfox::{Host, Plan};

pub enum WorkerEvent {
    Step(String),
    Finished(Result<(), String>),
}

/// Run `plan` on its own thread. Every progress line and the final result
/// arrive on the returned channel, each followed by a repaint request.
pub fn spawn(plan: Plan, host: Host, ctx: egui::Context) -> mpsc::Receiver<WorkerEvent> {
    let (tx, rx) = mpsc::channel();

    std::thread::spawn(move || {
        let steps = tx.clone();
        let repaint = ctx.clone();
        let sink = move |message: &str| {
            let _ = steps.send(WorkerEvent::Step(message.to_owned()));
            repaint.request_repaint();
        };

        let result = plan.execute(&host, &sink).map_err(|e| {
            log::error!("{e:#}");
            format!("{e:#}")
        });
        let _ = tx.send(WorkerEvent::Finished(result));
        ctx.request_repaint();
    });

    rx
}
