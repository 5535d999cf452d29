use eframe::egui;
use std::sync::mpsc;
use std::time::Duration;

use crate::config::AppConfig;
use crate::engine::engine::Engine;
use crate::engine::llm_client::{BackendError, ChatCompletionsBackend};
use crate::engine::protocol::{EngineCommand, EngineResponse};
use crate::model::phase::Phase;
use crate::model::session::SessionState;
use crate::ui::center_panel::draw_center_panel;
use crate::ui::left_panel::draw_left_panel;
use crate::ui::settings::UiSettings;

/* =========================
   UI State
   ========================= */

pub struct UiState {
    pub session: SessionState,
    pub settings: UiSettings,
    pub active_tab: Phase,
    pub connection_status: Option<Result<String, String>>,
    pub checking_connection: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            session: SessionState::default(),
            settings: UiSettings::default(),
            active_tab: Phase::Arguments,
            connection_status: None,
            checking_connection: false,
        }
    }
}

/* =========================
   App
   ========================= */

pub struct CourtApp {
    pub ui: UiState,

    cmd_tx: mpsc::Sender<EngineCommand>,
    resp_rx: mpsc::Receiver<EngineResponse>,
}

impl CourtApp {
    pub fn new(config: AppConfig) -> Result<Self, BackendError> {
        let backend = ChatCompletionsBackend::new(&config)?;
        let profiles = config.profiles.clone();

        let ui = UiState::default();
        let active = ui.session.active_run();

        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (resp_tx, resp_rx) = mpsc::channel();

        std::thread::spawn(move || {
            let mut engine = Engine::new(cmd_rx, resp_tx, backend, profiles, active);
            engine.run();
        });

        Ok(Self {
            ui,
            cmd_tx,
            resp_rx,
        })
    }

    pub fn send_command(&self, cmd: EngineCommand) {
        if self.cmd_tx.send(cmd).is_err() {
            tracing::error!("engine thread is gone, command dropped");
        }
    }

    fn drain_responses(&mut self) {
        while let Ok(resp) = self.resp_rx.try_recv() {
            apply_response(&mut self.ui, resp);
        }
    }
}

/// Folds one engine response into the UI state. Responses from a run the
/// user has since reset or restarted are dropped.
pub fn apply_response(ui: &mut UiState, resp: EngineResponse) {
    let session = &mut ui.session;

    match resp {
        EngineResponse::PhaseStarted { run_id, phase } if session.is_current(run_id) => {
            session.mark_running(phase);
            ui.active_tab = phase;
        }
        EngineResponse::PhaseCompleted { run_id, result } if session.is_current(run_id) => {
            session.mark_done(result);
        }
        EngineResponse::TrialFailed {
            run_id,
            phase,
            message,
        } if session.is_current(run_id) => {
            session.mark_failed(phase, message);
            ui.active_tab = phase;
        }
        EngineResponse::TrialFinished { run_id } if session.is_current(run_id) => {
            session.finish();
        }
        EngineResponse::ConnectionStatus(status) => {
            ui.connection_status = Some(status);
            ui.checking_connection = false;
        }
        stale => tracing::debug!(?stale, "ignoring response from abandoned run"),
    }
}

/* =========================
   egui App
   ========================= */

impl eframe::App for CourtApp {
    fn update(&mut self, ctx: &egui::Context, _: &mut eframe::Frame) {
        ctx.set_pixels_per_point(self.ui.settings.ui_scale);

        self.drain_responses();

        draw_left_panel(ctx, self);
        draw_center_panel(ctx, self);

        // Keep polling the engine while it has work in flight.
        if self.ui.session.running || self.ui.checking_connection {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}

/// Shown instead of the form when startup could not produce a usable
/// backend (missing credential, unreadable secrets file).
pub struct ConfigErrorApp {
    pub message: String,
}

impl eframe::App for ConfigErrorApp {
    fn update(&mut self, ctx: &egui::Context, _: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Agent of Justice - Supreme Court Simulation");
            ui.separator();
            ui.colored_label(egui::Color32::from_rgb(200, 60, 60), self.message.as_str());
        });
    }
}

/* =========================
   UI Helpers
   ========================= */

pub fn bubble(ui: &mut egui::Ui, color: egui::Color32, label: &str, text: &str) {
    egui::Frame::new()
        .fill(color)
        .corner_radius(egui::CornerRadius::same(8))
        .inner_margin(egui::Margin::symmetric(10, 6))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(label).strong().color(egui::Color32::WHITE));
            if !text.is_empty() {
                ui.label(egui::RichText::new(text).color(egui::Color32::WHITE));
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::phase::PhaseResult;
    use crate::model::session::PhaseStatus;

    fn done(phase: Phase) -> PhaseResult {
        PhaseResult {
            phase,
            transcript: "Presiding Judge: Noted.".into(),
        }
    }

    #[test]
    fn current_run_responses_update_the_session() {
        let mut ui = UiState::default();
        let run_id = ui.session.begin_run();

        apply_response(
            &mut ui,
            EngineResponse::PhaseStarted {
                run_id,
                phase: Phase::Deliberation,
            },
        );
        assert_eq!(ui.active_tab, Phase::Deliberation);
        assert_eq!(ui.session.phase(Phase::Deliberation), &PhaseStatus::Running);

        apply_response(
            &mut ui,
            EngineResponse::PhaseCompleted {
                run_id,
                result: done(Phase::Deliberation),
            },
        );
        apply_response(&mut ui, EngineResponse::TrialFinished { run_id });

        assert_eq!(
            ui.session.phase(Phase::Deliberation),
            &PhaseStatus::Done(done(Phase::Deliberation))
        );
        assert!(!ui.session.running);
    }

    #[test]
    fn responses_after_reset_are_ignored() {
        let mut ui = UiState::default();
        let run_id = ui.session.begin_run();
        ui.session.reset();

        apply_response(
            &mut ui,
            EngineResponse::PhaseCompleted {
                run_id,
                result: done(Phase::Arguments),
            },
        );

        assert_eq!(ui.session.phase(Phase::Arguments), &PhaseStatus::Pending);
        assert!(!ui.session.has_results());
    }

    #[test]
    fn failure_switches_to_the_failed_phase() {
        let mut ui = UiState::default();
        let run_id = ui.session.begin_run();

        apply_response(
            &mut ui,
            EngineResponse::TrialFailed {
                run_id,
                phase: Phase::Arguments,
                message: "arguments phase failed: request failed".into(),
            },
        );

        assert_eq!(ui.active_tab, Phase::Arguments);
        assert_eq!(ui.session.phase(Phase::Verdict), &PhaseStatus::NotReached);
        assert!(!ui.session.running);
    }
}
