use eframe::egui;

use crate::engine::protocol::EngineCommand;
use crate::model::case::CaseSummary;
use crate::model::phase::{Phase, PhaseResult};
use crate::model::session::PhaseStatus;
use crate::ui::app::{bubble, CourtApp};
use crate::ui::phase_view::{phase_blocks, Block};
use crate::ui::settings::UiSettings;

pub fn draw_center_panel(ctx: &egui::Context, app: &mut CourtApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading("Agent of Justice - Supreme Court Simulation");
        ui.add_space(6.0);

        draw_case_input(ui, app);

        ui.separator();

        if app.ui.session.running || app.ui.session.has_results() {
            draw_phase_tabs(ui, app);
        }
    });
}

/* =========================
   Case input
   ========================= */

fn draw_case_input(ui: &mut egui::Ui, app: &mut CourtApp) {
    ui.label("Case Summary");
    ui.add_sized(
        [ui.available_width(), 220.0],
        egui::TextEdit::multiline(&mut app.ui.session.case_text)
            .hint_text("Paste full judgment or case summary here..."),
    );

    let mut start = false;
    let mut clear = false;

    ui.columns(2, |cols| {
        let running = app.ui.session.running;
        let start_button = egui::Button::new("Start Simulation")
            .min_size(egui::vec2(cols[0].available_width(), 28.0));
        start = cols[0].add_enabled(!running, start_button).clicked();

        let clear_button =
            egui::Button::new("Clear").min_size(egui::vec2(cols[1].available_width(), 28.0));
        clear = cols[1].add(clear_button).clicked();
    });

    if clear {
        tracing::info!("session reset");
        app.ui.session.reset();
        app.ui.active_tab = Phase::Arguments;
        return;
    }

    if start {
        start_trial(app);
    }

    if let Some(warning) = &app.ui.session.input_warning {
        ui.colored_label(egui::Color32::from_rgb(220, 160, 40), warning.as_str());
    }
}

fn start_trial(app: &mut CourtApp) {
    match CaseSummary::new(&app.ui.session.case_text) {
        Ok(case) => {
            let run_id = app.ui.session.begin_run();
            app.ui.active_tab = Phase::Arguments;
            app.send_command(EngineCommand::StartTrial { run_id, case });
        }
        Err(e) => {
            tracing::warn!("start requested with a blank case summary");
            app.ui.session.input_warning = Some(e.to_string());
        }
    }
}

/* =========================
   Phase panels
   ========================= */

fn draw_phase_tabs(ui: &mut egui::Ui, app: &mut CourtApp) {
    ui.horizontal(|ui| {
        for phase in Phase::ALL {
            ui.selectable_value(&mut app.ui.active_tab, phase, phase.tab_title());
        }
    });

    ui.separator();

    let phase = app.ui.active_tab;
    let settings = &app.ui.settings;

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| match app.ui.session.phase(phase) {
            PhaseStatus::Pending if phase == Phase::Arguments && app.ui.session.running => {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("Waiting for the backend...");
                });
            }
            PhaseStatus::Pending => {
                ui.label("Waiting for earlier phases.");
            }
            PhaseStatus::Running => {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label(phase.progress_label());
                });
            }
            PhaseStatus::Done(result) => draw_transcript(ui, settings, result),
            PhaseStatus::Failed(message) => {
                ui.colored_label(egui::Color32::from_rgb(200, 60, 60), "This phase did not complete.");
                ui.label(message.as_str());
            }
            PhaseStatus::NotReached => {
                ui.label("Not reached: an earlier phase failed.");
            }
        });
}

fn draw_transcript(ui: &mut egui::Ui, settings: &UiSettings, result: &PhaseResult) {
    for block in phase_blocks(result) {
        match block {
            Block::Heading(heading) => {
                ui.label(egui::RichText::new(heading).heading().strong());
            }
            Block::Speaker { label, role, text } => {
                ui.add_space(6.0);
                bubble(ui, settings.color(role), &label, &text);
            }
            Block::Continuation(line) => {
                ui.label(line);
            }
        }
    }
}
