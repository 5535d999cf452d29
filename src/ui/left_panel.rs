use eframe::egui;

use crate::engine::protocol::EngineCommand;
use crate::model::case::EXAMPLE_CASES;
use crate::model::message::SpeakerRole;
use crate::ui::app::CourtApp;

const NO_EXAMPLE: &str = "Select an example...";

pub fn draw_left_panel(ctx: &egui::Context, app: &mut CourtApp) {
    egui::SidePanel::left("left")
        .resizable(true)
        .default_width(280.0)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                draw_examples(ui, app);
                ui.separator();
                draw_instructions(ui);
                ui.separator();
                draw_connection(ui, app);
                ui.separator();
                draw_appearance(ui, app);
            });
        });
}

/* =========================
   Example cases
   ========================= */

fn draw_examples(ui: &mut egui::Ui, app: &mut CourtApp) {
    ui.heading("Example Supreme Court Cases");

    let session = &mut app.ui.session;
    let selected = session.selected_example;

    let selected_text = selected
        .and_then(|i| EXAMPLE_CASES.get(i))
        .map(|c| c.title)
        .unwrap_or(NO_EXAMPLE);

    // Every click reloads, so picking the same case again undoes edits.
    egui::ComboBox::from_label("Load example case")
        .selected_text(selected_text)
        .width(ui.available_width() - 20.0)
        .show_ui(ui, |ui| {
            if ui.selectable_label(selected.is_none(), NO_EXAMPLE).clicked() {
                session.selected_example = None;
            }
            for (i, case) in EXAMPLE_CASES.iter().enumerate() {
                if ui.selectable_label(selected == Some(i), case.title).clicked() {
                    tracing::debug!(example = case.title, "example case loaded");
                    session.load_example(i);
                }
            }
        });
}

fn draw_instructions(ui: &mut egui::Ui) {
    ui.label(egui::RichText::new("Instructions").strong());
    ui.label(
        "Paste or select a case summary. The AI will simulate a Supreme Court hearing \
         with arguments, jury deliberation, and verdict.",
    );
}

/* =========================
   Backend
   ========================= */

fn draw_connection(ui: &mut egui::Ui, app: &mut CourtApp) {
    ui.label(egui::RichText::new("Backend").strong());

    let checking = app.ui.checking_connection;
    if ui
        .add_enabled(!checking, egui::Button::new("Test connection"))
        .clicked()
    {
        app.ui.checking_connection = true;
        app.ui.connection_status = None;
        app.send_command(EngineCommand::TestConnection);
    }

    if checking {
        ui.spinner();
    }

    match &app.ui.connection_status {
        Some(Ok(status)) => {
            ui.colored_label(egui::Color32::from_rgb(60, 160, 60), status.as_str());
        }
        Some(Err(e)) => {
            ui.colored_label(egui::Color32::from_rgb(200, 60, 60), e.as_str());
        }
        None => {}
    }
}

/* =========================
   Appearance
   ========================= */

fn draw_appearance(ui: &mut egui::Ui, app: &mut CourtApp) {
    let settings = &mut app.ui.settings;

    ui.collapsing("Appearance", |ui| {
        ui.label("UI Scale");
        ui.add(egui::Slider::new(&mut settings.ui_scale, 0.75..=2.0));

        ui.separator();

        for role in SpeakerRole::ALL {
            ui.horizontal(|ui| {
                ui.color_edit_button_srgba(settings.color_mut(role));
                ui.label(role.display_name());
            });
        }

        if ui.button("Reset colors").clicked() {
            settings.reset_colors();
        }
    });
}
