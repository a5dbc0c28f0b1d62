// src/gui/components/toolbar.rs

use eframe::egui;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.label("Source:");
        ui.add(
            egui::TextEdit::singleline(&mut app.state.gui.source_text)
                .font(egui::TextStyle::Monospace)
                .hint_text("page name or saved .html"),
        );

        if ui.button("Load").clicked() {
            logd!("UI: Load clicked");
            app.load();
        }

        // Copy only opens the prompt; the clipboard is touched on agree.
        let have_records = !app.records.is_empty();
        if ui.add_enabled(have_records, egui::Button::new("Copy")).clicked() {
            app.state.gui.confirm_open = true;
            logd!("UI: confirm prompt opened");
        }

        ui.label(format!("Status: {}", app.status));
    });
}
