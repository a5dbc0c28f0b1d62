// src/gui/components/data_table.rs
//
// Draws the record preview table. Purely a view over App::records.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};
use crate::gui::app::App;

const HEADERS: [&str; 3] = ["Title", "Class", "Teacher"];
const WIDTHS: [f32; 3] = [280.0, 200.0, 140.0];

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let mut table = TableBuilder::new(ui)
        .striped(true)
        .min_scrolled_height(0.0);
    for w in WIDTHS {
        table = table.column(Column::initial(w).resizable(true).clip(true).at_least(20.0));
    }

    table
        .header(24.0, |mut header| {
            for h in HEADERS {
                header.col(|ui| {
                    ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
                        ui.add(egui::Label::new(RichText::new(h).strong()).selectable(false));
                    });
                });
            }
        })
        .body(|body| {
            body.rows(20.0, app.records.len(), |mut row| {
                let ix = row.index();
                if let Some(r) = app.records.get(ix) {
                    for cell in [&r.title, &r.class_name, &r.teacher_name] {
                        row.col(|ui| {
                            ui.scope(|ui| {
                                ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                                ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
                                    ui.label(cell);
                                });
                            });
                        });
                    }
                }
            });
        });
}
