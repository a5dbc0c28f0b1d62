// src/gui/components/confirm.rs
//
// Modal agree/cancel prompt shown before anything reaches the clipboard.
// Cancel closes the prompt and nothing else happens.

use eframe::egui;
use crate::{clip, config::consts::CONFIRM_MESSAGE, gui::app::App};

pub fn draw(ctx: &egui::Context, app: &mut App) {
    if !app.state.gui.confirm_open {
        return;
    }

    let mut agree = false;
    let mut cancel = false;

    egui::Window::new("Copy to clipboard")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            ui.label(CONFIRM_MESSAGE);
            ui.separator();
            ui.horizontal(|ui| {
                if ui.button("Agree and copy").clicked() {
                    agree = true;
                }
                if ui.button("Cancel").clicked() {
                    cancel = true;
                }
            });
        });

    if agree {
        let txt = clip::to_clip_string(&app.records);
        ctx.copy_text(txt);
        logf!("Copy: {} record(s) to clipboard", app.records.len());
        app.status("Copied to clipboard");
        app.state.gui.confirm_open = false;
    } else if cancel {
        logd!("Copy: canceled");
        app.status("Canceled");
        app.state.gui.confirm_open = false;
    }
}
