// src/gui/app.rs
use std::error::Error;

use eframe::egui;

use crate::{
    config::{options::DocSource, state::AppState},
    scrape,
    specs::textbooks::TextbookRecord,
};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Co-op Textbook Clipper",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // records shown in the preview table; refreshed only by Load
    pub records: Vec<TextbookRecord>,

    // status line (everything runs on the UI thread, no lock needed)
    pub status: String,
}

impl App {
    pub fn new(state: AppState) -> Self {
        logf!("Init: shape v{}", crate::specs::textbooks::SHAPE.version);
        Self {
            state,
            records: Vec::new(),
            status: s!("Idle"),
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn status<T: Into<String>>(&mut self, msg: T) {
        self.status = msg.into();
    }

    /// Re-scrape the source named in the source field. Synchronous: one
    /// document, one linear pass. The parsed source lands in the options and
    /// the scrape reads it from there.
    pub fn load(&mut self) {
        self.state.options.source = DocSource::parse(&self.state.gui.source_text);
        logf!("Load: source={:?}", self.state.options.source);

        match scrape::run(&self.state.options.source, None) {
            Ok(records) => {
                self.status(format!("{} record(s)", records.len()));
                self.records = records;
            }
            Err(e) => {
                loge!("Load: {}", e);
                self.status(format!("Error: {e}"));
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            crate::gui::components::toolbar::draw(ui, self);

            ui.separator();

            crate::gui::components::data_table::draw(ui, self);
        });

        // Drawn last so the prompt overlays the panel
        crate::gui::components::confirm::draw(ctx, self);
    }
}

// ── Tests ──
