// src/clip.rs
// Serialization of extracted records and the clipboard-delivery boundary.

use std::error::Error;
use std::io::Write;

use crate::config::consts::FIELD_SEP;
use crate::specs::textbooks::TextbookRecord;

/// One line per record: `title, class name, teacher name`, newline-terminated.
/// The normalizers already stripped the commas that would collide with the
/// separator. Zero records serialize to the empty string.
pub fn to_clip_string(records: &[TextbookRecord]) -> String {
    let mut out = s!();
    for r in records {
        out.push_str(&r.title);
        out.push_str(FIELD_SEP);
        out.push_str(&r.class_name);
        out.push_str(FIELD_SEP);
        out.push_str(&r.teacher_name);
        out.push('\n');
    }
    out
}

/// Clipboard-write capability. The pipeline never talks to a real clipboard
/// itself; each shell injects whatever sink fits (the egui clipboard, stdout,
/// a test buffer).
pub trait ClipSink {
    fn write(&mut self, text: &str) -> Result<(), Box<dyn Error>>;
}

/// CLI sink: emit on stdout so the shell can pipe into xclip/pbcopy/clip.exe.
pub struct StdoutSink;

impl ClipSink for StdoutSink {
    fn write(&mut self, text: &str) -> Result<(), Box<dyn Error>> {
        let mut out = std::io::stdout().lock();
        out.write_all(text.as_bytes())?;
        out.flush()?;
        Ok(())
    }
}

/// Capturing sink for tests: records every delivered blob.
#[derive(Default)]
pub struct MemSink {
    pub delivered: Vec<String>,
}

impl ClipSink for MemSink {
    fn write(&mut self, text: &str) -> Result<(), Box<dyn Error>> {
        self.delivered.push(s!(text));
        Ok(())
    }
}

// ── Tests ──
