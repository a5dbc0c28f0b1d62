// src/config/state.rs
use super::options::AppOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Text of the source field (page name or saved HTML path)
    pub source_text: String,

    /// Whether the agree/cancel prompt is on screen
    pub confirm_open: bool,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            source_text: s!(),
            confirm_open: false,
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            options: AppOptions::default(),
            gui: GuiState::default(),
        }
    }
}
