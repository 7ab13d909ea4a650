//! View state for rendering.
//!
//! This struct groups all state related to rendering and UI display,
//! separating it from the game session.

use std::time::Instant;

use super::ModalEffect;

/// UI configuration options derived from config/environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct UiOptions {
    pub ascii_only: bool,
    pub high_contrast: bool,
    pub reduced_motion: bool,
}

/// State related to rendering and UI display.
#[derive(Debug)]
pub struct ViewState {
    /// Active modal animation effect.
    pub modal_effect: Option<ModalEffect>,
    /// UI options (theme, motion, glyphs).
    pub ui_options: UiOptions,
    /// Timestamp of last frame (for animation timing).
    pub last_frame: Instant,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            modal_effect: None,
            ui_options: UiOptions::default(),
            last_frame: Instant::now(),
        }
    }
}

impl ViewState {
    #[must_use]
    pub fn new(ui_options: UiOptions) -> Self {
        Self {
            ui_options,
            ..Self::default()
        }
    }
}
