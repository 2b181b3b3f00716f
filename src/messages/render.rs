//! Render state - data structure sent from App layer to UI for rendering

use crate::messages::ui_events::InputMode;
use crate::notification::Notification;

/// Complete state needed by the UI to render
#[derive(Debug, Clone, Default)]
pub struct RenderState {
    pub contacts: Vec<String>,
    pub selected: Option<usize>,

    // Input field
    pub input: String,
    pub cursor_position: usize,
    pub input_mode: InputMode,

    /// Notification currently on screen
    pub notification: Option<Notification>,

    // Popups
    pub show_help: bool,
}
