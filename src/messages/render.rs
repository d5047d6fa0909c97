//! Render state - data structure sent from App layer to UI for rendering

use chrono::{DateTime, Local};

use crate::messages::ui_events::{Focus, InputMode};
use crate::models::FormPayload;
use crate::status::SubmissionStatus;
use crate::validation::ValidationErrors;

/// Complete state needed by the UI to render
#[derive(Debug, Clone, Default)]
pub struct RenderState {
    // Form data
    pub payload: FormPayload,
    pub errors: ValidationErrors,

    // UI state
    pub focus: Focus,
    pub input_mode: InputMode,
    pub cursor_position: usize,

    // Submission
    pub is_submitting: bool,
    pub status: SubmissionStatus,
    pub status_changed_at: Option<DateTime<Local>>,
    /// Round-trip time of the last completed send
    pub last_send_ms: Option<u64>,

    // Popups
    pub show_help: bool,
}
