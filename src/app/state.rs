//! App state - pure data structure with no I/O logic

use chrono::{DateTime, Local};

use crate::messages::ui_events::{Focus, InputMode};
use crate::messages::RenderState;
use crate::models::FormPayload;
use crate::status::SubmissionStatus;
use crate::validation::ValidationErrors;

/// Main application state - pure data, no I/O
#[derive(Debug)]
pub struct AppState {
    // Form data
    pub payload: FormPayload,
    pub errors: ValidationErrors,
    /// Set by the first submit attempt; edits re-validate from then on
    pub submit_attempted: bool,

    // UI state
    pub focus: Focus,
    pub input_mode: InputMode,
    pub cursor_position: usize,

    // Submission
    pub is_submitting: bool,
    pub status: SubmissionStatus,
    pub status_changed_at: Option<DateTime<Local>>,
    pub last_send_ms: Option<u64>,
    pub next_request_id: u64,
    pub pending_request_id: Option<u64>,

    // Popups
    pub show_help: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        AppState {
            payload: FormPayload::default(),
            errors: ValidationErrors::new(),
            submit_attempted: false,
            focus: Focus::FullName,
            input_mode: InputMode::Normal,
            cursor_position: 0,
            is_submitting: false,
            status: SubmissionStatus::Idle,
            status_changed_at: None,
            last_send_ms: None,
            next_request_id: 1,
            pending_request_id: None,
            show_help: false,
        }
    }

    /// Generate a unique submission ID
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    /// Replace the banner status and stamp it
    pub fn set_status(&mut self, status: SubmissionStatus) {
        self.status = status;
        self.status_changed_at = Some(Local::now());
    }

    /// Content of the focused input, empty on the submit control
    pub fn current_input(&self) -> &str {
        match self.focus.field() {
            Some(field) => self.payload.get(field),
            None => "",
        }
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        RenderState {
            payload: self.payload.clone(),
            errors: self.errors.clone(),
            focus: self.focus,
            input_mode: self.input_mode,
            cursor_position: self.cursor_position,
            is_submitting: self.is_submitting,
            status: self.status,
            status_changed_at: self.status_changed_at,
            last_send_ms: self.last_send_ms,
            show_help: self.show_help,
        }
    }
}
