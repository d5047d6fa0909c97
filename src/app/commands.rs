//! Command handlers - business logic for processing UI events

use crate::app::AppState;
use crate::messages::ui_events::InputMode;
use crate::messages::{NetworkCommand, NetworkResponse};
use crate::status::SubmissionStatus;
use crate::validation::{validate, validate_field};

impl AppState {
    // ========================
    // Navigation
    // ========================

    pub fn next_field(&mut self) {
        self.focus = self.focus.next();
        self.after_focus_change();
    }

    pub fn prev_field(&mut self) {
        self.focus = self.focus.prev();
        self.after_focus_change();
    }

    /// Keep editing across fields; the submit control cannot be edited
    fn after_focus_change(&mut self) {
        if self.input_mode == InputMode::Editing {
            if self.focus.field().is_some() {
                self.cursor_position = self.current_input().len();
            } else {
                self.stop_editing();
            }
        }
    }

    // ========================
    // Input editing
    // ========================

    pub fn start_editing(&mut self) {
        if self.focus.field().is_some() {
            self.input_mode = InputMode::Editing;
            self.cursor_position = self.current_input().len();
        }
    }

    pub fn stop_editing(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn move_cursor_left(&mut self) {
        let input = self.current_input();
        if self.cursor_position > 0 {
            let new_pos = input[..self.cursor_position]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.cursor_position = new_pos;
        }
    }

    pub fn move_cursor_right(&mut self) {
        let input = self.current_input();
        if self.cursor_position < input.len() {
            let new_pos = input[self.cursor_position..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor_position + i)
                .unwrap_or(input.len());
            self.cursor_position = new_pos;
        }
    }

    pub fn enter_char(&mut self, c: char) {
        let Some(field) = self.focus.field() else {
            return;
        };
        if c == '\n' && !field.is_multiline() {
            return;
        }
        let cursor_pos = self.cursor_position;
        let input = self.payload.get_mut(field);
        if cursor_pos <= input.len() {
            input.insert(cursor_pos, c);
            self.cursor_position = cursor_pos + c.len_utf8();
            self.revalidate_focused();
        }
    }

    pub fn delete_char(&mut self) {
        let Some(field) = self.focus.field() else {
            return;
        };
        if self.cursor_position > 0 {
            let cursor_pos = self.cursor_position;
            let input = self.payload.get_mut(field);
            let prev_pos = input[..cursor_pos]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
            input.remove(prev_pos);
            self.cursor_position = prev_pos;
            self.revalidate_focused();
        }
    }

    /// Once a submit has been attempted, each edit re-checks its field
    fn revalidate_focused(&mut self) {
        if !self.submit_attempted {
            return;
        }
        if let Some(field) = self.focus.field() {
            let error = validate_field(field, self.payload.get(field));
            self.errors.set(field, error);
        }
    }

    // ========================
    // Submission
    // ========================

    /// Validate and, if everything passes, produce the one send command.
    ///
    /// Returns `None` while a send is already in flight or when validation
    /// fails; in the latter case the errors are shown inline and focus
    /// jumps to the first invalid field.
    pub fn submit(&mut self) -> Option<NetworkCommand> {
        if self.is_submitting {
            tracing::debug!("Submit ignored, send already in flight");
            return None;
        }

        self.submit_attempted = true;

        if let Err(errors) = validate(&self.payload) {
            tracing::info!(invalid = errors.len(), "Contact form failed validation");
            if let Some(first) = errors.first() {
                self.focus = first.into();
                if self.input_mode == InputMode::Editing {
                    self.cursor_position = self.current_input().len();
                }
            }
            self.errors = errors;
            return None;
        }

        self.errors.clear();
        let id = self.next_id();
        self.pending_request_id = Some(id);
        self.is_submitting = true;
        self.set_status(SubmissionStatus::Loading);

        tracing::info!(id, "Submitting contact form");
        Some(NetworkCommand::SendEmail {
            id,
            payload: self.payload.clone(),
        })
    }

    /// Handle a network response
    pub fn handle_response(&mut self, response: NetworkResponse) {
        let response_id = response.id();
        if self.pending_request_id != Some(response_id) {
            tracing::debug!(id = response_id, "Ignoring response for stale submission");
            return;
        }

        self.pending_request_id = None;
        self.is_submitting = false;

        match response {
            NetworkResponse::Sent { time_ms, .. } => {
                self.last_send_ms = Some(time_ms);
                self.set_status(SubmissionStatus::Success);
                self.payload.clear();
                self.errors.clear();
                self.submit_attempted = false;
                self.cursor_position = 0;
            }
            NetworkResponse::Failed { message, time_ms, .. } => {
                tracing::warn!(id = response_id, error = %message, "Contact form send failed");
                self.last_send_ms = Some(time_ms);
                self.set_status(SubmissionStatus::Error);
            }
        }
    }

    // ========================
    // Popups
    // ========================

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::ui_events::Focus;
    use crate::models::{Field, FormPayload};

    fn state_with(name: &str, email: &str, message: &str) -> AppState {
        let mut state = AppState::new();
        state.payload = FormPayload::new(name, email, message);
        state
    }

    fn type_str(state: &mut AppState, text: &str) {
        for c in text.chars() {
            state.enter_char(c);
        }
    }

    #[test]
    fn test_missing_name_blocks_submit() {
        let mut state = state_with("", "a@b.com", "hi");
        assert!(state.submit().is_none());
        assert_eq!(state.errors.len(), 1);
        assert_eq!(
            state.errors.get(Field::FullName).map(|e| e.message()),
            Some("Name is required")
        );
        assert_eq!(state.status, SubmissionStatus::Idle);
        assert!(!state.is_submitting);
    }

    #[test]
    fn test_invalid_email_blocks_submit() {
        let mut state = state_with("Jo", "not-an-email", "hi");
        state.focus = Focus::Submit;
        assert!(state.submit().is_none());
        assert_eq!(
            state.errors.get(Field::Email).map(|e| e.message()),
            Some("Please enter a valid email")
        );
        assert_eq!(state.focus, Focus::Email);
    }

    #[test]
    fn test_valid_submit_emits_one_command() {
        let mut state = state_with("Jo", "jo@example.com", "hello");
        let cmd = state.submit();
        assert_eq!(
            cmd,
            Some(NetworkCommand::SendEmail {
                id: 1,
                payload: FormPayload::new("Jo", "jo@example.com", "hello"),
            })
        );
        assert!(state.is_submitting);
        assert_eq!(state.status, SubmissionStatus::Loading);
        assert_eq!(state.pending_request_id, Some(1));
    }

    #[test]
    fn test_reentrant_submit_is_ignored() {
        let mut state = state_with("Jo", "jo@example.com", "hello");
        assert!(state.submit().is_some());
        assert!(state.submit().is_none());
        assert!(state.submit().is_none());
        assert_eq!(state.pending_request_id, Some(1));
        assert_eq!(state.next_request_id, 2);
    }

    #[test]
    fn test_success_clears_fields() {
        let mut state = state_with("Jo", "jo@example.com", "hello");
        state.submit();
        state.handle_response(NetworkResponse::Sent { id: 1, time_ms: 42 });

        assert_eq!(state.status, SubmissionStatus::Success);
        assert!(state.payload.is_empty());
        assert!(state.errors.is_empty());
        assert!(!state.is_submitting);
        assert!(!state.submit_attempted);
        assert_eq!(state.last_send_ms, Some(42));
    }

    #[test]
    fn test_failure_keeps_fields_and_allows_retry() {
        let mut state = state_with("Jo", "jo@example.com", "hello");
        state.submit();
        state.handle_response(NetworkResponse::Failed {
            id: 1,
            message: String::from("boom"),
            time_ms: 5,
        });

        assert_eq!(state.status, SubmissionStatus::Error);
        assert_eq!(state.payload, FormPayload::new("Jo", "jo@example.com", "hello"));
        assert!(!state.is_submitting);

        match state.submit() {
            Some(NetworkCommand::SendEmail { id, .. }) => assert_eq!(id, 2),
            other => panic!("expected retry command, got {:?}", other),
        }
        assert_eq!(state.status, SubmissionStatus::Loading);
    }

    #[test]
    fn test_stale_response_ignored() {
        let mut state = state_with("Jo", "jo@example.com", "hello");
        state.submit();
        state.handle_response(NetworkResponse::Sent { id: 99, time_ms: 1 });
        assert!(state.is_submitting);
        assert_eq!(state.status, SubmissionStatus::Loading);
    }

    #[test]
    fn test_failed_validation_keeps_previous_banner() {
        let mut state = state_with("Jo", "jo@example.com", "hello");
        state.submit();
        state.handle_response(NetworkResponse::Sent { id: 1, time_ms: 1 });
        assert!(state.submit().is_none());
        assert_eq!(state.status, SubmissionStatus::Success);
        assert_eq!(state.errors.len(), 3);
    }

    #[test]
    fn test_no_errors_before_first_submit() {
        let mut state = AppState::new();
        state.start_editing();
        type_str(&mut state, "x");
        state.delete_char();
        assert!(state.errors.is_empty());
    }

    #[test]
    fn test_edit_revalidates_after_submit() {
        let mut state = state_with("", "bad", "hi");
        state.submit();
        assert_eq!(state.errors.len(), 2);

        // Focus moved to the name field, the first invalid one
        state.start_editing();
        type_str(&mut state, "Jo");
        assert_eq!(state.errors.get(Field::FullName), None);

        state.next_field();
        type_str(&mut state, "@example.com");
        assert_eq!(state.payload.user_email, "bad@example.com");
        assert!(state.errors.is_empty());

        // Deleting back into an invalid shape shows the error again
        for _ in 0.."@example.com".len() {
            state.delete_char();
        }
        assert_eq!(
            state.errors.get(Field::Email).map(|e| e.message()),
            Some("Please enter a valid email")
        );
    }

    #[test]
    fn test_cursor_handles_multibyte() {
        let mut state = AppState::new();
        state.start_editing();
        type_str(&mut state, "Zoë");
        state.move_cursor_left();
        state.move_cursor_left();
        state.enter_char('-');
        assert_eq!(state.payload.user_name, "Z-oë");
        state.move_cursor_right();
        state.move_cursor_right();
        state.delete_char();
        assert_eq!(state.payload.user_name, "Z-o");
    }

    #[test]
    fn test_newline_only_in_message() {
        let mut state = AppState::new();
        state.start_editing();
        state.enter_char('\n');
        assert!(state.payload.user_name.is_empty());

        state.focus = Focus::Message;
        state.start_editing();
        type_str(&mut state, "a\nb");
        assert_eq!(state.payload.message, "a\nb");
    }

    #[test]
    fn test_tab_to_submit_stops_editing() {
        let mut state = AppState::new();
        state.focus = Focus::Message;
        state.start_editing();
        state.next_field();
        assert_eq!(state.focus, Focus::Submit);
        assert_eq!(state.input_mode, InputMode::Normal);
        state.start_editing();
        assert_eq!(state.input_mode, InputMode::Normal);
    }
}
