//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::models::Field;

/// Events generated from user input in the UI layer
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    // Focus navigation
    NextField,
    PrevField,

    // Input editing
    StartEditing,
    StopEditing,
    CharInput(char),
    Backspace,
    CursorLeft,
    CursorRight,

    // Form actions
    Submit,

    // Popups
    ToggleHelp,
    CloseHelp,

    // System
    Quit,
}

/// Focusable element on the form
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Focus {
    #[default]
    FullName,
    Email,
    Message,
    Submit,
}

impl Focus {
    pub fn next(&self) -> Focus {
        match self {
            Focus::FullName => Focus::Email,
            Focus::Email => Focus::Message,
            Focus::Message => Focus::Submit,
            Focus::Submit => Focus::FullName,
        }
    }

    pub fn prev(&self) -> Focus {
        match self {
            Focus::FullName => Focus::Submit,
            Focus::Email => Focus::FullName,
            Focus::Message => Focus::Email,
            Focus::Submit => Focus::Message,
        }
    }

    /// The input field under focus, if any
    pub fn field(&self) -> Option<Field> {
        match self {
            Focus::FullName => Some(Field::FullName),
            Focus::Email => Some(Field::Email),
            Focus::Message => Some(Field::Message),
            Focus::Submit => None,
        }
    }
}

impl From<Field> for Focus {
    fn from(field: Field) -> Self {
        match field {
            Field::FullName => Focus::FullName,
            Field::Email => Focus::Email,
            Field::Message => Focus::Message,
        }
    }
}

/// Input mode
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Editing,
}

/// Convert a key event to a UiEvent based on current UI context
pub fn key_to_ui_event(
    key: KeyEvent,
    focus: Focus,
    input_mode: InputMode,
    show_help: bool,
) -> Option<UiEvent> {
    use crossterm::event::KeyEventKind;

    if key.kind != KeyEventKind::Press {
        return None;
    }

    // Global Ctrl shortcuts; other chords never type. Ctrl+Alt is AltGr.
    if key.modifiers.contains(KeyModifiers::CONTROL) && !key.modifiers.contains(KeyModifiers::ALT) {
        return match key.code {
            KeyCode::Char('c') => Some(UiEvent::Quit),
            _ if show_help => Some(UiEvent::CloseHelp),
            KeyCode::Char('s') => Some(UiEvent::Submit),
            _ => None,
        };
    }

    if show_help {
        return Some(UiEvent::CloseHelp);
    }

    match input_mode {
        InputMode::Normal => match key.code {
            KeyCode::Char('q') => Some(UiEvent::Quit),
            KeyCode::Char('?') => Some(UiEvent::ToggleHelp),
            KeyCode::Tab | KeyCode::Down => Some(UiEvent::NextField),
            KeyCode::BackTab | KeyCode::Up => Some(UiEvent::PrevField),
            KeyCode::Char('s') => Some(UiEvent::Submit),
            KeyCode::Char('e') | KeyCode::Enter => match focus {
                Focus::Submit => Some(UiEvent::Submit),
                _ => Some(UiEvent::StartEditing),
            },
            _ => None,
        },
        InputMode::Editing => match key.code {
            KeyCode::Esc => Some(UiEvent::StopEditing),
            KeyCode::Left => Some(UiEvent::CursorLeft),
            KeyCode::Right => Some(UiEvent::CursorRight),
            KeyCode::Backspace => Some(UiEvent::Backspace),
            KeyCode::Tab => Some(UiEvent::NextField),
            KeyCode::BackTab => Some(UiEvent::PrevField),
            KeyCode::Enter => {
                if focus == Focus::Message {
                    Some(UiEvent::CharInput('\n'))
                } else {
                    Some(UiEvent::StopEditing)
                }
            }
            KeyCode::Char(c) => Some(UiEvent::CharInput(c)),
            _ => None,
        },
    }
}
