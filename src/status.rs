use crate::constants::{MSG_ERROR, MSG_SENDING, MSG_SUCCESS};

/// Progress/outcome of the latest submission attempt
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

impl SubmissionStatus {
    /// Banner text; `None` while idle
    pub fn message(&self) -> Option<&'static str> {
        match self {
            SubmissionStatus::Idle => None,
            SubmissionStatus::Loading => Some(MSG_SENDING),
            SubmissionStatus::Success => Some(MSG_SUCCESS),
            SubmissionStatus::Error => Some(MSG_ERROR),
        }
    }
}
