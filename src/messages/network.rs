//! Network messages - communication between App and Network layers

use crate::models::FormPayload;

/// Commands sent from App layer to Network layer
#[derive(Debug, Clone, PartialEq)]
pub enum NetworkCommand {
    /// Deliver one contact form submission
    SendEmail { id: u64, payload: FormPayload },

    /// Shutdown the network actor
    Shutdown,
}

/// Responses sent from Network layer to App layer
#[derive(Debug, Clone, PartialEq)]
pub enum NetworkResponse {
    /// The email service accepted the message
    Sent { id: u64, time_ms: u64 },
    /// The send failed for any reason
    Failed {
        id: u64,
        message: String,
        time_ms: u64,
    },
}

impl NetworkResponse {
    /// Get the submission ID from the response
    pub fn id(&self) -> u64 {
        match self {
            NetworkResponse::Sent { id, .. } => *id,
            NetworkResponse::Failed { id, .. } => *id,
        }
    }
}
