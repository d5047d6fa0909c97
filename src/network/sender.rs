//! Outbound send boundary
//!
//! The network actor only knows this trait, so tests can swap the EmailJS
//! client for an in-memory recorder.

use async_trait::async_trait;

use crate::error::SendError;
use crate::models::FormPayload;

/// Delivers one contact form submission
#[async_trait]
pub trait EmailSender: Send + Sync {
    /// Send the payload. Resolves once the service has accepted or
    /// rejected it; there is no retry.
    async fn send(&self, payload: &FormPayload) -> Result<(), SendError>;
}
