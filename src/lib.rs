//! # Contact Form TUI
//!
//! A terminal contact form that collects a name, email address and message,
//! validates them locally and delivers them through the EmailJS REST API.
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (form state machine: idle, loading, success, error)
//! - Network Layer (Tokio runtime, one outbound call per submission)

pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod validation;
pub mod status;
pub mod ui;
pub mod messages;
pub mod app;
pub mod network;

// Re-export commonly used types
pub use config::EmailJsConfig;
pub use error::{ConfigError, SendError};
pub use models::{Field, FormPayload};
pub use validation::{validate, validate_field, FieldError, ValidationErrors};
pub use status::SubmissionStatus;
pub use messages::{UiEvent, NetworkCommand, NetworkResponse, RenderState};
pub use app::{AppState, AppActor};
pub use network::{EmailJsClient, EmailSender, NetworkActor};
