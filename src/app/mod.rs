//! App layer - owns the form and drives the submission state machine
//!
//! The App actor receives UI events and network responses, updates the
//! form state, and emits send commands and render snapshots.

pub mod state;
pub mod actor;
pub mod commands;

pub use state::AppState;
pub use actor::AppActor;
