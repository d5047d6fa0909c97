//! Channel message types.
//!
//! Key presses become [`UiEvent`]s for the App actor, submissions travel to the
//! Network actor as [`NetworkCommand`]s and come back as [`NetworkResponse`]s,
//! and every state change is pushed to the terminal loop as a [`RenderState`].

pub mod ui_events;
pub mod network;
pub mod render;

pub use ui_events::{Focus, InputMode, UiEvent};
pub use network::{NetworkCommand, NetworkResponse};
pub use render::RenderState;
