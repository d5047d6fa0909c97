//! Network layer - contact form delivery
//!
//! The Network actor receives send commands, hands each payload to an
//! [`EmailSender`] and reports the outcome back to the App actor.

pub mod actor;
pub mod client;
pub mod sender;

pub use actor::NetworkActor;
pub use client::EmailJsClient;
pub use sender::EmailSender;
