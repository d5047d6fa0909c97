//! Network actor - performs contact form sends in the Tokio async runtime

use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::messages::{NetworkCommand, NetworkResponse};
use crate::network::sender::EmailSender;

/// Network actor that turns send commands into exactly one outbound call each
pub struct NetworkActor {
    sender: Arc<dyn EmailSender>,
    response_tx: mpsc::UnboundedSender<NetworkResponse>,
    active_sends: JoinSet<()>,
}

impl NetworkActor {
    pub fn new(
        sender: Arc<dyn EmailSender>,
        response_tx: mpsc::UnboundedSender<NetworkResponse>,
    ) -> Self {
        NetworkActor {
            sender,
            response_tx,
            active_sends: JoinSet::new(),
        }
    }

    /// Run the network actor message loop
    pub async fn run(mut self, mut cmd_rx: mpsc::UnboundedReceiver<NetworkCommand>) {
        loop {
            tokio::select! {
                biased;

                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(NetworkCommand::SendEmail { id, payload }) => {
                            let response_tx = self.response_tx.clone();
                            let sender = Arc::clone(&self.sender);

                            // Not cancellable; shutdown waits for it below
                            self.active_sends.spawn(async move {
                                tracing::info!(id, "Sending contact form");
                                let start = Instant::now();
                                let result = sender.send(&payload).await;
                                let time_ms = start.elapsed().as_millis() as u64;

                                let response = match result {
                                    Ok(()) => {
                                        tracing::info!(id, time_ms, "Contact form delivered");
                                        NetworkResponse::Sent { id, time_ms }
                                    }
                                    Err(e) => {
                                        tracing::warn!(id, time_ms, error = %e, "Contact form delivery failed");
                                        NetworkResponse::Failed {
                                            id,
                                            message: e.to_string(),
                                            time_ms,
                                        }
                                    }
                                };
                                let _ = response_tx.send(response);
                            });
                        }

                        Some(NetworkCommand::Shutdown) | None => break,
                    }
                }

                // Reap finished sends
                Some(_result) = self.active_sends.join_next() => {}
            }
        }

        // Let in-flight sends finish and report before the actor goes away
        while self.active_sends.join_next().await.is_some() {}
    }
}
