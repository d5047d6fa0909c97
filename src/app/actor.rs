//! App actor - message loop processing UI events and network responses

use tokio::sync::mpsc;

use crate::app::state::AppState;
use crate::messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};

/// App actor that processes UI events and network responses
pub struct AppActor {
    state: AppState,
    network_tx: mpsc::UnboundedSender<NetworkCommand>,
    render_tx: mpsc::UnboundedSender<RenderState>,
}

impl AppActor {
    pub fn new(
        network_tx: mpsc::UnboundedSender<NetworkCommand>,
        render_tx: mpsc::UnboundedSender<RenderState>,
    ) -> Self {
        AppActor {
            state: AppState::new(),
            network_tx,
            render_tx,
        }
    }

    /// Run the actor message loop
    pub async fn run(
        mut self,
        mut ui_rx: mpsc::UnboundedReceiver<UiEvent>,
        mut net_rx: mpsc::UnboundedReceiver<NetworkResponse>,
    ) {
        // Send initial render state
        let _ = self.render_tx.send(self.state.to_render_state());

        loop {
            tokio::select! {
                Some(event) = ui_rx.recv() => {
                    if self.handle_ui_event(event) {
                        let _ = self.network_tx.send(NetworkCommand::Shutdown);
                        break;
                    }
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                Some(response) = net_rx.recv() => {
                    self.state.handle_response(response);
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                else => break,
            }
        }
    }

    /// Handle a UI event, returns true if quit was requested
    fn handle_ui_event(&mut self, event: UiEvent) -> bool {
        match event {
            UiEvent::NextField => self.state.next_field(),
            UiEvent::PrevField => self.state.prev_field(),

            UiEvent::StartEditing => self.state.start_editing(),
            UiEvent::StopEditing => self.state.stop_editing(),
            UiEvent::CharInput(c) => self.state.enter_char(c),
            UiEvent::Backspace => self.state.delete_char(),
            UiEvent::CursorLeft => self.state.move_cursor_left(),
            UiEvent::CursorRight => self.state.move_cursor_right(),

            UiEvent::Submit => {
                if let Some(cmd) = self.state.submit() {
                    let _ = self.network_tx.send(cmd);
                }
            }

            UiEvent::ToggleHelp => self.state.toggle_help(),
            UiEvent::CloseHelp => self.state.close_help(),

            UiEvent::Quit => return true,
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FormPayload;
    use crate::status::SubmissionStatus;

    /// Drain render states until one satisfies `pred`
    async fn wait_for<F>(rx: &mut mpsc::UnboundedReceiver<RenderState>, pred: F) -> RenderState
    where
        F: Fn(&RenderState) -> bool,
    {
        loop {
            let state = rx.recv().await.expect("render channel open");
            if pred(&state) {
                return state;
            }
        }
    }

    #[tokio::test]
    async fn test_submit_round_trip() {
        let (ui_tx, ui_rx) = mpsc::unbounded_channel();
        let (net_cmd_tx, mut net_cmd_rx) = mpsc::unbounded_channel();
        let (net_resp_tx, net_resp_rx) = mpsc::unbounded_channel();
        let (render_tx, mut render_rx) = mpsc::unbounded_channel();

        let handle = tokio::spawn(AppActor::new(net_cmd_tx, render_tx).run(ui_rx, net_resp_rx));

        ui_tx.send(UiEvent::StartEditing).unwrap();
        for c in "Jo".chars() {
            ui_tx.send(UiEvent::CharInput(c)).unwrap();
        }
        ui_tx.send(UiEvent::NextField).unwrap();
        for c in "jo@example.com".chars() {
            ui_tx.send(UiEvent::CharInput(c)).unwrap();
        }
        ui_tx.send(UiEvent::NextField).unwrap();
        for c in "hi".chars() {
            ui_tx.send(UiEvent::CharInput(c)).unwrap();
        }
        ui_tx.send(UiEvent::Submit).unwrap();
        ui_tx.send(UiEvent::Submit).unwrap();

        let loading = wait_for(&mut render_rx, |s| s.is_submitting).await;
        assert_eq!(loading.status, SubmissionStatus::Loading);

        let (id, payload) = match net_cmd_rx.recv().await.unwrap() {
            NetworkCommand::SendEmail { id, payload } => (id, payload),
            other => panic!("expected SendEmail, got {:?}", other),
        };
        assert_eq!(payload, FormPayload::new("Jo", "jo@example.com", "hi"));

        net_resp_tx.send(NetworkResponse::Sent { id, time_ms: 3 }).unwrap();
        let done = wait_for(&mut render_rx, |s| s.status == SubmissionStatus::Success).await;
        assert!(done.payload.is_empty());
        assert!(!done.is_submitting);

        // The second Submit was swallowed while in flight
        assert!(net_cmd_rx.try_recv().is_err());

        ui_tx.send(UiEvent::Quit).unwrap();
        assert_eq!(net_cmd_rx.recv().await, Some(NetworkCommand::Shutdown));
        handle.await.unwrap();
    }
}
