//! App actor - message loop processing UI events and notification ticks

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{self, MissedTickBehavior};

use crate::app::state::{AppState, Change};
use crate::constants::NOTIFICATION_TICK_MS;
use crate::messages::{RenderState, UiEvent};
use crate::storage::Snapshot;

/// What the actor loop should do after an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Control {
    Continue(Change),
    Quit,
}

/// App actor that owns the state and processes UI events
pub struct AppActor {
    state: AppState,
    render_tx: mpsc::UnboundedSender<RenderState>,
}

impl AppActor {
    pub fn new(state: AppState, render_tx: mpsc::UnboundedSender<RenderState>) -> Self {
        AppActor { state, render_tx }
    }

    /// Run the actor message loop. Returns the final snapshot once the user
    /// closes the app or the UI side hangs up.
    pub async fn run(mut self, mut ui_rx: mpsc::UnboundedReceiver<UiEvent>) -> Snapshot {
        let mut tick = time::interval(Duration::from_millis(NOTIFICATION_TICK_MS));
        tick.set_missed_tick_behavior(MissedTickBehavior::Skip);

        // Send initial render state
        self.render();

        loop {
            tokio::select! {
                event = ui_rx.recv() => {
                    let Some(event) = event else {
                        tracing::debug!("UI channel closed");
                        break;
                    };
                    match self.handle_ui_event(event) {
                        Control::Quit => {
                            tracing::info!(contacts = self.state.contacts.len(), "Close requested");
                            break;
                        }
                        Control::Continue(change) if change.is_redraw() => self.render(),
                        Control::Continue(_) => {}
                    }
                }
                now = tick.tick() => {
                    if self.state.tick_notifications(now.into_std()).is_redraw() {
                        self.render();
                    }
                }
            }
        }

        self.state.snapshot()
    }

    fn render(&self) {
        let _ = self.render_tx.send(self.state.to_render_state());
    }

    /// Handle a UI event
    fn handle_ui_event(&mut self, event: UiEvent) -> Control {
        let change = match event {
            // List
            UiEvent::SelectRow(index) => self.state.select_row(index),
            UiEvent::SelectNext => self.state.select_next(),
            UiEvent::SelectPrev => self.state.select_prev(),
            UiEvent::DeleteRow(index) => self.state.delete_row(index),
            UiEvent::DeleteSelected => self.state.delete_selected(),

            // Toolbars
            UiEvent::AddContact => self.state.add_contact(),
            UiEvent::EditContact => self.state.edit_contact(),
            UiEvent::SendMessage => self.state.send_message(),
            UiEvent::CallContact => self.state.call_contact(),
            UiEvent::OpenMenu => self.state.open_menu(),

            // Input editing
            UiEvent::StartEditing => self.state.start_editing(),
            UiEvent::StopEditing => self.state.stop_editing(),
            UiEvent::CharInput(c) => self.state.enter_char(c),
            UiEvent::Backspace => self.state.delete_char(),
            UiEvent::CursorLeft => self.state.move_cursor_left(),
            UiEvent::CursorRight => self.state.move_cursor_right(),
            UiEvent::CursorHome => self.state.move_cursor_home(),
            UiEvent::CursorEnd => self.state.move_cursor_end(),
            UiEvent::SubmitInput => self.state.submit_input(),

            // Popups
            UiEvent::ToggleHelp => self.state.toggle_help(),
            UiEvent::CloseHelp => self.state.close_help(),

            // System
            UiEvent::Quit => return Control::Quit,
        };

        Control::Continue(change)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_actor_renders_changes_and_returns_snapshot() {
        let (ui_tx, ui_rx) = mpsc::unbounded_channel();
        let (render_tx, mut render_rx) = mpsc::unbounded_channel();
        let actor = AppActor::new(AppState::new(), render_tx);

        ui_tx.send(UiEvent::CharInput('A')).unwrap();
        ui_tx.send(UiEvent::AddContact).unwrap();
        ui_tx.send(UiEvent::SelectRow(0)).unwrap();
        ui_tx.send(UiEvent::Quit).unwrap();

        let snapshot = actor.run(ui_rx).await;
        assert_eq!(snapshot.contacts, vec!["A"]);
        assert_eq!(snapshot.selected, Some(0));
        assert_eq!(snapshot.input, "");

        let mut last = None;
        while let Ok(state) = render_rx.try_recv() {
            last = Some(state);
        }
        let last = last.expect("at least the initial frame");
        assert_eq!(last.contacts, vec!["A"]);
        assert_eq!(last.selected, Some(0));
    }

    #[tokio::test]
    async fn test_unchanged_events_do_not_render() {
        let (ui_tx, ui_rx) = mpsc::unbounded_channel();
        let (render_tx, mut render_rx) = mpsc::unbounded_channel();
        let actor = AppActor::new(AppState::new(), render_tx);

        // Nothing to delete and nothing to move
        ui_tx.send(UiEvent::DeleteSelected).unwrap();
        ui_tx.send(UiEvent::CursorLeft).unwrap();
        ui_tx.send(UiEvent::Quit).unwrap();
        let _ = actor.run(ui_rx).await;

        let mut frames = 0;
        while render_rx.try_recv().is_ok() {
            frames += 1;
        }
        assert_eq!(frames, 1);
    }

    #[tokio::test]
    async fn test_actor_stops_when_ui_hangs_up() {
        let (ui_tx, ui_rx) = mpsc::unbounded_channel();
        let (render_tx, _render_rx) = mpsc::unbounded_channel();
        let mut state = AppState::new();
        state.contacts.add("Kept");
        let actor = AppActor::new(state, render_tx);

        drop(ui_tx);
        let snapshot = actor.run(ui_rx).await;
        assert_eq!(snapshot.contacts, vec!["Kept"]);
    }
}
