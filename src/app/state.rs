//! App state - pure data structure with no I/O logic

use std::time::Duration;

use crate::messages::ui_events::InputMode;
use crate::messages::RenderState;
use crate::models::{ContactStore, InputBuffer, Selection};
use crate::notification::NotificationQueue;
use crate::storage::Snapshot;

/// Result of applying a command to the state
#[must_use]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Change {
    /// Something visible changed; a new frame is due
    Redraw,
    Unchanged,
}

impl Change {
    pub fn from_bool(changed: bool) -> Self {
        if changed {
            Change::Redraw
        } else {
            Change::Unchanged
        }
    }

    pub fn is_redraw(self) -> bool {
        self == Change::Redraw
    }
}

/// Main application state - pure data, no I/O
#[derive(Debug, Default)]
pub struct AppState {
    pub contacts: ContactStore,
    pub selection: Selection,
    pub input: InputBuffer,

    // UI state
    pub input_mode: InputMode,
    pub show_help: bool,

    pub notifications: NotificationQueue,
}

impl AppState {
    pub fn new() -> Self {
        AppState::default()
    }

    pub fn with_notification_duration(duration: Duration) -> Self {
        AppState {
            notifications: NotificationQueue::new(duration),
            ..AppState::default()
        }
    }

    /// Name of the selected contact
    pub fn selected_contact(&self) -> Option<(usize, &str)> {
        let index = self.selection.index()?;
        self.contacts.get(index).map(|name| (index, name))
    }

    /// Capture what must survive a restart
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            contacts: self.contacts.to_vec(),
            selected: self.selection.index(),
            input: self.input.value().to_string(),
        }
    }

    /// Replace contacts, selection and input with a saved snapshot
    pub fn restore(&mut self, snapshot: Snapshot) {
        let Snapshot { contacts, selected, input } = snapshot;
        self.contacts = ContactStore::from(contacts);
        let selection = Selection::from(selected);
        self.selection = selection.clamp(self.contacts.len());
        if self.selection != selection {
            tracing::warn!(
                ?selected,
                len = self.contacts.len(),
                "Saved selection out of range, cleared"
            );
        }
        self.input.set(input);
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        RenderState {
            contacts: self.contacts.to_vec(),
            selected: self.selection.index(),
            input: self.input.value().to_string(),
            cursor_position: self.input.cursor(),
            input_mode: self.input_mode,
            notification: self.notifications.current().cloned(),
            show_help: self.show_help,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_empty() {
        let state = AppState::new();
        assert!(state.contacts.is_empty());
        assert_eq!(state.selection, Selection::None);
        assert!(state.input.is_empty());
        assert!(state.notifications.is_empty());
    }

    #[test]
    fn test_snapshot_round_trip() {
        let mut state = AppState::new();
        state.contacts.add("Alice");
        state.contacts.add("");
        state.contacts.add("Alice");
        state.selection = Selection::Selected(2);
        state.input.set("draft");

        let mut restored = AppState::new();
        restored.restore(state.snapshot());

        assert_eq!(restored.contacts, state.contacts);
        assert_eq!(restored.selection, state.selection);
        assert_eq!(restored.input, state.input);
    }

    #[test]
    fn test_empty_snapshot_restores_empty() {
        let mut restored = AppState::new();
        restored.restore(AppState::new().snapshot());
        assert!(restored.contacts.is_empty());
        assert_eq!(restored.selection, Selection::None);
    }

    #[test]
    fn test_restore_clears_out_of_range_selection() {
        let mut state = AppState::new();
        state.restore(Snapshot {
            contacts: vec!["Alice".into()],
            selected: Some(4),
            input: String::new(),
        });
        assert_eq!(state.selection, Selection::None);
    }

    #[test]
    fn test_render_state_mirrors_state() {
        let mut state = AppState::new();
        state.contacts.add("Bob");
        state.selection = Selection::Selected(0);
        state.input.set("x");
        let render = state.to_render_state();
        assert_eq!(render.contacts, vec!["Bob"]);
        assert_eq!(render.selected, Some(0));
        assert_eq!(render.input, "x");
        assert_eq!(render.cursor_position, 1);
    }
}
