//! Command handlers - business logic for processing UI events

use std::time::Instant;

use tracing::{debug, info};

use crate::app::state::{AppState, Change};
use crate::constants::{
    msg_calling, msg_contact_edited, msg_message_sent, MSG_CHOOSE_CONTACT, MSG_SIDE_MENU,
};
use crate::messages::ui_events::InputMode;
use crate::models::Selection;
use crate::notification::Notification;

impl AppState {
    // ========================
    // List
    // ========================

    /// Tap on row `index`. Tapping the selected row keeps it selected.
    pub fn select_row(&mut self, index: usize) -> Change {
        if index >= self.contacts.len() {
            debug!(index, len = self.contacts.len(), "Tap outside the list ignored");
            return Change::Unchanged;
        }
        self.set_selection(Selection::Selected(index))
    }

    pub fn select_next(&mut self) -> Change {
        self.set_selection(self.selection.next(self.contacts.len()))
    }

    pub fn select_prev(&mut self) -> Change {
        self.set_selection(self.selection.prev(self.contacts.len()))
    }

    /// Tap on the delete affordance of row `index`. Any deletion clears the
    /// selection, since later rows shift.
    pub fn delete_row(&mut self, index: usize) -> Change {
        match self.contacts.remove_at(index) {
            Some(name) => {
                info!(index, name = %name, "Contact deleted");
                self.selection = Selection::None;
                Change::Redraw
            }
            None => Change::Unchanged,
        }
    }

    pub fn delete_selected(&mut self) -> Change {
        match self.selection.index() {
            Some(index) => self.delete_row(index),
            None => Change::Unchanged,
        }
    }

    fn set_selection(&mut self, selection: Selection) -> Change {
        if self.selection == selection {
            return Change::Unchanged;
        }
        self.selection = selection;
        Change::Redraw
    }

    // ========================
    // Toolbar actions
    // ========================

    /// Floating add button: store whatever the input holds, even nothing
    pub fn add_contact(&mut self) -> Change {
        let name = self.input.take();
        info!(name = %name, index = self.contacts.len(), "Contact added");
        self.contacts.add(name);
        Change::Redraw
    }

    pub fn edit_contact(&mut self) -> Change {
        let Some(index) = self.selection.index() else {
            return self.notify(Notification::hint(MSG_CHOOSE_CONTACT));
        };
        let name = self.input.value().to_string();
        if self.contacts.update(index, name.as_str()).is_none() {
            return self.notify(Notification::hint(MSG_CHOOSE_CONTACT));
        }
        self.input.clear();
        info!(index, name = %name, "Contact edited");
        self.notify(Notification::info(msg_contact_edited(&name)))
    }

    pub fn send_message(&mut self) -> Change {
        let message = match self.selected_contact() {
            Some((_, name)) => Notification::info(msg_message_sent(name)),
            None => Notification::hint(MSG_CHOOSE_CONTACT),
        };
        self.notify(message)
    }

    pub fn call_contact(&mut self) -> Change {
        let message = match self.selected_contact() {
            Some((_, name)) => Notification::info(msg_calling(name)),
            None => Notification::hint(MSG_CHOOSE_CONTACT),
        };
        self.notify(message)
    }

    pub fn open_menu(&mut self) -> Change {
        self.notify(Notification::info(MSG_SIDE_MENU))
    }

    fn notify(&mut self, notification: Notification) -> Change {
        debug!(kind = ?notification.kind, text = %notification.message, "Notification queued");
        self.notifications.push(notification);
        // Surface it right away instead of waiting for the next tick
        self.notifications.tick(Instant::now());
        Change::Redraw
    }

    /// Expire notifications that have been on screen long enough
    pub fn tick_notifications(&mut self, now: Instant) -> Change {
        Change::from_bool(self.notifications.tick(now))
    }

    // ========================
    // Input editing
    // ========================

    pub fn start_editing(&mut self) -> Change {
        if self.input_mode == InputMode::Editing {
            return Change::Unchanged;
        }
        self.input_mode = InputMode::Editing;
        self.input.cursor_end();
        Change::Redraw
    }

    pub fn stop_editing(&mut self) -> Change {
        if self.input_mode == InputMode::Normal {
            return Change::Unchanged;
        }
        self.input_mode = InputMode::Normal;
        Change::Redraw
    }

    pub fn enter_char(&mut self, c: char) -> Change {
        self.input.insert_char(c);
        Change::Redraw
    }

    pub fn delete_char(&mut self) -> Change {
        Change::from_bool(self.input.backspace())
    }

    pub fn move_cursor_left(&mut self) -> Change {
        Change::from_bool(self.input.cursor_left())
    }

    pub fn move_cursor_right(&mut self) -> Change {
        Change::from_bool(self.input.cursor_right())
    }

    pub fn move_cursor_home(&mut self) -> Change {
        Change::from_bool(self.input.cursor_home())
    }

    pub fn move_cursor_end(&mut self) -> Change {
        Change::from_bool(self.input.cursor_end())
    }

    /// Enter in the input field adds the contact and leaves editing
    pub fn submit_input(&mut self) -> Change {
        let _ = self.stop_editing();
        self.add_contact()
    }

    // ========================
    // Popups
    // ========================

    pub fn toggle_help(&mut self) -> Change {
        self.show_help = !self.show_help;
        Change::Redraw
    }

    pub fn close_help(&mut self) -> Change {
        Change::from_bool(std::mem::replace(&mut self.show_help, false))
    }
}
