//! Application constants
//!
//! Centralized location for user-facing text and configuration defaults.

/// Application name, shown in the top bar
pub const APP_NAME: &str = "Contacts";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Directory under the home directory holding config, session and log files
pub const CONFIG_DIR_NAME: &str = ".contacts-tui";

pub const CONFIG_FILE_NAME: &str = "config.yaml";
pub const SESSION_FILE_NAME: &str = "session.json";
pub const LOG_FILE_NAME: &str = "contacts-tui.log";

/// How long a notification stays on screen, in milliseconds
pub const DEFAULT_NOTIFICATION_MS: u64 = 3500;

/// Pending notifications kept in the queue, the visible one included
pub const MAX_PENDING_NOTIFICATIONS: usize = 5;

/// Notification expiry check period, in milliseconds
pub const NOTIFICATION_TICK_MS: u64 = 250;

pub const MSG_CHOOSE_CONTACT: &str = "Choose a contact";
pub const MSG_SIDE_MENU: &str = "Side menu";

pub fn msg_calling(name: &str) -> String {
    format!("Calling {}", name)
}

pub fn msg_message_sent(name: &str) -> String {
    format!("Message sent to {}", name)
}

pub fn msg_contact_edited(name: &str) -> String {
    format!("Contact {} edited", name)
}
