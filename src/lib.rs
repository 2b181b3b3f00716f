//! # Contacts TUI
//!
//! A single-screen terminal contact list.
//!
//! ## Features
//! - Scrollable contact list with keyboard and mouse selection
//! - Add, edit and delete contacts through one shared input field
//! - Toast-style notifications for call, send, edit and menu actions
//! - Optional session snapshot restored on the next start
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (State machine on a Tokio task)

pub mod constants;
pub mod models;
pub mod notification;
pub mod storage;
pub mod ui;
pub mod messages;
pub mod app;

// Re-export commonly used types
pub use models::{ContactStore, InputBuffer, Selection};
pub use notification::{Notification, NotificationKind, NotificationQueue};
pub use storage::{Config, Snapshot};
pub use messages::{UiEvent, RenderState};
pub use app::{AppState, AppActor, Change};
