//! App layer - central state management and command processing
//!
//! The App actor receives UI events, updates state and emits render state
//! whenever a command reports a change.

pub mod state;
pub mod actor;
pub mod commands;

pub use state::{AppState, Change};
pub use actor::AppActor;
