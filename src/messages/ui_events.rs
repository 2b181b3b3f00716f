//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Events generated from user input in the UI layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    // List
    SelectRow(usize),
    SelectNext,
    SelectPrev,
    DeleteRow(usize),
    DeleteSelected,

    // Toolbars
    AddContact,
    EditContact,
    SendMessage,
    CallContact,
    OpenMenu,

    // Input editing
    StartEditing,
    StopEditing,
    CharInput(char),
    Backspace,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,
    /// Enter in the input field: add the contact and leave editing
    SubmitInput,

    // Popups
    ToggleHelp,
    CloseHelp,

    // System
    Quit,
}

/// Input mode
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Editing,
}

/// Convert a key event to a UiEvent based on current UI context
pub fn key_to_ui_event(key: KeyEvent, input_mode: InputMode, show_help: bool) -> Option<UiEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(UiEvent::Quit);
    }

    if show_help {
        return Some(UiEvent::CloseHelp);
    }

    match input_mode {
        InputMode::Normal => match key.code {
            KeyCode::Char('q') | KeyCode::Char('x') => Some(UiEvent::Quit),
            KeyCode::Char('?') => Some(UiEvent::ToggleHelp),
            KeyCode::Up | KeyCode::Char('k') => Some(UiEvent::SelectPrev),
            KeyCode::Down | KeyCode::Char('j') => Some(UiEvent::SelectNext),
            KeyCode::Char('a') | KeyCode::Char('+') => Some(UiEvent::AddContact),
            KeyCode::Char('e') => Some(UiEvent::EditContact),
            KeyCode::Char('s') => Some(UiEvent::SendMessage),
            KeyCode::Char('c') => Some(UiEvent::CallContact),
            KeyCode::Char('d') | KeyCode::Delete => Some(UiEvent::DeleteSelected),
            KeyCode::Char('m') => Some(UiEvent::OpenMenu),
            KeyCode::Char('i') | KeyCode::Tab => Some(UiEvent::StartEditing),
            _ => None,
        },
        InputMode::Editing => match key.code {
            KeyCode::Esc | KeyCode::Tab => Some(UiEvent::StopEditing),
            KeyCode::Enter => Some(UiEvent::SubmitInput),
            KeyCode::Left => Some(UiEvent::CursorLeft),
            KeyCode::Right => Some(UiEvent::CursorRight),
            KeyCode::Home => Some(UiEvent::CursorHome),
            KeyCode::End => Some(UiEvent::CursorEnd),
            KeyCode::Backspace => Some(UiEvent::Backspace),
            KeyCode::Char(c) => Some(UiEvent::CharInput(c)),
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_normal_mode_actions() {
        let map = |code| key_to_ui_event(press(code), InputMode::Normal, false);
        assert_eq!(map(KeyCode::Char('a')), Some(UiEvent::AddContact));
        assert_eq!(map(KeyCode::Char('e')), Some(UiEvent::EditContact));
        assert_eq!(map(KeyCode::Char('s')), Some(UiEvent::SendMessage));
        assert_eq!(map(KeyCode::Char('c')), Some(UiEvent::CallContact));
        assert_eq!(map(KeyCode::Delete), Some(UiEvent::DeleteSelected));
        assert_eq!(map(KeyCode::Down), Some(UiEvent::SelectNext));
        assert_eq!(map(KeyCode::Char('x')), Some(UiEvent::Quit));
        assert_eq!(map(KeyCode::F(5)), None);
    }

    #[test]
    fn test_editing_mode_captures_letters() {
        let map = |code| key_to_ui_event(press(code), InputMode::Editing, false);
        assert_eq!(map(KeyCode::Char('q')), Some(UiEvent::CharInput('q')));
        assert_eq!(map(KeyCode::Enter), Some(UiEvent::SubmitInput));
        assert_eq!(map(KeyCode::Esc), Some(UiEvent::StopEditing));
    }

    #[test]
    fn test_ctrl_c_quits_everywhere() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key_to_ui_event(key, InputMode::Editing, false), Some(UiEvent::Quit));
        assert_eq!(key_to_ui_event(key, InputMode::Normal, true), Some(UiEvent::Quit));
    }

    #[test]
    fn test_help_popup_swallows_keys() {
        let event = key_to_ui_event(press(KeyCode::Char('a')), InputMode::Normal, true);
        assert_eq!(event, Some(UiEvent::CloseHelp));
    }
}
