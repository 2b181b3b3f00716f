use serde::{Deserialize, Serialize};

/// Ordered list of contact names. Position is the only identity a contact has.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactStore {
    contacts: Vec<String>,
}

impl ContactStore {
    pub fn new() -> Self {
        ContactStore::default()
    }

    /// Append a contact. Duplicates and empty names are accepted.
    pub fn add(&mut self, name: impl Into<String>) {
        self.contacts.push(name.into());
    }

    /// Remove the contact at `index`, shifting later contacts left.
    /// Returns `None` without touching the list when out of range.
    pub fn remove_at(&mut self, index: usize) -> Option<String> {
        if index < self.contacts.len() {
            Some(self.contacts.remove(index))
        } else {
            None
        }
    }

    /// Replace the contact at `index`, returning the previous name.
    pub fn update(&mut self, index: usize, name: impl Into<String>) -> Option<String> {
        self.contacts
            .get_mut(index)
            .map(|slot| std::mem::replace(slot, name.into()))
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.contacts.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.contacts.iter().map(String::as_str)
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.contacts.clone()
    }
}

impl From<Vec<String>> for ContactStore {
    fn from(contacts: Vec<String>) -> Self {
        ContactStore { contacts }
    }
}

/// Currently active contact, if any
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    None,
    Selected(usize),
}

impl Selection {
    pub fn index(&self) -> Option<usize> {
        match self {
            Selection::None => None,
            Selection::Selected(i) => Some(*i),
        }
    }

    pub fn is_selected(&self, index: usize) -> bool {
        *self == Selection::Selected(index)
    }

    /// Drop the selection if it no longer points inside a list of `len` items
    pub fn clamp(self, len: usize) -> Selection {
        match self {
            Selection::Selected(i) if i < len => self,
            _ => Selection::None,
        }
    }

    /// Row below the current one; from nothing, the first row
    pub fn next(self, len: usize) -> Selection {
        if len == 0 {
            return Selection::None;
        }
        match self {
            Selection::None => Selection::Selected(0),
            Selection::Selected(i) => Selection::Selected((i + 1).min(len - 1)),
        }
    }

    /// Row above the current one; from nothing, the last row
    pub fn prev(self, len: usize) -> Selection {
        if len == 0 {
            return Selection::None;
        }
        match self {
            Selection::None => Selection::Selected(len - 1),
            Selection::Selected(i) => Selection::Selected(i.saturating_sub(1).min(len - 1)),
        }
    }
}

impl From<Option<usize>> for Selection {
    fn from(index: Option<usize>) -> Self {
        index.map_or(Selection::None, Selection::Selected)
    }
}

/// The single text field shared by the add and edit flows.
///
/// `cursor` is a byte offset that always sits on a char boundary.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InputBuffer {
    value: String,
    cursor: usize,
}

impl InputBuffer {
    pub fn new() -> Self {
        InputBuffer::default()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn set(&mut self, text: impl Into<String>) {
        self.value = text.into();
        self.cursor = self.value.len();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Take the text out, leaving the buffer cleared
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.value)
    }

    pub fn insert_char(&mut self, c: char) {
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn backspace(&mut self) -> bool {
        match self.prev_boundary() {
            Some(prev) => {
                self.value.remove(prev);
                self.cursor = prev;
                true
            }
            None => false,
        }
    }

    pub fn cursor_left(&mut self) -> bool {
        match self.prev_boundary() {
            Some(prev) => {
                self.cursor = prev;
                true
            }
            None => false,
        }
    }

    pub fn cursor_right(&mut self) -> bool {
        if self.cursor >= self.value.len() {
            return false;
        }
        self.cursor = self.value[self.cursor..]
            .char_indices()
            .nth(1)
            .map(|(i, _)| self.cursor + i)
            .unwrap_or(self.value.len());
        true
    }

    pub fn cursor_home(&mut self) -> bool {
        let moved = self.cursor != 0;
        self.cursor = 0;
        moved
    }

    pub fn cursor_end(&mut self) -> bool {
        let moved = self.cursor != self.value.len();
        self.cursor = self.value.len();
        moved
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.value[..self.cursor]
            .char_indices()
            .last()
            .map(|(i, _)| i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_keeps_insertion_order() {
        let mut store = ContactStore::new();
        store.add("Alice");
        store.add("Bob");
        store.add("Alice");
        assert_eq!(store.to_vec(), vec!["Alice", "Bob", "Alice"]);
    }

    #[test]
    fn test_remove_shifts_later_contacts() {
        let mut store = ContactStore::from(vec!["a".to_string(), "b".into(), "c".into()]);
        assert_eq!(store.remove_at(1).as_deref(), Some("b"));
        assert_eq!(store.get(1), Some("c"));
        assert_eq!(store.len(), 2);
        assert_eq!(store.remove_at(5), None);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_update_out_of_range_is_noop() {
        let mut store = ContactStore::from(vec!["a".to_string()]);
        assert_eq!(store.update(0, "z").as_deref(), Some("a"));
        assert_eq!(store.update(1, "y"), None);
        assert_eq!(store.to_vec(), vec!["z"]);
    }

    #[test]
    fn test_selection_clamp() {
        assert_eq!(Selection::Selected(2).clamp(3), Selection::Selected(2));
        assert_eq!(Selection::Selected(3).clamp(3), Selection::None);
        assert_eq!(Selection::None.clamp(3), Selection::None);
    }

    #[test]
    fn test_selection_navigation() {
        assert_eq!(Selection::None.next(3), Selection::Selected(0));
        assert_eq!(Selection::None.prev(3), Selection::Selected(2));
        assert_eq!(Selection::Selected(2).next(3), Selection::Selected(2));
        assert_eq!(Selection::Selected(0).prev(3), Selection::Selected(0));
        assert_eq!(Selection::Selected(1).next(0), Selection::None);
    }

    #[test]
    fn test_input_editing_respects_char_boundaries() {
        let mut input = InputBuffer::new();
        for c in "Ива".chars() {
            input.insert_char(c);
        }
        assert_eq!(input.cursor(), "Ива".len());
        assert!(input.cursor_left());
        input.insert_char('н');
        assert_eq!(input.value(), "Ивна");
        assert!(input.backspace());
        assert_eq!(input.value(), "Ива");
        assert!(input.cursor_home());
        assert!(!input.backspace());
        assert!(input.cursor_right());
        assert_eq!(input.cursor(), 'И'.len_utf8());
    }

    #[test]
    fn test_take_clears_buffer() {
        let mut input = InputBuffer::new();
        input.set("Bob");
        assert_eq!(input.take(), "Bob");
        assert!(input.is_empty());
        assert_eq!(input.cursor(), 0);
    }
}
