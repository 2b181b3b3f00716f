use std::ops::Range;

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::{prelude::*, widgets::*};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::messages::UiEvent;
use crate::notification::{Notification, NotificationKind};

/// Delete affordance drawn at the right end of every row
pub const DELETE_AFFORDANCE: &str = " [x] ";

/// A clickable label in one of the toolbars
#[derive(Clone, Copy, Debug)]
pub struct ToolbarButton {
    pub label: &'static str,
    pub event: UiEvent,
}

pub const MENU_BUTTON: ToolbarButton = ToolbarButton { label: " [=] ", event: UiEvent::OpenMenu };

pub const TOP_BAR_ACTIONS: [ToolbarButton; 2] = [
    ToolbarButton { label: " Call (c) ", event: UiEvent::CallContact },
    ToolbarButton { label: " Close (q) ", event: UiEvent::Quit },
];

pub const BOTTOM_BAR_ACTIONS: [ToolbarButton; 2] = [
    ToolbarButton { label: " Send (s) ", event: UiEvent::SendMessage },
    ToolbarButton { label: " Edit (e) ", event: UiEvent::EditContact },
];

pub const ADD_BUTTON: ToolbarButton = ToolbarButton { label: " + Add (a) ", event: UiEvent::AddContact };

/// Areas of the single screen
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScreenLayout {
    pub top_bar: Rect,
    pub list: Rect,
    pub input: Rect,
    pub bottom_bar: Rect,
}

pub fn screen_layout(area: Rect) -> ScreenLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Top bar
            Constraint::Min(3),    // Contact list
            Constraint::Length(3), // Text input
            Constraint::Length(1), // Bottom toolbar
        ])
        .split(area);

    ScreenLayout {
        top_bar: chunks[0],
        list: chunks[1],
        input: chunks[2],
        bottom_bar: chunks[3],
    }
}

/// Place buttons on a one-line bar: `left` from the left edge, `right`
/// packed against the right edge. Buttons that do not fit are dropped.
pub fn layout_buttons(
    bar: Rect,
    left: &[ToolbarButton],
    right: &[ToolbarButton],
) -> Vec<(Rect, ToolbarButton)> {
    let mut placed = Vec::with_capacity(left.len() + right.len());
    let bar_end = bar.x.saturating_add(bar.width);

    let mut x = bar.x;
    for button in left {
        let width = button.label.width() as u16;
        if x.saturating_add(width) > bar_end {
            break;
        }
        placed.push((Rect::new(x, bar.y, width, 1), *button));
        x += width;
    }
    let left_end = x;

    let mut x = bar_end;
    for button in right.iter().rev() {
        let width = button.label.width() as u16;
        if x < left_end.saturating_add(width) {
            break;
        }
        x -= width;
        placed.push((Rect::new(x, bar.y, width, 1), *button));
    }

    placed
}

/// Cut `text` to at most `max_width` columns, marking the cut with an ellipsis
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Render one contact row: the name on the left, the delete affordance
/// right-aligned within `width`.
pub fn contact_row(name: &str, selected: bool, width: u16) -> Line<'static> {
    let (name_style, delete_style) = if selected {
        let base = Style::default().fg(Color::Black).bg(Color::Cyan);
        (base.bold(), base)
    } else {
        (Style::default(), Style::default().fg(Color::Red))
    };

    let name_space = (width as usize).saturating_sub(DELETE_AFFORDANCE.width() + 1);
    let shown = truncate_to_width(name, name_space);
    let padding = name_space.saturating_sub(shown.width());

    Line::from(vec![
        Span::styled(format!(" {}{}", shown, " ".repeat(padding)), name_style),
        Span::styled(DELETE_AFFORDANCE, delete_style),
    ])
}

/// Click targets of the last drawn frame; the first match wins
#[derive(Clone, Debug, Default)]
pub struct Hitboxes {
    targets: Vec<(Rect, UiEvent)>,
}

impl Hitboxes {
    pub fn clear(&mut self) {
        self.targets.clear();
    }

    pub fn push(&mut self, area: Rect, event: UiEvent) {
        self.targets.push((area, event));
    }

    /// Register a contact row: its delete affordance, then the row itself
    pub fn push_row(&mut self, row: Rect, index: usize) {
        let delete_width = (DELETE_AFFORDANCE.width() as u16).min(row.width);
        let delete = Rect::new(row.right() - delete_width, row.y, delete_width, row.height);
        self.push(delete, UiEvent::DeleteRow(index));
        self.push(row, UiEvent::SelectRow(index));
    }

    pub fn hit(&self, column: u16, row: u16) -> Option<UiEvent> {
        let point = Position::new(column, row);
        self.targets
            .iter()
            .find(|(area, _)| area.contains(point))
            .map(|(_, event)| *event)
    }
}

/// UI-local view data that never reaches the App layer
#[derive(Clone, Debug, Default)]
pub struct ViewState {
    pub list_offset: usize,
    pub hitboxes: Hitboxes,
    last_selected: Option<usize>,
}

impl ViewState {
    /// Rows to draw in a list viewport of `height` lines. The viewport jumps
    /// to a newly selected row and otherwise keeps the wheel position.
    pub fn visible_rows(&mut self, selected: Option<usize>, len: usize, height: usize) -> Range<usize> {
        if selected != self.last_selected {
            if let Some(index) = selected {
                if index < self.list_offset {
                    self.list_offset = index;
                } else if height > 0 && index >= self.list_offset + height {
                    self.list_offset = index + 1 - height;
                }
            }
            self.last_selected = selected;
        }
        self.list_offset = self.list_offset.min(len.saturating_sub(height));
        self.list_offset..len.min(self.list_offset + height)
    }

    pub fn scroll(&mut self, delta: isize) {
        self.list_offset = self.list_offset.saturating_add_signed(delta);
    }

    /// Map a mouse event onto the last frame
    pub fn handle_mouse(&mut self, mouse: MouseEvent, show_help: bool) -> Option<UiEvent> {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) if show_help => Some(UiEvent::CloseHelp),
            MouseEventKind::Down(MouseButton::Left) => self.hitboxes.hit(mouse.column, mouse.row),
            MouseEventKind::ScrollDown => {
                self.scroll(1);
                None
            }
            MouseEventKind::ScrollUp => {
                self.scroll(-1);
                None
            }
            _ => None,
        }
    }
}

/// Toast-style popup anchored above the bottom toolbar
pub struct NotificationPopup<'a> {
    notification: &'a Notification,
}

impl<'a> NotificationPopup<'a> {
    #[must_use]
    pub fn new(notification: &'a Notification) -> Self {
        Self { notification }
    }

    /// Where the popup lands inside `area` (the list and input region)
    pub fn area(&self, area: Rect) -> Rect {
        let message_width = self.notification.message.width() as u16;
        let width = message_width
            .saturating_add(4)
            .min(area.width.saturating_sub(2))
            .max(1);
        let height = 3.min(area.height);
        let x = area.x + area.width.saturating_sub(width) / 2;
        let y = area.bottom().saturating_sub(height);
        Rect::new(x, y, width, height)
    }
}

impl Widget for NotificationPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup_area = self.area(area);
        if popup_area.area() == 0 {
            return;
        }

        let color = match self.notification.kind {
            NotificationKind::Info => Color::Green,
            NotificationKind::Hint => Color::Yellow,
        };

        let para = Paragraph::new(self.notification.message.as_str())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .style(Style::default().fg(color)),
            )
            .alignment(Alignment::Center)
            .style(Style::default().add_modifier(Modifier::BOLD));

        Clear.render(popup_area, buf);
        para.render(popup_area, buf);
    }
}

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
