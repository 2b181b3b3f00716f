//! Contacts TUI - single-screen contact list
//!
//! Architecture:
//! - UI Layer (Ratatui) - synchronous terminal rendering and input mapping
//! - App Layer - actor owning the contact list, selection and input buffer

use std::fs;
use std::io;
use std::time::Duration;

use anyhow::Context;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{prelude::*, widgets::*};
use tokio::sync::mpsc;
use tracing::{error, info, warn};
use unicode_width::UnicodeWidthStr;

use contacts_tui::constants::{APP_NAME, APP_VERSION, LOG_FILE_NAME};
use contacts_tui::messages::ui_events::{key_to_ui_event, InputMode};
use contacts_tui::messages::{RenderState, UiEvent};
use contacts_tui::storage::{self, Config};
use contacts_tui::ui::{
    self, contact_row, layout_buttons, NotificationPopup, ViewState, ADD_BUTTON,
    BOTTOM_BAR_ACTIONS, MENU_BUTTON, TOP_BAR_ACTIONS,
};
use contacts_tui::{AppActor, AppState};

/// Terminal cleanup guard
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load()?;

    // Initialize logging to file; the terminal belongs to the UI
    let log_dir = config
        .log_file
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| ".".into());
    let log_name = config
        .log_file
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| LOG_FILE_NAME.into());
    fs::create_dir_all(&log_dir)
        .with_context(|| format!("creating log directory {}", log_dir.display()))?;
    let file_appender = tracing_appender::rolling::never(&log_dir, log_name);
    let (non_blocking, _log_guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_max_level(config.tracing_level())
        .init();

    info!(version = APP_VERSION, "Starting");

    let mut state = AppState::with_notification_duration(config.notification_duration());
    if config.session.enabled {
        match storage::load_session(&config.session.path) {
            Ok(Some(snapshot)) => {
                info!(contacts = snapshot.contacts.len(), "Session restored");
                state.restore(snapshot);
            }
            Ok(None) => {}
            Err(e) => warn!(error = ?e, "Ignoring unreadable session"),
        }
    }

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    let _guard = TerminalGuard;
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create channels
    let (ui_tx, ui_rx) = mpsc::unbounded_channel::<UiEvent>();
    let (render_tx, mut render_rx) = mpsc::unbounded_channel::<RenderState>();

    // Spawn app actor
    let app_actor = AppActor::new(state, render_tx);
    let app = tokio::spawn(app_actor.run(ui_rx));

    // Run UI loop (synchronous with async polling)
    run_ui_loop(&mut terminal, ui_tx, &mut render_rx).await?;

    let snapshot = app.await.context("app actor panicked")?;
    if config.session.enabled {
        match storage::save_session(&config.session.path, &snapshot) {
            Ok(()) => info!(path = %config.session.path.display(), "Session saved"),
            Err(e) => error!(error = ?e, "Failed to save session"),
        }
    }

    info!("Exiting");
    Ok(())
}

/// Run the synchronous UI rendering loop
async fn run_ui_loop(
    terminal: &mut Terminal<impl Backend>,
    ui_tx: mpsc::UnboundedSender<UiEvent>,
    render_rx: &mut mpsc::UnboundedReceiver<RenderState>,
) -> anyhow::Result<()> {
    let mut current_state = RenderState::default();
    let mut view = ViewState::default();

    loop {
        // Draw with current state
        terminal.draw(|f| draw_ui(f, &current_state, &mut view))?;

        // Poll for events with timeout
        if event::poll(Duration::from_millis(50))? {
            let ui_event = match event::read()? {
                Event::Key(key) => {
                    key_to_ui_event(key, current_state.input_mode, current_state.show_help)
                }
                Event::Mouse(mouse) => view.handle_mouse(mouse, current_state.show_help),
                _ => None,
            };
            if let Some(event) = ui_event {
                let _ = ui_tx.send(event);
                if event == UiEvent::Quit {
                    break;
                }
            }
        }

        // Check for state updates (non-blocking)
        while let Ok(state) = render_rx.try_recv() {
            current_state = state;
        }
    }

    Ok(())
}

// ============================================================================
// UI Drawing Functions
// ============================================================================

fn draw_ui(f: &mut Frame, state: &RenderState, view: &mut ViewState) {
    let area = f.area();
    let layout = ui::screen_layout(area);
    view.hitboxes.clear();

    draw_top_bar(f, layout.top_bar, view);
    draw_bottom_bar(f, layout.bottom_bar, view);
    draw_input(f, state, layout.input, view);
    draw_contact_list(f, state, layout.list, view);

    if let Some(notification) = &state.notification {
        let toast_area = layout.list.union(layout.input);
        f.render_widget(NotificationPopup::new(notification), toast_area);
    }

    if state.show_help {
        draw_help_popup(f, area);
    }
}

fn draw_button_bar(
    f: &mut Frame,
    area: Rect,
    view: &mut ViewState,
    left: &[ui::ToolbarButton],
    right: &[ui::ToolbarButton],
    bar_style: Style,
) {
    f.render_widget(Block::default().style(bar_style), area);
    for (rect, button) in layout_buttons(area, left, right) {
        let style = if button.event == UiEvent::AddContact {
            Style::default().fg(Color::Black).bg(Color::Green).bold()
        } else {
            bar_style.bold()
        };
        f.render_widget(Paragraph::new(button.label).style(style), rect);
        view.hitboxes.push(rect, button.event);
    }
}

fn draw_top_bar(f: &mut Frame, area: Rect, view: &mut ViewState) {
    let bar_style = Style::default().fg(Color::White).bg(Color::Blue);
    draw_button_bar(f, area, view, &[MENU_BUTTON], &TOP_BAR_ACTIONS, bar_style);

    let title_x = (area.x + MENU_BUTTON.label.width() as u16).min(area.right());
    let title_width = (APP_NAME.width() as u16 + 1).min(area.right() - title_x);
    let title_area = Rect::new(title_x, area.y, title_width, 1);
    f.render_widget(Paragraph::new(format!(" {}", APP_NAME)).style(bar_style.bold()), title_area);
}

fn draw_bottom_bar(f: &mut Frame, area: Rect, view: &mut ViewState) {
    let bar_style = Style::default().fg(Color::White).bg(Color::DarkGray);
    draw_button_bar(f, area, view, &BOTTOM_BAR_ACTIONS, &[ADD_BUTTON], bar_style);
}

fn draw_contact_list(f: &mut Frame, state: &RenderState, area: Rect, view: &mut ViewState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ({}) ", APP_NAME, state.contacts.len()))
        .title_bottom(Line::from(" ↑/↓ select | d delete | ? help ").right_aligned());
    let inner = block.inner(area);
    f.render_widget(block, area);

    if state.contacts.is_empty() {
        let hint = Paragraph::new("No contacts yet. Type a name below and press 'a' to add it.")
            .style(Style::default().fg(Color::DarkGray))
            .wrap(Wrap { trim: false });
        f.render_widget(hint, inner);
        return;
    }

    let rows = view.visible_rows(state.selected, state.contacts.len(), inner.height as usize);
    for (line, index) in rows.enumerate() {
        let row_area = Rect::new(inner.x, inner.y + line as u16, inner.width, 1);
        let selected = state.selected == Some(index);
        let row = contact_row(&state.contacts[index], selected, inner.width);
        f.render_widget(Paragraph::new(row), row_area);
        view.hitboxes.push_row(row_area, index);
    }
}

fn draw_input(f: &mut Frame, state: &RenderState, area: Rect, view: &mut ViewState) {
    let editing = state.input_mode == InputMode::Editing;
    let border_style = if editing {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let title = if editing {
        " Name (Enter: add, Esc: done) "
    } else {
        " Name (i: type) "
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title);
    let input = Paragraph::new(state.input.as_str()).block(block);
    f.render_widget(input, area);
    view.hitboxes.push(area, UiEvent::StartEditing);

    // Cursor
    if editing {
        let before_cursor = state.input.get(..state.cursor_position).unwrap_or(state.input.as_str());
        let max_x = area.x + area.width.saturating_sub(2);
        let cursor_x = (area.x + before_cursor.width() as u16 + 1).min(max_x);
        f.set_cursor_position(Position::new(cursor_x, area.y + 1));
    }
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = ui::centered_rect(60, 70, area);

    let help_text = r#"
 CONTACTS - Keyboard Shortcuts

 LIST
   ↑ / ↓ (k / j)      Select previous / next contact
   d / Delete         Delete selected contact
   mouse click        Select a row, [x] deletes it

 ACTIONS
   a / +              Add the typed name
   e                  Replace the selected contact with the typed name
   s                  Send a message to the selected contact
   c                  Call the selected contact
   m                  Side menu

 INPUT
   i / Tab            Start typing
   Enter              Add and stop typing
   Esc                Stop typing

 GENERAL
   ?                  Toggle this help
   q / x / Ctrl+C     Close

 Press any key to close...
"#;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    let help = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}
