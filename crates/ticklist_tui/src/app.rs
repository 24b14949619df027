//! Application state and render loop for the checklist screen.
//!
//! # Responsibility
//! - Route key events to the core session's add/remove/clear sequences.
//! - Render entry field, checklist rows and the live region.
//! - Keep a checked row visible for a short linger before it disappears.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

use ticklist_core::{Item, ListSession, ListStore, StoreError};

/// How long a just-checked row stays on screen before the list re-renders
/// without it. The removal itself already happened synchronously.
const CHECKED_LINGER: Duration = Duration::from_millis(1000);

const CONFIRM_PROMPT: &str = "Are you sure you want to clear the entire list? (y/n)";
const HELP_LINE: &str =
    "Enter adds | Tab switches panes | Space checks off | Ctrl+L clears | Ctrl+C quits";

/// Which pane keyboard input is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Entry,
    List,
}

/// A removed item still rendered, checked, until its deadline passes.
struct CheckedRow {
    /// Display position the row occupied when it was checked.
    index: usize,
    item: Item,
    expires_at: Instant,
}

/// Main application state.
pub struct App<S: ListStore> {
    session: ListSession<S>,
    focus: Focus,
    /// Text-entry buffer (the form field).
    entry: String,
    /// Selected display row while the list has focus.
    selected: usize,
    /// Last announcement shown in the live region.
    live_region: Option<String>,
    checked_rows: Vec<CheckedRow>,
    /// Whether the clear-confirmation dialog is open.
    confirm_clear: bool,
}

impl<S: ListStore> App<S> {
    pub fn new(session: ListSession<S>) -> Self {
        Self {
            session,
            focus: Focus::Entry,
            entry: String::new(),
            selected: 0,
            live_region: None,
            checked_rows: Vec::new(),
            confirm_clear: false,
        }
    }

    /// Handles one key press. Returns `true` when the app should exit.
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        if self.confirm_clear {
            self.handle_confirm_key(code);
            return false;
        }

        if modifiers.contains(KeyModifiers::CONTROL) {
            match code {
                KeyCode::Char('c') | KeyCode::Char('q') => return true,
                KeyCode::Char('l') => self.request_clear(),
                _ => {}
            }
            return false;
        }

        match self.focus {
            Focus::Entry => self.handle_entry_key(code),
            Focus::List => self.handle_list_key(code),
        }
    }

    fn handle_entry_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Esc => return true,
            KeyCode::Enter => self.submit_entry(),
            KeyCode::Char(c) => self.entry.push(c),
            KeyCode::Backspace => {
                self.entry.pop();
            }
            KeyCode::Tab | KeyCode::Down => {
                if self.row_count() > 0 {
                    self.focus = Focus::List;
                    self.selected = self.selected.min(self.row_count() - 1);
                }
            }
            _ => {}
        }
        false
    }

    fn handle_list_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Up | KeyCode::Char('k') => {
                if self.selected == 0 {
                    self.focus = Focus::Entry;
                } else {
                    self.selected -= 1;
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let rows = self.row_count();
                if rows > 0 && self.selected < rows - 1 {
                    self.selected += 1;
                }
            }
            KeyCode::Char(' ') | KeyCode::Enter => self.toggle_selected(),
            KeyCode::Tab | KeyCode::Esc => self.focus = Focus::Entry,
            _ => {}
        }
        false
    }

    fn handle_confirm_key(&mut self, code: KeyCode) {
        if matches!(code, KeyCode::Char('y') | KeyCode::Char('Y')) {
            match self.session.clear_list(|| true) {
                Ok(_) => {
                    self.checked_rows.clear();
                    self.selected = 0;
                    self.focus = Focus::Entry;
                }
                Err(err) => self.report_store_error(err),
            }
        }
        // Any other key declines.
        self.confirm_clear = false;
    }

    /// Form-submit sequence: add, announce, clear and refocus the field.
    fn submit_entry(&mut self) {
        match self.session.add_item(&self.entry) {
            Ok(Some(announcement)) => {
                self.live_region = Some(announcement.to_string());
                self.entry.clear();
                self.focus = Focus::Entry;
            }
            // Empty after trimming: abort silently, keep the field as-is.
            Ok(None) => {}
            Err(err) => self.report_store_error(err),
        }
    }

    /// Checkbox-activation sequence on the selected row.
    fn toggle_selected(&mut self) {
        let target = self
            .display_rows()
            .get(self.selected)
            .map(|(checked, item)| (*checked, (*item).clone()));
        let Some((checked, item)) = target else {
            return;
        };
        if checked {
            // Already ticked and waiting to disappear.
            return;
        }

        match self.session.remove_item(item.id) {
            Ok(Some(announcement)) => {
                self.live_region = Some(announcement.to_string());
                self.checked_rows.push(CheckedRow {
                    index: self.selected,
                    item,
                    expires_at: Instant::now() + CHECKED_LINGER,
                });
            }
            Ok(None) => {}
            Err(err) => self.report_store_error(err),
        }
    }

    /// Clear-list control: never prompts while the list is empty.
    fn request_clear(&mut self) {
        if !self.session.is_empty() {
            self.confirm_clear = true;
        }
    }

    fn report_store_error(&mut self, err: StoreError) {
        log::error!("event=store_write_failed module=tui status=error error={err}");
        self.live_region = Some(format!("storage error: {err}"));
    }

    /// Drops checked rows whose linger deadline has passed.
    pub fn expire_checked(&mut self, now: Instant) {
        let before = self.checked_rows.len();
        self.checked_rows.retain(|row| row.expires_at > now);
        if self.checked_rows.len() == before {
            return;
        }

        let rows = self.row_count();
        if rows == 0 {
            self.focus = Focus::Entry;
            self.selected = 0;
        } else if self.selected >= rows {
            self.selected = rows - 1;
        }
    }

    /// Time until the earliest pending linger deadline, if any.
    pub fn time_until_next_deadline(&self, now: Instant) -> Option<Duration> {
        self.checked_rows
            .iter()
            .map(|row| row.expires_at.saturating_duration_since(now))
            .min()
    }

    fn row_count(&self) -> usize {
        self.session.len() + self.checked_rows.len()
    }

    /// Current checklist rows in display order: live items unchecked, with
    /// lingering removed rows spliced back, checked, at their old spots.
    fn display_rows(&self) -> Vec<(bool, &Item)> {
        let mut rows: Vec<(bool, &Item)> = self
            .session
            .items()
            .iter()
            .map(|item| (false, item))
            .collect();
        for row in &self.checked_rows {
            let at = row.index.min(rows.len());
            rows.insert(at, (true, &row.item));
        }
        rows
    }

    /// Renders the whole screen: entry form, checklist, live region, and
    /// the confirmation dialog when open.
    pub fn render(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(1),
                Constraint::Length(1),
            ])
            .split(frame.area());

        self.render_entry(frame, chunks[0]);
        self.render_checklist(frame, chunks[1]);
        self.render_live_region(frame, chunks[2]);

        if self.confirm_clear {
            self.render_confirm_dialog(frame);
        }
    }

    fn render_entry(&self, frame: &mut Frame, area: Rect) {
        let focused = self.focus == Focus::Entry && !self.confirm_clear;
        let border_style = if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        let entry = Paragraph::new(self.entry.as_str()).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title("New item"),
        );
        frame.render_widget(entry, area);

        if focused {
            let cursor_x = area.x + 1 + self.entry.chars().count() as u16;
            frame.set_cursor_position((cursor_x.min(area.right().saturating_sub(2)), area.y + 1));
        }
    }

    fn render_checklist(&self, frame: &mut Frame, area: Rect) {
        let focused = self.focus == Focus::List && !self.confirm_clear;
        let border_style = if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };

        let items: Vec<ListItem> = self
            .display_rows()
            .into_iter()
            .map(|(checked, item)| {
                let (mark, style) = if checked {
                    (
                        "[x] ",
                        Style::default()
                            .fg(Color::DarkGray)
                            .add_modifier(Modifier::CROSSED_OUT),
                    )
                } else {
                    ("[ ] ", Style::default())
                };
                ListItem::new(Line::from(vec![
                    Span::raw(mark),
                    Span::styled(item.text.clone(), style),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style)
                    .title("To-do list"),
            )
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");

        let mut state = ListState::default();
        if focused && self.row_count() > 0 {
            state.select(Some(self.selected));
        }
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn render_live_region(&self, frame: &mut Frame, area: Rect) {
        let line = match &self.live_region {
            Some(message) => {
                Line::from(Span::styled(message.clone(), Style::default().fg(Color::Green)))
            }
            None => Line::from(Span::styled(
                HELP_LINE,
                Style::default().fg(Color::DarkGray),
            )),
        };
        frame.render_widget(Paragraph::new(line), area);
    }

    fn render_confirm_dialog(&self, frame: &mut Frame) {
        let area = centered_rect(CONFIRM_PROMPT.len() as u16 + 4, 3, frame.area());
        frame.render_widget(Clear, area);
        let dialog = Paragraph::new(CONFIRM_PROMPT).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red))
                .title("Confirm"),
        );
        frame.render_widget(dialog, area);
    }
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
