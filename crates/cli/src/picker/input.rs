//! Input handling for the picker.
//!
//! One event is applied at a time. Key bindings:
//!
//! | mode | key | effect |
//! |---|---|---|
//! | any | `ctrl-c` | abort |
//! | any | up / down | move the cursor, clamped to the list (no wraparound) |
//! | any | enter | choose the highlighted value; no-op on an empty list |
//! | browsing | `k` / `j` | move the cursor |
//! | browsing | `/` | start filtering with an empty filter |
//! | browsing | `q` / esc | abort |
//! | filtering | printable char | append to the filter |
//! | filtering | backspace | remove the last filter char |
//! | filtering | esc | clear the filter and go back to browsing |
//!
//! Events arriving after the session finished are ignored.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::types::CycleDirection::{Down, Up};
use super::types::{matches_filter, CycleDirection, Mode, PickerSession, ViewportState};

/// Key that switches from browsing to filtering.
pub const FILTER_TRIGGER: char = '/';

impl PickerSession {
    /// Applies one terminal event.
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key_event) => self.handle_key(key_event),
            Event::Resize(width, height) => self.handle_resize(width, height),
            Event::Mouse(_) | Event::FocusGained | Event::FocusLost | Event::Paste(_) => {}
        }
    }

    /// Applies one key press.
    pub fn handle_key(&mut self, key_event: KeyEvent) {
        if key_event.kind == KeyEventKind::Release || self.is_finished() {
            return;
        }

        let modifiers = key_event.modifiers;
        if modifiers.contains(KeyModifiers::CONTROL) {
            if key_event.code == KeyCode::Char('c') {
                self.mode = Mode::Aborted;
            }
            return;
        }

        match (self.mode, key_event.code) {
            (_, KeyCode::Up) => self.move_cursor(Up),
            (_, KeyCode::Down) => self.move_cursor(Down),
            (_, KeyCode::Enter) => self.choose(),
            (Mode::Browsing, KeyCode::Char('k')) => self.move_cursor(Up),
            (Mode::Browsing, KeyCode::Char('j')) => self.move_cursor(Down),
            (Mode::Browsing, KeyCode::Char(FILTER_TRIGGER)) => {
                self.mode = Mode::Filtering;
                self.set_filter(String::new());
            }
            (Mode::Browsing, KeyCode::Char('q') | KeyCode::Esc) => self.mode = Mode::Aborted,
            (Mode::Filtering, KeyCode::Esc) => {
                self.mode = Mode::Browsing;
                self.set_filter(String::new());
            }
            (Mode::Filtering, KeyCode::Backspace) => {
                let mut filter_text = self.filter_text.clone();
                if filter_text.pop().is_some() {
                    self.set_filter(filter_text);
                }
            }
            (Mode::Filtering, KeyCode::Char(c)) if !modifiers.contains(KeyModifiers::ALT) => {
                let mut filter_text = self.filter_text.clone();
                filter_text.push(c);
                self.set_filter(filter_text);
            }
            _ => {}
        }
    }

    /// Updates the display size. Mode, filter and cursor are unchanged.
    pub fn handle_resize(&mut self, width: u16, height: u16) {
        let offset = self.viewport.offset;
        self.viewport = ViewportState::for_terminal(width, height);
        // A taller viewport must not leave rows hidden above the offset
        let max_offset = self
            .filtered
            .len()
            .saturating_sub(self.viewport.height as usize);
        self.viewport.offset = offset.min(max_offset);
        self.viewport.scroll_to(self.cursor_index);
    }

    fn move_cursor(&mut self, direction: CycleDirection) {
        if self.filtered.is_empty() {
            return;
        }

        let last = self.filtered.len() - 1;
        self.cursor_index = match direction {
            Up => self.cursor_index.saturating_sub(1),
            Down => (self.cursor_index + 1).min(last),
        };
        self.viewport.scroll_to(self.cursor_index);
    }

    fn choose(&mut self) {
        let Some(value) = self.highlighted().map(ToString::to_string) else {
            return;
        };
        self.chosen_value = Some(value);
        self.mode = Mode::Chosen;
    }

    /// Replaces the filter, recomputes the visible list and resets the cursor.
    fn set_filter(&mut self, filter_text: String) {
        self.filtered = self
            .all_candidates
            .iter()
            .enumerate()
            .filter(|(_, candidate)| matches_filter(candidate, &filter_text))
            .map(|(i, _)| i)
            .collect();
        self.filter_text = filter_text;
        self.cursor_index = 0;
        self.viewport.offset = 0;
    }
}
