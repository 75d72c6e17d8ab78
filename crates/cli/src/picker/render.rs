//! Pure rendering of a picker session into styled lines.
//!
//! [`render`] has no side effects; painting the frame on the terminal is
//! done by [`super::ui`].

use super::input::FILTER_TRIGGER;
use super::types::{Mode, PickerSession};

const LEFT_PADDING: &str = "  ";
const FILTER_PROMPT: &str = "Search: ";
const SELECTED_MARKER: &str = "> ";

/// How a rendered line should be painted.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LineStyle {
    Title,
    Item,
    SelectedItem,
    NoMatches,
    FilterPrompt,
    Hint,
    Blank,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Line {
    pub text: String,
    pub style: LineStyle,
}

impl Line {
    fn new(text: String, style: LineStyle, width: u16) -> Self {
        Self {
            text: fit_to_width(&text, width),
            style,
        }
    }

    fn blank() -> Self {
        Self {
            text: String::new(),
            style: LineStyle::Blank,
        }
    }
}

/// A full screen of lines, top to bottom.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Frame {
    pub lines: Vec<Line>,
}

impl Frame {
    /// The text of every line.
    #[must_use]
    pub fn texts(&self) -> Vec<&str> {
        self.lines.iter().map(|l| l.text.as_str()).collect()
    }
}

/// Truncates `text` to at most `width` characters.
fn fit_to_width(text: &str, width: u16) -> String {
    text.chars().take(width as usize).collect()
}

/// Renders the session: title, visible candidates, filter prompt and footer.
#[must_use]
pub fn render(session: &PickerSession) -> Frame {
    let width = session.viewport.width;
    let mut lines = vec![
        Line::new(
            format!("{LEFT_PADDING}[{}]", session.target_variable),
            LineStyle::Title,
            width,
        ),
        Line::blank(),
    ];

    let visible = session.visible_candidates();
    if visible.is_empty() {
        let message = if session.all_candidates.is_empty() {
            "No values to select."
        } else {
            "No matching values."
        };
        lines.push(Line::new(
            format!("{LEFT_PADDING}{message}"),
            LineStyle::NoMatches,
            width,
        ));
    } else {
        let viewport = &session.viewport;
        for (i, candidate) in visible
            .iter()
            .enumerate()
            .skip(viewport.offset)
            .take(viewport.height as usize)
        {
            lines.push(if i == session.cursor_index {
                Line::new(
                    format!("{LEFT_PADDING}{SELECTED_MARKER}{candidate}"),
                    LineStyle::SelectedItem,
                    width,
                )
            } else {
                Line::new(
                    format!("{LEFT_PADDING}{LEFT_PADDING}{candidate}"),
                    LineStyle::Item,
                    width,
                )
            });
        }
    }

    lines.push(Line::blank());

    if session.mode == Mode::Filtering {
        lines.push(Line::new(
            format!("{LEFT_PADDING}{FILTER_PROMPT}{}", session.filter_text),
            LineStyle::FilterPrompt,
            width,
        ));
    } else {
        lines.push(Line::blank());
    }

    lines.push(Line::new(footer(session, visible.len()), LineStyle::Hint, width));

    Frame { lines }
}

fn footer(session: &PickerSession, visible_count: usize) -> String {
    let position = if visible_count == 0 {
        "0/0".to_string()
    } else {
        let total_width = visible_count.to_string().len();
        format!(
            "{:>total_width$}/{visible_count}",
            session.cursor_index + 1
        )
    };

    let keys = match session.mode {
        Mode::Filtering => "esc: stop searching • enter: select".to_string(),
        _ => format!("type '{FILTER_TRIGGER}' to search • enter: select • q: quit"),
    };

    format!("{LEFT_PADDING}{position}   {keys}")
}
