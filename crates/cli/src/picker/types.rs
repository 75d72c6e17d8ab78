//! Type definitions for the picker session and its UI state.
//!
//! A [`PickerSession`] holds everything the picker needs to render itself:
//! the candidates, the filter, the cursor and the viewport. It only changes
//! in response to input events (see [`super::input`]).

/// Rows used by everything except the candidate list: the title, two
/// spacer rows, the filter prompt and the footer.
pub const CHROME_ROWS: u16 = 5;

/// Mode of the picker. `Chosen` and `Aborted` are terminal.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Mode {
    Browsing,
    Filtering,
    Chosen,
    Aborted,
}

/// Direction to move the cursor in the candidate list.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CycleDirection {
    Up,
    Down,
}

/// The visible window onto the filtered candidate list.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ViewportState {
    /// Index of the first filtered candidate shown.
    pub offset: usize,
    /// Number of list rows available.
    pub height: u16,
    pub width: u16,
}

impl ViewportState {
    /// Viewport for a terminal of the given size.
    #[must_use]
    pub fn for_terminal(width: u16, height: u16) -> Self {
        Self {
            offset: 0,
            height: height.saturating_sub(CHROME_ROWS).max(1),
            width,
        }
    }

    /// Scrolls so that `index` is inside the viewport.
    pub fn scroll_to(&mut self, index: usize) {
        let height = self.height as usize;
        if index < self.offset {
            self.offset = index;
        } else if index >= self.offset + height {
            self.offset = index + 1 - height;
        }
    }
}

/// Complete state of one picker invocation.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct PickerSession {
    pub(super) target_variable: String,
    pub(super) all_candidates: Vec<String>,
    pub(super) filter_text: String,
    /// Indexes into `all_candidates` that match the filter, in display order.
    pub(super) filtered: Vec<usize>,
    /// Position of the cursor within `filtered`.
    pub(super) cursor_index: usize,
    pub(super) mode: Mode,
    pub(super) chosen_value: Option<String>,
    pub(super) viewport: ViewportState,
}

impl PickerSession {
    /// Starts a session in [`Mode::Browsing`] with every candidate visible.
    #[must_use]
    pub fn new(target_variable: String, all_candidates: Vec<String>, width: u16, height: u16) -> Self {
        let filtered = (0..all_candidates.len()).collect();
        Self {
            target_variable,
            all_candidates,
            filter_text: String::new(),
            filtered,
            cursor_index: 0,
            mode: Mode::Browsing,
            chosen_value: None,
            viewport: ViewportState::for_terminal(width, height),
        }
    }

    #[must_use]
    pub fn target_variable(&self) -> &str {
        &self.target_variable
    }

    #[must_use]
    pub fn all_candidates(&self) -> &[String] {
        &self.all_candidates
    }

    #[must_use]
    pub fn filter_text(&self) -> &str {
        &self.filter_text
    }

    #[must_use]
    pub fn cursor_index(&self) -> usize {
        self.cursor_index
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub fn chosen_value(&self) -> Option<&str> {
        self.chosen_value.as_deref()
    }

    #[must_use]
    pub fn viewport(&self) -> &ViewportState {
        &self.viewport
    }

    /// Candidates matching the current filter, in display order.
    #[must_use]
    pub fn visible_candidates(&self) -> Vec<&str> {
        self.filtered
            .iter()
            .map(|&i| self.all_candidates[i].as_str())
            .collect()
    }

    /// The candidate under the cursor, if any candidate is visible.
    #[must_use]
    pub fn highlighted(&self) -> Option<&str> {
        self.filtered
            .get(self.cursor_index)
            .map(|&i| self.all_candidates[i].as_str())
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        matches!(self.mode, Mode::Chosen | Mode::Aborted)
    }
}

/// Case-insensitive substring match used by the filter.
#[must_use]
pub fn matches_filter(candidate: &str, filter_text: &str) -> bool {
    candidate
        .to_lowercase()
        .contains(&filter_text.to_lowercase())
}
