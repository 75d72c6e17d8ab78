//! Interactive value picker.
//!
//! This module provides the terminal UI that lets the user choose one of a
//! selector's candidate values and hands the choice to an [`EnvSink`].
//!
//! # Key Features
//!
//! - **Candidate List**: scrollable list with the highlighted value marked
//! - **Filtering**: `/` starts a case-insensitive substring filter
//! - **Keyboard Navigation**: arrow keys, or `j`/`k` while browsing
//! - **Abort**: `q` or escape while browsing, `ctrl-c` at any time
//!
//! The session state machine lives in [`types`] and [`input`], rendering is
//! the pure [`render::render`], and [`ui`] drives the real terminal.

use std::fmt::{Display, Formatter};

use crossterm::style::Stylize;
use sevp_core::dotfile::EnvSink;
use sevp_core::error::Result;

// Export public items from submodules
pub mod colors;
pub mod input;
pub mod render;
pub mod types;
pub mod ui;

// Re-exports for convenience
pub use render::{render, Frame, Line, LineStyle};
pub use types::{matches_filter, Mode, PickerSession};

/// What happened once the session ended.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Outcome {
    Selected {
        target_variable: String,
        value: String,
    },
    Aborted,
}

impl Display for Outcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Selected {
                target_variable,
                value,
            } => write!(
                f,
                "{} selected: {}",
                target_variable.as_str().with(colors::BRIGHT_PURPLE).bold(),
                value.as_str().with(colors::BRIGHT_GREEN).bold()
            ),
            Outcome::Aborted => f.write_str("Aborted."),
        }
    }
}

/// Persists the session's choice through `sink`.
///
/// The sink is only called for a [`Mode::Chosen`] session; every other
/// session ends as [`Outcome::Aborted`].
///
/// # Errors
///
/// Returns the sink's error if the chosen value could not be persisted.
pub fn finish<S: EnvSink>(session: &PickerSession, sink: &S) -> Result<Outcome> {
    match (session.mode(), session.chosen_value()) {
        (Mode::Chosen, Some(value)) => {
            sink.upsert(session.target_variable(), value)?;
            Ok(Outcome::Selected {
                target_variable: session.target_variable().to_string(),
                value: value.to_string(),
            })
        }
        _ => Ok(Outcome::Aborted),
    }
}
