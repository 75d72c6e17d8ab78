use std::io::{stdout, Write};
use std::time::Duration;

use crossterm::cursor::{self, MoveTo};
use crossterm::event;
use crossterm::style::{Attribute, Print, SetAttribute, SetForegroundColor};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{queue, ExecutableCommand};
use log::debug;

use super::colors::AsTermStyle;
use super::render::{render, Frame};
use super::types::PickerSession;
use sevp_core::error::Result;

struct RawModeGuard;

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        // Restore the terminal on every exit path
        let _ = disable_raw_mode();
        let mut stdout = stdout();
        let _ = stdout.execute(cursor::Show);
        let _ = stdout.execute(LeaveAlternateScreen);
    }
}

fn draw(frame: &Frame) -> Result<()> {
    let mut stdout = stdout();

    queue!(stdout, Clear(ClearType::All), MoveTo(0, 0))?;

    for line in &frame.lines {
        if let Some(color) = line.style.foreground_color() {
            queue!(stdout, SetForegroundColor(color))?;
        }
        if line.style.is_bold() {
            queue!(stdout, SetAttribute(Attribute::Bold))?;
        }

        queue!(
            stdout,
            Print(&line.text),
            SetAttribute(Attribute::Reset),
            cursor::MoveToNextLine(1)
        )?;
    }

    stdout.flush()?;
    Ok(())
}

/// Runs the picker on the terminal until the session is chosen or aborted.
///
/// The alternate screen and raw mode are active only while this runs.
/// The screen is redrawn only when the session changed.
pub fn run(session: &mut PickerSession) -> Result<()> {
    let mut stdout = stdout();
    stdout.execute(EnterAlternateScreen)?;

    let _raw_mode_guard = RawModeGuard; // When this goes out of scope, the terminal is restored
    enable_raw_mode()?;
    stdout.execute(cursor::Hide)?;

    let mut drawn: Option<PickerSession> = None;

    while !session.is_finished() {
        if drawn.as_ref() != Some(&*session) {
            draw(&render(session))?;
            drawn = Some(session.clone());
        }

        if event::poll(Duration::from_millis(500))? {
            session.handle_event(event::read()?);
        }
    }

    debug!("Picker finished in mode {:?}", session.mode());
    Ok(())
}
