use crossterm::terminal;
use log::debug;

use crate::picker::{finish, ui, PickerSession};
use sevp_core::config::Config;
use sevp_core::dotfile::Dotfile;
use sevp_core::error::{Error, Result};
use sevp_core::resolver::resolve;
use sevp_core::selector::Selector;

/// Runs the interactive picker for `selector` and persists the choice.
///
/// Resolution and reading happen before the terminal is touched, so a bad
/// selector or an unavailable source is reported without opening the UI.
///
/// # Errors
///
/// Returns an error if the selector can't be resolved or read, the terminal
/// fails, or the chosen value can't be written to the dotfile.
pub fn run(selector: Option<&str>, config: Option<&Config>) -> Result<()> {
    let provider = resolve(selector, config)?;
    debug!("Reading values from {provider}");
    let selection = provider.read()?;
    let dotfile = Dotfile::in_home()?;

    let (width, height) = terminal::size()?;
    let mut session = PickerSession::new(
        selection.target_variable,
        selection.candidate_values,
        width,
        height,
    );
    ui::run(&mut session)?;

    let outcome = finish(&session, &dotfile).map_err(|e| Error::Persist(Box::new(e)))?;
    println!("{outcome}");
    Ok(())
}
