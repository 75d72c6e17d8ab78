use std::str::FromStr;

use sevp_core::dotfile::Dotfile;
use sevp_core::error::Result;
use sevp_core::hooks::Shell;

/// Prints the hook for `shell`, to be `eval`ed from the shell's rc file.
///
/// # Errors
///
/// Returns an error if the shell is unsupported or there is no home directory.
pub fn run(shell: &str) -> Result<()> {
    let shell = Shell::from_str(shell)?;
    let dotfile = Dotfile::in_home()?;
    println!("{}", shell.hook(dotfile.path())?);
    Ok(())
}
