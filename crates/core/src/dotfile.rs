//! The dotfile of `export NAME=VALUE` lines sourced by the shell hook.
//!
//! Each variable has at most one line. Updating a variable rewrites its line
//! in place; a new variable is appended. Other lines are left untouched.
//! The whole file is read, modified and written back, so concurrent
//! invocations may race; the last writer wins.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::info;

use crate::error::{Error, Result};

/// File name of the dotfile in the home directory.
pub const DOTFILE_NAME: &str = ".sevp";

/// Destination for a chosen value.
pub trait EnvSink {
    /// Persists `value` for `target_variable`.
    ///
    /// # Errors
    ///
    /// Returns an error if the value can't be stored.
    fn upsert(&self, target_variable: &str, value: &str) -> Result<()>;
}

/// The `~/.sevp` file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dotfile {
    path: PathBuf,
}

impl Dotfile {
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// The dotfile in the current user's home directory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::HomeDirectoryUnavailable`] if there is no home directory.
    pub fn in_home() -> Result<Self> {
        let home = dirs::home_dir().ok_or(Error::HomeDirectoryUnavailable)?;
        Ok(Self::new(home.join(DOTFILE_NAME)))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn display_path(&self) -> String {
        self.path.display().to_string()
    }

    /// Reads the dotfile's lines. A missing file has no lines.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but can't be read.
    pub fn read_lines(&self) -> Result<Vec<String>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(contents.lines().map(ToString::to_string).collect()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(Error::io_error("dotfile", &self.display_path(), e)),
        }
    }
}

impl EnvSink for Dotfile {
    fn upsert(&self, target_variable: &str, value: &str) -> Result<()> {
        if value.contains(['\n', '\r']) {
            return Err(Error::InvalidValue(target_variable.to_string()));
        }

        let lines = upsert_line(self.read_lines()?, target_variable, value);

        let mut contents = lines.join("\n");
        contents.push('\n');
        fs::write(&self.path, contents)
            .map_err(|e| Error::io_error("dotfile", &self.display_path(), e))?;

        info!(
            "Wrote `{target_variable}={value}` to `{}`",
            self.path.display()
        );
        Ok(())
    }
}

fn export_prefix(target_variable: &str) -> String {
    format!("export {target_variable}=")
}

/// Replaces the first `export <target_variable>=` line, or appends one.
///
/// Later lines for the same variable are dropped, so the file ends up with
/// exactly one line per variable.
#[must_use]
pub fn upsert_line(mut lines: Vec<String>, target_variable: &str, value: &str) -> Vec<String> {
    let prefix = export_prefix(target_variable);
    let new_line = format!("{prefix}{value}");

    let mut replaced = false;
    lines.retain_mut(|line| {
        if !line.starts_with(&prefix) {
            return true;
        }
        if replaced {
            return false;
        }
        line.clone_from(&new_line);
        replaced = true;
        true
    });

    if !replaced {
        lines.push(new_line);
    }

    lines
}
