use std::io::ErrorKind;
use std::process::{Command, Stdio};

use log::debug;

use crate::error::{Error, Result};

/// Runs `command` and returns its standard output split into lines.
///
/// Blank lines are dropped and trailing `\r` is stripped. `provider` names
/// the selector source in error messages.
///
/// # Errors
///
/// Returns [`Error::SourceUnavailable`] if the program cannot be found or
/// started, or if it exits with a non-success status.
pub fn capture_lines(provider: &str, mut command: Command) -> Result<Vec<String>> {
    let program = command.get_program().to_string_lossy().into_owned();
    debug!("Running `{program}` for the `{provider}` selector");

    let output = command
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .map_err(|e| match e.kind() {
            ErrorKind::NotFound => {
                Error::source_unavailable(provider, format!("`{program}` was not found"))
            }
            _ => Error::source_unavailable(provider, format!("failed to run `{program}`: {e}")),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::source_unavailable(
            provider,
            format!("`{program}` exited with {}: {}", output.status, stderr.trim()),
        ));
    }

    Ok(String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.trim().is_empty())
        .map(ToString::to_string)
        .collect())
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn test_capture_lines_splits_stdout() {
        let mut command = Command::new("sh");
        command.args(["-c", "printf 'default\\n\\nremote\\r\\n'"]);
        let lines = capture_lines("docker-context", command).unwrap();
        assert_eq!(lines, vec!["default", "remote"]);
    }

    #[test]
    fn test_capture_lines_missing_program() {
        let command = Command::new("sevp-definitely-not-a-real-program");
        let result = capture_lines("docker-context", command);
        assert!(matches!(result, Err(Error::SourceUnavailable { .. })));
    }

    #[test]
    fn test_capture_lines_non_zero_exit() {
        let mut command = Command::new("sh");
        command.args(["-c", "echo broken >&2; exit 3"]);
        let err = capture_lines("docker-context", command).unwrap_err();
        assert!(err.to_string().contains("broken"));
    }
}
