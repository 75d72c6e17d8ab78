use crossterm::style::Stylize;

use crate::picker::colors::{BRIGHT_GREEN, BRIGHT_PURPLE};
use sevp_core::config::Config;
use sevp_core::error::Result;
use sevp_core::resolver::resolve;
use sevp_core::selector::{Selection, Selector};

/// Prints the target variable and possible values of `selector`.
///
/// External selectors are read from their source, so this shows exactly
/// what the picker would offer.
///
/// # Errors
///
/// Returns an error if the selector can't be resolved or read.
pub fn run(selector: &str, config: Option<&Config>) -> Result<()> {
    let selection = resolve(Some(selector), config)?.read()?;

    println!(
        "{} {}",
        "Target variable:".bold(),
        selection.target_variable.as_str().with(BRIGHT_PURPLE)
    );
    println!("{}", "Possible values:".bold());
    for line in value_lines(&selection) {
        println!("{}", line.with(BRIGHT_GREEN));
    }
    Ok(())
}

/// One indented line per candidate value, in provider order.
#[must_use]
pub fn value_lines(selection: &Selection) -> Vec<String> {
    if selection.candidate_values.is_empty() {
        return vec!["  (none)".to_string()];
    }

    selection
        .candidate_values
        .iter()
        .map(|value| format!("  - {value}"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_lines_keep_order() {
        let selection = Selection {
            target_variable: "STAGE".to_string(),
            candidate_values: vec!["prod".to_string(), "dev".to_string()],
        };
        assert_eq!(value_lines(&selection), vec!["  - prod", "  - dev"]);
    }

    #[test]
    fn test_value_lines_empty() {
        let selection = Selection {
            target_variable: "AWS_PROFILE".to_string(),
            candidate_values: Vec::new(),
        };
        assert_eq!(value_lines(&selection), vec!["  (none)"]);
    }
}
