use std::env;

use itertools::Itertools;

use sevp_core::config::Config;
use sevp_core::error::Result;
use sevp_core::resolver::provider_for_spec;

const UNSET: &str = "(unset)";
const UNKNOWN_TARGET: &str = "(invalid selector)";

/// One configured selector as shown by `sevp list`.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ListRow {
    pub name: String,
    pub is_default: bool,
    /// `None` if the selector can't be resolved to a provider.
    pub target_variable: Option<String>,
    pub current_value: Option<String>,
}

/// Builds the rows for every selector in `config`, sorted by name.
///
/// `lookup` returns the current value of an environment variable.
pub fn list_rows<F>(config: &Config, lookup: F) -> Vec<ListRow>
where
    F: Fn(&str) -> Option<String>,
{
    config
        .selectors
        .iter()
        .sorted_by(|(a, _), (b, _)| a.cmp(b))
        .map(|(name, spec)| {
            let target_variable = provider_for_spec(spec)
                .ok()
                .map(|provider| provider.target_variable().to_string());
            let current_value = target_variable.as_deref().and_then(&lookup);

            ListRow {
                name: name.clone(),
                is_default: config.default.as_deref() == Some(name.as_str()),
                target_variable,
                current_value,
            }
        })
        .collect()
}

/// Formats rows as aligned columns: marker, name, `VAR=value`.
#[must_use]
pub fn format_rows(rows: &[ListRow]) -> Vec<String> {
    let name_width = rows.iter().map(|r| r.name.len()).max().unwrap_or(0);

    rows.iter()
        .map(|row| {
            let marker = if row.is_default { '*' } else { ' ' };
            let assignment = match &row.target_variable {
                Some(var) => format!(
                    "{var}={}",
                    row.current_value.as_deref().unwrap_or(UNSET)
                ),
                None => UNKNOWN_TARGET.to_string(),
            };
            format!("{marker} {:<name_width$}  {assignment}", row.name)
        })
        .collect()
}

/// Prints the configured selectors, or only their names when `quiet`.
///
/// # Errors
///
/// Never fails once the configuration is loaded; the `Result` keeps the
/// signature in line with the other commands.
pub fn run(config: &Config, quiet: bool) -> Result<()> {
    if quiet {
        for name in config.sorted_selector_names() {
            println!("{name}");
        }
        return Ok(());
    }

    let rows = list_rows(config, |var| env::var(var).ok());
    for line in format_rows(&rows) {
        println!("{line}");
    }
    Ok(())
}
