//! Command-line argument parsing.
//!
//! This module defines the command-line interface structure using the
//! `clap` crate.

use clap::{Parser, Subcommand};

/// Command-line arguments for the sevp CLI tool.
///
/// Without a subcommand the interactive picker runs for the given selector,
/// or for the configured default when no selector is given.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use sevp_cli::cli_args::Args;
///
/// let args = Args::parse_from(["sevp", "aws"]);
/// assert_eq!(args.selector.as_deref(), Some("aws"));
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(name = "sevp", version, about = "Pick and switch environment variables.")]
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Path to the selector config file (TOML or YAML).
    ///
    /// If not provided, `~/.config/sevp.{toml,yaml,yml}` and then
    /// `~/sevp.{toml,yaml,yml}` are tried.
    #[arg(long, short = 'c', global = true)]
    pub config_path: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// The selector to pick a value for.
    ///
    /// If not provided, the `default` selector from the config is used, or
    /// AWS profiles when there is no config.
    pub selector: Option<String>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Print the shell hook that applies the picked values. Supported shells: bash, zsh, fish
    Init {
        /// The shell to print the hook for.
        shell: String,
    },

    /// List the selectors defined in the config.
    List {
        /// Hide target variables and their current values.
        #[arg(long, short = 'q', action)]
        quiet: bool,
    },

    /// Show the target variable and the possible values of a selector.
    View {
        /// The selector to show.
        selector: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_args_default_values() {
        let args = Args::parse_from(["sevp"]);

        assert!(args.config_path.is_none());
        assert!(args.command.is_none());
        assert!(args.selector.is_none());
    }

    #[test]
    fn test_args_selector() {
        let args = Args::parse_from(["sevp", "docker-context"]);
        assert_eq!(args.selector, Some("docker-context".to_string()));
        assert!(args.command.is_none());
    }

    #[test]
    fn test_args_config_path() {
        let args = Args::parse_from(["sevp", "-c", "/custom/sevp.toml", "stage"]);
        assert_eq!(args.config_path, Some("/custom/sevp.toml".to_string()));
        assert_eq!(args.selector, Some("stage".to_string()));

        let args = Args::parse_from(["sevp", "--config-path", "/custom/sevp.yml"]);
        assert_eq!(args.config_path, Some("/custom/sevp.yml".to_string()));
    }

    #[test]
    fn test_args_list() {
        let args = Args::parse_from(["sevp", "list"]);
        assert_eq!(args.command, Some(Commands::List { quiet: false }));

        let args = Args::parse_from(["sevp", "list", "--quiet"]);
        assert_eq!(args.command, Some(Commands::List { quiet: true }));
    }

    #[test]
    fn test_args_view_with_global_config_path() {
        let args = Args::parse_from(["sevp", "view", "aws", "-c", "/custom/sevp.toml"]);
        assert_eq!(
            args.command,
            Some(Commands::View {
                selector: "aws".to_string()
            })
        );
        assert_eq!(args.config_path, Some("/custom/sevp.toml".to_string()));
    }

    #[test]
    fn test_args_init() {
        let args = Args::parse_from(["sevp", "init", "zsh"]);
        assert_eq!(
            args.command,
            Some(Commands::Init {
                shell: "zsh".to_string()
            })
        );
    }

    #[test]
    fn test_args_rejects_extra_positional() {
        assert!(Args::try_parse_from(["sevp", "aws", "extra"]).is_err());
    }
}
