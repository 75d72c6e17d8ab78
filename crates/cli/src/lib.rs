//! Sevp CLI Library
//!
//! This crate provides the command-line interface for sevp: argument
//! parsing, the interactive value picker and the `list`, `view` and `init`
//! commands. Selector resolution and persistence live in `sevp_core`.
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing
//! - [`picker`]: Session state machine, pure renderer and terminal driver
//! - [`commands`]: What each `sevp` invocation does
//!
//! # Examples
//!
//! ```bash
//! # Pick a value for the configured default selector (AWS profiles without config)
//! sevp
//!
//! # Pick a value for a named selector
//! sevp docker-context
//!
//! # Show configured selectors and their current values
//! sevp list
//!
//! # Show what a selector would offer
//! sevp view tfenv
//!
//! # Install the shell hook
//! eval "$(sevp init zsh)"
//! ```

pub mod cli_args;
pub mod commands;
pub mod picker;
