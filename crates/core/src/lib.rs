//! Sevp Core Library
//!
//! This crate provides the core functionality for sevp, a terminal tool for
//! picking a value for an environment variable (an AWS profile, a Docker
//! context, a Terraform version, ...) and persisting the choice as an
//! `export NAME=value` line that a shell hook sources before each prompt.
//!
//! # Key Features
//!
//! - **Configuration**: TOML or YAML selector definitions with a default selector
//! - **Selector Providers**: static value lists, AWS profile and version-manager scans,
//!   and external command output
//! - **Resolution**: explicit selector, then configured default, then AWS profiles
//! - **Persistence**: in-place upsert of `export` lines in `~/.sevp`
//! - **Shell Hooks**: bash, zsh and fish snippets that source the dotfile
//!
//! # Examples
//!
//! Resolving a selector and persisting one of its values:
//!
//! ```no_run
//! use sevp_core::config::Config;
//! use sevp_core::dotfile::{Dotfile, EnvSink};
//! use sevp_core::resolver::resolve;
//! use sevp_core::selector::Selector;
//!
//! let config = Config::discover(None)?;
//! let selection = resolve(Some("aws"), config.as_ref())?.read()?;
//! if let Some(first) = selection.candidate_values.first() {
//!     Dotfile::in_home()?.upsert(&selection.target_variable, first)?;
//! }
//! # Ok::<(), sevp_core::error::Error>(())
//! ```

pub mod config;
pub mod dotfile;
pub mod error;
pub mod execution;
pub mod hooks;
pub mod profiles;
pub mod providers;
pub mod resolver;
pub mod selector;
