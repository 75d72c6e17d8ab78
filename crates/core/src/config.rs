//! Configuration loading for sevp.
//!
//! The configuration maps selector names to their target variable and
//! possible values, plus an optional `default` naming the selector used when
//! none is given on the command line. Both TOML and YAML files are accepted:
//!
//! ```toml
//! default = "aws"
//!
//! [aws]
//! external_config = true
//!
//! [stage]
//! target_var = "STAGE"
//! possible_values = ["dev", "prod"]
//! ```

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use log::debug;
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::selector::SelectorSpec;

/// Base name of the configuration file, without extension.
const CONFIG_FILE_STEM: &str = "sevp";
/// Extensions tried for each configuration directory, in order.
const CONFIG_EXTENSIONS: [&str; 3] = ["toml", "yaml", "yml"];

/// Selector used when there is no configuration or no default in it.
pub const FALLBACK_SELECTOR: &str = "aws";

/// A loaded configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Config {
    pub path: PathBuf,
    pub default: Option<String>,
    pub selectors: IndexMap<String, SelectorSpec>,
}

#[derive(Deserialize)]
struct RawConfig {
    #[serde(default)]
    default: Option<String>,
    #[serde(flatten)]
    selectors: IndexMap<String, SelectorSpec>,
}

impl Config {
    /// Parses configuration text. `path` is used for its extension and in errors.
    ///
    /// # Errors
    ///
    /// Returns an error if the extension is unknown, the text doesn't parse,
    /// or the file defines neither a default nor any selector.
    pub fn parse(path: &Path, contents: &str) -> Result<Self> {
        let display_path = path.display().to_string();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        let raw: RawConfig = match extension.as_deref() {
            Some("toml") => toml::from_str(contents).map_err(|original| Error::Toml {
                path: display_path.clone(),
                original,
            })?,
            Some("yaml" | "yml") => {
                if contents.trim().is_empty() {
                    return Err(Error::EmptyConfig(display_path));
                }
                serde_yaml::from_str(contents).map_err(|original| Error::Yaml {
                    path: display_path.clone(),
                    original,
                })?
            }
            _ => return Err(Error::UnsupportedConfigFormat(display_path)),
        };

        if raw.default.is_none() && raw.selectors.is_empty() {
            return Err(Error::EmptyConfig(display_path));
        }

        let selectors = raw
            .selectors
            .into_iter()
            .map(|(name, mut spec)| {
                spec.name.clone_from(&name);
                (name, spec)
            })
            .collect();

        Ok(Self {
            path: path.to_path_buf(),
            default: raw.default,
            selectors,
        })
    }

    /// Reads and parses the configuration file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file can't be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| Error::io_error("config", &path.display().to_string(), e))?;
        let config = Self::parse(path, &contents)?;
        debug!(
            "Loaded {} selectors from `{}`",
            config.selectors.len(),
            path.display()
        );
        Ok(config)
    }

    /// Loads the configuration from `config_path_arg` if given, otherwise from
    /// the first file found by [`find_config_path`].
    ///
    /// Returns `Ok(None)` when no configuration file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicitly given file is missing, or if the
    /// file found can't be read or parsed.
    pub fn discover(config_path_arg: Option<&str>) -> Result<Option<Self>> {
        if let Some(config_path) = config_path_arg {
            let expanded = PathBuf::from(shellexpand::tilde(config_path).to_string());
            debug!("Config path: `{}`", expanded.display());
            return Self::load(&expanded).map(Some);
        }

        let Some(home) = dirs::home_dir() else {
            debug!("No home directory, running without config");
            return Ok(None);
        };

        match find_config_path(&home) {
            Some(path) => {
                debug!("Config path: `{}`", path.display());
                Self::load(&path).map(Some)
            }
            None => {
                debug!("Config file not found");
                Ok(None)
            }
        }
    }

    /// Selector names in alphabetical order.
    #[must_use]
    pub fn sorted_selector_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.selectors.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

/// Candidate configuration paths under `home`, in precedence order.
///
/// `~/.config` takes precedence over the home directory itself.
#[must_use]
pub fn config_path_candidates(home: &Path) -> Vec<PathBuf> {
    [home.join(".config"), home.to_path_buf()]
        .iter()
        .flat_map(|dir| {
            CONFIG_EXTENSIONS
                .iter()
                .map(move |ext| dir.join(format!("{CONFIG_FILE_STEM}.{ext}")))
        })
        .collect()
}

/// Returns the first configuration file that exists under `home`.
#[must_use]
pub fn find_config_path(home: &Path) -> Option<PathBuf> {
    config_path_candidates(home)
        .into_iter()
        .find(|candidate| match fs::metadata(candidate) {
            Ok(metadata) => metadata.is_file(),
            Err(e) => {
                if e.kind() != ErrorKind::NotFound {
                    debug!("Skipping config candidate `{}`: {e}", candidate.display());
                }
                false
            }
        })
}
