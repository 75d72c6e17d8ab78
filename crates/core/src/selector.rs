//! Selector definitions and the providers that read their values.
//!
//! A selector names one dimension of choice: the environment variable to
//! set and the values it may take. Values either come straight from the
//! configuration ([`StaticListProvider`]) or are scanned from another
//! tool's local state ([`FileScanProvider`], [`ExternalCommandProvider`]).

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
pub use crate::providers::{ExternalCommandProvider, FileScanProvider, ScanKind};

/// One selector as defined in the configuration file.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SelectorSpec {
    #[serde(skip)]
    pub name: String,
    #[serde(rename = "target_var", default)]
    pub target_variable: String,
    #[serde(rename = "possible_values", default)]
    pub candidate_values: Vec<String>,
    #[serde(rename = "external_config", alias = "read_config", default)]
    pub is_external: bool,
}

impl SelectorSpec {
    /// Names of the fields a static selector needs but doesn't have.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.target_variable.is_empty() {
            missing.push("target_var");
        }
        if self.candidate_values.is_empty() {
            missing.push("possible_values");
        }
        missing
    }
}

/// The result of reading a selector: a target variable and its candidates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub target_variable: String,
    pub candidate_values: Vec<String>,
}

/// A source of selector values.
pub trait Selector {
    /// Reads the target variable and the candidate values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SourceUnavailable`] when the underlying file,
    /// directory or program can't be used.
    fn read(&self) -> Result<Selection>;
}

/// A selector whose values are listed verbatim in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticListProvider {
    selection: Selection,
}

impl StaticListProvider {
    /// Builds a provider from a non-external spec.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSelectorConfig`] if the spec is external or
    /// lacks a target variable or candidate values.
    pub fn new(spec: &SelectorSpec) -> Result<Self> {
        if spec.is_external {
            return Err(Error::InvalidSelectorConfig(
                spec.name.clone(),
                "external selectors are read from their provider".to_string(),
            ));
        }

        let missing = spec.missing_fields();
        if !missing.is_empty() {
            return Err(Error::InvalidSelectorConfig(
                spec.name.clone(),
                format!("`{}` must be set", missing.join("` and `")),
            ));
        }

        Ok(Self {
            selection: Selection {
                target_variable: spec.target_variable.clone(),
                candidate_values: spec.candidate_values.clone(),
            },
        })
    }
}

impl Selector for StaticListProvider {
    fn read(&self) -> Result<Selection> {
        Ok(self.selection.clone())
    }
}

/// Every provider the resolver can hand out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Provider {
    Static(StaticListProvider),
    FileScan(FileScanProvider),
    Command(ExternalCommandProvider),
}

impl Provider {
    /// The variable this provider's values are written to, known without reading.
    #[must_use]
    pub fn target_variable(&self) -> &str {
        match self {
            Provider::Static(p) => &p.selection.target_variable,
            Provider::FileScan(p) => p.kind().target_variable(),
            Provider::Command(p) => p.target_variable(),
        }
    }
}

impl Selector for Provider {
    fn read(&self) -> Result<Selection> {
        match self {
            Provider::Static(p) => p.read(),
            Provider::FileScan(p) => p.read(),
            Provider::Command(p) => p.read(),
        }
    }
}

impl Display for Provider {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Provider::Static(p) => write!(f, "static list for {}", p.selection.target_variable),
            Provider::FileScan(p) => write!(f, "{} scan", p.kind().name()),
            Provider::Command(p) => write!(f, "`{}` output", p.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(target: &str, values: &[&str], external: bool) -> SelectorSpec {
        SelectorSpec {
            name: "custom".to_string(),
            target_variable: target.to_string(),
            candidate_values: values.iter().map(ToString::to_string).collect(),
            is_external: external,
        }
    }

    #[test]
    fn test_static_provider_reads_config_values_in_order() {
        let provider = StaticListProvider::new(&spec("CUSTOM_VAR", &["b", "a"], false)).unwrap();
        let selection = provider.read().unwrap();
        assert_eq!(selection.target_variable, "CUSTOM_VAR");
        assert_eq!(selection.candidate_values, vec!["b", "a"]);
    }

    #[test]
    fn test_static_provider_rejects_missing_target() {
        let result = StaticListProvider::new(&spec("", &["a"], false));
        assert!(matches!(result, Err(Error::InvalidSelectorConfig(_, _))));
    }

    #[test]
    fn test_static_provider_rejects_missing_values() {
        let result = StaticListProvider::new(&spec("CUSTOM_VAR", &[], false));
        assert!(matches!(result, Err(Error::InvalidSelectorConfig(_, _))));
    }

    #[test]
    fn test_static_provider_rejects_external_spec() {
        let result = StaticListProvider::new(&spec("CUSTOM_VAR", &["a"], true));
        assert!(matches!(result, Err(Error::InvalidSelectorConfig(_, _))));
    }

    #[test]
    fn test_provider_target_variable_without_reading() {
        let provider = Provider::Static(
            StaticListProvider::new(&spec("CUSTOM_VAR", &["a"], false)).unwrap(),
        );
        assert_eq!(provider.target_variable(), "CUSTOM_VAR");

        let provider = Provider::FileScan(FileScanProvider::new(ScanKind::Goenv));
        assert_eq!(provider.target_variable(), "GOENV_VERSION");

        let provider = Provider::Command(ExternalCommandProvider::docker_context());
        assert_eq!(provider.target_variable(), "DOCKER_CONTEXT");
    }

    #[test]
    fn test_missing_fields() {
        assert_eq!(
            spec("", &[], false).missing_fields(),
            vec!["target_var", "possible_values"]
        );
        assert!(spec("X", &["1"], false).missing_fields().is_empty());
    }
}
