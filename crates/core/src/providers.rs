//! Providers that scan another tool's local state for selector values.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::Command;

use log::{debug, warn};

use crate::error::{Error, Result};
use crate::execution::capture_lines;
use crate::profiles::{filter_versions, parse_aws_profiles, VersionGrammar};
use crate::selector::{Provider, Selection, Selector};

/// The local sources a [`FileScanProvider`] knows how to read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScanKind {
    /// Profiles in `~/.aws/config`.
    AwsProfiles,
    /// Terraform versions installed under `~/.tfenv/versions`.
    Tfenv,
    /// Go versions installed under `~/.goenv/versions`.
    Goenv,
}

impl ScanKind {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            ScanKind::AwsProfiles => "aws",
            ScanKind::Tfenv => "tfenv",
            ScanKind::Goenv => "goenv",
        }
    }

    #[must_use]
    pub fn target_variable(self) -> &'static str {
        match self {
            ScanKind::AwsProfiles => "AWS_PROFILE",
            ScanKind::Tfenv => "TFENV_TERRAFORM_VERSION",
            ScanKind::Goenv => "GOENV_VERSION",
        }
    }

    /// Location of the scanned file or directory relative to the home directory.
    #[must_use]
    pub fn relative_path(self) -> PathBuf {
        match self {
            ScanKind::AwsProfiles => [".aws", "config"].iter().collect(),
            ScanKind::Tfenv => [".tfenv", "versions"].iter().collect(),
            ScanKind::Goenv => [".goenv", "versions"].iter().collect(),
        }
    }
}

/// Reads selector values from a well-known file or directory in the home directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileScanProvider {
    kind: ScanKind,
    home: Option<PathBuf>,
}

impl FileScanProvider {
    /// Scans relative to the current user's home directory.
    #[must_use]
    pub fn new(kind: ScanKind) -> Self {
        Self { kind, home: None }
    }

    /// Scans relative to `home` instead of the user's home directory.
    #[must_use]
    pub fn with_home(kind: ScanKind, home: PathBuf) -> Self {
        Self {
            kind,
            home: Some(home),
        }
    }

    #[must_use]
    pub fn kind(&self) -> ScanKind {
        self.kind
    }

    fn source_path(&self) -> Result<PathBuf> {
        let home = match &self.home {
            Some(home) => home.clone(),
            None => dirs::home_dir().ok_or_else(|| {
                Error::source_unavailable(
                    self.kind.name(),
                    "could not determine the home directory",
                )
            })?,
        };
        Ok(home.join(self.kind.relative_path()))
    }
}

impl Selector for FileScanProvider {
    fn read(&self) -> Result<Selection> {
        let path = self.source_path()?;
        debug!("Scanning `{}` for {} values", path.display(), self.kind.name());

        let candidate_values = match self.kind {
            ScanKind::AwsProfiles => read_aws_profiles(&path)?,
            ScanKind::Tfenv => read_versions(self.kind, &path, VersionGrammar::Terraform)?,
            ScanKind::Goenv => read_versions(self.kind, &path, VersionGrammar::Go)?,
        };

        Ok(Selection {
            target_variable: self.kind.target_variable().to_string(),
            candidate_values,
        })
    }
}

fn unavailable_for_io(provider: &str, path: &Path, e: &std::io::Error) -> Error {
    match e.kind() {
        ErrorKind::NotFound => {
            Error::source_unavailable(provider, format!("`{}` does not exist", path.display()))
        }
        _ => Error::source_unavailable(provider, format!("`{}`: {e}", path.display())),
    }
}

/// An empty AWS config is valid and yields no profiles.
fn read_aws_profiles(path: &Path) -> Result<Vec<String>> {
    let contents = fs::read_to_string(path)
        .map_err(|e| unavailable_for_io(ScanKind::AwsProfiles.name(), path, &e))?;
    Ok(parse_aws_profiles(&contents))
}

/// Lists the subdirectories of `path` that are valid versions.
///
/// Directory order is not guaranteed by the filesystem, so the result is sorted.
/// An empty result is an error.
fn read_versions(kind: ScanKind, path: &Path, grammar: VersionGrammar) -> Result<Vec<String>> {
    let entries = fs::read_dir(path).map_err(|e| unavailable_for_io(kind.name(), path, &e))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| unavailable_for_io(kind.name(), path, &e))?;
        if !entry.file_type().map(|t| t.is_dir()).unwrap_or(false) {
            continue;
        }
        match entry.file_name().into_string() {
            Ok(name) => names.push(name),
            Err(name) => warn!("Skipping non UTF-8 entry {name:?} in `{}`", path.display()),
        }
    }

    let mut versions = filter_versions(names, grammar);
    if versions.is_empty() {
        return Err(Error::source_unavailable(
            kind.name(),
            format!("no {} versions", kind.name()),
        ));
    }
    versions.sort();
    Ok(versions)
}

/// Reads selector values from the output of an external program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalCommandProvider {
    name: String,
    target_variable: String,
    program: String,
    args: Vec<String>,
}

impl ExternalCommandProvider {
    #[must_use]
    pub fn new(name: &str, target_variable: &str, program: &str, args: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            target_variable: target_variable.to_string(),
            program: program.to_string(),
            args: args.iter().map(ToString::to_string).collect(),
        }
    }

    /// Docker contexts, as listed by `docker context ls`.
    #[must_use]
    pub fn docker_context() -> Self {
        Self::new(
            "docker-context",
            "DOCKER_CONTEXT",
            "docker",
            &["context", "ls", "--format", "{{.Name}}"],
        )
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn target_variable(&self) -> &str {
        &self.target_variable
    }
}

impl Selector for ExternalCommandProvider {
    fn read(&self) -> Result<Selection> {
        let mut command = Command::new(&self.program);
        command.args(&self.args);

        Ok(Selection {
            target_variable: self.target_variable.clone(),
            candidate_values: capture_lines(&self.name, command)?,
        })
    }
}

/// Maps an external selector name to the provider that scans its source.
///
/// # Errors
///
/// Returns [`Error::UnsupportedExternalProvider`] for names without a provider.
pub fn external_provider(name: &str) -> Result<Provider> {
    match name {
        "aws" => Ok(Provider::FileScan(FileScanProvider::new(ScanKind::AwsProfiles))),
        "tfenv" => Ok(Provider::FileScan(FileScanProvider::new(ScanKind::Tfenv))),
        "goenv" => Ok(Provider::FileScan(FileScanProvider::new(ScanKind::Goenv))),
        "docker-context" => Ok(Provider::Command(ExternalCommandProvider::docker_context())),
        _ => Err(Error::UnsupportedExternalProvider(name.to_string())),
    }
}
