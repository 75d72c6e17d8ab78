use leon::{ParseError, RenderError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("The `{}` source is unavailable: {}", .provider, .reason)]
    SourceUnavailable { provider: String, reason: String },

    #[error("Invalid selector `{}`: {}", .0, .1)]
    InvalidSelectorConfig(String, String),

    #[error("Selector `{}` is missing {}", .selector, .fields.join(" and "))]
    MissingFields {
        selector: String,
        fields: Vec<&'static str>,
    },

    #[error("Selector `{}` was not found in the config", .0)]
    SelectorNotFound(String),

    #[error("The external config provider is not supported for selector `{}`", .0)]
    UnsupportedExternalProvider(String),

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("Error reading config file at `{}`: {}", .path, .original)]
    Toml {
        path: String,
        original: toml::de::Error,
    },

    #[error("Error reading config file at `{}`: {}", .path, .original)]
    Yaml {
        path: String,
        original: serde_yaml::Error,
    },

    #[error("Unsupported config file format for `{}` (expected .toml, .yaml or .yml)", .0)]
    UnsupportedConfigFormat(String),

    #[error("No config file found (looked for sevp.toml, sevp.yaml and sevp.yml in ~/.config and ~)")]
    ConfigNotFound,

    #[error("The config file at `{}` is empty", .0)]
    EmptyConfig(String),

    #[error("Could not determine the user's home directory")]
    HomeDirectoryUnavailable,

    #[error("Value for `{}` may not contain a line break", .0)]
    InvalidValue(String),

    #[error("Error writing to file: {}", .0)]
    Persist(#[source] Box<Error>),

    #[error("Unsupported shell `{}` (supported: {})", .0, .1.join(", "))]
    UnsupportedShell(String, Vec<&'static str>),

    #[error("Error parsing hook template: {}", .0)]
    Parse(#[from] ParseError),

    #[error("Error rendering hook template: {}", .0)]
    Render(#[from] RenderError),

    #[error("STDIO error: {}", .0)]
    Stdio(#[from] std::io::Error),
}

impl Error {
    pub fn source_unavailable(provider: &str, reason: impl ToString) -> Self {
        Self::SourceUnavailable {
            provider: provider.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn io_error(file_description: &str, path: &str, original: std::io::Error) -> Self {
        Self::Io {
            file_description: file_description.to_string(),
            path: path.to_string(),
            original,
        }
    }
}
