//! Chooses the provider for a picker session.
//!
//! The selector name comes from the command line if given, then from the
//! configuration's `default`, then [`FALLBACK_SELECTOR`]. Without any
//! configuration the AWS profile scan is always used.

use log::debug;

use crate::config::{Config, FALLBACK_SELECTOR};
use crate::error::{Error, Result};
use crate::providers::{external_provider, FileScanProvider, ScanKind};
use crate::selector::{Provider, SelectorSpec, StaticListProvider};

/// Name of the selector to use. An explicit name always wins.
#[must_use]
pub fn effective_name<'a>(explicit_name: Option<&'a str>, configured_default: Option<&'a str>) -> &'a str {
    explicit_name
        .or(configured_default)
        .unwrap_or(FALLBACK_SELECTOR)
}

/// The provider used when there is no configuration at all.
#[must_use]
pub fn fallback_provider() -> Provider {
    Provider::FileScan(FileScanProvider::new(ScanKind::AwsProfiles))
}

/// Resolves the provider for `explicit_name` against `config`.
///
/// # Errors
///
/// - [`Error::SelectorNotFound`] if the name isn't in the configuration.
/// - [`Error::UnsupportedExternalProvider`] if an external selector has no provider.
/// - [`Error::MissingFields`] if a static selector lacks `target_var` or `possible_values`.
pub fn resolve(explicit_name: Option<&str>, config: Option<&Config>) -> Result<Provider> {
    let Some(config) = config else {
        debug!("No config loaded, scanning AWS profiles");
        return Ok(fallback_provider());
    };

    let name = effective_name(explicit_name, config.default.as_deref());
    debug!("Resolving selector `{name}`");

    let spec = config
        .selectors
        .get(name)
        .ok_or_else(|| Error::SelectorNotFound(name.to_string()))?;

    provider_for_spec(spec)
}

/// Builds the provider for one configured selector.
///
/// External selectors are mapped by name before any field checks, so an
/// external selector never needs `target_var` or `possible_values`.
///
/// # Errors
///
/// See [`resolve`].
pub fn provider_for_spec(spec: &SelectorSpec) -> Result<Provider> {
    if spec.is_external {
        return external_provider(&spec.name);
    }

    let missing = spec.missing_fields();
    if !missing.is_empty() {
        return Err(Error::MissingFields {
            selector: spec.name.clone(),
            fields: missing,
        });
    }

    Ok(Provider::Static(StaticListProvider::new(spec)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selector::Selector;
    use std::path::Path;

    const CONFIG: &str = r#"
default = "stage"

[aws]
external_config = true

[stage]
target_var = "STAGE"
possible_values = ["dev", "prod"]

[region]
target_var = "REGION"
possible_values = ["eu", "us"]

[broken]
target_var = "BROKEN"

[kube]
external_config = true
"#;

    fn config() -> Config {
        Config::parse(Path::new("sevp.toml"), CONFIG).unwrap()
    }

    #[test]
    fn test_effective_name() {
        assert_eq!(effective_name(Some("a"), Some("b")), "a");
        assert_eq!(effective_name(None, Some("b")), "b");
        assert_eq!(effective_name(None, None), "aws");
    }

    #[test]
    fn test_no_config_always_falls_back() {
        assert_eq!(resolve(None, None).unwrap(), fallback_provider());
        assert_eq!(resolve(Some("stage"), None).unwrap(), fallback_provider());
        assert_eq!(resolve(Some("unknown"), None).unwrap(), fallback_provider());
    }

    #[test]
    fn test_configured_default_is_used() {
        let provider = resolve(None, Some(&config())).unwrap();
        let selection = provider.read().unwrap();
        assert_eq!(selection.target_variable, "STAGE");
    }

    #[test]
    fn test_explicit_name_overrides_default() {
        let provider = resolve(Some("region"), Some(&config())).unwrap();
        let selection = provider.read().unwrap();
        assert_eq!(selection.target_variable, "REGION");
        assert_eq!(selection.candidate_values, vec!["eu", "us"]);
    }

    #[test]
    fn test_missing_default_uses_fallback_name() {
        let mut config = config();
        config.default = None;
        let provider = resolve(None, Some(&config)).unwrap();
        assert!(matches!(
            provider,
            Provider::FileScan(p) if p.kind() == ScanKind::AwsProfiles
        ));
    }

    #[test]
    fn test_selector_not_found() {
        let result = resolve(Some("nope"), Some(&config()));
        assert!(matches!(result, Err(Error::SelectorNotFound(name)) if name == "nope"));
    }

    #[test]
    fn test_missing_fields() {
        let result = resolve(Some("broken"), Some(&config()));
        assert!(matches!(
            result,
            Err(Error::MissingFields { fields, .. }) if fields == vec!["possible_values"]
        ));
    }

    #[test]
    fn test_unsupported_external_provider() {
        let result = resolve(Some("kube"), Some(&config()));
        assert!(matches!(result, Err(Error::UnsupportedExternalProvider(_))));
    }

    #[test]
    fn test_external_selector_skips_field_checks() {
        let provider = resolve(Some("aws"), Some(&config())).unwrap();
        assert_eq!(provider, fallback_provider());
    }
}
