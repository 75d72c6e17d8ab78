//! Integration tests for sevp-core
//!
//! These tests verify that configuration, resolution, providers and the
//! dotfile work together by running complete workflows end-to-end.

use sevp_core::{
    config::Config,
    dotfile::{Dotfile, EnvSink, DOTFILE_NAME},
    error::Error,
    hooks::Shell,
    resolver::resolve,
    selector::{FileScanProvider, ScanKind, Selector},
};
use std::fs;
use std::io::Write;
use tempfile::{Builder, TempDir};

fn write_config(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
    let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

/// Load a config, pick a value from the default selector and persist it.
#[test]
fn test_static_selector_workflow() {
    let config_file = write_config(
        ".toml",
        r#"
default = "stage"

[stage]
target_var = "STAGE"
possible_values = ["dev", "qa", "prod"]
"#,
    );

    let config = Config::discover(config_file.path().to_str()).unwrap();
    let selection = resolve(None, config.as_ref()).unwrap().read().unwrap();
    assert_eq!(selection.target_variable, "STAGE");
    assert_eq!(selection.candidate_values, vec!["dev", "qa", "prod"]);

    let home = TempDir::new().unwrap();
    let dotfile = Dotfile::new(home.path().join(DOTFILE_NAME));
    dotfile
        .upsert(&selection.target_variable, &selection.candidate_values[2])
        .unwrap();
    dotfile
        .upsert(&selection.target_variable, &selection.candidate_values[0])
        .unwrap();

    assert_eq!(
        fs::read_to_string(dotfile.path()).unwrap(),
        "export STAGE=dev\n"
    );
}

/// YAML configs resolve the same way as TOML ones.
#[test]
fn test_yaml_config_workflow() {
    let config_file = write_config(
        ".yaml",
        r#"
region:
  target_var: AWS_REGION
  possible_values:
    - eu-west-1
    - us-east-1
"#,
    );

    let config = Config::load(config_file.path()).unwrap();
    let selection = resolve(Some("region"), Some(&config))
        .unwrap()
        .read()
        .unwrap();
    assert_eq!(selection.target_variable, "AWS_REGION");
    assert_eq!(selection.candidate_values, vec!["eu-west-1", "us-east-1"]);
}

/// A broken config is reported, not silently replaced by the fallback.
#[test]
fn test_malformed_config_is_an_error() {
    let config_file = write_config(".toml", "[stage\ntarget_var = ");
    let result = Config::discover(config_file.path().to_str());
    assert!(matches!(result, Err(Error::Toml { .. })));
}

/// Scanned sources feed the same dotfile as static lists.
#[test]
fn test_scanned_versions_workflow() {
    let home = TempDir::new().unwrap();
    for version in ["1.22.1", "1.21", "not-a-version", "1.23rc1"] {
        fs::create_dir_all(home.path().join(".goenv/versions").join(version)).unwrap();
    }
    fs::write(home.path().join(".goenv/versions/1.20.0"), "a file").unwrap();

    let provider = FileScanProvider::with_home(ScanKind::Goenv, home.path().into());
    let selection = provider.read().unwrap();
    assert_eq!(selection.target_variable, "GOENV_VERSION");
    assert_eq!(selection.candidate_values, vec!["1.21", "1.22.1", "1.23rc1"]);

    let dotfile = Dotfile::new(home.path().join(DOTFILE_NAME));
    fs::write(dotfile.path(), "# managed by sevp\nexport AWS_PROFILE=dev\n").unwrap();
    dotfile
        .upsert(&selection.target_variable, &selection.candidate_values[1])
        .unwrap();

    assert_eq!(
        fs::read_to_string(dotfile.path()).unwrap(),
        "# managed by sevp\nexport AWS_PROFILE=dev\nexport GOENV_VERSION=1.22.1\n"
    );
}

/// The hook sources the exact dotfile the picker writes.
#[test]
fn test_hook_sources_dotfile() {
    let home = TempDir::new().unwrap();
    let dotfile = Dotfile::new(home.path().join(DOTFILE_NAME));

    for shell in Shell::SUPPORTED {
        let hook = shell.parse::<Shell>().unwrap().hook(dotfile.path()).unwrap();
        assert!(hook.contains(&format!("source \"{}\"", dotfile.path().display())));
    }
}
