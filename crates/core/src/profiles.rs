//! Text parsing for externally managed selector sources.
//!
//! Extracts profile names from AWS-style config text and filters
//! version-manager directory names down to valid version strings.
//! Parsing never fails: text without matches yields an empty list, and
//! entries that don't look like versions are skipped.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref SECTION_HEADER: Regex = Regex::new(r"\[\s*(?:profile\s+)?([^\]\r\n]*?)\s*\]")
        .expect("section header pattern is valid");
    static ref GO_VERSION: Regex =
        Regex::new(r"^\d+\.\d+(?:\.\d+)?(?:beta\d+|rc\d+)?$").expect("go version pattern is valid");
    static ref TERRAFORM_VERSION: Regex =
        Regex::new(r"^\d+\.\d+\.\d+(?:-(?:alpha\d+|beta\d+|rc\d+|oci|alpha\d{8}))?$")
            .expect("terraform version pattern is valid");
}

/// Extracts profile names from the contents of an AWS config file.
///
/// Both `[name]` and `[profile name]` headers are recognised. Names are
/// returned in the order they appear, with surrounding whitespace trimmed.
///
/// # Examples
///
/// ```
/// use sevp_core::profiles::parse_aws_profiles;
///
/// let profiles = parse_aws_profiles("[default]\nregion = eu-west-1\n[profile dev]\n");
/// assert_eq!(profiles, vec!["default", "dev"]);
/// ```
#[must_use]
pub fn parse_aws_profiles(contents: &str) -> Vec<String> {
    SECTION_HEADER
        .captures_iter(contents)
        .filter_map(|captures| captures.get(1))
        .map(|name| name.as_str().trim().to_string())
        .collect()
}

/// Version string grammar accepted by a version manager.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VersionGrammar {
    /// `MAJOR.MINOR[.PATCH][betaN|rcN]`, as installed by goenv.
    Go,
    /// `MAJOR.MINOR.PATCH[-alphaN|-betaN|-rcN|-oci|-alphaYYYYMMDD]`, as installed by tfenv.
    Terraform,
}

impl VersionGrammar {
    #[must_use]
    pub fn is_match(self, version: &str) -> bool {
        match self {
            VersionGrammar::Go => GO_VERSION.is_match(version),
            VersionGrammar::Terraform => TERRAFORM_VERSION.is_match(version),
        }
    }
}

/// Keeps only the names that match `grammar`, preserving their order.
pub fn filter_versions<I, S>(names: I, grammar: VersionGrammar) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    names
        .into_iter()
        .map(Into::<String>::into)
        .filter(|name| grammar.is_match(name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_aws_profiles_both_header_forms() {
        let contents = "\n[default]\n[profile my-profile]\n";
        assert_eq!(parse_aws_profiles(contents), vec!["default", "my-profile"]);
    }

    #[test]
    fn test_parse_aws_profiles_keeps_encounter_order_and_duplicates() {
        let contents = "[profile test2]\n[profile test1]\n[test2]\n";
        assert_eq!(parse_aws_profiles(contents), vec!["test2", "test1", "test2"]);
    }

    #[test]
    fn test_parse_aws_profiles_trims_whitespace() {
        let contents = "[  profile   spaced  ]\n[ plain ]";
        assert_eq!(parse_aws_profiles(contents), vec!["spaced", "plain"]);
    }

    #[test]
    fn test_parse_aws_profiles_no_sections() {
        assert!(parse_aws_profiles("").is_empty());
        assert!(parse_aws_profiles("region = us-east-1\noutput = json\n").is_empty());
    }

    #[test]
    fn test_go_grammar() {
        let input = ["1.18.0", "1.18.0.100", "1.20beta1", "1.20.0-beta1"];
        assert_eq!(
            filter_versions(input, VersionGrammar::Go),
            vec!["1.18.0", "1.20beta1"]
        );
    }

    #[test]
    fn test_go_grammar_short_and_rc() {
        assert!(VersionGrammar::Go.is_match("1.21"));
        assert!(VersionGrammar::Go.is_match("1.21rc2"));
        assert!(!VersionGrammar::Go.is_match("system"));
        assert!(!VersionGrammar::Go.is_match("1"));
    }

    #[test]
    fn test_terraform_grammar() {
        let input = ["0.1.0", "11.2.0", "0.1.0.100", "1.6.0-rc1", "1.6.0-alpha20230816", "1.6"];
        assert_eq!(
            filter_versions(input, VersionGrammar::Terraform),
            vec!["0.1.0", "11.2.0", "1.6.0-rc1", "1.6.0-alpha20230816"]
        );
    }

    #[test]
    fn test_terraform_grammar_rejects_go_style_prerelease() {
        assert!(!VersionGrammar::Terraform.is_match("1.5.0beta1"));
        assert!(VersionGrammar::Terraform.is_match("1.5.0-oci"));
    }
}
