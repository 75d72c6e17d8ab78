//! Shell hooks that source the dotfile before each prompt.

use std::collections::HashMap;
use std::fmt::{Display, Formatter};
use std::path::Path;
use std::str::FromStr;

use leon::Template;

use crate::error::{Error, Result};

/// Name of the shell function defined by every hook.
const HOOK_FUNCTION: &str = "_sevp";

const BASH_HOOK: &str = r#"function {function}() \{
    if [[ -f "{dotfile}" ]]; then
        source "{dotfile}"
    fi
\}

PROMPT_COMMAND="{function}; $\{PROMPT_COMMAND\}""#;

const ZSH_HOOK: &str = r#"function {function}() \{
    if [[ -f "{dotfile}" ]]; then
        source "{dotfile}"
    fi
\}

precmd_functions+=({function})"#;

const FISH_HOOK: &str = r#"function {function} --on-event fish_prompt
    if test -f "{dotfile}"
        source "{dotfile}"
    end
end"#;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
}

impl Shell {
    pub const SUPPORTED: [&'static str; 3] = ["bash", "zsh", "fish"];

    fn template(self) -> &'static str {
        match self {
            Shell::Bash => BASH_HOOK,
            Shell::Zsh => ZSH_HOOK,
            Shell::Fish => FISH_HOOK,
        }
    }

    /// Renders the hook for this shell, sourcing `dotfile`.
    ///
    /// # Errors
    ///
    /// Returns an error if the hook template can't be parsed or rendered.
    pub fn hook(self, dotfile: &Path) -> Result<String> {
        let template = Template::parse(self.template())?;

        let mut values: HashMap<&str, String> = HashMap::new();
        values.insert("function", HOOK_FUNCTION.to_string());
        values.insert("dotfile", dotfile.display().to_string());

        Ok(template.render(&values)?)
    }
}

impl FromStr for Shell {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "bash" => Ok(Shell::Bash),
            "zsh" => Ok(Shell::Zsh),
            "fish" => Ok(Shell::Fish),
            _ => Err(Error::UnsupportedShell(
                s.to_string(),
                Shell::SUPPORTED.to_vec(),
            )),
        }
    }
}

impl Display for Shell {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Shell::Bash => "bash",
            Shell::Zsh => "zsh",
            Shell::Fish => "fish",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bash_hook() {
        let hook = Shell::Bash.hook(Path::new("/home/me/.sevp")).unwrap();
        assert!(hook.starts_with("function _sevp() {"));
        assert!(hook.contains(r#"source "/home/me/.sevp""#));
        assert!(hook.ends_with(r#"PROMPT_COMMAND="_sevp; ${PROMPT_COMMAND}""#));
    }

    #[test]
    fn test_zsh_hook() {
        let hook = Shell::Zsh.hook(Path::new("/home/me/.sevp")).unwrap();
        assert!(hook.contains(r#"if [[ -f "/home/me/.sevp" ]]; then"#));
        assert!(hook.ends_with("precmd_functions+=(_sevp)"));
    }

    #[test]
    fn test_fish_hook() {
        let hook = Shell::Fish.hook(Path::new("/home/me/.sevp")).unwrap();
        assert!(hook.starts_with("function _sevp --on-event fish_prompt"));
        assert!(!hook.contains('{'));
    }

    #[test]
    fn test_shell_from_str() {
        assert_eq!("zsh".parse::<Shell>().unwrap(), Shell::Zsh);
        assert_eq!(Shell::Fish.to_string(), "fish");
        assert!(matches!(
            "nu".parse::<Shell>(),
            Err(Error::UnsupportedShell(_, _))
        ));
    }
}
