//! Placeholder patterns
//!
//! Two syntaxes ship built in and neither is preferred over the other:
//!
//! - [`Syntax::Mustache`]: `{{name}}`, inner whitespace allowed (`{{ name }}`).
//! - [`Syntax::Dollar`]: `$name` or `${name}`, with `$$` as a literal `$`.
//!
//! [`Pattern::custom`] accepts any regex whose `name` group (or group 1)
//! captures the variable name.
//!
//! Substitution is safe in every syntax: a placeholder whose variable is
//! missing is left in the output verbatim.

use crate::{Error, Result, Variables};
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::{borrow::Cow, sync::LazyLock};

static MUSTACHE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{\s*(?P<name>[A-Za-z_][A-Za-z0-9_]*)\s*\}\}").unwrap()
});

static DOLLAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\$(?:(?P<escape>\$)|(?P<name>[A-Za-z_][A-Za-z0-9_]*)|\{(?P<braced>[A-Za-z_][A-Za-z0-9_]*)\})",
    )
    .unwrap()
});

/// A built-in placeholder syntax, selectable from configuration (see
/// [`PromptConfig`](crate::PromptConfig)).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Syntax {
    /// `{{name}}`
    #[default]
    Mustache,
    /// `$name` / `${name}`
    Dollar,
}

/// A compiled placeholder pattern.
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
}

impl Pattern {
    /// The `{{name}}` syntax.
    pub fn mustache() -> Self {
        Self::from(Syntax::Mustache)
    }

    /// The `$name` / `${name}` syntax.
    pub fn dollar() -> Self {
        Self::from(Syntax::Dollar)
    }

    /// A caller-defined syntax.
    ///
    /// The variable name is taken from the capture group named `name`, or
    /// from group 1 when no such group exists.
    pub fn custom(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)?;
        if regex.captures_len() < 2 {
            return Err(Error::InvalidPattern(format!(
                "`{pattern}` has no capture group for the variable name"
            )));
        }
        Ok(Self { regex })
    }

    /// The underlying regular expression.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Replace every placeholder whose variable is present in `variables`.
    pub fn substitute<'a>(&self, content: &'a str, variables: &Variables) -> Cow<'a, str> {
        self.regex.replace_all(content, |caps: &Captures<'_>| {
            if caps.name("escape").is_some() {
                return "$".to_owned();
            }
            let whole = &caps[0];
            let Some(name) = variable_name(caps) else {
                return whole.to_owned();
            };
            match variables.get(name) {
                Some(value) => value.clone(),
                None => {
                    tracing::trace!(variable = name, "placeholder left unresolved");
                    whole.to_owned()
                }
            }
        })
    }
}

fn variable_name<'h>(caps: &Captures<'h>) -> Option<&'h str> {
    caps.name("name")
        .or_else(|| caps.name("braced"))
        .or_else(|| caps.get(1))
        .map(|m| m.as_str())
}

impl Default for Pattern {
    fn default() -> Self {
        Self::mustache()
    }
}

impl From<Syntax> for Pattern {
    fn from(syntax: Syntax) -> Self {
        let regex = match syntax {
            Syntax::Mustache => &*MUSTACHE,
            Syntax::Dollar => &*DOLLAR,
        };
        Self {
            regex: regex.clone(),
        }
    }
}
