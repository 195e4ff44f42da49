//! Prompt construction

use crate::{Pattern, Prompt, PromptTemplate, Result, Storage};
use compact_str::CompactString;
use llm::ChatMessage;
use std::collections::BTreeMap;

/// Values substituted into a template, keyed by placeholder name.
pub type Variables = BTreeMap<String, String>;

/// Loads templates from a [`Storage`] and substitutes variables.
#[derive(Debug, Clone)]
pub struct PromptRepository<S> {
    storage: S,
    pattern: Pattern,
}

impl<S: Storage> PromptRepository<S> {
    /// Create a repository using the `{{name}}` syntax.
    pub fn new(storage: S) -> Self {
        Self::with_pattern(storage, Pattern::default())
    }

    /// Create a repository with an explicit placeholder pattern.
    pub fn with_pattern(storage: S, pattern: Pattern) -> Self {
        Self { storage, pattern }
    }

    /// Load `path` and substitute `variables` into it.
    ///
    /// Storage failures are returned unchanged. Missing variables are not an
    /// error: their placeholders stay in the output as written, and unused
    /// variables are ignored.
    pub fn build(&self, path: &str, variables: &Variables) -> Result<Prompt> {
        let template = self.storage.load_template(path)?;
        Ok(self.render(&template, variables))
    }

    /// Substitute `variables` into an already loaded template.
    pub fn render(&self, template: &PromptTemplate, variables: &Variables) -> Prompt {
        Prompt::new(self.pattern.substitute(template.content(), variables))
    }

    /// Build the prompt and tag it with a chat role (`system`, `user`, ...).
    pub fn build_message(
        &self,
        path: &str,
        variables: &Variables,
        role: impl Into<CompactString>,
    ) -> Result<ChatMessage> {
        let prompt = self.build(path, variables)?;
        Ok(ChatMessage::new(role, prompt.into_content()))
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }
}
