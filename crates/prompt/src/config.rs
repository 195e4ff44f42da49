//! Prompt settings

use crate::{LocalStorage, Pattern, PromptRepository, Syntax};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where templates live and how their placeholders are written.
///
/// Embedded in larger config files, e.g. as a `[prompt]` table:
///
/// ```toml
/// [prompt]
/// dir = "prompts"
/// syntax = "dollar"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptConfig {
    /// Root directory for [`LocalStorage`]; the working directory when empty.
    pub dir: PathBuf,
    pub syntax: Syntax,
}

impl PromptConfig {
    pub fn pattern(&self) -> Pattern {
        Pattern::from(self.syntax)
    }

    /// A repository reading templates under `dir` with the configured syntax.
    pub fn repository(&self) -> PromptRepository<LocalStorage> {
        PromptRepository::with_pattern(LocalStorage::new(self.dir.clone()), self.pattern())
    }
}
