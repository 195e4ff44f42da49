//! Chat configuration
//!
//! [`ChatConfig`] is the partial, loadable form; [`ChatParams`] is the
//! resolved form a dispatcher runs with.

use anyhow::{Context, Result};
use prompt::PromptConfig;
use serde::{Deserialize, Serialize};
use std::{fmt, path::Path};

/// Default number of messages in the context window.
pub const DEFAULT_MAX_HISTORY: usize = 10;

/// How a chat call is executed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatMode {
    /// One call, one full response.
    #[default]
    Direct,
    /// One call, response delivered chunk by chunk.
    Stream,
    /// Several prompts in one call, one response each.
    Batch,
}

impl fmt::Display for ChatMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Direct => "direct",
            Self::Stream => "stream",
            Self::Batch => "batch",
        })
    }
}

/// Chat settings, every field optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<ChatMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_history: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    /// Template location and placeholder syntax, the `[prompt]` table.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<PromptConfig>,
}

impl ChatConfig {
    /// Set the mode.
    pub fn mode(mut self, mode: ChatMode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Set the history window.
    pub fn max_history(mut self, max_history: usize) -> Self {
        self.max_history = Some(max_history);
        self
    }

    pub fn temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Parse a TOML string into a `ChatConfig`, expanding `${VAR}`
    /// references first.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let expanded = llm::utils::expand_env_vars(toml_str);
        toml::from_str(&expanded).context("invalid chat config")
    }

    /// Load configuration from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_toml(&content)
    }
}

/// Resolved chat settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChatParams {
    pub mode: ChatMode,
    pub max_history: usize,
    pub temperature: Option<f64>,
}

impl ChatParams {
    /// Resolve defaults, then `config`, then `overrides`.
    ///
    /// Only fields that are set take effect, so an override never clears a
    /// configured value.
    pub fn resolve(config: Option<&ChatConfig>, overrides: &ChatConfig) -> Self {
        let mut params = Self::default();
        if let Some(config) = config {
            params.apply(config);
        }
        params.apply(overrides);
        params
    }

    fn apply(&mut self, config: &ChatConfig) {
        if let Some(mode) = config.mode {
            self.mode = mode;
        }
        if let Some(max_history) = config.max_history {
            self.max_history = max_history;
        }
        if let Some(temperature) = config.temperature {
            self.temperature = Some(temperature);
        }
    }
}

impl Default for ChatParams {
    fn default() -> Self {
        Self {
            mode: ChatMode::Direct,
            max_history: DEFAULT_MAX_HISTORY,
            temperature: None,
        }
    }
}
