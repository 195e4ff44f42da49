//! Chat messages

use crate::Generation;
use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// A message in a conversation.
///
/// Fields are private; a message never changes after construction.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ChatMessage {
    role: CompactString,
    content: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    metadata: BTreeMap<String, Value>,
}

impl ChatMessage {
    /// Create a message with a free-form role
    pub fn new(role: impl Into<CompactString>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
            metadata: BTreeMap::new(),
        }
    }

    /// Create a new assistant message
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new("assistant", content)
    }

    /// Create a new user message
    pub fn user(content: impl Into<String>) -> Self {
        Self::new("user", content)
    }

    /// Create a new system message
    pub fn system(content: impl Into<String>) -> Self {
        Self::new("system", content)
    }

    /// Attach metadata
    pub fn with_metadata(mut self, metadata: BTreeMap<String, Value>) -> Self {
        self.metadata = metadata;
        self
    }

    pub fn role(&self) -> &str {
        &self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn metadata(&self) -> &BTreeMap<String, Value> {
        &self.metadata
    }
}

impl From<Generation> for ChatMessage {
    /// Wrap a model output as an assistant turn, keeping its metadata.
    fn from(generation: Generation) -> Self {
        Self::assistant(generation.content).with_metadata(generation.metadata)
    }
}
