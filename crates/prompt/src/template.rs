//! Template values

use serde::{Deserialize, Serialize};

/// A raw template as loaded from storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptTemplate {
    content: String,
    path: String,
}

impl PromptTemplate {
    pub fn new(content: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            path: path.into(),
        }
    }

    /// The unsubstituted template text.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Where the template was loaded from.
    pub fn path(&self) -> &str {
        &self.path
    }
}

/// A final prompt, ready for the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prompt {
    content: String,
}

impl Prompt {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn into_content(self) -> String {
        self.content
    }
}
