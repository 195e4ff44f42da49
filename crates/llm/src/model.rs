//! The native operation surface of a constructed client

use anyhow::Result;
use futures_core::Stream;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// One model output: a full response, or a single stream chunk.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Generation {
    /// The generated text
    pub content: String,

    /// Provider-reported extras (usage, finish reason, ...)
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, Value>,
}

impl Generation {
    /// Create a generation without metadata
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            metadata: BTreeMap::new(),
        }
    }
}

/// A trait for chat-capable LLM clients
pub trait ChatModel: Send + Sync {
    /// Send a prompt and wait for the full response
    fn invoke(&self, input: &str) -> impl Future<Output = Result<Generation>> + Send;

    /// Send a prompt and receive the response chunk by chunk
    fn stream(&self, input: &str) -> impl Stream<Item = Result<Generation>> + Send;

    /// Send several prompts, one response per input in input order.
    ///
    /// Defaults to invoking each input in sequence.
    fn batch(&self, inputs: &[String]) -> impl Future<Output = Result<Vec<Generation>>> + Send {
        async move {
            let mut outputs = Vec::with_capacity(inputs.len());
            for input in inputs {
                outputs.push(self.invoke(input).await?);
            }
            Ok(outputs)
        }
    }
}
