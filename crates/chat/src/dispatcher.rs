//! The prompt-to-model dispatcher

use crate::{ChatConfig, ChatParams, ChatService, Error, MessageStream, Result};
use anyhow::anyhow;
use async_stream::try_stream;
use futures_core::Stream;
use futures_util::StreamExt;
use llm::{ChatMessage, ChatModel};
use prompt::{PromptRepository, Storage, Variables};

/// Builds prompts from templates, sends them to a model and records the
/// conversation.
///
/// The history is append-only. [`Dispatcher::recent`] is the window of the
/// last `max_history` messages.
pub struct Dispatcher<M, S> {
    model: M,
    repository: PromptRepository<S>,
    params: ChatParams,
    history: Vec<ChatMessage>,
}

impl<M: ChatModel, S: Storage> Dispatcher<M, S> {
    /// Create a dispatcher, resolving `config` and `overrides` over the
    /// defaults.
    pub fn new(
        model: M,
        repository: PromptRepository<S>,
        config: Option<&ChatConfig>,
        overrides: &ChatConfig,
    ) -> Self {
        let params = ChatParams::resolve(config, overrides);
        tracing::debug!(mode = %params.mode, max_history = params.max_history, "chat dispatcher ready");
        Self {
            model,
            repository,
            params,
            history: Vec::new(),
        }
    }

    /// Every message recorded so far, oldest first.
    pub fn history(&self) -> &[ChatMessage] {
        &self.history
    }

    /// The last `max_history` messages.
    pub fn recent(&self) -> &[ChatMessage] {
        let start = self.history.len().saturating_sub(self.params.max_history);
        &self.history[start..]
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn repository(&self) -> &PromptRepository<S> {
        &self.repository
    }
}

impl<M: ChatModel, S: Storage> ChatService for Dispatcher<M, S> {
    fn params(&self) -> &ChatParams {
        &self.params
    }

    async fn direct(&mut self, path: &str, variables: &Variables) -> Result<ChatMessage> {
        let prompt = self.repository.build(path, variables)?;
        let generation = self
            .model
            .invoke(prompt.content())
            .await
            .map_err(Error::Model)?;
        let message = ChatMessage::from(generation);
        self.history.push(message.clone());
        Ok(message)
    }

    fn stream(&self, path: &str, variables: &Variables) -> Result<MessageStream<'_>> {
        let prompt = self.repository.build(path, variables)?;
        Ok(Box::pin(chunks(&self.model, prompt.into_content())))
    }

    async fn batch(&mut self, path: &str, variables: &[Variables]) -> Result<Vec<ChatMessage>> {
        let prompts = variables
            .iter()
            .map(|vars| Ok(self.repository.build(path, vars)?.into_content()))
            .collect::<Result<Vec<_>>>()?;
        let generations = self.model.batch(&prompts).await.map_err(Error::Model)?;
        if generations.len() != prompts.len() {
            return Err(Error::Model(anyhow!(
                "model returned {} results for {} prompts",
                generations.len(),
                prompts.len()
            )));
        }
        let messages: Vec<_> = generations.into_iter().map(ChatMessage::from).collect();
        self.history.extend(messages.iter().cloned());
        Ok(messages)
    }
}

/// Relay the model's stream for `prompt`, one assistant message per chunk.
fn chunks<M: ChatModel>(
    model: &M,
    prompt: String,
) -> impl Stream<Item = Result<ChatMessage>> + Send + '_ {
    try_stream! {
        let mut stream = std::pin::pin!(model.stream(&prompt));
        while let Some(chunk) = stream.next().await {
            let generation = chunk
                .inspect_err(|e| tracing::error!("model stream failed: {e}"))
                .map_err(Error::Model)?;
            yield ChatMessage::from(generation);
        }
    }
}

impl<M, S: std::fmt::Debug> std::fmt::Debug for Dispatcher<M, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("params", &self.params)
            .field("repository", &self.repository)
            .field("history", &self.history.len())
            .finish()
    }
}
