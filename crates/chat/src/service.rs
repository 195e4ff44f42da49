//! The mode-dispatching chat contract

use crate::{ChatMode, ChatParams, Error, Result};
use futures_core::Stream;
use llm::ChatMessage;
use prompt::Variables;
use std::pin::Pin;

/// A boxed stream of assistant messages, one per model chunk.
pub type MessageStream<'a> = Pin<Box<dyn Stream<Item = Result<ChatMessage>> + Send + 'a>>;

/// What [`ChatService::chat`] returns, shaped by the active mode.
pub enum ChatOutput<'a> {
    /// A direct response.
    Message(ChatMessage),
    /// A lazily consumed response stream.
    Stream(MessageStream<'a>),
    /// One response per prompt, in input order.
    Batch(Vec<ChatMessage>),
}

impl ChatOutput<'_> {
    /// The mode that produced this output.
    pub fn mode(&self) -> ChatMode {
        match self {
            Self::Message(_) => ChatMode::Direct,
            Self::Stream(_) => ChatMode::Stream,
            Self::Batch(_) => ChatMode::Batch,
        }
    }
}

impl std::fmt::Debug for ChatOutput<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Message(message) => f.debug_tuple("Message").field(message).finish(),
            Self::Stream(_) => f.write_str("Stream(..)"),
            Self::Batch(messages) => f.debug_tuple("Batch").field(messages).finish(),
        }
    }
}

/// A chat service with one handler per [`ChatMode`].
///
/// Every handler has a default body that fails with
/// [`Error::NotImplemented`], so a service only overrides the modes it
/// supports.
pub trait ChatService: Send + Sync {
    /// The resolved settings of this service.
    fn params(&self) -> &ChatParams;

    /// Build the prompt and return one full response.
    fn direct(
        &mut self,
        path: &str,
        variables: &Variables,
    ) -> impl Future<Output = Result<ChatMessage>> + Send {
        let _ = (path, variables);
        async { Err(Error::NotImplemented(ChatMode::Direct)) }
    }

    /// Build the prompt and return the response as a stream.
    ///
    /// Prompt failures surface here; model failures surface as stream items.
    fn stream(&self, path: &str, variables: &Variables) -> Result<MessageStream<'_>> {
        let _ = (path, variables);
        Err(Error::NotImplemented(ChatMode::Stream))
    }

    /// Build one prompt per variable set and return one response each.
    fn batch(
        &mut self,
        path: &str,
        variables: &[Variables],
    ) -> impl Future<Output = Result<Vec<ChatMessage>>> + Send {
        let _ = (path, variables);
        async { Err(Error::NotImplemented(ChatMode::Batch)) }
    }

    /// Run a chat call in the mode given by [`ChatService::params`].
    ///
    /// Batch mode runs a batch of one.
    fn chat<'a>(
        &'a mut self,
        path: &'a str,
        variables: &'a Variables,
    ) -> impl Future<Output = Result<ChatOutput<'a>>> + Send + 'a {
        async move {
            let mode = self.params().mode;
            match mode {
                ChatMode::Direct => self.direct(path, variables).await.map(ChatOutput::Message),
                ChatMode::Stream => {
                    let this: &'a Self = self;
                    this.stream(path, variables).map(ChatOutput::Stream)
                }
                ChatMode::Batch => self
                    .batch(path, std::slice::from_ref(variables))
                    .await
                    .map(ChatOutput::Batch),
            }
        }
    }
}
