//! Chat orchestration.
//!
//! A [`Dispatcher`] builds prompts through a [`PromptRepository`], calls a
//! [`ChatModel`] in the configured [`ChatMode`], and keeps the conversation
//! history. [`ChatService`] is the mode-dispatching contract it implements.
//!
//! [`PromptRepository`]: prompt::PromptRepository
//! [`ChatModel`]: llm::ChatModel

pub use config::{ChatConfig, ChatMode, ChatParams};
pub use dispatcher::Dispatcher;
pub use error::{Error, Result};
pub use service::{ChatOutput, ChatService, MessageStream};

mod config;
mod dispatcher;
mod error;
mod service;
