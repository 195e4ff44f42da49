//! Prompt templates.
//!
//! A [`Storage`] loads raw [`PromptTemplate`]s, and a [`PromptRepository`]
//! substitutes variables into them using a configurable placeholder
//! [`Pattern`], producing an immutable [`Prompt`].

pub use config::PromptConfig;
pub use error::{Error, Result};
pub use pattern::{Pattern, Syntax};
pub use repository::{PromptRepository, Variables};
pub use storage::{LocalStorage, MemoryStorage, Storage};
pub use template::{Prompt, PromptTemplate};

mod config;
mod error;
mod pattern;
mod repository;
mod storage;
mod template;
