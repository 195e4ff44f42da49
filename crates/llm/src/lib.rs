//! Provider-agnostic LLM client configuration.
//!
//! Callers describe connection parameters once with [`ModelConfig`] and
//! [`Overrides`]. [`resolve`] merges the two, [`Params::remap`] renames the
//! generic keys into a provider's native vocabulary using a static
//! [`ParamTable`], and [`Adapter`] hands the final mapping to the native
//! client constructor ([`NativeClient`]). [`Registry`] maps provider ids to
//! constructors.
//!
//! The crate also holds the shared chat surface: the [`ChatModel`] trait,
//! [`Generation`] and [`ChatMessage`].

pub use adapter::{Adapter, NativeClient};
pub use config::{FIELDS, Field, ModelConfig, Secret};
pub use error::{Error, Result};
pub use message::ChatMessage;
pub use model::{ChatModel, Generation};
pub use noop::NoopModel;
pub use params::{Overrides, Param, Params, resolve};
pub use provider::{ParamTable, ProviderKind};
pub use registry::{Constructor, Registry};
#[cfg(feature = "http")]
pub use reqwest::{self, Client};

mod adapter;
mod config;
mod error;
mod message;
mod model;
mod noop;
mod params;
pub mod provider;
mod registry;
pub mod utils;
