//! No-op chat model for testing.
//!
//! Implements [`ChatModel`] and [`NativeClient`] but panics on any call.
//! Intended for tests that exercise configuration, registry and prompt
//! logic without touching a model.

use crate::{ChatModel, Generation, NativeClient, Params, ProviderKind};
use anyhow::Result;
use futures_core::Stream;

/// A no-op model that panics on any actual LLM call.
///
/// # Panics
///
/// `invoke` and `stream` panic if called.
#[derive(Debug, Clone, Default)]
pub struct NoopModel {
    /// The provider it was built for.
    pub kind: Option<ProviderKind>,
    /// The parameters it was built with.
    pub params: Params,
}

impl NativeClient for NoopModel {
    fn connect(kind: ProviderKind, params: Params) -> Result<Self> {
        Ok(Self {
            kind: Some(kind),
            params,
        })
    }
}

impl ChatModel for NoopModel {
    async fn invoke(&self, _input: &str) -> Result<Generation> {
        panic!("NoopModel::invoke called, not intended for real LLM calls");
    }

    fn stream(&self, _input: &str) -> impl Stream<Item = Result<Generation>> + Send {
        async_stream::stream! {
            panic!("NoopModel::stream called, not intended for real LLM calls");
            #[allow(unreachable_code)]
            {
                yield Ok(Generation::default());
            }
        }
    }
}
