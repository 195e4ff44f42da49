//! Provider adapter
//!
//! [`Adapter`] turns a generic [`ModelConfig`] plus [`Overrides`] into a
//! native client: resolve, remap with the provider's [`ParamTable`], strip,
//! then call [`NativeClient::connect`]. The constructed client is exposed
//! unchanged through `Deref`, `client()` and `into_inner()`.

use crate::{
    ChatModel, Error, Generation, ModelConfig, Overrides, ParamTable, Params, ProviderKind,
    Result,
};
use futures_core::Stream;
use std::ops::{Deref, DerefMut};

/// The native client constructor contract.
///
/// Implementors receive the final, provider-keyed parameters and validate
/// them however their SDK does. A rejection is returned to the caller
/// untouched.
pub trait NativeClient: Sized {
    /// Construct the client for `kind` from its final parameters.
    fn connect(kind: ProviderKind, params: Params) -> anyhow::Result<Self>;
}

/// A native client constructed from generic configuration.
#[derive(Debug, Clone)]
pub struct Adapter<C> {
    kind: ProviderKind,
    client: C,
}

impl<C: NativeClient> Adapter<C> {
    /// Construct the client for a built-in provider.
    pub fn new(kind: ProviderKind, config: Option<&ModelConfig>, overrides: Overrides) -> Result<Self> {
        Self::with_table(kind, kind.table(), config, overrides)
    }

    /// Construct the client with a caller-supplied parameter table.
    pub fn with_table(
        kind: ProviderKind,
        table: &ParamTable,
        config: Option<&ModelConfig>,
        overrides: Overrides,
    ) -> Result<Self> {
        let params = table.translate(config, &overrides);
        tracing::debug!(
            provider = %kind,
            params = ?params.keys().collect::<Vec<_>>(),
            "constructing provider client"
        );
        let client = C::connect(kind, params).map_err(Error::Construction)?;
        Ok(Self { kind, client })
    }
}

impl<C> Adapter<C> {
    /// The provider this client was built for.
    pub fn kind(&self) -> ProviderKind {
        self.kind
    }

    /// The native client.
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Take the native client out of the adapter.
    pub fn into_inner(self) -> C {
        self.client
    }
}

impl<C> Deref for Adapter<C> {
    type Target = C;

    fn deref(&self) -> &C {
        &self.client
    }
}

impl<C> DerefMut for Adapter<C> {
    fn deref_mut(&mut self) -> &mut C {
        &mut self.client
    }
}

impl<C: ChatModel> ChatModel for Adapter<C> {
    fn invoke(&self, input: &str) -> impl Future<Output = anyhow::Result<Generation>> + Send {
        self.client.invoke(input)
    }

    fn stream(&self, input: &str) -> impl Stream<Item = anyhow::Result<Generation>> + Send {
        self.client.stream(input)
    }

    fn batch(&self, inputs: &[String]) -> impl Future<Output = anyhow::Result<Vec<Generation>>> + Send {
        self.client.batch(inputs)
    }
}
