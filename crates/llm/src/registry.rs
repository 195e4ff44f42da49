//! Provider registry
//!
//! Maps provider ids to constructors. Registration is explicit: build the
//! registry once at start-up (see [`Registry::builtin`]) and share it
//! afterwards. Mutation takes `&mut self`; concurrent registration and
//! lookup must be synchronized by the embedder.

use crate::{Adapter, Error, ModelConfig, NativeClient, Overrides, ProviderKind, Result};
use compact_str::CompactString;
use std::{collections::BTreeMap, fmt, sync::Arc};

/// A registered constructor producing `M`.
pub type Constructor<M> =
    Arc<dyn Fn(Option<&ModelConfig>, Overrides) -> Result<M> + Send + Sync + 'static>;

/// Named constructors for LLM clients.
pub struct Registry<M> {
    entries: BTreeMap<CompactString, Constructor<M>>,
}

impl<M> Registry<M> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Register a constructor under `id`.
    ///
    /// Re-registering an id replaces the previous constructor.
    pub fn register<F>(&mut self, id: impl Into<CompactString>, constructor: F)
    where
        F: Fn(Option<&ModelConfig>, Overrides) -> Result<M> + Send + Sync + 'static,
    {
        let id = id.into();
        if self.entries.insert(id.clone(), Arc::new(constructor)).is_some() {
            tracing::warn!(provider = %id, "provider re-registered, replacing previous constructor");
        } else {
            tracing::debug!(provider = %id, "provider registered");
        }
    }

    /// Register the adapter of native client `C` for a built-in provider.
    pub fn register_adapter<C>(&mut self, kind: ProviderKind)
    where
        C: NativeClient + 'static,
        M: From<Adapter<C>> + 'static,
    {
        self.register(kind.as_str(), move |config, overrides| {
            Adapter::<C>::new(kind, config, overrides).map(M::from)
        });
    }

    /// Construct the client registered under `id`.
    ///
    /// `config` and `overrides` are forwarded to the constructor unchanged.
    pub fn create(&self, id: &str, config: Option<&ModelConfig>, overrides: Overrides) -> Result<M> {
        let constructor = self
            .entries
            .get(id)
            .ok_or_else(|| Error::ProviderNotRegistered(CompactString::from(id)))?;
        constructor(config, overrides)
    }

    /// Whether `id` is registered.
    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Registered ids in alphabetical order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(CompactString::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<C: NativeClient + 'static> Registry<Adapter<C>> {
    /// A registry with every built-in provider bound to the kind-aware
    /// native client `C`.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for kind in ProviderKind::ALL {
            registry.register_adapter::<C>(kind);
        }
        registry
    }
}

impl<M> Default for Registry<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> Clone for Registry<M> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
        }
    }
}

impl<M> fmt::Debug for Registry<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("providers", &self.entries.keys().collect::<Vec<_>>())
            .finish()
    }
}
