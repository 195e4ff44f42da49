//! Template storage back ends

use crate::{Error, PromptTemplate, Result};
use std::{
    collections::BTreeMap,
    io::ErrorKind,
    path::{Path, PathBuf},
    sync::Arc,
};

/// Retrieves raw prompt templates.
pub trait Storage: Send + Sync {
    /// Load the template at `path`.
    ///
    /// Fails with [`Error::TemplateNotFound`] when the path does not resolve.
    fn load_template(&self, path: &str) -> Result<PromptTemplate>;
}

impl<S: Storage + ?Sized> Storage for &S {
    fn load_template(&self, path: &str) -> Result<PromptTemplate> {
        (**self).load_template(path)
    }
}

impl<S: Storage + ?Sized> Storage for Box<S> {
    fn load_template(&self, path: &str) -> Result<PromptTemplate> {
        (**self).load_template(path)
    }
}

impl<S: Storage + ?Sized> Storage for Arc<S> {
    fn load_template(&self, path: &str) -> Result<PromptTemplate> {
        (**self).load_template(path)
    }
}

/// Templates stored as files under a base directory.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base: PathBuf,
}

impl LocalStorage {
    /// Create a storage rooted at `base`.
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    /// The root directory.
    pub fn base(&self) -> &Path {
        &self.base
    }
}

impl Storage for LocalStorage {
    /// Read `base/path` as UTF-8. The returned template records the full
    /// joined path.
    fn load_template(&self, path: &str) -> Result<PromptTemplate> {
        let full = self.base.join(path);
        let content = std::fs::read_to_string(&full).map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                Error::TemplateNotFound { path: full.clone() }
            } else {
                Error::Io {
                    path: full.clone(),
                    source,
                }
            }
        })?;
        tracing::debug!(path = %full.display(), "loaded prompt template");
        Ok(PromptTemplate::new(content, full.to_string_lossy()))
    }
}

/// Templates held in memory, keyed by path.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    templates: BTreeMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a template, replacing any previous one at `path`.
    pub fn with(mut self, path: impl Into<String>, content: impl Into<String>) -> Self {
        self.insert(path, content);
        self
    }

    pub fn insert(&mut self, path: impl Into<String>, content: impl Into<String>) {
        self.templates.insert(path.into(), content.into());
    }
}

impl Storage for MemoryStorage {
    fn load_template(&self, path: &str) -> Result<PromptTemplate> {
        let content = self
            .templates
            .get(path)
            .ok_or_else(|| Error::TemplateNotFound { path: path.into() })?;
        Ok(PromptTemplate::new(content.as_str(), path))
    }
}
