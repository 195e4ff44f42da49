//! Generic model configuration
//!
//! [`ModelConfig`] is the provider-neutral description of a client. Every
//! field is optional; `None` means "unset" and never reaches the resolved
//! parameters. The recognized vocabulary is the constant [`FIELDS`] list,
//! which the resolver walks instead of inspecting the struct at runtime.

use crate::{Param, utils};
use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};
use std::{fmt, path::Path};

/// Generic LLM connection and generation settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// API key (supports `${ENV_VAR}` expansion when loaded from TOML).
    pub api_key: Option<Secret>,
    /// Model identifier, or the deployment name on Azure.
    pub model: Option<String>,

    /// Endpoint override.
    pub base_url: Option<String>,
    /// Organization id (OpenAI-style providers).
    pub organization: Option<String>,

    /// Azure endpoint URL.
    pub azure_endpoint: Option<String>,
    /// Azure deployment name.
    pub azure_deployment: Option<String>,
    /// Azure API version, e.g. `2024-02-01`.
    pub api_version: Option<String>,

    /// Request timeout in seconds.
    pub timeout: Option<f64>,
    pub max_retries: Option<u32>,
    pub proxy: Option<String>,
    /// Preconfigured HTTP client handed to the native constructor.
    #[cfg(feature = "http")]
    #[serde(skip)]
    pub http_client: Option<reqwest::Client>,

    pub temperature: Option<f64>,
    pub top_p: Option<f64>,
    /// Provider-specific generation arguments passed through verbatim.
    pub model_kwargs: Option<Map<String, Value>>,
}

impl ModelConfig {
    /// Parse a TOML string, expanding `${ENV_VAR}` references first.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let expanded = utils::expand_env_vars(toml_str);
        let config: Self = toml::from_str(&expanded).context("invalid model config")?;
        Ok(config)
    }

    /// Load configuration from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_toml(&content)
    }

    /// Look up a recognized field by name.
    ///
    /// Returns `None` both for unknown names and for unset fields.
    pub fn get(&self, name: &str) -> Option<Param> {
        FIELDS
            .iter()
            .find(|field| field.name == name)
            .and_then(|field| field.get(self))
    }
}

/// A named accessor into [`ModelConfig`].
#[derive(Clone, Copy)]
pub struct Field {
    /// The generic parameter name.
    pub name: &'static str,
    read: fn(&ModelConfig) -> Option<Param>,
}

impl Field {
    /// Read the field, `None` when unset.
    pub fn get(&self, config: &ModelConfig) -> Option<Param> {
        (self.read)(config)
    }
}

impl fmt::Debug for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Field").field(&self.name).finish()
    }
}

/// The recognized ModelConfig vocabulary, in resolution order.
pub const FIELDS: &[Field] = &[
    Field {
        name: "api_key",
        read: |c| c.api_key.clone().map(Param::Secret),
    },
    Field {
        name: "model",
        read: |c| c.model.as_deref().map(Param::from),
    },
    Field {
        name: "base_url",
        read: |c| c.base_url.as_deref().map(Param::from),
    },
    Field {
        name: "organization",
        read: |c| c.organization.as_deref().map(Param::from),
    },
    Field {
        name: "azure_endpoint",
        read: |c| c.azure_endpoint.as_deref().map(Param::from),
    },
    Field {
        name: "azure_deployment",
        read: |c| c.azure_deployment.as_deref().map(Param::from),
    },
    Field {
        name: "api_version",
        read: |c| c.api_version.as_deref().map(Param::from),
    },
    Field {
        name: "timeout",
        read: |c| c.timeout.map(Param::from),
    },
    Field {
        name: "max_retries",
        read: |c| c.max_retries.map(Param::from),
    },
    Field {
        name: "proxy",
        read: |c| c.proxy.as_deref().map(Param::from),
    },
    #[cfg(feature = "http")]
    Field {
        name: "http_client",
        read: |c| c.http_client.clone().map(Param::Client),
    },
    Field {
        name: "temperature",
        read: |c| c.temperature.map(Param::from),
    },
    Field {
        name: "top_p",
        read: |c| c.top_p.map(Param::from),
    },
    Field {
        name: "model_kwargs",
        read: |c| c.model_kwargs.clone().map(|m| Param::Value(Value::Object(m))),
    },
];

/// A credential string with a redacted `Debug` representation.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    /// Wrap a credential.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The raw credential.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(**********)")
    }
}

impl From<&str> for Secret {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Secret {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl<'de> Deserialize<'de> for Secret {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self)
    }
}
