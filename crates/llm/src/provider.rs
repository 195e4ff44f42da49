//! Built-in providers and their parameter tables
//!
//! Each provider has one static [`ParamTable`]: the generic → native renames
//! applied by [`Params::remap`], plus the keys its transport never accepts.

use crate::{ModelConfig, Overrides, Params, resolve};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Identifier of a built-in provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ProviderKind {
    /// OpenAI API.
    #[serde(rename = "openai")]
    OpenAI,
    /// Azure-hosted OpenAI deployments.
    #[serde(rename = "azure-openai")]
    Azure,
    /// Anthropic Messages API.
    #[serde(rename = "claude")]
    Anthropic,
    /// Google Gemini.
    #[serde(rename = "gemini")]
    Google,
    /// AWS Bedrock, authenticated by ambient cloud credentials.
    #[serde(rename = "bedrock")]
    Bedrock,
    /// xAI Grok.
    #[serde(rename = "grok")]
    Grok,
    /// Ollama-style local runtime.
    #[serde(rename = "ollama")]
    Ollama,
}

impl ProviderKind {
    /// Every built-in provider.
    pub const ALL: [Self; 7] = [
        Self::OpenAI,
        Self::Azure,
        Self::Anthropic,
        Self::Google,
        Self::Bedrock,
        Self::Grok,
        Self::Ollama,
    ];

    /// The registry id of this provider.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OpenAI => "openai",
            Self::Azure => "azure-openai",
            Self::Anthropic => "claude",
            Self::Google => "gemini",
            Self::Bedrock => "bedrock",
            Self::Grok => "grok",
            Self::Ollama => "ollama",
        }
    }

    /// The parameter table of this provider.
    pub fn table(&self) -> &'static ParamTable {
        match self {
            Self::OpenAI => &OPENAI,
            Self::Azure => &AZURE_OPENAI,
            Self::Anthropic => &ANTHROPIC,
            Self::Google => &GOOGLE,
            Self::Bedrock => &BEDROCK,
            Self::Grok => &XAI,
            Self::Ollama => &OLLAMA,
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| anyhow::anyhow!("unknown provider '{s}'"))
    }
}

/// How a provider translates generic parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamTable {
    /// `(generic, native)` renames, applied by [`Params::remap`].
    pub renames: &'static [(&'static str, &'static str)],
    /// Keys removed unconditionally after remapping.
    pub strip: &'static [&'static str],
}

impl ParamTable {
    /// Resolve, remap and strip: the final mapping handed to the native
    /// constructor.
    pub fn translate(&self, config: Option<&ModelConfig>, overrides: &Overrides) -> Params {
        let mut params = resolve(config, overrides);
        params.remap(self.renames);
        params.strip(self.strip);
        params
    }
}

pub const OPENAI: ParamTable = ParamTable {
    renames: &[
        ("api_key", "openai_api_key"),
        ("base_url", "openai_api_base"),
        ("proxy", "openai_proxy"),
        ("organization", "openai_organization"),
    ],
    strip: &[],
};

pub const AZURE_OPENAI: ParamTable = ParamTable {
    renames: &[
        ("base_url", "azure_endpoint"),
        ("model", "azure_deployment"),
        ("api_version", "api_version"),
        ("api_key", "api_key"),
        ("proxy", "openai_proxy"),
        ("organization", "openai_organization"),
    ],
    strip: &[],
};

pub const ANTHROPIC: ParamTable = ParamTable {
    renames: &[
        ("timeout", "default_request_timeout"),
        ("proxy", "anthropic_proxy"),
        ("base_url", "anthropic_api_url"),
        ("api_key", "api_key"),
    ],
    strip: &[],
};

pub const GOOGLE: ParamTable = ParamTable {
    renames: &[("api_key", "google_api_key"), ("timeout", "request_timeout")],
    strip: &[],
};

/// Bedrock signs requests with ambient AWS credentials, so `api_key` is
/// dropped after remapping.
pub const BEDROCK: ParamTable = ParamTable {
    renames: &[
        ("model", "model_id"),
        ("base_url", "endpoint_url"),
        ("timeout", "client_config"),
    ],
    strip: &["api_key"],
};

pub const XAI: ParamTable = ParamTable {
    renames: &[("api_key", "xai_api_key"), ("base_url", "xai_api_base")],
    strip: &[],
};

/// The local runtime takes generic names as-is and has no use for a key.
pub const OLLAMA: ParamTable = ParamTable {
    renames: &[],
    strip: &["api_key"],
};
