//! Parameter resolution and remapping
//!
//! [`resolve`] merges a [`ModelConfig`] with explicit [`Overrides`] into a
//! flat [`Params`] map. [`Params::remap`] renames generic keys into a
//! provider's native vocabulary.

use crate::{FIELDS, ModelConfig, Secret};
use compact_str::CompactString;
use serde_json::Value;
use std::{
    collections::{BTreeMap, btree_map},
    fmt,
};

/// A single resolved parameter value.
#[derive(Debug, Clone)]
pub enum Param {
    /// A plain JSON value.
    Value(Value),
    /// A credential.
    Secret(Secret),
    /// A preconfigured HTTP client.
    #[cfg(feature = "http")]
    Client(reqwest::Client),
}

impl Param {
    /// Whether this value stands for "unset".
    ///
    /// JSON `null` is treated the same as an absent value.
    pub fn is_unset(&self) -> bool {
        matches!(self, Self::Value(Value::Null))
    }

    /// The value as a string slice. Secrets are exposed.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Value(v) => v.as_str(),
            Self::Secret(s) => Some(s.expose()),
            #[cfg(feature = "http")]
            Self::Client(_) => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Value(v) => v.as_f64(),
            _ => None,
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Self::Value(v) => v.as_u64(),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Value(v) => v.as_bool(),
            _ => None,
        }
    }

    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Self::Value(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_secret(&self) -> Option<&Secret> {
        match self {
            Self::Secret(s) => Some(s),
            _ => None,
        }
    }

    #[cfg(feature = "http")]
    pub fn as_client(&self) -> Option<&reqwest::Client> {
        match self {
            Self::Client(c) => Some(c),
            _ => None,
        }
    }
}

impl PartialEq for Param {
    /// HTTP clients never compare equal.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Value(a), Self::Value(b)) => a == b,
            (Self::Secret(a), Self::Secret(b)) => a == b,
            _ => false,
        }
    }
}

impl From<Value> for Param {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl From<&str> for Param {
    fn from(value: &str) -> Self {
        Self::Value(Value::String(value.to_owned()))
    }
}

impl From<String> for Param {
    fn from(value: String) -> Self {
        Self::Value(Value::String(value))
    }
}

impl From<f64> for Param {
    fn from(value: f64) -> Self {
        Self::Value(Value::from(value))
    }
}

impl From<u32> for Param {
    fn from(value: u32) -> Self {
        Self::Value(Value::from(value))
    }
}

impl From<u64> for Param {
    fn from(value: u64) -> Self {
        Self::Value(Value::from(value))
    }
}

impl From<bool> for Param {
    fn from(value: bool) -> Self {
        Self::Value(Value::Bool(value))
    }
}

impl From<Secret> for Param {
    fn from(value: Secret) -> Self {
        Self::Secret(value)
    }
}

#[cfg(feature = "http")]
impl From<reqwest::Client> for Param {
    fn from(value: reqwest::Client) -> Self {
        Self::Client(value)
    }
}

/// Explicit constructor arguments, applied over a [`ModelConfig`].
///
/// Entries keep insertion order; a later entry for the same key wins.
/// Keys are free-form, so provider-native names pass straight through.
/// `Debug` hides the value of any key ending in `api_key`.
#[derive(Clone, Default)]
pub struct Overrides(Vec<(CompactString, Option<Param>)>);

impl Overrides {
    /// Create an empty override set
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value`.
    pub fn set(mut self, key: impl Into<CompactString>, value: impl Into<Param>) -> Self {
        self.0.push((key.into(), Some(value.into())));
        self
    }

    /// Set `key` when `value` is present, otherwise record it as unset.
    pub fn maybe<V: Into<Param>>(mut self, key: impl Into<CompactString>, value: Option<V>) -> Self {
        self.0.push((key.into(), value.map(Into::into)));
        self
    }

    /// Shorthand for the `model` argument.
    pub fn model(self, model: impl Into<String>) -> Self {
        self.set("model", model.into())
    }

    /// Shorthand for the `api_key` argument.
    pub fn api_key(self, key: impl Into<Secret>) -> Self {
        self.set("api_key", Param::Secret(key.into()))
    }

    /// Push an entry in place.
    pub fn insert(&mut self, key: impl Into<CompactString>, value: Option<Param>) {
        self.0.push((key.into(), value));
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate the raw entries, unset ones included.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&Param>)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_ref()))
    }
}

impl<K, V> FromIterator<(K, V)> for Overrides
where
    K: Into<CompactString>,
    V: Into<Param>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), Some(v.into())))
                .collect(),
        )
    }
}

/// Resolved parameters, keyed by generic or provider-specific name.
///
/// `Debug` hides the value of any key ending in `api_key`, so
/// `openai_api_key` or a plain-string `api_key` override never leaks into
/// logs.
#[derive(Clone, Default, PartialEq)]
pub struct Params(BTreeMap<CompactString, Param>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&Param> {
        self.0.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Insert a value, replacing any previous one.
    pub fn insert(&mut self, key: impl Into<CompactString>, value: impl Into<Param>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<Param> {
        self.0.remove(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(CompactString::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Param)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// String value of `key`, exposing secrets.
    pub fn str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Param::as_str)
    }

    pub fn f64(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(Param::as_f64)
    }

    pub fn u64(&self, key: &str) -> Option<u64> {
        self.get(key).and_then(Param::as_u64)
    }

    /// Rename generic keys into provider-specific ones.
    ///
    /// For every `(generic, specific)` pair with `generic` present, the value
    /// moves to `specific` unless `specific` is already set. In that case
    /// both keys stay as they are: an explicitly supplied native name is
    /// never overwritten, and the generic key is left behind.
    pub fn remap(&mut self, renames: &[(&str, &str)]) {
        for (generic, specific) in renames {
            if generic == specific || self.0.contains_key(*specific) {
                continue;
            }
            if let Some(value) = self.0.remove(*generic) {
                self.0.insert(CompactString::from(*specific), value);
            }
        }
    }

    /// Remove each of `keys`, whether present or not.
    pub fn strip(&mut self, keys: &[&str]) {
        for key in keys {
            self.0.remove(*key);
        }
    }

    /// Keep only entries that are not unset.
    fn set_resolved(&mut self, key: &str, value: Param) {
        if !value.is_unset() {
            self.0.insert(CompactString::from(key), value);
        }
    }
}

impl IntoIterator for Params {
    type Item = (CompactString, Param);
    type IntoIter = btree_map::IntoIter<CompactString, Param>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<K, V> FromIterator<(K, V)> for Params
where
    K: Into<CompactString>,
    V: Into<Param>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl fmt::Debug for Params {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.0.iter().map(|(k, v)| (k, shown(k, Some(v)))))
            .finish()
    }
}

impl fmt::Debug for Overrides {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.0.iter().map(|(k, v)| (k, shown(k, v.as_ref()))))
            .finish()
    }
}

struct Redacted;

impl fmt::Debug for Redacted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("**********")
    }
}

fn shown<'a>(key: &str, value: Option<&'a Param>) -> &'a dyn fmt::Debug {
    match value {
        Some(_) if key.ends_with("api_key") => &Redacted,
        Some(param) => param,
        None => &None::<()>,
    }
}

/// Merge `config` and `overrides` into a fresh parameter map.
///
/// Config fields are read in [`FIELDS`] order. Overrides are applied
/// afterwards and always win. Unset values from either side are dropped and
/// never occupy a key.
pub fn resolve(config: Option<&ModelConfig>, overrides: &Overrides) -> Params {
    let mut params = Params::new();

    if let Some(config) = config {
        for field in FIELDS {
            if let Some(value) = field.get(config) {
                params.set_resolved(field.name, value);
            }
        }
    }

    for (key, value) in overrides.iter() {
        if let Some(value) = value {
            params.set_resolved(key, value.clone());
        }
    }

    params
}
