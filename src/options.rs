//! Call options: the few keys the resolver understands plus an open,
//! provider-defined option bag that is forwarded to adapters untouched.

use std::fmt;

use serde_json::{Map, Value};

use crate::cache::CacheHandle;
use crate::error::{Error, Result};
use crate::mode::Mode;

/// Open, string-keyed option map (credentials, endpoints, timeouts, ...).
///
/// The resolver only removes the keys it consumes; everything else reaches
/// the adapter factory verbatim.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProviderOptions {
    values: Map<String, Value>,
}

impl ProviderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.values.insert(key.into(), value.into())
    }

    /// Insert only when the key is absent.
    pub fn insert_default(&mut self, key: &str, value: impl Into<Value>) {
        if !self.values.contains_key(key) {
            self.values.insert(key.to_string(), value.into());
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.values.remove(key)
    }

    /// Remove a string option. Non-string values are a configuration error.
    pub fn take_string(&mut self, key: &str) -> Result<Option<String>> {
        match self.values.remove(key) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s)),
            Some(other) => Err(Error::configuration(format!(
                "Option `{key}` must be a string, got {other}"
            ))),
        }
    }

    /// Remove a boolean option. Non-boolean values are a configuration error.
    pub fn take_bool(&mut self, key: &str) -> Result<Option<bool>> {
        match self.values.remove(key) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Bool(b)) => Ok(Some(b)),
            Some(other) => Err(Error::configuration(format!(
                "Option `{key}` must be a boolean, got {other}"
            ))),
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.values
    }
}

impl From<Map<String, Value>> for ProviderOptions {
    fn from(values: Map<String, Value>) -> Self {
        Self { values }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for ProviderOptions {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Options accepted by [`from_provider`](crate::from_provider).
///
/// ```rust,ignore
/// let options = ClientOptions::new()
///     .async_client(true)
///     .mode(Mode::Json)
///     .option("api_key", "sk-...")
///     .option("timeout", 30);
/// ```
#[derive(Clone, Default)]
pub struct ClientOptions {
    /// Build the concurrent (non-blocking) native client variant.
    pub async_client: bool,
    /// Transport mode override; `None` selects the provider default.
    pub mode: Option<Mode>,
    /// Cache adapter handed to the adapter factory as-is.
    pub cache: Option<CacheHandle>,
    /// Provider-specific options.
    pub options: ProviderOptions,
}

impl ClientOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn async_client(mut self, async_client: bool) -> Self {
        self.async_client = async_client;
        self
    }

    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = Some(mode);
        self
    }

    pub fn cache(mut self, cache: CacheHandle) -> Self {
        self.cache = Some(cache);
        self
    }

    pub fn option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.options.insert(key, value);
        self
    }

    pub fn options(mut self, options: ProviderOptions) -> Self {
        self.options = options;
        self
    }
}

impl fmt::Debug for ClientOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Option values may hold credentials.
        f.debug_struct("ClientOptions")
            .field("async_client", &self.async_client)
            .field("mode", &self.mode)
            .field("cache", &self.cache.is_some())
            .field("options", &self.options.keys().collect::<Vec<_>>())
            .finish()
    }
}
