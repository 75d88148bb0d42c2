//! Native client descriptions.
//!
//! A native client is the provider-specific connection object an adapter
//! talks through: the SDK family, its endpoint and credentials, a handful of
//! provider settings, and a `reqwest` client in either its blocking or
//! concurrent flavor.

use std::collections::BTreeMap;
use std::fmt;

use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::http::{BlockingTransport, HttpConfig, build_async_client};

/// Native client family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sdk {
    OpenAi,
    AzureOpenAi,
    Anthropic,
    GenAi,
    Mistral,
    Cohere,
    Groq,
    Writer,
    BedrockRuntime,
    Cerebras,
    Fireworks,
    Xai,
}

/// Blocking vs. concurrent client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClientVariant {
    Blocking,
    Concurrent,
}

impl ClientVariant {
    pub const fn from_async_flag(async_client: bool) -> Self {
        if async_client {
            Self::Concurrent
        } else {
            Self::Blocking
        }
    }

    pub const fn is_async(&self) -> bool {
        matches!(self, Self::Concurrent)
    }
}

/// Fully validated configuration of a native client.
#[derive(Clone)]
pub struct NativeClientConfig {
    pub sdk: Sdk,
    /// API prefix without trailing `/`.
    pub base_url: Option<String>,
    pub api_key: Option<SecretString>,
    /// Provider settings (api_version, project, location, region, ...).
    pub settings: BTreeMap<String, Value>,
    /// Secret settings other than the API key (e.g. AWS secret keys).
    pub secrets: BTreeMap<String, SecretString>,
}

impl NativeClientConfig {
    pub fn new(sdk: Sdk) -> Self {
        Self {
            sdk,
            base_url: None,
            api_key: None,
            settings: BTreeMap::new(),
            secrets: BTreeMap::new(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into().trim_end_matches('/').to_string());
        self
    }

    pub fn with_api_key(mut self, api_key: Option<SecretString>) -> Self {
        self.api_key = api_key;
        self
    }

    pub fn with_setting(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.settings.insert(key.into(), value.into());
        self
    }

    /// Insert a setting only when a value is present.
    pub fn with_optional_setting(self, key: &str, value: Option<String>) -> Self {
        match value {
            Some(value) => self.with_setting(key, value),
            None => self,
        }
    }

    pub fn with_secret(mut self, key: &str, value: Option<SecretString>) -> Self {
        if let Some(value) = value {
            self.secrets.insert(key.to_string(), value);
        }
        self
    }

    pub fn setting(&self, key: &str) -> Option<&Value> {
        self.settings.get(key)
    }

    pub fn setting_str(&self, key: &str) -> Option<&str> {
        self.settings.get(key).and_then(Value::as_str)
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_ref().map(|k| k.expose_secret())
    }

    pub fn secret(&self, key: &str) -> Option<&str> {
        self.secrets.get(key).map(|s| s.expose_secret())
    }
}

impl PartialEq for NativeClientConfig {
    fn eq(&self, other: &Self) -> bool {
        self.sdk == other.sdk
            && self.base_url == other.base_url
            && self.api_key() == other.api_key()
            && self.settings == other.settings
            && self.secrets.len() == other.secrets.len()
            && self
                .secrets
                .iter()
                .all(|(k, v)| other.secret(k) == Some(v.expose_secret()))
    }
}

impl fmt::Debug for NativeClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeClientConfig")
            .field("sdk", &self.sdk)
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("settings", &self.settings)
            .field("secrets", &self.secrets.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// HTTP transport owned by a native client.
#[derive(Debug, Clone)]
pub enum HttpHandle {
    /// Created lazily, see [`BlockingTransport`].
    Blocking(BlockingTransport),
    Concurrent(reqwest::Client),
}

/// A constructed native client.
#[derive(Debug, Clone)]
pub struct NativeClient {
    config: NativeClientConfig,
    variant: ClientVariant,
    http: HttpHandle,
}

impl NativeClient {
    /// Build the HTTP transport for a validated configuration.
    ///
    /// The concurrent client is created here. The blocking client is only
    /// validated and gets created on the first [`blocking_http`](Self::blocking_http)
    /// call, so assembling it from async code is safe.
    pub fn build(
        config: NativeClientConfig,
        variant: ClientVariant,
        http_config: &HttpConfig,
    ) -> Result<Self> {
        let http = match variant {
            ClientVariant::Blocking => HttpHandle::Blocking(BlockingTransport::new(http_config)?),
            ClientVariant::Concurrent => HttpHandle::Concurrent(build_async_client(http_config)?),
        };
        Ok(Self {
            config,
            variant,
            http,
        })
    }

    pub fn config(&self) -> &NativeClientConfig {
        &self.config
    }

    pub fn sdk(&self) -> Sdk {
        self.config.sdk
    }

    pub fn variant(&self) -> ClientVariant {
        self.variant
    }

    pub fn is_async(&self) -> bool {
        self.variant.is_async()
    }

    pub fn http(&self) -> &HttpHandle {
        &self.http
    }

    /// Concurrent transport, if this is the concurrent variant.
    pub fn async_http(&self) -> Option<&reqwest::Client> {
        match &self.http {
            HttpHandle::Concurrent(client) => Some(client),
            HttpHandle::Blocking(_) => None,
        }
    }

    /// Blocking transport, created on first use.
    ///
    /// Must not be called from inside an async runtime. Fails for the
    /// concurrent variant.
    pub fn blocking_http(&self) -> Result<&reqwest::blocking::Client> {
        match &self.http {
            HttpHandle::Blocking(transport) => transport.get(),
            HttpHandle::Concurrent(_) => Err(Error::configuration(
                "Native client was built as the concurrent variant; use `async_client(false)` for a blocking client",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_equality_compares_secret_values() {
        let a = NativeClientConfig::new(Sdk::OpenAi)
            .with_base_url("https://api.openai.com/v1/")
            .with_api_key(Some(SecretString::from("sk-1")));
        let b = NativeClientConfig::new(Sdk::OpenAi)
            .with_base_url("https://api.openai.com/v1")
            .with_api_key(Some(SecretString::from("sk-1")));
        let c = b.clone().with_api_key(Some(SecretString::from("sk-2")));

        assert_eq!(a, b);
        assert_ne!(b, c);
        assert_eq!(a.base_url.as_deref(), Some("https://api.openai.com/v1"));
    }

    #[test]
    fn debug_redacts_api_key() {
        let config =
            NativeClientConfig::new(Sdk::Groq).with_api_key(Some(SecretString::from("gsk-secret")));
        let rendered = format!("{config:?}");
        assert!(rendered.contains("[REDACTED]"));
        assert!(!rendered.contains("gsk-secret"));
    }

    #[test]
    fn build_selects_transport_from_variant() {
        let http = HttpConfig::default();
        let blocking =
            NativeClient::build(NativeClientConfig::new(Sdk::Cohere), ClientVariant::Blocking, &http)
                .unwrap();
        assert!(!blocking.is_async());
        assert!(matches!(blocking.http(), HttpHandle::Blocking(t) if !t.is_initialized()));
        assert!(blocking.blocking_http().is_ok());
        assert!(blocking.async_http().is_none());

        let concurrent = NativeClient::build(
            NativeClientConfig::new(Sdk::Cohere),
            ClientVariant::Concurrent,
            &http,
        )
        .unwrap();
        assert!(concurrent.is_async());
        assert!(concurrent.async_http().is_some());
        assert!(concurrent.blocking_http().unwrap_err().is_configuration());
    }

    #[tokio::test]
    async fn blocking_variant_assembles_and_drops_inside_runtime() {
        let client = NativeClient::build(
            NativeClientConfig::new(Sdk::OpenAi),
            ClientVariant::Blocking,
            &HttpConfig::default(),
        )
        .unwrap();
        assert!(matches!(client.http(), HttpHandle::Blocking(t) if !t.is_initialized()));
        drop(client.clone());
        drop(client);
    }
}
