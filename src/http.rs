//! HTTP client construction shared by every native client.

use std::collections::HashMap;
use std::sync::OnceLock;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(600);
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// HTTP configuration applied to every native client a registry builds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Request timeout
    #[serde(with = "duration_option_serde")]
    pub timeout: Option<Duration>,
    /// Connection timeout
    #[serde(with = "duration_option_serde")]
    pub connect_timeout: Option<Duration>,
    /// Custom headers
    pub headers: HashMap<String, String>,
    /// Proxy settings
    pub proxy: Option<String>,
    /// User agent
    pub user_agent: Option<String>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: Some(DEFAULT_REQUEST_TIMEOUT),
            connect_timeout: Some(DEFAULT_CONNECT_TIMEOUT),
            headers: HashMap::new(),
            proxy: None,
            user_agent: Some(DEFAULT_USER_AGENT.to_string()),
        }
    }
}

// Durations are (de)serialized as whole seconds.
mod duration_option_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Option<Duration>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match duration {
            Some(d) => d.as_secs().serialize(serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs: Option<u64> = Option::deserialize(deserializer)?;
        Ok(secs.map(Duration::from_secs))
    }
}

fn default_headers(config: &HttpConfig) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    for (k, v) in &config.headers {
        let name = HeaderName::from_bytes(k.as_bytes())
            .map_err(|e| Error::configuration(format!("Invalid header name '{k}': {e}")))?;
        let value = HeaderValue::from_str(v)
            .map_err(|e| Error::configuration(format!("Invalid header value for '{k}': {e}")))?;
        headers.insert(name, value);
    }
    Ok(headers)
}

fn proxy(config: &HttpConfig) -> Result<Option<reqwest::Proxy>> {
    config
        .proxy
        .as_deref()
        .map(|url| {
            reqwest::Proxy::all(url)
                .map_err(|e| Error::configuration(format!("Invalid proxy URL: {e}")))
        })
        .transpose()
}

/// Check headers and proxy without building a client.
pub fn validate_http_config(config: &HttpConfig) -> Result<()> {
    default_headers(config)?;
    proxy(config)?;
    Ok(())
}

/// Build the concurrent (async) HTTP client.
pub fn build_async_client(config: &HttpConfig) -> Result<reqwest::Client> {
    let mut builder = reqwest::Client::builder().default_headers(default_headers(config)?);

    if let Some(timeout) = config.timeout {
        builder = builder.timeout(timeout);
    }
    if let Some(connect_timeout) = config.connect_timeout {
        builder = builder.connect_timeout(connect_timeout);
    }
    if let Some(proxy) = proxy(config)? {
        builder = builder.proxy(proxy);
    }
    if let Some(user_agent) = &config.user_agent {
        builder = builder.user_agent(user_agent);
    }

    Ok(builder.build()?)
}

/// Build the blocking HTTP client.
///
/// Must not be called from inside an async runtime.
pub fn build_blocking_client(config: &HttpConfig) -> Result<reqwest::blocking::Client> {
    let mut builder =
        reqwest::blocking::Client::builder().default_headers(default_headers(config)?);

    if let Some(timeout) = config.timeout {
        builder = builder.timeout(timeout);
    }
    if let Some(connect_timeout) = config.connect_timeout {
        builder = builder.connect_timeout(connect_timeout);
    }
    if let Some(proxy) = proxy(config)? {
        builder = builder.proxy(proxy);
    }
    if let Some(user_agent) = &config.user_agent {
        builder = builder.user_agent(user_agent);
    }

    Ok(builder.build()?)
}

/// Blocking HTTP client built on first use.
///
/// A `reqwest::blocking::Client` owns its own runtime and must not be dropped
/// inside an async context, so it is only created once a caller asks for it.
#[derive(Debug, Clone)]
pub struct BlockingTransport {
    config: HttpConfig,
    client: OnceLock<reqwest::blocking::Client>,
}

impl BlockingTransport {
    /// Validate `config` now; the client itself is created by [`get`](Self::get).
    pub fn new(config: &HttpConfig) -> Result<Self> {
        validate_http_config(config)?;
        Ok(Self {
            config: config.clone(),
            client: OnceLock::new(),
        })
    }

    pub fn is_initialized(&self) -> bool {
        self.client.get().is_some()
    }

    /// The blocking client, created on the first call.
    ///
    /// Must not be called from inside an async runtime.
    pub fn get(&self) -> Result<&reqwest::blocking::Client> {
        if let Some(client) = self.client.get() {
            return Ok(client);
        }
        let client = build_blocking_client(&self.config)?;
        Ok(self.client.get_or_init(|| client))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_clients_default() {
        let config = HttpConfig::default();
        assert!(build_async_client(&config).is_ok());
        assert!(build_blocking_client(&config).is_ok());
    }

    #[test]
    fn test_invalid_header_name_is_configuration_error() {
        let mut config = HttpConfig::default();
        config
            .headers
            .insert("Invalid Header Name".to_string(), "value".to_string());

        let err = build_async_client(&config).unwrap_err();
        assert!(err.is_configuration());
        assert!(err.to_string().contains("Invalid header name"));
    }

    #[test]
    fn test_blocking_transport_defers_client_creation() {
        let transport = BlockingTransport::new(&HttpConfig::default()).unwrap();
        assert!(!transport.is_initialized());
        assert!(transport.get().is_ok());
        assert!(transport.is_initialized());
    }

    #[test]
    fn test_blocking_transport_validates_eagerly() {
        let config = HttpConfig {
            proxy: Some("not a url".to_string()),
            ..Default::default()
        };
        assert!(BlockingTransport::new(&config).unwrap_err().is_configuration());
    }

    #[test]
    fn test_invalid_proxy_is_configuration_error() {
        let config = HttpConfig {
            proxy: Some("not a url".to_string()),
            ..Default::default()
        };
        assert!(build_blocking_client(&config).unwrap_err().is_configuration());
    }

    #[test]
    fn test_http_config_deserializes_seconds() {
        let config: HttpConfig =
            serde_json::from_str(r#"{"timeout": 30, "headers": {"x-team": "core"}}"#).unwrap();
        assert_eq!(config.timeout, Some(Duration::from_secs(30)));
        assert_eq!(config.connect_timeout, Some(DEFAULT_CONNECT_TIMEOUT));
        assert_eq!(config.headers.get("x-team").map(String::as_str), Some("core"));
    }
}
