//! Credential resolution.
//!
//! Priority for every credential:
//! - explicit option (removed from the forwarded options, so adapters never
//!   receive it twice)
//! - environment variables, in declared order
//! - documented default, or a configuration error naming both the
//!   environment variable and the option key
//!
//! Nothing is cached: credentials may rotate between calls.

use std::collections::BTreeMap;
use std::fmt;

use secrecy::{ExposeSecret, SecretString};

use crate::error::{Error, Result};
use crate::options::ProviderOptions;

/// One place a credential may come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CredentialSource {
    /// Option key the caller may pass explicitly.
    pub option: &'static str,
    /// Environment variable consulted when no option is present.
    pub env: Option<&'static str>,
}

/// What happens when no source yields a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    Required,
    Default(&'static str),
    Optional,
}

/// Declarative description of one provider credential or endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CredentialSpec {
    /// Name the resolved value is stored under.
    pub name: &'static str,
    pub sources: &'static [CredentialSource],
    pub requirement: Requirement,
    /// Placeholder shown in remediation messages (e.g. `<your-api-key>`).
    pub placeholder: &'static str,
}

impl CredentialSpec {
    /// Environment variables consulted for this credential, in order.
    pub fn env_vars(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.sources.iter().filter_map(|s| s.env)
    }

    /// Option keys accepted for this credential, in order.
    pub fn option_keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.sources.iter().map(|s| s.option)
    }

    pub fn is_required(&self) -> bool {
        self.requirement == Requirement::Required
    }

    pub(crate) fn missing_error(&self) -> Error {
        let placeholder = self.placeholder;
        let option = self.sources.first().map_or(self.name, |s| s.option);
        match self.env_vars().next() {
            Some(env) => Error::configuration(format!(
                "{env} is not set. Set it with `export {env}={placeholder}` \
                 or pass it as option `{option}={placeholder}`"
            )),
            None => Error::configuration(format!(
                "Option `{option}` is required. Pass it as option `{option}={placeholder}`"
            )),
        }
    }
}

/// Read an environment variable, treating empty values as unset.
pub(crate) fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Resolve one credential, consuming its option keys from `options`.
pub fn resolve_credential(
    spec: &CredentialSpec,
    options: &mut ProviderOptions,
) -> Result<Option<String>> {
    // Take every accepted key so none leaks into the forwarded options.
    let mut explicit = None;
    for source in spec.sources {
        let value = options
            .take_string(source.option)?
            .filter(|v| !v.trim().is_empty());
        if explicit.is_none() {
            explicit = value;
        }
    }
    if explicit.is_some() {
        return Ok(explicit);
    }

    if let Some(value) = spec.env_vars().find_map(env_var) {
        return Ok(Some(value));
    }

    match spec.requirement {
        Requirement::Default(value) => Ok(Some(value.to_string())),
        Requirement::Optional => Ok(None),
        Requirement::Required => Err(spec.missing_error()),
    }
}

/// Resolve a list of specs in order. The first failure aborts resolution.
pub fn resolve_credentials(
    specs: &[CredentialSpec],
    options: &mut ProviderOptions,
) -> Result<ResolvedCredentials> {
    let mut resolved = ResolvedCredentials::default();
    for spec in specs {
        if let Some(value) = resolve_credential(spec, options)? {
            resolved.values.insert(spec.name, SecretString::from(value));
        }
    }
    Ok(resolved)
}

/// Credentials resolved for a single call.
#[derive(Default)]
pub struct ResolvedCredentials {
    values: BTreeMap<&'static str, SecretString>,
}

impl ResolvedCredentials {
    pub fn get(&self, name: &str) -> Option<&SecretString> {
        self.values.get(name)
    }

    /// Plain value for non-secret settings (endpoints, regions, ...).
    pub fn value(&self, name: &str) -> Option<String> {
        self.values.get(name).map(|v| v.expose_secret().to_string())
    }

    pub fn take(&mut self, name: &str) -> Option<SecretString> {
        self.values.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }
}

impl fmt::Debug for ResolvedCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.values.keys()).finish()
    }
}
