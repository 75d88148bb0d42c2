//! Deprecated provider tokens.
//!
//! A legacy token is rewritten into its replacement plus forced options
//! before dispatch. The caller is told through a [`DeprecationNotice`]; the
//! rewrite itself never fails.

use serde_json::Value;

use super::ids;
use crate::options::ProviderOptions;

/// A deprecated token and what it now means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegacyProvider {
    pub token: &'static str,
    pub replacement: &'static str,
    /// Options the legacy token implies (always applied).
    pub implied_options: &'static [(&'static str, bool)],
    /// How to reach the same configuration with the current token.
    pub migration: &'static str,
    pub example: &'static str,
}

pub const LEGACY_PROVIDERS: &[LegacyProvider] = &[
    LegacyProvider {
        token: ids::GENERATIVE_AI,
        replacement: ids::GOOGLE,
        implied_options: &[("vertexai", false)],
        migration: "Use 'google' provider instead.",
        example: r#"from_provider("google/gemini-pro", ClientOptions::new())"#,
    },
    LegacyProvider {
        token: ids::VERTEXAI,
        replacement: ids::GOOGLE,
        implied_options: &[("vertexai", true)],
        migration: "Use 'google' provider with vertexai=true instead.",
        example: r#"from_provider("google/gemini-pro", ClientOptions::new().option("vertexai", true))"#,
    },
];

pub fn legacy_provider(token: &str) -> Option<&'static LegacyProvider> {
    LEGACY_PROVIDERS.iter().find(|legacy| legacy.token == token)
}

/// Legacy tokens that map onto `replacement`, in declaration order.
pub fn aliases_of(replacement: &str) -> impl Iterator<Item = &'static str> + '_ {
    LEGACY_PROVIDERS
        .iter()
        .filter(move |legacy| legacy.replacement == replacement)
        .map(|legacy| legacy.token)
}

/// Non-fatal notice emitted for a deprecated token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeprecationNotice {
    pub legacy: String,
    pub replacement: String,
    pub message: String,
}

/// Outcome of the rewrite step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    pub provider: String,
    pub notice: Option<DeprecationNotice>,
}

/// Map a legacy token onto its replacement, applying implied options.
///
/// Current tokens (and unknown ones) pass through untouched.
pub fn rewrite_provider(token: &str, options: &mut ProviderOptions) -> Rewrite {
    let Some(legacy) = legacy_provider(token) else {
        return Rewrite {
            provider: token.to_string(),
            notice: None,
        };
    };

    for (key, value) in legacy.implied_options {
        options.insert(*key, Value::Bool(*value));
    }

    Rewrite {
        provider: legacy.replacement.to_string(),
        notice: Some(DeprecationNotice {
            legacy: legacy.token.to_string(),
            replacement: legacy.replacement.to_string(),
            message: format!(
                "The '{}' provider is deprecated. {} Example: {}",
                legacy.token, legacy.migration, legacy.example
            ),
        }),
    }
}
