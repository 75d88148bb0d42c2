//! Error Handling Module
//!
//! Every failure the resolution layer can report collapses into one of two
//! kinds:
//! - [`Error::ConfigurationError`]: malformed identifier, unsupported provider,
//!   missing credential or invalid provider option.
//! - [`Error::DependencyError`]: the provider's optional dependency was not
//!   compiled in.
//!
//! Both carry a remediation string the caller can act on directly.
//!
//! # Example
//!
//! ```rust,ignore
//! use structured_llm::{Error, ErrorCategory};
//!
//! let error = Error::configuration("MISTRAL_API_KEY is not set");
//! assert_eq!(error.category(), ErrorCategory::Configuration);
//! ```

use thiserror::Error;

/// Errors raised while resolving a provider and assembling its client.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Malformed identifier, unsupported provider token, or missing/invalid configuration.
    #[error("{0}")]
    ConfigurationError(String),

    /// The optional dependency backing the requested provider is not available.
    #[error(
        "The {provider} provider requires {package} support, which needs the `{feature}` cargo feature. Install it with `{install}`."
    )]
    DependencyError {
        /// Human-readable provider name (e.g. "Azure OpenAI").
        provider: String,
        /// Provider SDK family the missing cargo feature enables (e.g. "openai").
        package: String,
        /// Cargo feature named by `install`.
        feature: String,
        /// Exact install instruction.
        install: String,
    },
}

/// Coarse classification of [`Error`] values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    Configuration,
    Dependency,
}

impl Error {
    /// Shorthand for [`Error::ConfigurationError`].
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::ConfigurationError(message.into())
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigurationError(_) => ErrorCategory::Configuration,
            Self::DependencyError { .. } => ErrorCategory::Dependency,
        }
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::ConfigurationError(_))
    }

    pub fn is_dependency(&self) -> bool {
        matches!(self, Self::DependencyError { .. })
    }

    /// The actionable part of the error: the install command for dependency
    /// errors, the full message otherwise.
    pub fn remediation(&self) -> String {
        match self {
            Self::ConfigurationError(message) => message.clone(),
            Self::DependencyError { install, .. } => install.clone(),
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::ConfigurationError(format!("Failed to create HTTP client: {err}"))
    }
}

/// Result type for resolution operations.
pub type Result<T> = std::result::Result<T, Error>;
