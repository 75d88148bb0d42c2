//! Capability probe: which optional provider dependencies are compiled in.
//!
//! Each provider SDK family maps to one cargo feature. `build.rs` exports the
//! enabled set, and [`CapabilityProbe::global`] reads it once per process.
//! Registries hold their own probe so tests can simulate partial installs.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::OnceLock;

use crate::error::Error;

/// Optional dependency backing one or more providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Dependency {
    /// OpenAI-compatible client (openai, azure_openai, perplexity, ollama).
    OpenAi,
    Anthropic,
    /// Google GenAI client (google and its legacy aliases).
    GoogleGenAi,
    MistralAi,
    Cohere,
    Groq,
    Writer,
    /// AWS Bedrock runtime client.
    Bedrock,
    Cerebras,
    Fireworks,
    XaiSdk,
}

impl Dependency {
    pub const ALL: [Dependency; 11] = [
        Dependency::OpenAi,
        Dependency::Anthropic,
        Dependency::GoogleGenAi,
        Dependency::MistralAi,
        Dependency::Cohere,
        Dependency::Groq,
        Dependency::Writer,
        Dependency::Bedrock,
        Dependency::Cerebras,
        Dependency::Fireworks,
        Dependency::XaiSdk,
    ];

    /// Package name used in messages and by [`CapabilityProbe::is_importable`].
    pub const fn package(&self) -> &'static str {
        match self {
            Dependency::OpenAi => "openai",
            Dependency::Anthropic => "anthropic",
            Dependency::GoogleGenAi => "google-genai",
            Dependency::MistralAi => "mistralai",
            Dependency::Cohere => "cohere",
            Dependency::Groq => "groq",
            Dependency::Writer => "writer-sdk",
            Dependency::Bedrock => "bedrock-runtime",
            Dependency::Cerebras => "cerebras",
            Dependency::Fireworks => "fireworks-ai",
            Dependency::XaiSdk => "xai-sdk",
        }
    }

    /// Cargo feature that enables this dependency.
    pub const fn feature(&self) -> &'static str {
        match self {
            Dependency::OpenAi => "openai",
            Dependency::Anthropic => "anthropic",
            Dependency::GoogleGenAi => "google",
            Dependency::MistralAi => "mistral",
            Dependency::Cohere => "cohere",
            Dependency::Groq => "groq",
            Dependency::Writer => "writer",
            Dependency::Bedrock => "bedrock",
            Dependency::Cerebras => "cerebras",
            Dependency::Fireworks => "fireworks",
            Dependency::XaiSdk => "xai",
        }
    }

    pub fn install_command(&self) -> String {
        format!(
            "cargo add {} --features {}",
            env!("CARGO_PKG_NAME"),
            self.feature()
        )
    }

    pub fn from_package(package: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.package() == package)
    }

    pub fn from_feature(feature: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.feature() == feature)
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.package())
    }
}

/// Read-only set of available dependencies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapabilityProbe {
    available: BTreeSet<Dependency>,
}

impl CapabilityProbe {
    /// Detect from the features this crate was compiled with.
    pub fn detect() -> Self {
        Self::from_features(env!("STRUCTURED_LLM_ENABLED_DEPENDENCIES").split(','))
    }

    /// Process-wide probe, computed on first use.
    pub fn global() -> &'static CapabilityProbe {
        static PROBE: OnceLock<CapabilityProbe> = OnceLock::new();
        PROBE.get_or_init(|| {
            let probe = Self::detect();
            tracing::debug!(available = ?probe.available_packages(), "capability probe initialized");
            probe
        })
    }

    /// Every dependency available.
    pub fn all() -> Self {
        Self::with(Dependency::ALL)
    }

    /// No dependency available.
    pub fn none() -> Self {
        Self {
            available: BTreeSet::new(),
        }
    }

    pub fn with(deps: impl IntoIterator<Item = Dependency>) -> Self {
        Self {
            available: deps.into_iter().collect(),
        }
    }

    /// Build from cargo feature names; unknown names are ignored.
    pub fn from_features<'a>(features: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            available: features
                .into_iter()
                .filter_map(|f| Dependency::from_feature(f.trim()))
                .collect(),
        }
    }

    /// Copy of this probe with one dependency removed.
    pub fn without(mut self, dep: Dependency) -> Self {
        self.available.remove(&dep);
        self
    }

    pub fn is_available(&self, dep: Dependency) -> bool {
        self.available.contains(&dep)
    }

    /// Whether the named package is usable. Unknown names report `false`.
    pub fn is_importable(&self, package: &str) -> bool {
        Dependency::from_package(package).is_some_and(|dep| self.is_available(dep))
    }

    pub fn available_packages(&self) -> Vec<&'static str> {
        self.available.iter().map(Dependency::package).collect()
    }

    /// Fail with a [`Error::DependencyError`] when `dep` is missing.
    pub fn require(&self, dep: Dependency, provider_name: &str) -> Result<(), Error> {
        if self.is_available(dep) {
            return Ok(());
        }
        Err(Error::DependencyError {
            provider: provider_name.to_string(),
            package: dep.package().to_string(),
            feature: dep.feature().to_string(),
            install: dep.install_command(),
        })
    }
}

impl Default for CapabilityProbe {
    fn default() -> Self {
        Self::global().clone()
    }
}
