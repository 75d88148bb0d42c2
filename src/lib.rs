//! # structured-llm
//!
//! Provider resolution and client construction for structured-output LLM
//! completion. One `"provider/model"` identifier plus a handful of options
//! produce a uniformly-shaped client, whichever backend sits behind it.
//!
#![deny(unsafe_code)]

//! ## Quick Start
//!
//! ```rust,no_run
//! use structured_llm::prelude::*;
//!
//! fn main() -> std::result::Result<(), Error> {
//!     let client = from_provider(
//!         "anthropic/claude-3-5-sonnet",
//!         ClientOptions::new().option("api_key", "sk-ant-..."),
//!     )?;
//!     assert_eq!(client.mode(), Mode::AnthropicTools);
//!     Ok(())
//! }
//! ```
//!
//! ## Resolution
//!
//! - Credentials: explicit option, then environment variable, then default.
//!   A missing required value names both the variable and the option key.
//! - Mode: an explicit [`Mode`] always wins; otherwise the provider default.
//!   Ollama models get tool calling when their name matches a known
//!   tool-capable family ([`ToolCapableModels`]).
//! - Legacy tokens (`vertexai`, `generative-ai`) still work and emit one
//!   warning on the `structured_llm::deprecation` target.
//! - Providers whose cargo feature is disabled fail with
//!   [`Error::DependencyError`].
//!
//! Custom providers, adapters and HTTP settings go through
//! [`ProviderRegistry::builder`].

pub mod adapter;
pub mod cache;
pub mod capability;
pub mod credentials;
pub mod error;
pub mod http;
pub mod mode;
pub mod native;
pub mod options;
pub mod provider;
pub mod registry;

#[cfg(test)]
mod test_support;

pub use adapter::{
    AdapterFactory, AdapterKind, AdapterRequest, Instructor, InstructorAdapter, ResolvedClient,
    StructuredClient,
};
pub use cache::{AutoCache, CacheAdapter, CacheHandle};
pub use capability::{CapabilityProbe, Dependency};
pub use error::{Error, ErrorCategory, Result};
pub use http::HttpConfig;
pub use mode::{Mode, ToolCapableModels};
pub use native::{ClientVariant, NativeClient, NativeClientConfig, Sdk};
pub use options::{ClientOptions, ProviderOptions};
pub use provider::{DeprecationNotice, ModelSelection, SUPPORTED_PROVIDERS};
pub use registry::{
    ProviderAssembler, ProviderRegistry, ProviderRegistryBuilder, builtin_registry,
    global_registry,
};

/// Resolve `identifier` (`"provider/model"`) against the global registry.
///
/// ```rust,ignore
/// let client = structured_llm::from_provider(
///     "ollama/llama3.1",
///     ClientOptions::new().async_client(true),
/// )?;
/// assert_eq!(client.mode(), Mode::Tools);
/// ```
pub fn from_provider(identifier: &str, options: ClientOptions) -> Result<ResolvedClient> {
    global_registry().from_provider(identifier, options)
}

/// Commonly used items.
pub mod prelude {
    pub use crate::adapter::{ResolvedClient, StructuredClient};
    pub use crate::cache::{AutoCache, CacheHandle};
    pub use crate::error::{Error, Result};
    pub use crate::from_provider;
    pub use crate::mode::Mode;
    pub use crate::options::ClientOptions;
    pub use crate::registry::ProviderRegistry;
}
