//! Adapter factory seam.
//!
//! An adapter factory (`from_openai`, `from_anthropic`, ...) wraps a native
//! client into the uniform structured-completion client. The registry only
//! assembles an [`AdapterRequest`] and returns whatever the factory produces.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::cache::CacheHandle;
use crate::error::Result;
use crate::mode::Mode;
use crate::native::NativeClient;
use crate::options::ProviderOptions;

/// Which adapter factory a provider delegates to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdapterKind {
    OpenAi,
    Anthropic,
    GenAi,
    Mistral,
    Cohere,
    Perplexity,
    Groq,
    Writer,
    Bedrock,
    Cerebras,
    Fireworks,
    Xai,
}

impl AdapterKind {
    /// Name of the factory function this kind stands for.
    pub const fn factory_name(&self) -> &'static str {
        match self {
            AdapterKind::OpenAi => "from_openai",
            AdapterKind::Anthropic => "from_anthropic",
            AdapterKind::GenAi => "from_genai",
            AdapterKind::Mistral => "from_mistral",
            AdapterKind::Cohere => "from_cohere",
            AdapterKind::Perplexity => "from_perplexity",
            AdapterKind::Groq => "from_groq",
            AdapterKind::Writer => "from_writer",
            AdapterKind::Bedrock => "from_bedrock",
            AdapterKind::Cerebras => "from_cerebras",
            AdapterKind::Fireworks => "from_fireworks",
            AdapterKind::Xai => "from_xai",
        }
    }
}

/// Everything an adapter factory receives.
#[derive(Clone)]
pub struct AdapterRequest {
    /// Canonical provider id the request was dispatched to.
    pub provider_id: String,
    pub adapter: AdapterKind,
    pub native: NativeClient,
    pub model: String,
    pub mode: Mode,
    /// Options left after the resolver consumed what it recognizes.
    pub options: ProviderOptions,
    pub cache: Option<CacheHandle>,
}

impl AdapterRequest {
    pub fn is_async(&self) -> bool {
        self.native.is_async()
    }
}

impl fmt::Debug for AdapterRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdapterRequest")
            .field("provider_id", &self.provider_id)
            .field("adapter", &self.adapter)
            .field("native", &self.native)
            .field("model", &self.model)
            .field("mode", &self.mode)
            .field("options", &self.options.keys().collect::<Vec<_>>())
            .field("cache", &self.cache.is_some())
            .finish()
    }
}

/// Uniform structured-completion client, opaque to the registry.
pub trait StructuredClient: Send + Sync + fmt::Debug {
    fn provider_id(&self) -> &str;

    fn model(&self) -> &str;

    fn mode(&self) -> Mode;

    fn is_async(&self) -> bool;

    /// Escape hatch for callers that know the concrete client type.
    fn as_any(&self) -> &dyn Any;
}

/// Result of a successful resolution.
pub type ResolvedClient = Arc<dyn StructuredClient>;

/// Per-provider adapter factory.
pub trait AdapterFactory: Send + Sync {
    fn create(&self, request: AdapterRequest) -> Result<ResolvedClient>;
}

impl<F> AdapterFactory for F
where
    F: Fn(AdapterRequest) -> Result<ResolvedClient> + Send + Sync,
{
    fn create(&self, request: AdapterRequest) -> Result<ResolvedClient> {
        self(request)
    }
}

/// Default client: keeps the assembled request for a downstream
/// schema/validation engine to drive.
#[derive(Debug, Clone)]
pub struct Instructor {
    request: AdapterRequest,
}

impl Instructor {
    pub fn new(request: AdapterRequest) -> Self {
        Self { request }
    }

    pub fn adapter(&self) -> AdapterKind {
        self.request.adapter
    }

    pub fn native(&self) -> &NativeClient {
        &self.request.native
    }

    pub fn options(&self) -> &ProviderOptions {
        &self.request.options
    }

    pub fn cache(&self) -> Option<&CacheHandle> {
        self.request.cache.as_ref()
    }

    pub fn request(&self) -> &AdapterRequest {
        &self.request
    }

    pub fn into_request(self) -> AdapterRequest {
        self.request
    }
}

impl StructuredClient for Instructor {
    fn provider_id(&self) -> &str {
        &self.request.provider_id
    }

    fn model(&self) -> &str {
        &self.request.model
    }

    fn mode(&self) -> Mode {
        self.request.mode
    }

    fn is_async(&self) -> bool {
        self.request.is_async()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Adapter factory producing [`Instructor`] clients.
#[derive(Debug, Clone, Copy, Default)]
pub struct InstructorAdapter;

impl AdapterFactory for InstructorAdapter {
    fn create(&self, request: AdapterRequest) -> Result<ResolvedClient> {
        Ok(Arc::new(Instructor::new(request)))
    }
}
