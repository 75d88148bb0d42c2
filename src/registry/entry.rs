//! Provider registry and the assembly pipeline.
//!
//! A registry maps provider tokens onto [`ProviderAssembler`]s and turns
//! `"provider/model"` identifiers into ready-to-use clients:
//!
//! 1. parse the identifier
//! 2. rewrite legacy tokens (with a deprecation notice)
//! 3. look up the assembler
//! 4. check that its dependency is compiled in
//! 5. resolve credentials and build the native client configuration
//! 6. construct the native client (blocking or concurrent)
//! 7. select the mode
//! 8. hand everything to the adapter factory

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::adapter::{AdapterFactory, AdapterKind, AdapterRequest, InstructorAdapter, ResolvedClient};
use crate::capability::{CapabilityProbe, Dependency};
use crate::credentials::CredentialSpec;
use crate::error::{Error, Result};
use crate::http::HttpConfig;
use crate::mode::{Mode, ToolCapableModels, select_mode};
use crate::native::{ClientVariant, NativeClient, NativeClientConfig};
use crate::options::{ClientOptions, ProviderOptions};
use crate::provider::compat::{self, DeprecationNotice};
use crate::provider::parse_identifier;

/// Per-provider strategy: configuration resolution and default mode.
///
/// Assemblers never acquire resources; the registry builds the native client
/// from the returned configuration once every check has passed.
pub trait ProviderAssembler: Send + Sync {
    /// Canonical provider token (e.g. `"azure_openai"`).
    fn id(&self) -> &str;

    /// Name used in dependency errors (e.g. `"Azure OpenAI"`).
    fn display_name(&self) -> &str;

    fn dependency(&self) -> Dependency;

    fn adapter(&self) -> AdapterKind;

    /// Credentials resolved when no flavor-selecting option is given.
    fn credential_specs(&self) -> &'static [CredentialSpec] {
        &[]
    }

    /// Resolve credentials and provider settings, consuming the keys it
    /// recognizes from `options`.
    fn configure(&self, model: &str, options: &mut ProviderOptions) -> Result<NativeClientConfig>;

    fn default_mode(&self, model: &str, tool_models: &ToolCapableModels) -> Mode;
}

/// Callback receiving deprecation notices.
pub type DeprecationHook = Arc<dyn Fn(&DeprecationNotice) + Send + Sync>;

/// Registry of provider assemblers plus the shared assembly settings.
#[derive(Clone)]
pub struct ProviderRegistry {
    /// Registration order is the order of [`supported_providers`](Self::supported_providers).
    assemblers: Vec<Arc<dyn ProviderAssembler>>,
    index: HashMap<String, usize>,
    probe: CapabilityProbe,
    http_config: HttpConfig,
    tool_models: ToolCapableModels,
    adapters: HashMap<AdapterKind, Arc<dyn AdapterFactory>>,
    default_adapter: Arc<dyn AdapterFactory>,
    deprecation_hook: Option<DeprecationHook>,
}

impl ProviderRegistry {
    /// Empty registry. Use [`builtin_registry`](super::builtin_registry) for the stock set.
    pub fn new() -> Self {
        Self {
            assemblers: Vec::new(),
            index: HashMap::new(),
            probe: CapabilityProbe::default(),
            http_config: HttpConfig::default(),
            tool_models: ToolCapableModels::default(),
            adapters: HashMap::new(),
            default_adapter: Arc::new(InstructorAdapter),
            deprecation_hook: None,
        }
    }

    pub fn builder() -> ProviderRegistryBuilder {
        ProviderRegistryBuilder::default()
    }

    /// Add an assembler, replacing any previous one with the same id.
    pub fn register(&mut self, assembler: Arc<dyn ProviderAssembler>) -> &mut Self {
        let id = assembler.id().to_string();
        match self.index.get(&id) {
            Some(&slot) => self.assemblers[slot] = assembler,
            None => {
                self.index.insert(id, self.assemblers.len());
                self.assemblers.push(assembler);
            }
        }
        self
    }

    /// Route one adapter kind to a custom factory.
    pub fn set_adapter(&mut self, kind: AdapterKind, factory: Arc<dyn AdapterFactory>) -> &mut Self {
        self.adapters.insert(kind, factory);
        self
    }

    pub fn get(&self, id: &str) -> Option<&Arc<dyn ProviderAssembler>> {
        self.index.get(id).map(|&slot| &self.assemblers[slot])
    }

    pub fn probe(&self) -> &CapabilityProbe {
        &self.probe
    }

    pub fn http_config(&self) -> &HttpConfig {
        &self.http_config
    }

    pub fn tool_models(&self) -> &ToolCapableModels {
        &self.tool_models
    }

    /// Canonical ids in registration order.
    pub fn provider_ids(&self) -> Vec<&str> {
        self.assemblers.iter().map(|a| a.id()).collect()
    }

    /// Every accepted token: each id followed by its legacy aliases.
    pub fn supported_providers(&self) -> Vec<&str> {
        let mut tokens = Vec::with_capacity(self.assemblers.len() + compat::LEGACY_PROVIDERS.len());
        for assembler in &self.assemblers {
            tokens.push(assembler.id());
            tokens.extend(compat::aliases_of(assembler.id()).map(|alias| -> &str { alias }));
        }
        tokens
    }

    /// Ids whose dependency is available to this registry's probe.
    pub fn available_providers(&self) -> Vec<&str> {
        self.assemblers
            .iter()
            .filter(|a| self.probe.is_available(a.dependency()))
            .map(|a| a.id())
            .collect()
    }

    /// Resolve `identifier` into a structured-completion client.
    pub fn from_provider(&self, identifier: &str, options: ClientOptions) -> Result<ResolvedClient> {
        let selection = parse_identifier(identifier)?;
        let ClientOptions {
            async_client,
            mode: explicit_mode,
            cache,
            options: mut provider_options,
        } = options;

        let rewrite = compat::rewrite_provider(&selection.provider, &mut provider_options);
        if let Some(notice) = &rewrite.notice {
            self.notify(notice);
        }

        let assembler = self
            .get(&rewrite.provider)
            .ok_or_else(|| self.unsupported(&selection.provider))?;
        debug!(provider = assembler.id(), model = %selection.model, "resolving provider");

        self.probe
            .require(assembler.dependency(), assembler.display_name())?;

        let config = assembler.configure(&selection.model, &mut provider_options)?;
        let variant = ClientVariant::from_async_flag(async_client);
        let native = NativeClient::build(config, variant, &self.http_config)?;

        let mode = select_mode(explicit_mode, || {
            assembler.default_mode(&selection.model, &self.tool_models)
        });

        debug!(
            provider = assembler.id(),
            model = %selection.model,
            mode = %mode,
            variant = ?variant,
            forwarded = provider_options.len(),
            "assembled provider client"
        );

        let kind = assembler.adapter();
        let request = AdapterRequest {
            provider_id: assembler.id().to_string(),
            adapter: kind,
            native,
            model: selection.model,
            mode,
            options: provider_options,
            cache,
        };
        self.adapter_for(kind).create(request)
    }

    fn adapter_for(&self, kind: AdapterKind) -> &Arc<dyn AdapterFactory> {
        self.adapters.get(&kind).unwrap_or(&self.default_adapter)
    }

    fn notify(&self, notice: &DeprecationNotice) {
        warn!(
            target: "structured_llm::deprecation",
            legacy = %notice.legacy,
            replacement = %notice.replacement,
            "{}",
            notice.message
        );
        if let Some(hook) = &self.deprecation_hook {
            hook(notice);
        }
    }

    fn unsupported(&self, token: &str) -> Error {
        let supported = self
            .supported_providers()
            .iter()
            .map(|id| format!("\"{id}\""))
            .collect::<Vec<_>>()
            .join(", ");
        Error::configuration(format!(
            "Unsupported provider: {token}. Supported providers are: [{supported}]"
        ))
    }
}

impl Default for ProviderRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderRegistry")
            .field("providers", &self.provider_ids())
            .field("probe", &self.probe)
            .field("http_config", &self.http_config)
            .field("tool_models", &self.tool_models.version)
            .field("custom_adapters", &self.adapters.keys().collect::<Vec<_>>())
            .field("deprecation_hook", &self.deprecation_hook.is_some())
            .finish()
    }
}

static_assertions::assert_impl_all!(ProviderRegistry: Send, Sync);
static_assertions::assert_impl_all!(CapabilityProbe: Send, Sync);

/// Builder for [`ProviderRegistry`].
///
/// ```rust,ignore
/// let registry = ProviderRegistry::builder()
///     .with_builtins()
///     .probe(CapabilityProbe::all())
///     .http_config(HttpConfig { proxy: Some("http://proxy:8080".into()), ..Default::default() })
///     .on_deprecation(|notice| eprintln!("{}", notice.message))
///     .build();
/// ```
#[derive(Default)]
pub struct ProviderRegistryBuilder {
    builtins: bool,
    assemblers: Vec<Arc<dyn ProviderAssembler>>,
    probe: Option<CapabilityProbe>,
    http_config: Option<HttpConfig>,
    tool_models: Option<ToolCapableModels>,
    adapters: Vec<(AdapterKind, Arc<dyn AdapterFactory>)>,
    default_adapter: Option<Arc<dyn AdapterFactory>>,
    deprecation_hook: Option<DeprecationHook>,
}

impl ProviderRegistryBuilder {
    /// Start from the built-in providers.
    pub fn with_builtins(mut self) -> Self {
        self.builtins = true;
        self
    }

    /// Register an assembler after the built-ins (replacing on id clash).
    pub fn assembler(mut self, assembler: impl ProviderAssembler + 'static) -> Self {
        self.assemblers.push(Arc::new(assembler));
        self
    }

    pub fn probe(mut self, probe: CapabilityProbe) -> Self {
        self.probe = Some(probe);
        self
    }

    pub fn http_config(mut self, config: HttpConfig) -> Self {
        self.http_config = Some(config);
        self
    }

    pub fn tool_models(mut self, tool_models: ToolCapableModels) -> Self {
        self.tool_models = Some(tool_models);
        self
    }

    pub fn with_adapter(mut self, kind: AdapterKind, factory: impl AdapterFactory + 'static) -> Self {
        self.adapters.push((kind, Arc::new(factory)));
        self
    }

    /// Factory used for adapter kinds without a dedicated one.
    pub fn default_adapter(mut self, factory: impl AdapterFactory + 'static) -> Self {
        self.default_adapter = Some(Arc::new(factory));
        self
    }

    pub fn on_deprecation(
        mut self,
        hook: impl Fn(&DeprecationNotice) + Send + Sync + 'static,
    ) -> Self {
        self.deprecation_hook = Some(Arc::new(hook));
        self
    }

    pub fn build(self) -> ProviderRegistry {
        let mut registry = if self.builtins {
            super::builtin_registry()
        } else {
            ProviderRegistry::new()
        };
        for assembler in self.assemblers {
            registry.register(assembler);
        }
        if let Some(probe) = self.probe {
            registry.probe = probe;
        }
        if let Some(http_config) = self.http_config {
            registry.http_config = http_config;
        }
        if let Some(tool_models) = self.tool_models {
            registry.tool_models = tool_models;
        }
        for (kind, factory) in self.adapters {
            registry.adapters.insert(kind, factory);
        }
        if let Some(factory) = self.default_adapter {
            registry.default_adapter = factory;
        }
        registry.deprecation_hook = self.deprecation_hook;
        registry
    }
}
