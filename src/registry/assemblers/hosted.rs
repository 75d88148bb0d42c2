//! Providers configured by nothing more than an API key.

use crate::adapter::AdapterKind;
use crate::capability::Dependency;
use crate::credentials::{CredentialSpec, resolve_credentials};
use crate::error::Result;
use crate::mode::{Mode, ToolCapableModels};
use crate::native::{NativeClientConfig, Sdk};
use crate::options::ProviderOptions;
use crate::provider::ids;
use crate::registry::entry::ProviderAssembler;

/// Table-driven assembler for API-key-only providers.
#[derive(Debug, Clone, Copy)]
pub struct HostedAssembler {
    pub id: &'static str,
    pub display_name: &'static str,
    pub dependency: Dependency,
    pub adapter: AdapterKind,
    pub sdk: Sdk,
    pub credentials: &'static [CredentialSpec],
    pub default_mode: Mode,
}

impl HostedAssembler {
    pub const MISTRAL: Self = Self {
        id: ids::MISTRAL,
        display_name: "Mistral",
        dependency: Dependency::MistralAi,
        adapter: AdapterKind::Mistral,
        sdk: Sdk::Mistral,
        credentials: &[api_key_spec!("MISTRAL_API_KEY")],
        default_mode: Mode::MistralTools,
    };

    pub const COHERE: Self = Self {
        id: ids::COHERE,
        display_name: "Cohere",
        dependency: Dependency::Cohere,
        adapter: AdapterKind::Cohere,
        sdk: Sdk::Cohere,
        credentials: &[api_key_spec!("CO_API_KEY")],
        default_mode: Mode::CohereTools,
    };

    pub const GROQ: Self = Self {
        id: ids::GROQ,
        display_name: "Groq",
        dependency: Dependency::Groq,
        adapter: AdapterKind::Groq,
        sdk: Sdk::Groq,
        credentials: &[api_key_spec!("GROQ_API_KEY")],
        default_mode: Mode::Tools,
    };

    pub const WRITER: Self = Self {
        id: ids::WRITER,
        display_name: "Writer",
        dependency: Dependency::Writer,
        adapter: AdapterKind::Writer,
        sdk: Sdk::Writer,
        credentials: &[api_key_spec!("WRITER_API_KEY")],
        default_mode: Mode::WriterTools,
    };

    pub const CEREBRAS: Self = Self {
        id: ids::CEREBRAS,
        display_name: "Cerebras",
        dependency: Dependency::Cerebras,
        adapter: AdapterKind::Cerebras,
        sdk: Sdk::Cerebras,
        credentials: &[api_key_spec!("CEREBRAS_API_KEY")],
        default_mode: Mode::CerebrasTools,
    };

    pub const FIREWORKS: Self = Self {
        id: ids::FIREWORKS,
        display_name: "Fireworks",
        dependency: Dependency::Fireworks,
        adapter: AdapterKind::Fireworks,
        sdk: Sdk::Fireworks,
        credentials: &[api_key_spec!("FIREWORKS_API_KEY")],
        default_mode: Mode::FireworksTools,
    };

    pub const XAI: Self = Self {
        id: ids::XAI,
        display_name: "xAI",
        dependency: Dependency::XaiSdk,
        adapter: AdapterKind::Xai,
        sdk: Sdk::Xai,
        credentials: &[api_key_spec!("XAI_API_KEY")],
        default_mode: Mode::Json,
    };
}

impl ProviderAssembler for HostedAssembler {
    fn id(&self) -> &str {
        self.id
    }

    fn display_name(&self) -> &str {
        self.display_name
    }

    fn dependency(&self) -> Dependency {
        self.dependency
    }

    fn adapter(&self) -> AdapterKind {
        self.adapter
    }

    fn credential_specs(&self) -> &'static [CredentialSpec] {
        self.credentials
    }

    fn configure(&self, _model: &str, options: &mut ProviderOptions) -> Result<NativeClientConfig> {
        let mut creds = resolve_credentials(self.credentials, options)?;
        Ok(NativeClientConfig::new(self.sdk).with_api_key(creds.take("api_key")))
    }

    fn default_mode(&self, _model: &str, _tool_models: &ToolCapableModels) -> Mode {
        self.default_mode
    }
}
