use crate::adapter::AdapterKind;
use crate::capability::Dependency;
use crate::credentials::{CredentialSpec, resolve_credentials};
use crate::error::Result;
use crate::mode::{Mode, ToolCapableModels};
use crate::native::{NativeClientConfig, Sdk};
use crate::options::ProviderOptions;
use crate::provider::ids;
use crate::registry::entry::ProviderAssembler;

pub const PERPLEXITY_BASE_URL: &str = "https://api.perplexity.ai";

const SPECS: &[CredentialSpec] = &[api_key_spec!("PERPLEXITY_API_KEY")];

/// Perplexity, served through the OpenAI-compatible client at a fixed URL.
#[derive(Debug, Clone, Copy, Default)]
pub struct PerplexityAssembler;

impl ProviderAssembler for PerplexityAssembler {
    fn id(&self) -> &str {
        ids::PERPLEXITY
    }

    fn display_name(&self) -> &str {
        "Perplexity"
    }

    fn dependency(&self) -> Dependency {
        Dependency::OpenAi
    }

    fn adapter(&self) -> AdapterKind {
        AdapterKind::Perplexity
    }

    fn credential_specs(&self) -> &'static [CredentialSpec] {
        SPECS
    }

    fn configure(&self, _model: &str, options: &mut ProviderOptions) -> Result<NativeClientConfig> {
        let mut creds = resolve_credentials(SPECS, options)?;
        Ok(NativeClientConfig::new(Sdk::OpenAi)
            .with_base_url(PERPLEXITY_BASE_URL)
            .with_api_key(creds.take("api_key")))
    }

    fn default_mode(&self, _model: &str, _tool_models: &ToolCapableModels) -> Mode {
        Mode::PerplexityJson
    }
}
