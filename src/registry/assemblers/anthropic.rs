use crate::adapter::AdapterKind;
use crate::capability::Dependency;
use crate::credentials::{CredentialSource, CredentialSpec, Requirement, resolve_credentials};
use crate::error::Result;
use crate::mode::{Mode, ToolCapableModels};
use crate::native::{NativeClientConfig, Sdk};
use crate::options::ProviderOptions;
use crate::provider::ids;
use crate::registry::entry::ProviderAssembler;

pub const ANTHROPIC_DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
/// `max_tokens` forwarded when the caller sets none.
pub const ANTHROPIC_DEFAULT_MAX_TOKENS: u64 = 4096;

const SPECS: &[CredentialSpec] = &[
    api_key_spec!("ANTHROPIC_API_KEY"),
    CredentialSpec {
        name: "base_url",
        sources: &[CredentialSource {
            option: "base_url",
            env: Some("ANTHROPIC_BASE_URL"),
        }],
        requirement: Requirement::Default(ANTHROPIC_DEFAULT_BASE_URL),
        placeholder: "<base-url>",
    },
];

#[derive(Debug, Clone, Copy, Default)]
pub struct AnthropicAssembler;

impl ProviderAssembler for AnthropicAssembler {
    fn id(&self) -> &str {
        ids::ANTHROPIC
    }

    fn display_name(&self) -> &str {
        "Anthropic"
    }

    fn dependency(&self) -> Dependency {
        Dependency::Anthropic
    }

    fn adapter(&self) -> AdapterKind {
        AdapterKind::Anthropic
    }

    fn credential_specs(&self) -> &'static [CredentialSpec] {
        SPECS
    }

    fn configure(&self, _model: &str, options: &mut ProviderOptions) -> Result<NativeClientConfig> {
        let mut creds = resolve_credentials(SPECS, options)?;
        options.insert_default("max_tokens", ANTHROPIC_DEFAULT_MAX_TOKENS);

        Ok(NativeClientConfig::new(Sdk::Anthropic)
            .with_base_url(
                creds
                    .value("base_url")
                    .unwrap_or_else(|| ANTHROPIC_DEFAULT_BASE_URL.to_string()),
            )
            .with_api_key(creds.take("api_key")))
    }

    fn default_mode(&self, _model: &str, _tool_models: &ToolCapableModels) -> Mode {
        Mode::AnthropicTools
    }
}
