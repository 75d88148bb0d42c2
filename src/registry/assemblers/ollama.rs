use crate::adapter::AdapterKind;
use crate::capability::Dependency;
use crate::credentials::{CredentialSource, CredentialSpec, Requirement, resolve_credentials};
use crate::error::Result;
use crate::mode::{Mode, ToolCapableModels, heuristic_mode};
use crate::native::{NativeClientConfig, Sdk};
use crate::options::ProviderOptions;
use crate::provider::ids;
use crate::registry::entry::ProviderAssembler;

pub const OLLAMA_DEFAULT_BASE_URL: &str = "http://localhost:11434/v1";
/// Placeholder key; Ollama ignores it but the OpenAI client needs one.
pub const OLLAMA_API_KEY: &str = "ollama";

const SPECS: &[CredentialSpec] = &[
    CredentialSpec {
        name: "base_url",
        sources: &[CredentialSource {
            option: "base_url",
            env: None,
        }],
        requirement: Requirement::Default(OLLAMA_DEFAULT_BASE_URL),
        placeholder: "<base-url>",
    },
    CredentialSpec {
        name: "api_key",
        sources: &[CredentialSource {
            option: "api_key",
            env: None,
        }],
        requirement: Requirement::Default(OLLAMA_API_KEY),
        placeholder: "<api-key>",
    },
];

/// Local Ollama server via its OpenAI-compatible endpoint.
#[derive(Debug, Clone, Copy, Default)]
pub struct OllamaAssembler;

impl ProviderAssembler for OllamaAssembler {
    fn id(&self) -> &str {
        ids::OLLAMA
    }

    fn display_name(&self) -> &str {
        "Ollama"
    }

    fn dependency(&self) -> Dependency {
        Dependency::OpenAi
    }

    fn adapter(&self) -> AdapterKind {
        AdapterKind::OpenAi
    }

    fn credential_specs(&self) -> &'static [CredentialSpec] {
        SPECS
    }

    fn configure(&self, _model: &str, options: &mut ProviderOptions) -> Result<NativeClientConfig> {
        let mut creds = resolve_credentials(SPECS, options)?;
        Ok(NativeClientConfig::new(Sdk::OpenAi)
            .with_base_url(
                creds
                    .value("base_url")
                    .unwrap_or_else(|| OLLAMA_DEFAULT_BASE_URL.to_string()),
            )
            .with_api_key(creds.take("api_key")))
    }

    fn default_mode(&self, model: &str, tool_models: &ToolCapableModels) -> Mode {
        heuristic_mode(model, tool_models)
    }
}
