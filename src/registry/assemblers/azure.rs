use crate::adapter::AdapterKind;
use crate::capability::Dependency;
use crate::credentials::{CredentialSource, CredentialSpec, Requirement, resolve_credentials};
use crate::error::{Error, Result};
use crate::mode::{Mode, ToolCapableModels};
use crate::native::{NativeClientConfig, Sdk};
use crate::options::ProviderOptions;
use crate::provider::ids;
use crate::registry::entry::ProviderAssembler;

pub const AZURE_DEFAULT_API_VERSION: &str = "2024-02-01";

const SPECS: &[CredentialSpec] = &[
    api_key_spec!("AZURE_OPENAI_API_KEY"),
    CredentialSpec {
        name: "azure_endpoint",
        sources: &[CredentialSource {
            option: "azure_endpoint",
            env: Some("AZURE_OPENAI_ENDPOINT"),
        }],
        requirement: Requirement::Required,
        placeholder: "<your-endpoint>",
    },
    CredentialSpec {
        name: "api_version",
        sources: &[CredentialSource {
            option: "api_version",
            env: Some("OPENAI_API_VERSION"),
        }],
        requirement: Requirement::Default(AZURE_DEFAULT_API_VERSION),
        placeholder: "<api-version>",
    },
];

/// Azure-hosted OpenAI deployments. The model is the deployment name.
#[derive(Debug, Clone, Copy, Default)]
pub struct AzureOpenAiAssembler;

impl ProviderAssembler for AzureOpenAiAssembler {
    fn id(&self) -> &str {
        ids::AZURE_OPENAI
    }

    fn display_name(&self) -> &str {
        "Azure OpenAI"
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
        let endpoint = creds
            .value("azure_endpoint")
            .ok_or_else(|| Error::configuration("AZURE_OPENAI_ENDPOINT is not set"))?;
        let api_version = creds
            .value("api_version")
            .unwrap_or_else(|| AZURE_DEFAULT_API_VERSION.to_string());

        Ok(NativeClientConfig::new(Sdk::AzureOpenAi)
            .with_base_url(endpoint.as_str())
            .with_api_key(creds.take("api_key"))
            .with_setting("azure_endpoint", endpoint)
            .with_setting("api_version", api_version))
    }

    fn default_mode(&self, _model: &str, _tool_models: &ToolCapableModels) -> Mode {
        Mode::Tools
    }
}
