use crate::adapter::AdapterKind;
use crate::capability::Dependency;
use crate::credentials::{CredentialSource, CredentialSpec, Requirement, resolve_credentials};
use crate::error::Result;
use crate::mode::{Mode, ToolCapableModels};
use crate::native::{NativeClientConfig, Sdk};
use crate::options::ProviderOptions;
use crate::provider::ids;
use crate::registry::entry::ProviderAssembler;

pub const OPENAI_DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

const SPECS: &[CredentialSpec] = &[
    api_key_spec!("OPENAI_API_KEY"),
    CredentialSpec {
        name: "base_url",
        sources: &[CredentialSource {
            option: "base_url",
            env: Some("OPENAI_BASE_URL"),
        }],
        requirement: Requirement::Default(OPENAI_DEFAULT_BASE_URL),
        placeholder: "<base-url>",
    },
    CredentialSpec {
        name: "organization",
        sources: &[CredentialSource {
            option: "organization",
            env: Some("OPENAI_ORG_ID"),
        }],
        requirement: Requirement::Optional,
        placeholder: "<org-id>",
    },
    CredentialSpec {
        name: "project",
        sources: &[CredentialSource {
            option: "project",
            env: Some("OPENAI_PROJECT_ID"),
        }],
        requirement: Requirement::Optional,
        placeholder: "<project-id>",
    },
];

/// OpenAI platform.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenAiAssembler;

impl ProviderAssembler for OpenAiAssembler {
    fn id(&self) -> &str {
        ids::OPENAI
    }

    fn display_name(&self) -> &str {
        "OpenAI"
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
        let base_url = creds
            .value("base_url")
            .unwrap_or_else(|| OPENAI_DEFAULT_BASE_URL.to_string());

        Ok(NativeClientConfig::new(Sdk::OpenAi)
            .with_base_url(base_url)
            .with_api_key(creds.take("api_key"))
            .with_optional_setting("organization", creds.value("organization"))
            .with_optional_setting("project", creds.value("project")))
    }

    fn default_mode(&self, _model: &str, _tool_models: &ToolCapableModels) -> Mode {
        Mode::Tools
    }
}
