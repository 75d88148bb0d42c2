use crate::adapter::AdapterKind;
use crate::capability::Dependency;
use crate::credentials::{CredentialSource, CredentialSpec, Requirement, resolve_credentials};
use crate::error::Result;
use crate::mode::{Mode, ToolCapableModels};
use crate::native::{NativeClientConfig, Sdk};
use crate::options::ProviderOptions;
use crate::provider::ids;
use crate::registry::entry::ProviderAssembler;

pub const GOOGLE_DEFAULT_LOCATION: &str = "us-central1";

/// Client-construction keys moved from the forwarded options into the native
/// client settings.
pub const CLIENT_SETTING_KEYS: [&str; 5] =
    ["debug_config", "http_options", "credentials", "project", "location"];

const API_KEY_SPECS: &[CredentialSpec] = &[api_key_spec!("GOOGLE_API_KEY")];

const VERTEX_SPECS: &[CredentialSpec] = &[
    CredentialSpec {
        name: "project",
        sources: &[CredentialSource {
            option: "project",
            env: Some("GOOGLE_CLOUD_PROJECT"),
        }],
        requirement: Requirement::Required,
        placeholder: "<your-project-id>",
    },
    CredentialSpec {
        name: "location",
        sources: &[CredentialSource {
            option: "location",
            env: Some("GOOGLE_CLOUD_LOCATION"),
        }],
        requirement: Requirement::Default(GOOGLE_DEFAULT_LOCATION),
        placeholder: "<your-location>",
    },
    CredentialSpec {
        name: "api_key",
        sources: &[CredentialSource {
            option: "api_key",
            env: Some("GOOGLE_API_KEY"),
        }],
        requirement: Requirement::Optional,
        placeholder: "<your-api-key>",
    },
];

/// Google GenAI, in both its API-key and Vertex AI flavors.
///
/// `vertexai=true` selects Vertex AI (project + location); otherwise an API
/// key is required. Both flavors share the native client family and adapter.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoogleAssembler;

impl GoogleAssembler {
    pub fn vertex_credential_specs(&self) -> &'static [CredentialSpec] {
        VERTEX_SPECS
    }
}

impl ProviderAssembler for GoogleAssembler {
    fn id(&self) -> &str {
        ids::GOOGLE
    }

    fn display_name(&self) -> &str {
        "Google"
    }

    fn dependency(&self) -> Dependency {
        Dependency::GoogleGenAi
    }

    fn adapter(&self) -> AdapterKind {
        AdapterKind::GenAi
    }

    fn credential_specs(&self) -> &'static [CredentialSpec] {
        API_KEY_SPECS
    }

    fn configure(&self, _model: &str, options: &mut ProviderOptions) -> Result<NativeClientConfig> {
        let vertexai = options.take_bool("vertexai")?.unwrap_or(false);
        let specs = if vertexai { VERTEX_SPECS } else { API_KEY_SPECS };
        let mut creds = resolve_credentials(specs, options)?;

        let mut config = NativeClientConfig::new(Sdk::GenAi)
            .with_api_key(creds.take("api_key"))
            .with_setting("vertexai", vertexai)
            .with_optional_setting("project", creds.value("project"))
            .with_optional_setting("location", creds.value("location"));

        for key in CLIENT_SETTING_KEYS {
            if let Some(value) = options.remove(key) {
                config = config.with_setting(key, value);
            }
        }
        Ok(config)
    }

    fn default_mode(&self, _model: &str, _tool_models: &ToolCapableModels) -> Mode {
        Mode::GenaiTools
    }
}
