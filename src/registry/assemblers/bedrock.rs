use secrecy::ExposeSecret;

use crate::adapter::AdapterKind;
use crate::capability::Dependency;
use crate::credentials::{CredentialSource, CredentialSpec, Requirement, resolve_credentials};
use crate::error::Result;
use crate::mode::{Mode, ToolCapableModels};
use crate::native::{NativeClientConfig, Sdk};
use crate::options::ProviderOptions;
use crate::provider::ids;
use crate::registry::entry::ProviderAssembler;

pub const BEDROCK_DEFAULT_REGION: &str = "us-east-1";

const SPECS: &[CredentialSpec] = &[
    CredentialSpec {
        name: "region",
        sources: &[
            CredentialSource {
                option: "region_name",
                env: Some("AWS_REGION"),
            },
            CredentialSource {
                option: "region",
                env: Some("AWS_DEFAULT_REGION"),
            },
        ],
        requirement: Requirement::Default(BEDROCK_DEFAULT_REGION),
        placeholder: "<aws-region>",
    },
    CredentialSpec {
        name: "aws_access_key_id",
        sources: &[CredentialSource {
            option: "aws_access_key_id",
            env: Some("AWS_ACCESS_KEY_ID"),
        }],
        requirement: Requirement::Optional,
        placeholder: "<access-key-id>",
    },
    CredentialSpec {
        name: "aws_secret_access_key",
        sources: &[CredentialSource {
            option: "aws_secret_access_key",
            env: Some("AWS_SECRET_ACCESS_KEY"),
        }],
        requirement: Requirement::Optional,
        placeholder: "<secret-access-key>",
    },
    CredentialSpec {
        name: "aws_session_token",
        sources: &[CredentialSource {
            option: "aws_session_token",
            env: Some("AWS_SESSION_TOKEN"),
        }],
        requirement: Requirement::Optional,
        placeholder: "<session-token>",
    },
];

/// AWS Bedrock runtime.
///
/// Static keys are optional; without them the native client falls back to
/// the ambient AWS credential chain.
#[derive(Debug, Clone, Copy, Default)]
pub struct BedrockAssembler;

impl ProviderAssembler for BedrockAssembler {
    fn id(&self) -> &str {
        ids::BEDROCK
    }

    fn display_name(&self) -> &str {
        "Bedrock"
    }

    fn dependency(&self) -> Dependency {
        Dependency::Bedrock
    }

    fn adapter(&self) -> AdapterKind {
        AdapterKind::Bedrock
    }

    fn credential_specs(&self) -> &'static [CredentialSpec] {
        SPECS
    }

    fn configure(&self, _model: &str, options: &mut ProviderOptions) -> Result<NativeClientConfig> {
        let mut creds = resolve_credentials(SPECS, options)?;
        let region = creds
            .value("region")
            .unwrap_or_else(|| BEDROCK_DEFAULT_REGION.to_string());

        // Static keys only work as a pair.
        match (
            creds.contains("aws_access_key_id"),
            creds.contains("aws_secret_access_key"),
        ) {
            (true, false) => return Err(SPECS[2].missing_error()),
            (false, true) => return Err(SPECS[1].missing_error()),
            _ => {}
        }

        let access_key_id = creds
            .take("aws_access_key_id")
            .map(|id| id.expose_secret().to_string());

        Ok(NativeClientConfig::new(Sdk::BedrockRuntime)
            .with_base_url(format!("https://bedrock-runtime.{region}.amazonaws.com"))
            .with_setting("region", region)
            .with_optional_setting("aws_access_key_id", access_key_id)
            .with_secret("aws_secret_access_key", creds.take("aws_secret_access_key"))
            .with_secret("aws_session_token", creds.take("aws_session_token")))
    }

    fn default_mode(&self, _model: &str, _tool_models: &ToolCapableModels) -> Mode {
        Mode::BedrockTools
    }
}
