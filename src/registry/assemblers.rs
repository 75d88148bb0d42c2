//! Built-in provider assemblers.

/// `api_key` option backed by one environment variable.
macro_rules! api_key_spec {
    ($env:literal) => {
        $crate::credentials::CredentialSpec {
            name: "api_key",
            sources: &[$crate::credentials::CredentialSource {
                option: "api_key",
                env: Some($env),
            }],
            requirement: $crate::credentials::Requirement::Required,
            placeholder: "<your-api-key>",
        }
    };
}

mod anthropic;
mod azure;
mod bedrock;
mod google;
mod hosted;
mod ollama;
mod openai;
mod perplexity;


use std::sync::Arc;

pub use anthropic::AnthropicAssembler;
pub use azure::AzureOpenAiAssembler;
pub use bedrock::BedrockAssembler;
pub use google::GoogleAssembler;
pub use hosted::HostedAssembler;
pub use ollama::OllamaAssembler;
pub use openai::OpenAiAssembler;
pub use perplexity::PerplexityAssembler;

use super::entry::ProviderAssembler;

/// Built-in assemblers, in registry order.
pub fn builtin_assemblers() -> Vec<Arc<dyn ProviderAssembler>> {
    vec![
        Arc::new(OpenAiAssembler),
        Arc::new(AzureOpenAiAssembler),
        Arc::new(AnthropicAssembler),
        Arc::new(GoogleAssembler),
        Arc::new(HostedAssembler::MISTRAL),
        Arc::new(HostedAssembler::COHERE),
        Arc::new(PerplexityAssembler),
        Arc::new(HostedAssembler::GROQ),
        Arc::new(HostedAssembler::WRITER),
        Arc::new(BedrockAssembler),
        Arc::new(HostedAssembler::CEREBRAS),
        Arc::new(HostedAssembler::FIREWORKS),
        Arc::new(OllamaAssembler),
        Arc::new(HostedAssembler::XAI),
    ]
}
