mod support;

use std::sync::Arc;

use serde_json::json;
use structured_llm::{
    AdapterKind, AutoCache, CapabilityProbe, ClientOptions, ClientVariant, Dependency, Error, Mode,
    ProviderRegistry, SUPPORTED_PROVIDERS, Sdk, StructuredClient,
};
use support::{EnvGuard, clean_env, instructor, lock_env, registry};

/// Minimal explicit options under which each provider resolves without env.
fn explicit(provider: &str) -> ClientOptions {
    let options = ClientOptions::new();
    match provider {
        "azure_openai" => options
            .option("api_key", "azure-key")
            .option("azure_endpoint", "https://example.openai.azure.com"),
        "google" | "generative-ai" => options.option("api_key", "google-key"),
        "vertexai" => options.option("project", "my-project"),
        "bedrock" | "ollama" => options,
        other => options.option("api_key", format!("{other}-key")),
    }
}

#[test]
fn every_supported_token_resolves_with_explicit_options() {
    let _lock = lock_env();
    let _env = clean_env();
    let registry = registry();

    for token in SUPPORTED_PROVIDERS {
        let client = registry
            .from_provider(&format!("{token}/some-model"), explicit(token))
            .unwrap_or_else(|e| panic!("{token}: {e}"));
        assert_eq!(client.model(), "some-model", "{token}");
        assert!(!client.is_async(), "{token}");
    }
}

#[test]
fn missing_credential_names_environment_variable() {
    let _lock = lock_env();
    let _env = clean_env();

    let cases = [
        ("openai/gpt-4", "OPENAI_API_KEY"),
        ("azure_openai/gpt-4o", "AZURE_OPENAI_API_KEY"),
        ("anthropic/claude-3-sonnet", "ANTHROPIC_API_KEY"),
        ("google/gemini-pro", "GOOGLE_API_KEY"),
        ("mistral/mistral-large", "MISTRAL_API_KEY"),
        ("cohere/command-r", "CO_API_KEY"),
        ("perplexity/sonar", "PERPLEXITY_API_KEY"),
        ("groq/llama3-8b", "GROQ_API_KEY"),
        ("writer/palmyra-x", "WRITER_API_KEY"),
        ("cerebras/llama3.1-8b", "CEREBRAS_API_KEY"),
        ("fireworks/llama-v3", "FIREWORKS_API_KEY"),
        ("xai/grok-2", "XAI_API_KEY"),
        ("vertexai/gemini-pro", "GOOGLE_CLOUD_PROJECT"),
    ];
    for (identifier, env) in cases {
        let err = registry()
            .from_provider(identifier, ClientOptions::new())
            .unwrap_err();
        assert!(err.is_configuration(), "{identifier}");
        assert!(
            err.to_string().contains(&format!("{env} is not set")),
            "{identifier}: {err}"
        );
    }

    let err = registry()
        .from_provider(
            "azure_openai/gpt-4o",
            ClientOptions::new().option("api_key", "azure-key"),
        )
        .unwrap_err();
    assert!(err.to_string().contains("AZURE_OPENAI_ENDPOINT"));
}

#[test]
fn environment_credentials_are_used() {
    let _lock = lock_env();
    let _env = clean_env();
    let _key = EnvGuard::set("OPENAI_API_KEY", "sk-env");

    let client = registry()
        .from_provider("openai/gpt-4", ClientOptions::new())
        .unwrap();
    let native = instructor(&client).native();
    assert_eq!(client.mode(), Mode::Tools);
    assert_eq!(native.sdk(), Sdk::OpenAi);
    assert_eq!(native.config().api_key(), Some("sk-env"));
    assert_eq!(instructor(&client).adapter(), AdapterKind::OpenAi);
}

#[test]
fn explicit_option_beats_environment() {
    let _lock = lock_env();
    let _env = clean_env();
    let _key = EnvGuard::set("MISTRAL_API_KEY", "from-env");

    let client = registry()
        .from_provider(
            "mistral/mistral-large-latest",
            ClientOptions::new().option("api_key", "from-option"),
        )
        .unwrap();
    let instructor = instructor(&client);
    assert_eq!(instructor.native().config().api_key(), Some("from-option"));
    assert!(!instructor.options().contains_key("api_key"));
}

#[test]
fn ollama_mode_follows_model_family() {
    let registry = registry();
    let listed = registry
        .from_provider("ollama/llama3.1", ClientOptions::new())
        .unwrap();
    let unlisted = registry
        .from_provider("ollama/some-unlisted-model", ClientOptions::new())
        .unwrap();
    assert_eq!(listed.mode(), Mode::Tools);
    assert_eq!(unlisted.mode(), Mode::Json);

    let native = instructor(&listed).native();
    assert_eq!(native.config().base_url.as_deref(), Some("http://localhost:11434/v1"));
    assert_eq!(native.config().api_key(), Some("ollama"));
}

#[test]
fn model_may_contain_separators() {
    let client = registry()
        .from_provider(
            "fireworks/accounts/fireworks/models/llama-v3-70b",
            ClientOptions::new().option("api_key", "fw-key"),
        )
        .unwrap();
    assert_eq!(client.model(), "accounts/fireworks/models/llama-v3-70b");
}

#[test]
fn identifier_without_separator_is_rejected() {
    for identifier in ["gpt-4", "/gpt-4", "openai/"] {
        let err = registry()
            .from_provider(identifier, ClientOptions::new())
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Model string must be in format \"provider/model-name\" \
             (e.g. \"openai/gpt-4\" or \"anthropic/claude-3-sonnet\")"
        );
    }
}

#[test]
fn unsupported_provider_lists_supported_tokens() {
    let err = registry()
        .from_provider("foobar/x", ClientOptions::new())
        .unwrap_err();
    assert!(err.is_configuration());
    assert_eq!(
        err.to_string(),
        "Unsupported provider: foobar. Supported providers are: [\"openai\", \"azure_openai\", \
         \"anthropic\", \"google\", \"generative-ai\", \"vertexai\", \"mistral\", \"cohere\", \
         \"perplexity\", \"groq\", \"writer\", \"bedrock\", \"cerebras\", \"fireworks\", \
         \"ollama\", \"xai\"]"
    );
}

#[test]
fn disabled_dependency_is_a_dependency_error() {
    let registry = ProviderRegistry::builder()
        .with_builtins()
        .probe(CapabilityProbe::none())
        .build();

    let err = registry
        .from_provider("azure_openai/gpt-4o", ClientOptions::new())
        .unwrap_err();
    assert!(err.is_dependency());
    assert_eq!(
        err.to_string(),
        "The Azure OpenAI provider requires openai support, which needs the `openai` cargo feature. \
         Install it with `cargo add structured-llm --features openai`."
    );
    assert_eq!(err.remediation(), "cargo add structured-llm --features openai");

    let partial = ProviderRegistry::builder()
        .with_builtins()
        .probe(CapabilityProbe::all().without(Dependency::XaiSdk))
        .build();
    assert!(!partial.available_providers().contains(&"xai"));
    assert!(partial.available_providers().contains(&"ollama"));
    match partial.from_provider("xai/grok-2", ClientOptions::new().option("api_key", "x")) {
        Err(Error::DependencyError {
            package,
            feature,
            install,
            ..
        }) => {
            assert_eq!(package, "xai-sdk");
            assert_eq!(feature, "xai");
            assert_eq!(install, format!("cargo add structured-llm --features {feature}"));
        }
        other => panic!("expected a dependency error, got {other:?}"),
    }
}

#[test]
fn dependency_check_precedes_credential_resolution() {
    let _lock = lock_env();
    let _env = clean_env();
    let registry = ProviderRegistry::builder()
        .with_builtins()
        .probe(CapabilityProbe::none())
        .build();

    let err = registry
        .from_provider("groq/llama3-8b", ClientOptions::new())
        .unwrap_err();
    assert!(err.is_dependency());
}

#[test]
fn explicit_mode_is_honored_for_every_provider() {
    let _lock = lock_env();
    let _env = clean_env();
    let registry = registry();

    for token in SUPPORTED_PROVIDERS {
        let client = registry
            .from_provider(&format!("{token}/m"), explicit(token).mode(Mode::MdJson))
            .unwrap();
        assert_eq!(client.mode(), Mode::MdJson, "{token}");
    }
}

#[test]
fn unknown_options_and_cache_pass_through() {
    let cache = AutoCache::handle(16);
    let client = registry()
        .from_provider(
            "cohere/command-r-plus",
            ClientOptions::new()
                .cache(cache.clone())
                .option("api_key", "co-key")
                .option("timeout", 30)
                .option("metadata", json!({"team": "search"})),
        )
        .unwrap();

    let instructor = instructor(&client);
    assert!(Arc::ptr_eq(instructor.cache().unwrap(), &cache));
    assert_eq!(instructor.options().get("timeout"), Some(&json!(30)));
    assert_eq!(
        instructor.options().get("metadata"),
        Some(&json!({"team": "search"}))
    );
    assert_eq!(instructor.options().len(), 2);
    assert_eq!(client.mode(), Mode::CohereTools);
}

#[test]
fn repeated_calls_resolve_identically() {
    let _lock = lock_env();
    let _env = clean_env();
    let _key = EnvGuard::set("ANTHROPIC_API_KEY", "sk-ant");
    let registry = registry();

    let first = registry
        .from_provider("anthropic/claude-3-haiku", ClientOptions::new())
        .unwrap();
    let second = registry
        .from_provider("anthropic/claude-3-haiku", ClientOptions::new())
        .unwrap();

    let (a, b) = (instructor(&first), instructor(&second));
    assert_eq!(a.native().config(), b.native().config());
    assert_eq!(a.options(), b.options());
    assert_eq!(first.mode(), second.mode());
}

#[test]
fn bedrock_honors_variant_and_defaults_region() {
    let _lock = lock_env();
    let _env = clean_env();

    let client = registry()
        .from_provider("bedrock/anthropic.claude-3-sonnet", ClientOptions::new())
        .unwrap();
    let native = instructor(&client).native();
    assert_eq!(native.sdk(), Sdk::BedrockRuntime);
    assert_eq!(native.variant(), ClientVariant::Blocking);
    assert_eq!(native.config().setting_str("region"), Some("us-east-1"));
    assert_eq!(client.mode(), Mode::BedrockTools);
}

#[cfg(feature = "all-providers")]
#[test]
fn global_entry_point_uses_builtin_registry() {
    let client = structured_llm::from_provider("ollama/qwen3:8b", ClientOptions::new()).unwrap();
    assert_eq!(client.provider_id(), "ollama");
    assert_eq!(client.mode(), Mode::Tools);
    assert_eq!(
        structured_llm::global_registry().supported_providers(),
        SUPPORTED_PROVIDERS
    );
}
