fn main() {
    // Export which provider dependencies are compiled in.
    add_build_info();
}

/// Provider dependency features, in the order they are reported.
const DEPENDENCY_FEATURES: &[&str] = &[
    "openai",
    "anthropic",
    "google",
    "mistral",
    "cohere",
    "groq",
    "writer",
    "bedrock",
    "cerebras",
    "fireworks",
    "xai",
];

/// Add build-time information as environment variables
fn add_build_info() {
    let enabled: Vec<&str> = DEPENDENCY_FEATURES
        .iter()
        .copied()
        .filter(|feature| {
            let var = format!("CARGO_FEATURE_{}", feature.to_uppercase());
            std::env::var_os(var).is_some()
        })
        .collect();

    // Read by `CapabilityProbe::detect` at runtime.
    println!(
        "cargo:rustc-env=STRUCTURED_LLM_ENABLED_DEPENDENCIES={}",
        enabled.join(",")
    );

    // Building with no provider is allowed: every dispatch then reports a
    // typed dependency error instead of failing the build.
    if enabled.is_empty() {
        println!(
            "cargo:warning=structured-llm compiled without provider features. Available features: {}",
            DEPENDENCY_FEATURES.join(", ")
        );
    }
}
