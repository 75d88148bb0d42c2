//! Provider id constants.
//!
//! Centralizing ids avoids "stringly-typed" routing scattered across multiple layers.

pub const OPENAI: &str = "openai";
pub const AZURE_OPENAI: &str = "azure_openai";
pub const ANTHROPIC: &str = "anthropic";
pub const GOOGLE: &str = "google";
pub const MISTRAL: &str = "mistral";
pub const COHERE: &str = "cohere";
pub const PERPLEXITY: &str = "perplexity";
pub const GROQ: &str = "groq";
pub const WRITER: &str = "writer";
pub const BEDROCK: &str = "bedrock";
pub const CEREBRAS: &str = "cerebras";
pub const FIREWORKS: &str = "fireworks";
pub const OLLAMA: &str = "ollama";
pub const XAI: &str = "xai";

/// Deprecated alias for `google` with `vertexai=true`.
pub const VERTEXAI: &str = "vertexai";
/// Deprecated alias for `google`.
pub const GENERATIVE_AI: &str = "generative-ai";

/// Built-in provider tokens in registry order.
pub const BUILTIN_PROVIDERS: [&str; 14] = [
    OPENAI,
    AZURE_OPENAI,
    ANTHROPIC,
    GOOGLE,
    MISTRAL,
    COHERE,
    PERPLEXITY,
    GROQ,
    WRITER,
    BEDROCK,
    CEREBRAS,
    FIREWORKS,
    OLLAMA,
    XAI,
];

/// Every token the built-in registry accepts, deprecated aliases included.
///
/// This is the list quoted by the unsupported-provider error.
pub const SUPPORTED_PROVIDERS: [&str; 16] = [
    OPENAI,
    AZURE_OPENAI,
    ANTHROPIC,
    GOOGLE,
    GENERATIVE_AI,
    VERTEXAI,
    MISTRAL,
    COHERE,
    PERPLEXITY,
    GROQ,
    WRITER,
    BEDROCK,
    CEREBRAS,
    FIREWORKS,
    OLLAMA,
    XAI,
];
