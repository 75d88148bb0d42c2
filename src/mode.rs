//! Structured-output transport modes and default mode selection.
//!
//! A [`Mode`] names the wire-level strategy an adapter uses to obtain
//! schema-conforming output (native tool calling, JSON instructions, ...).
//! The registry only picks one; adapters interpret it.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Structured-output transport mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    #[serde(rename = "tool_call")]
    Tools,
    #[serde(rename = "parallel_tool_call")]
    ParallelTools,
    #[serde(rename = "tools_strict")]
    ToolsStrict,
    #[serde(rename = "json_mode")]
    Json,
    #[serde(rename = "markdown_json_mode")]
    MdJson,
    #[serde(rename = "json_schema_mode")]
    JsonSchema,
    #[serde(rename = "anthropic_tools")]
    AnthropicTools,
    #[serde(rename = "anthropic_json")]
    AnthropicJson,
    #[serde(rename = "mistral_tools")]
    MistralTools,
    #[serde(rename = "mistral_structured_outputs")]
    MistralStructuredOutputs,
    #[serde(rename = "cohere_tools")]
    CohereTools,
    #[serde(rename = "json_object")]
    CohereJsonSchema,
    #[serde(rename = "genai_tools")]
    GenaiTools,
    #[serde(rename = "genai_structured_outputs")]
    GenaiStructuredOutputs,
    #[serde(rename = "cerebras_tools")]
    CerebrasTools,
    #[serde(rename = "cerebras_json")]
    CerebrasJson,
    #[serde(rename = "fireworks_tools")]
    FireworksTools,
    #[serde(rename = "fireworks_json")]
    FireworksJson,
    #[serde(rename = "writer_tools")]
    WriterTools,
    #[serde(rename = "writer_json")]
    WriterJson,
    #[serde(rename = "bedrock_tools")]
    BedrockTools,
    #[serde(rename = "bedrock_json")]
    BedrockJson,
    #[serde(rename = "perplexity_json")]
    PerplexityJson,
    #[serde(rename = "xai_json")]
    XaiJson,
    #[serde(rename = "xai_tools")]
    XaiTools,
}

impl Mode {
    pub const ALL: [Mode; 25] = [
        Mode::Tools,
        Mode::ParallelTools,
        Mode::ToolsStrict,
        Mode::Json,
        Mode::MdJson,
        Mode::JsonSchema,
        Mode::AnthropicTools,
        Mode::AnthropicJson,
        Mode::MistralTools,
        Mode::MistralStructuredOutputs,
        Mode::CohereTools,
        Mode::CohereJsonSchema,
        Mode::GenaiTools,
        Mode::GenaiStructuredOutputs,
        Mode::CerebrasTools,
        Mode::CerebrasJson,
        Mode::FireworksTools,
        Mode::FireworksJson,
        Mode::WriterTools,
        Mode::WriterJson,
        Mode::BedrockTools,
        Mode::BedrockJson,
        Mode::PerplexityJson,
        Mode::XaiJson,
        Mode::XaiTools,
    ];

    /// Stable wire name, identical to the serde representation.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Mode::Tools => "tool_call",
            Mode::ParallelTools => "parallel_tool_call",
            Mode::ToolsStrict => "tools_strict",
            Mode::Json => "json_mode",
            Mode::MdJson => "markdown_json_mode",
            Mode::JsonSchema => "json_schema_mode",
            Mode::AnthropicTools => "anthropic_tools",
            Mode::AnthropicJson => "anthropic_json",
            Mode::MistralTools => "mistral_tools",
            Mode::MistralStructuredOutputs => "mistral_structured_outputs",
            Mode::CohereTools => "cohere_tools",
            Mode::CohereJsonSchema => "json_object",
            Mode::GenaiTools => "genai_tools",
            Mode::GenaiStructuredOutputs => "genai_structured_outputs",
            Mode::CerebrasTools => "cerebras_tools",
            Mode::CerebrasJson => "cerebras_json",
            Mode::FireworksTools => "fireworks_tools",
            Mode::FireworksJson => "fireworks_json",
            Mode::WriterTools => "writer_tools",
            Mode::WriterJson => "writer_json",
            Mode::BedrockTools => "bedrock_tools",
            Mode::BedrockJson => "bedrock_json",
            Mode::PerplexityJson => "perplexity_json",
            Mode::XaiJson => "xai_json",
            Mode::XaiTools => "xai_tools",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Mode::ALL
            .iter()
            .copied()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| Error::configuration(format!("Unknown mode: {s}")))
    }
}

/// Data version of the built-in tool-capable model family list.
pub const TOOL_CAPABLE_MODELS_VERSION: &str = "2025.06";

/// Model families served by Ollama that are known to support tool calling.
const BUILTIN_TOOL_CAPABLE_FAMILIES: &[&str] = &[
    "llama3.1",
    "llama3.2",
    "llama4",
    "mistral-nemo",
    "firefunction-v2",
    "command-r-plus",
    "qwen2.5",
    "qwen2.5-coder",
    "qwen3",
    "devstral",
];

/// Versioned list of model family names used by the tool-calling heuristic.
///
/// The heuristic is best-effort: a capable model whose name matches none of
/// the families falls back to JSON mode. Ship an updated list (e.g. from a
/// JSON file) instead of patching code when new families appear.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolCapableModels {
    pub version: String,
    pub families: Vec<String>,
}

impl Default for ToolCapableModels {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ToolCapableModels {
    pub fn builtin() -> Self {
        Self {
            version: TOOL_CAPABLE_MODELS_VERSION.to_string(),
            families: BUILTIN_TOOL_CAPABLE_FAMILIES
                .iter()
                .map(|f| f.to_string())
                .collect(),
        }
    }

    pub fn new(version: impl Into<String>, families: Vec<String>) -> Self {
        Self {
            version: version.into(),
            families,
        }
    }

    /// Parse a `{"version": .., "families": [..]}` document.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| Error::configuration(format!("Invalid tool-capable model list: {e}")))
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            Error::configuration(format!(
                "Failed to read tool-capable model list {}: {e}",
                path.display()
            ))
        })?;
        Self::from_json(&raw)
    }

    /// Whether the (lower-cased) model name contains any known family name.
    pub fn supports_tools(&self, model: &str) -> bool {
        let model = model.to_lowercase();
        self.families
            .iter()
            .any(|family| model.contains(&family.to_lowercase()))
    }
}

/// Pick the transport mode for a call.
///
/// An explicit override is used as-is; no capability validation happens at
/// this layer.
pub fn select_mode(explicit: Option<Mode>, provider_default: impl FnOnce() -> Mode) -> Mode {
    explicit.unwrap_or_else(provider_default)
}

/// Default mode for locally served models: tool calling when the model name
/// matches a known tool-capable family, JSON otherwise.
pub fn heuristic_mode(model: &str, tool_models: &ToolCapableModels) -> Mode {
    if tool_models.supports_tools(model) {
        Mode::Tools
    } else {
        Mode::Json
    }
}
