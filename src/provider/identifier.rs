//! `"provider/model"` identifier parsing.

use crate::error::{Error, Result};

/// Provider token + model name parsed from an identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelSelection {
    pub provider: String,
    pub model: String,
}

/// Split an identifier on its first `/`.
///
/// The model part may itself contain `/` (e.g. `"ollama/library/llama3.1"`).
/// Provider legality is checked by the registry, not here.
pub fn parse_identifier(identifier: &str) -> Result<ModelSelection> {
    match identifier.split_once('/') {
        Some((provider, model)) if !provider.is_empty() && !model.is_empty() => {
            Ok(ModelSelection {
                provider: provider.to_string(),
                model: model.to_string(),
            })
        }
        _ => Err(Error::configuration(
            "Model string must be in format \"provider/model-name\" \
             (e.g. \"openai/gpt-4\" or \"anthropic/claude-3-sonnet\")",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_first_separator_only() {
        let sel = parse_identifier("fireworks/accounts/fireworks/models/llama-v3-70b").unwrap();
        assert_eq!(sel.provider, "fireworks");
        assert_eq!(sel.model, "accounts/fireworks/models/llama-v3-70b");
    }

    #[test]
    fn rejects_missing_or_empty_parts() {
        for bad in ["gpt-4", "/gpt-4", "openai/", "/", ""] {
            let err = parse_identifier(bad).unwrap_err();
            assert!(err.is_configuration(), "{bad}");
            assert!(err.to_string().contains("provider/model-name"), "{bad}");
        }
    }
}
