//! Shared types used across all modules.
//!
//! Defines the core data structures for extracted issues, tracker
//! entities, and per-file run outcomes. Other modules import from here
//! rather than reaching into each other's internals.

pub mod issue;
pub mod outcome;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use issue::{Issue, IssueList, Priority};
pub use outcome::{FileOutcome, FileStatus};

/// Supported LLM provider backends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderName {
    Anthropic,
    #[serde(rename = "openai")]
    OpenAI,
    /// The original deployment target, kept as the default.
    #[default]
    #[serde(rename = "deepseek")]
    DeepSeek,
    /// Any OpenAI-compatible API (e.g. Ollama, Together, local servers).
    #[serde(rename = "openai-compatible")]
    OpenAICompatible,
}

impl fmt::Display for ProviderName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderName::Anthropic => write!(f, "anthropic"),
            ProviderName::OpenAI => write!(f, "openai"),
            ProviderName::DeepSeek => write!(f, "deepseek"),
            ProviderName::OpenAICompatible => write!(f, "openai-compatible"),
        }
    }
}

impl std::str::FromStr for ProviderName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "anthropic" => Ok(ProviderName::Anthropic),
            "openai" => Ok(ProviderName::OpenAI),
            "deepseek" => Ok(ProviderName::DeepSeek),
            "openai-compatible" => Ok(ProviderName::OpenAICompatible),
            other => Err(format!(
                "unsupported provider: '{other}'. Supported: anthropic, openai, deepseek, \
                 openai-compatible"
            )),
        }
    }
}

impl ProviderName {
    /// Returns the provider-specific environment variable name for the API key.
    ///
    /// These match the env var names used by rig-core's `from_env()` implementations.
    pub fn api_key_env_var(self) -> &'static str {
        match self {
            ProviderName::Anthropic => "ANTHROPIC_API_KEY",
            ProviderName::OpenAI | ProviderName::OpenAICompatible => "OPENAI_API_KEY",
            ProviderName::DeepSeek => "DEEPSEEK_API_KEY",
        }
    }
}

/// A team in the issue tracker, resolved once per run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    pub id: String,
    pub name: String,
}

/// The payload returned by a successful issue-creation mutation.
///
/// The `url` is surfaced to the caller unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedIssue {
    pub id: String,
    pub title: String,
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_name_display() {
        assert_eq!(ProviderName::Anthropic.to_string(), "anthropic");
        assert_eq!(ProviderName::OpenAI.to_string(), "openai");
        assert_eq!(ProviderName::DeepSeek.to_string(), "deepseek");
        assert_eq!(
            ProviderName::OpenAICompatible.to_string(),
            "openai-compatible"
        );
    }

    #[test]
    fn provider_name_from_str_all_variants() {
        assert_eq!(
            "anthropic".parse::<ProviderName>().unwrap(),
            ProviderName::Anthropic
        );
        assert_eq!(
            "openai".parse::<ProviderName>().unwrap(),
            ProviderName::OpenAI
        );
        assert_eq!(
            "deepseek".parse::<ProviderName>().unwrap(),
            ProviderName::DeepSeek
        );
        assert_eq!(
            "openai-compatible".parse::<ProviderName>().unwrap(),
            ProviderName::OpenAICompatible
        );
    }

    #[test]
    fn provider_name_from_str_case_insensitive() {
        assert_eq!(
            "DeepSeek".parse::<ProviderName>().unwrap(),
            ProviderName::DeepSeek
        );
        assert_eq!(
            "OpenAI".parse::<ProviderName>().unwrap(),
            ProviderName::OpenAI
        );
    }

    #[test]
    fn provider_name_from_str_invalid() {
        let result = "invalid".parse::<ProviderName>();
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(err.contains("unsupported provider"));
        assert!(err.contains("invalid"));
    }

    #[test]
    fn provider_name_api_key_env_var() {
        assert_eq!(
            ProviderName::Anthropic.api_key_env_var(),
            "ANTHROPIC_API_KEY"
        );
        assert_eq!(ProviderName::OpenAI.api_key_env_var(), "OPENAI_API_KEY");
        assert_eq!(ProviderName::DeepSeek.api_key_env_var(), "DEEPSEEK_API_KEY");
        assert_eq!(
            ProviderName::OpenAICompatible.api_key_env_var(),
            "OPENAI_API_KEY"
        );
    }

    #[test]
    fn provider_name_default_is_deepseek() {
        assert_eq!(ProviderName::default(), ProviderName::DeepSeek);
    }

    #[test]
    fn provider_name_serde_roundtrip() {
        let name = ProviderName::OpenAICompatible;
        let json = serde_json::to_string(&name).unwrap();
        assert_eq!(json, "\"openai-compatible\"");
        let deserialized: ProviderName = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, name);
    }
}
