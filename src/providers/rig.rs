//! rig-core integration for the two LLM stages.
//!
//! Uses rig-core's provider clients and Agent abstraction for
//! multi-provider support: Anthropic, OpenAI, DeepSeek, and any
//! OpenAI-compatible API. The review stage is free-form; the extraction
//! stage constrains the response to the `IssueList` JSON schema.

use async_trait::async_trait;
use rig::client::CompletionClient;
use rig::completion::Prompt;
use rig::providers;

use crate::config::ProviderConfig;
use crate::models::{IssueList, ProviderName};
use crate::prompts::{EXTRACT_SYSTEM_PROMPT, REVIEW_SYSTEM_PROMPT};

use super::{ProviderError, ReviewProvider};

/// Maximum tokens per LLM completion response.
///
/// Reviews of large files run long; set high enough that the rubric's
/// full output format fits without truncation.
const MAX_TOKENS: u64 = 65536;

/// Build a free-form review agent from a rig-core client and prompt it.
///
/// Always sets `max_tokens` — all rig-core providers support it and
/// without it some default to a low limit that truncates responses.
macro_rules! prompt_review {
    ($client:expr, $model:expr, $user:expr, $label:expr) => {{
        let agent = $client
            .agent($model)
            .preamble(REVIEW_SYSTEM_PROMPT)
            .temperature(0.0)
            .max_tokens(MAX_TOKENS)
            .build();
        agent
            .prompt($user)
            .await
            .map_err(|e| ProviderError::ApiError(format!("{} API error: {e}", $label)))
    }};
}

/// Build a JSON-constrained extraction agent and prompt it.
///
/// `output_schema::<IssueList>()` enforces the `{"issues": [...]}` shape
/// at the provider level; the extraction module still parses leniently
/// since model compliance is probabilistic.
macro_rules! prompt_extract {
    ($client:expr, $model:expr, $user:expr, $label:expr) => {{
        let agent = $client
            .agent($model)
            .preamble(EXTRACT_SYSTEM_PROMPT)
            .temperature(0.0)
            .max_tokens(MAX_TOKENS)
            .output_schema::<IssueList>()
            .build();
        agent
            .prompt($user)
            .await
            .map_err(|e| ProviderError::ApiError(format!("{} API error: {e}", $label)))
    }};
}

/// Dispatch a stage macro across the configured provider backends.
macro_rules! dispatch {
    ($self:expr, $stage:ident, $user:expr) => {{
        let api_key = $self.api_key()?;
        let model = $self.config.model.as_str();

        match $self.config.name {
            ProviderName::Anthropic => {
                let client: providers::anthropic::Client = providers::anthropic::Client::builder()
                    .api_key(api_key)
                    .build()
                    .map_err(|e| {
                        ProviderError::ApiError(format!("failed to create Anthropic client: {e}"))
                    })?;
                $stage!(client, model, $user, "Anthropic")
            }
            ProviderName::OpenAI => {
                let client = $self.build_openai_client(api_key, false)?;
                $stage!(client, model, $user, "OpenAI")
            }
            ProviderName::DeepSeek => {
                let client = providers::deepseek::Client::new(api_key).map_err(|e| {
                    ProviderError::ApiError(format!("failed to create DeepSeek client: {e}"))
                })?;
                $stage!(client, model, $user, "DeepSeek")
            }
            ProviderName::OpenAICompatible => {
                let client = $self.build_openai_client(api_key, true)?;
                $stage!(client, model, $user, "OpenAI-compatible")
            }
        }
    }};
}

/// rig-core based review provider.
///
/// The provider name in config selects which rig-core backend to use.
#[derive(Debug)]
pub struct RigProvider {
    config: ProviderConfig,
}

impl RigProvider {
    /// Create a new RigProvider with the given configuration.
    pub fn new(config: ProviderConfig) -> Result<Self, ProviderError> {
        if config.api_key.is_none() {
            return Err(ProviderError::NotConfigured(format!(
                "no API key found for provider '{}'. Set {} or the provider-specific env var.",
                config.name,
                crate::constants::ENV_API_KEY
            )));
        }
        Ok(Self { config })
    }

    /// Build an OpenAI-style client, optionally requiring a custom base URL.
    fn build_openai_client(
        &self,
        api_key: &str,
        base_url_required: bool,
    ) -> Result<providers::openai::CompletionsClient, ProviderError> {
        let mut builder = providers::openai::CompletionsClient::builder().api_key(api_key);
        match self.config.base_url.as_deref() {
            Some(base_url) => builder = builder.base_url(base_url),
            None if base_url_required => {
                return Err(ProviderError::NotConfigured(
                    "openai-compatible provider requires base_url to be set".to_string(),
                ));
            }
            None => {}
        }
        builder
            .build()
            .map_err(|e| ProviderError::ApiError(format!("failed to create OpenAI client: {e}")))
    }

    /// Get the API key or return an error.
    fn api_key(&self) -> Result<&str, ProviderError> {
        self.config
            .api_key
            .as_deref()
            .ok_or_else(|| ProviderError::NotConfigured("missing API key".to_string()))
    }
}

#[async_trait]
impl ReviewProvider for RigProvider {
    async fn review(&self, user_prompt: &str) -> Result<String, ProviderError> {
        dispatch!(self, prompt_review, user_prompt)
    }

    async fn extract(&self, review_text: &str) -> Result<String, ProviderError> {
        dispatch!(self, prompt_extract, review_text)
    }
}
