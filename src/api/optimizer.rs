//! AI-assisted prompt rewriting through the `llm` crate.

use llm::{
    builder::{LLMBackend, LLMBuilder},
    chat::ChatMessage,
    LLMProvider,
};
use std::env;
use std::str::FromStr;

use super::error::OptimizeError;
use crate::core::config::OptimizerConfig;

/// System prompt for the rewrite. The contract is rewrite-only: the model
/// must never execute or answer the prompt, and must reply with the
/// optimized prompt text alone.
const SYSTEM_PROMPT: &str = "You are a world-class prompt engineering expert. \
Your mission is to optimize the prompt provided by the user.\n\n\
Optimization rules:\n\
1. Clarify the objective and the context.\n\
2. Structure the prompt (e.g. Role, Task, Constraints, Output format).\n\
3. Use precise, professional language.\n\
4. Add advanced techniques where relevant (Chain of Thought, Few-Shot, etc.).\n\
5. NEVER execute or answer the prompt itself; only rewrite it.\n\
6. Reply with the optimized prompt ONLY, without any introduction or conclusion.";

/// Sends prompt text to the configured chat-completion backend and returns a
/// single replacement text.
///
/// One request in flight, no retry, no streaming; a missing credential or an
/// upstream failure is reported once to the caller.
pub struct Optimizer {
    provider: Box<dyn LLMProvider>,
}

impl Optimizer {
    /// Builds the provider from a resolved configuration. Fails before any
    /// network activity when the backend name is unknown or the API key
    /// environment variable is not set.
    pub fn from_config(config: &OptimizerConfig) -> Result<Self, OptimizeError> {
        let backend = LLMBackend::from_str(&config.backend)
            .map_err(|_| OptimizeError::Configuration(format!(
                "Unknown backend '{}'",
                config.backend
            )))?;

        let api_key = env::var(&config.api_key_env).map_err(|_| {
            OptimizeError::Configuration(format!(
                "API key env var '{}' not set",
                config.api_key_env
            ))
        })?;

        let mut builder = LLMBuilder::new()
            .backend(backend)
            .model(&config.model)
            .api_key(api_key)
            .system(SYSTEM_PROMPT)
            .temperature(0.7);
        if let Some(base_url) = &config.base_url {
            builder = builder.base_url(base_url.clone());
        }

        let provider = builder
            .build()
            .map_err(|e| OptimizeError::Configuration(e.to_string()))?;
        Ok(Self { provider })
    }

    /// Rewrites `content` and returns the replacement text.
    pub async fn optimize(&self, content: &str) -> Result<String, OptimizeError> {
        if content.trim().is_empty() {
            return Err(OptimizeError::EmptyContent);
        }

        let messages = vec![ChatMessage::user().content(content).build()];
        let response = self.provider.chat(&messages).await?;
        Ok(response.text().unwrap_or_default())
    }
}
