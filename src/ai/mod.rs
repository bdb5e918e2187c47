//! Text generation
//!
//! Capability interface over the external language model. The concrete
//! generator is picked once at startup and injected into the services that
//! need it.

pub mod fallback;
pub mod openai;
pub mod prompts;

use async_trait::async_trait;
use std::sync::Arc;

use crate::config::config::AiConfig;
use crate::error::Result;

pub use fallback::FallbackTextGenerator;
pub use openai::OpenAiTextGenerator;

/// A single completion request
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub system_prompt: Option<String>,
    pub prompt: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl GenerationRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            system_prompt: None,
            prompt: prompt.into(),
            max_tokens: 500,
            temperature: 0.7,
        }
    }

    pub fn with_system(mut self, system_prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(system_prompt.into());
        self
    }

    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }
}

/// Produces text from a prompt
///
/// Implementations return `AppError::Ai` on any failure; callers are
/// expected to degrade to fixed text instead of propagating it.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, request: GenerationRequest) -> Result<String>;

    /// Backend name for logs and health output
    fn name(&self) -> &'static str;
}

/// Pick the generator for the given configuration
pub fn create_text_generator(config: &AiConfig) -> Result<Arc<dyn TextGenerator>> {
    if !config.is_enabled() {
        tracing::warn!("No AI API key configured; AI-backed replies will use fallback text");
        return Ok(Arc::new(FallbackTextGenerator));
    }

    let generator = OpenAiTextGenerator::new(config)?;
    tracing::info!(model = %config.model, base_url = %config.base_url, "AI text generator ready");
    Ok(Arc::new(generator))
}
