use async_trait::async_trait;

use crate::ai::{GenerationRequest, TextGenerator};
use crate::error::{AppError, Result};

/// Generator used when no external service is configured; always fails
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackTextGenerator;

#[async_trait]
impl TextGenerator for FallbackTextGenerator {
    async fn generate(&self, _request: GenerationRequest) -> Result<String> {
        Err(AppError::Ai("AI service unavailable: no API key configured".into()))
    }

    fn name(&self) -> &'static str {
        "fallback"
    }
}
