//! Sentiment classification for mood text
//!
//! One model call, no retries. Any failure or unexpected label degrades to
//! neutral.

use std::sync::Arc;

use crate::ai::{GenerationRequest, TextGenerator, prompts};
use crate::models::{LanguageTag, Sentiment};

#[derive(Clone)]
pub struct SentimentClassifier {
    generator: Arc<dyn TextGenerator>,
}

impl SentimentClassifier {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    pub async fn classify(&self, text: &str, language: LanguageTag) -> Sentiment {
        let request = GenerationRequest::new(prompts::sentiment_prompt(text, language))
            .max_tokens(10)
            .temperature(0.3);

        match self.generator.generate(request).await {
            Ok(reply) => parse_label(&reply).unwrap_or_else(|| {
                tracing::warn!(reply = %reply, "Unexpected sentiment label, using neutral");
                Sentiment::Neutral
            }),
            Err(e) => {
                tracing::warn!(error = %e, "Sentiment analysis failed, using neutral");
                Sentiment::Neutral
            }
        }
    }
}

/// Lower-cases the reply and strips wrapping quotes and punctuation
pub fn parse_label(reply: &str) -> Option<Sentiment> {
    let label = reply
        .trim()
        .to_lowercase()
        .trim_matches(|c: char| c.is_ascii_punctuation() || c.is_whitespace())
        .to_string();
    Sentiment::from_label(&label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::MockTextGenerator;
    use crate::error::AppError;
    use rstest::rstest;

    fn classifier_returning(reply: &'static str) -> SentimentClassifier {
        let mut generator = MockTextGenerator::new();
        generator
            .expect_generate()
            .times(1)
            .returning(move |_| Ok(reply.to_string()));
        SentimentClassifier::new(Arc::new(generator))
    }

    #[rstest]
    #[case("positive", Sentiment::Positive)]
    #[case("Negative.", Sentiment::Negative)]
    #[case("\"neutral\"", Sentiment::Neutral)]
    #[case("  POSITIVE\n", Sentiment::Positive)]
    #[tokio::test]
    async fn test_labels(#[case] reply: &'static str, #[case] expected: Sentiment) {
        let sentiment = classifier_returning(reply)
            .classify("I feel great", LanguageTag::En)
            .await;
        assert_eq!(sentiment, expected);
    }

    #[rstest]
    #[case("The sentiment is positive")]
    #[case("happy")]
    #[case("")]
    #[tokio::test]
    async fn test_unexpected_label_is_neutral(#[case] reply: &'static str) {
        let sentiment = classifier_returning(reply)
            .classify("whatever", LanguageTag::Bn)
            .await;
        assert_eq!(sentiment, Sentiment::Neutral);
    }

    #[tokio::test]
    async fn test_failure_is_neutral_without_retry() {
        let mut generator = MockTextGenerator::new();
        generator
            .expect_generate()
            .times(1)
            .returning(|_| Err(AppError::Ai("timeout".into())));
        let classifier = SentimentClassifier::new(Arc::new(generator));

        assert_eq!(
            classifier.classify("আমি ভালো নেই", LanguageTag::Bn).await,
            Sentiment::Neutral
        );
    }

    #[tokio::test]
    async fn test_request_is_short_and_cool() {
        let mut generator = MockTextGenerator::new();
        generator
            .expect_generate()
            .withf(|req| {
                req.max_tokens == 10
                    && (req.temperature - 0.3).abs() < f32::EPSILON
                    && req.system_prompt.is_none()
                    && req.prompt.contains("\"I feel great\"")
            })
            .returning(|_| Ok("positive".into()));
        let classifier = SentimentClassifier::new(Arc::new(generator));

        assert_eq!(
            classifier.classify("I feel great", LanguageTag::En).await,
            Sentiment::Positive
        );
    }
}
