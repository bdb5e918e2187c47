//! Reply generation for voice commands, mood text and chat messages
//!
//! Every AI-backed path has a fixed fallback; model failures are logged and
//! counted, never returned to the caller. Directory reads fall back to fixed
//! text as well. Only chat history failures are returned.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::ai::{GenerationRequest, TextGenerator, prompts};
use crate::error::{AppError, Result};
use crate::models::{ChatExchange, Intent, LanguageTag, Sentiment};
use crate::observability::AppMetrics;
use crate::services::chat_history::ChatHistoryStore;
use crate::services::directory::DirectoryService;
use crate::services::intent::IntentMatcher;
use crate::services::language::detect_language;
use crate::services::sentiment::SentimentClassifier;
use crate::services::templates;

/// Default maximum input length, in characters
pub const DEFAULT_MAX_MESSAGE_CHARS: usize = 1000;

/// Reply to a voice command
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct VoiceReply {
    #[serde(rename = "type")]
    pub reply_type: String,
    pub message: String,
    pub speech: String,
    pub language: LanguageTag,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
}

/// Reply to free-text mood input
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MoodReply {
    #[serde(rename = "type")]
    pub reply_type: String,
    pub message: String,
    pub speech: String,
    pub sentiment: Sentiment,
    pub language: LanguageTag,
}

/// Reply to a chat message
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChatReply {
    pub response: String,
    pub chat_id: u64,
}

pub struct ResponseGenerator {
    generator: Arc<dyn TextGenerator>,
    directory: Arc<dyn DirectoryService>,
    history: Arc<dyn ChatHistoryStore>,
    metrics: Arc<AppMetrics>,
    sentiment: SentimentClassifier,
    matcher: IntentMatcher,
    max_message_chars: usize,
}

impl ResponseGenerator {
    pub fn new(
        generator: Arc<dyn TextGenerator>,
        directory: Arc<dyn DirectoryService>,
        history: Arc<dyn ChatHistoryStore>,
        metrics: Arc<AppMetrics>,
    ) -> Self {
        Self {
            sentiment: SentimentClassifier::new(generator.clone()),
            generator,
            directory,
            history,
            metrics,
            matcher: IntentMatcher::default(),
            max_message_chars: DEFAULT_MAX_MESSAGE_CHARS,
        }
    }

    pub fn with_matcher(mut self, matcher: IntentMatcher) -> Self {
        self.matcher = matcher;
        self
    }

    pub fn with_max_message_chars(mut self, max_message_chars: usize) -> Self {
        self.max_message_chars = max_message_chars;
        self
    }

    /// Classify a command and answer it; appends one chat exchange
    pub async fn respond(&self, command: &str) -> Result<VoiceReply> {
        let command = self.validate_input(command, "Command")?;
        let language = detect_language(command);
        let intent = self.matcher.match_intent(command, language);
        info!(?intent, %language, "Voice command classified");

        let message = match intent {
            Intent::Help => templates::help(language).to_string(),
            Intent::MoodCheck => templates::mood_check(language).to_string(),
            Intent::ShowHealthTip => self.health_tip(language).await,
            Intent::FindHospital => self.hospital_info(language).await,
            Intent::Emergency => self.emergency_advice(command, language).await,
            Intent::Unknown => self.health_query(command, language).await,
        };

        self.record_exchange(command, &message).await?;
        self.metrics.record_command();

        Ok(VoiceReply {
            reply_type: intent.response_type().to_string(),
            speech: templates::to_speech(&message),
            message,
            language,
            action: intent.action().map(str::to_string),
        })
    }

    /// Classify mood text and answer with the matching canned reply
    ///
    /// `language` defaults to the detected language of `text`.
    pub async fn respond_to_mood(
        &self,
        text: &str,
        language: Option<LanguageTag>,
    ) -> Result<MoodReply> {
        let text = self.validate_input(text, "Mood text")?;
        let language = language.unwrap_or_else(|| detect_language(text));

        let sentiment = self.sentiment.classify(text, language).await;
        debug!(sentiment = sentiment.as_str(), %language, "Mood classified");

        let message = templates::sentiment_reply(sentiment, language).to_string();
        self.record_exchange(text, &message).await?;
        self.metrics.record_mood_response();

        Ok(MoodReply {
            reply_type: "mood_response".to_string(),
            speech: templates::to_speech(&message),
            message,
            sentiment,
            language,
        })
    }

    /// Answer a chat message as a health question
    pub async fn chat(&self, message: &str) -> Result<ChatReply> {
        let message = self.validate_input(message, "Message")?;
        let language = detect_language(message);

        let response = self.health_query(message, language).await;
        let exchange = self.record_exchange(message, &response).await?;

        Ok(ChatReply {
            response,
            chat_id: exchange.id,
        })
    }

    fn validate_input<'a>(&self, text: &'a str, field: &str) -> Result<&'a str> {
        let text = text.trim();
        if text.is_empty() {
            return Err(AppError::Validation(format!("{} cannot be empty", field)));
        }
        if text.chars().count() > self.max_message_chars {
            return Err(AppError::Validation(format!(
                "{} must be at most {} characters",
                field, self.max_message_chars
            )));
        }
        Ok(text)
    }

    async fn record_exchange(
        &self,
        user_text: &str,
        ai_text: &str,
    ) -> Result<ChatExchange> {
        let exchange = self.history.append(user_text, ai_text).await?;
        self.metrics.record_chat_exchange();
        Ok(exchange)
    }

    /// Model reply, or `fallback` when the call fails
    async fn ai_or(&self, request: GenerationRequest, fallback: impl Into<String>) -> String {
        match self.generator.generate(request).await {
            Ok(reply) => reply,
            Err(e) => {
                warn!(error = %e, generator = self.generator.name(), "AI reply failed, using fallback");
                self.metrics.record_ai_fallback();
                fallback.into()
            }
        }
    }

    async fn health_tip(&self, language: LanguageTag) -> String {
        let tip = match self.directory.tip_for(language).await {
            Ok(Some(tip)) => tip,
            Ok(None) => return templates::generic_health_tip(language).to_string(),
            Err(e) => {
                warn!(error = %e, "Health tip lookup failed, using generic tip");
                return templates::generic_health_tip(language).to_string();
            }
        };

        let request = GenerationRequest::new(prompts::tip_rephrase_prompt(&tip.text, language))
            .with_system(prompts::system_prompt(language))
            .max_tokens(200);
        self.ai_or(request, tip.text).await
    }

    async fn hospital_info(&self, language: LanguageTag) -> String {
        let hospital = match self.directory.first_hospital().await {
            Ok(Some(hospital)) => hospital,
            Ok(None) => return templates::hospital_unavailable(language).to_string(),
            Err(e) => {
                warn!(error = %e, "Hospital lookup failed");
                return templates::hospital_unavailable(language).to_string();
            }
        };

        let request = GenerationRequest::new(prompts::hospital_prompt(&hospital, language))
            .with_system(prompts::system_prompt(language))
            .max_tokens(200);
        self.ai_or(request, templates::hospital_details(&hospital, language))
            .await
    }

    async fn emergency_advice(&self, symptoms: &str, language: LanguageTag) -> String {
        let request = GenerationRequest::new(prompts::emergency_prompt(symptoms, language))
            .max_tokens(200)
            .temperature(0.7);
        self.ai_or(request, prompts::emergency_fallback(language))
            .await
    }

    async fn health_query(&self, query: &str, language: LanguageTag) -> String {
        let request = GenerationRequest::new(query)
            .with_system(prompts::system_prompt(language))
            .max_tokens(500)
            .temperature(0.7);
        self.ai_or(request, prompts::fallback_response(language))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::MockTextGenerator;
    use crate::models::{FacilityType, HealthFacility, HealthTip};
    use crate::services::chat_history::create_chat_history_store;
    use crate::services::directory::create_directory_service;
    use crate::storage::factory::Repositories;
    use crate::storage::repository::{Record, Repository};
    use async_trait::async_trait;
    use rstest::rstest;
    use std::sync::atomic::Ordering;

    /// Every call fails as if the backend were unreachable
    struct DownRepository;

    #[async_trait]
    impl<T: Record> Repository<T> for DownRepository {
        async fn create(&self, _entity: T) -> Result<T> {
            Err(AppError::Database("down".into()))
        }

        async fn get_by_id(&self, _id: u64) -> Result<Option<T>> {
            Err(AppError::Database("down".into()))
        }

        async fn update(&self, _entity: &T) -> Result<Option<T>> {
            Err(AppError::Database("down".into()))
        }

        async fn latest(&self, _limit: usize) -> Result<Vec<T>> {
            Err(AppError::Database("down".into()))
        }

        async fn find_all(&self) -> Result<Vec<T>> {
            Err(AppError::Database("down".into()))
        }

        async fn count(&self) -> Result<u64> {
            Err(AppError::Database("down".into()))
        }
    }

    struct Fixture {
        generator: ResponseGenerator,
        directory: Arc<dyn DirectoryService>,
        history: Arc<dyn ChatHistoryStore>,
        metrics: Arc<AppMetrics>,
    }

    fn fixture(mock: MockTextGenerator) -> Fixture {
        let repos = Repositories::in_memory();
        let directory: Arc<dyn DirectoryService> =
            Arc::from(create_directory_service(repos.facilities, repos.health_tips));
        let history: Arc<dyn ChatHistoryStore> =
            Arc::from(create_chat_history_store(repos.chat_exchanges));
        let metrics = Arc::new(AppMetrics::default());
        let generator = ResponseGenerator::new(
            Arc::new(mock),
            directory.clone(),
            history.clone(),
            metrics.clone(),
        );
        Fixture {
            generator,
            directory,
            history,
            metrics,
        }
    }

    fn failing() -> MockTextGenerator {
        let mut mock = MockTextGenerator::new();
        mock.expect_generate()
            .returning(|_| Err(AppError::Ai("AI service unavailable".into())));
        mock.expect_name().return_const("mock");
        mock
    }

    fn answering(reply: &'static str) -> MockTextGenerator {
        let mut mock = MockTextGenerator::new();
        mock.expect_generate().returning(move |_| Ok(reply.to_string()));
        mock.expect_name().return_const("mock");
        mock
    }

    #[rstest]
    #[case("help me", LanguageTag::En)]
    #[case("সাহায্য", LanguageTag::Bn)]
    #[case("help করো", LanguageTag::Mixed)]
    #[tokio::test]
    async fn test_help_in_each_language(#[case] command: &str, #[case] language: LanguageTag) {
        let mut mock = MockTextGenerator::new();
        mock.expect_generate().never();
        let f = fixture(mock);

        let reply = f.generator.respond(command).await.unwrap();
        assert_eq!(reply.reply_type, "help");
        assert_eq!(reply.language, language);
        assert_eq!(reply.message, templates::help(language));
        assert!(reply.action.is_none());
    }

    #[tokio::test]
    async fn test_hospital_without_facilities() {
        let f = fixture(failing());

        let reply = f.generator.respond("হাসপাতাল কোথায়").await.unwrap();
        assert_eq!(reply.reply_type, "hospital_info");
        assert_eq!(reply.language, LanguageTag::Bn);
        assert_eq!(reply.message, templates::hospital_unavailable(LanguageTag::Bn));
        assert_eq!(reply.action.as_deref(), Some("/health-map/"));
        assert_eq!(f.metrics.ai_fallbacks_total.load(Ordering::Relaxed), 0);
    }

    #[tokio::test]
    async fn test_hospital_falls_back_to_details() {
        let f = fixture(failing());
        let hospital = HealthFacility::new(
            "Savar Upazila Health Complex",
            FacilityType::Hospital,
            "Savar, Dhaka",
            "Savar",
        )
        .with_contact("01700-000000");
        f.directory.add_facility(hospital.clone()).await.unwrap();

        let reply = f.generator.respond("find hospital").await.unwrap();
        assert_eq!(
            reply.message,
            templates::hospital_details(&hospital, LanguageTag::En)
        );
        assert_eq!(f.metrics.ai_fallbacks_total.load(Ordering::Relaxed), 1);
    }

    #[tokio::test]
    async fn test_tip_is_rephrased() {
        let mut mock = MockTextGenerator::new();
        mock.expect_generate()
            .withf(|req| req.prompt.contains("Wash your hands") && req.system_prompt.is_some())
            .returning(|_| Ok("Keep those hands clean!".into()));
        let f = fixture(mock);
        f.directory
            .add_tip(HealthTip::new("Wash your hands", LanguageTag::En))
            .await
            .unwrap();

        let reply = f.generator.respond("health tips").await.unwrap();
        assert_eq!(reply.reply_type, "health_tip");
        assert_eq!(reply.message, "Keep those hands clean!");
        assert_eq!(reply.action.as_deref(), Some("/health-tips/"));
    }

    #[tokio::test]
    async fn test_tip_fallbacks() {
        let f = fixture(failing());

        let reply = f.generator.respond("স্বাস্থ্য টিপস").await.unwrap();
        assert_eq!(reply.message, templates::generic_health_tip(LanguageTag::Bn));

        f.directory
            .add_tip(HealthTip::new("হাত ধুয়ে নিন", LanguageTag::Bn))
            .await
            .unwrap();
        let reply = f.generator.respond("স্বাস্থ্য টিপস").await.unwrap();
        assert_eq!(reply.message, "হাত ধুয়ে নিন");
    }

    #[tokio::test]
    async fn test_directory_failure_uses_fixed_text() {
        let mut mock = MockTextGenerator::new();
        mock.expect_generate().never();
        let repos = Repositories::in_memory();
        let history: Arc<dyn ChatHistoryStore> =
            Arc::from(create_chat_history_store(repos.chat_exchanges));
        let directory: Arc<dyn DirectoryService> = Arc::from(create_directory_service(
            Arc::new(DownRepository),
            Arc::new(DownRepository),
        ));
        let generator = ResponseGenerator::new(
            Arc::new(mock),
            directory,
            history.clone(),
            Arc::new(AppMetrics::default()),
        );

        let reply = generator.respond("হাসপাতাল কোথায়").await.unwrap();
        assert_eq!(reply.reply_type, "hospital_info");
        assert_eq!(reply.message, templates::hospital_unavailable(LanguageTag::Bn));

        let reply = generator.respond("health tips").await.unwrap();
        assert_eq!(reply.reply_type, "health_tip");
        assert_eq!(reply.message, templates::generic_health_tip(LanguageTag::En));

        assert_eq!(history.count().await.unwrap(), 2);
    }

    #[rstest]
    #[case("what should I eat for a cold", LanguageTag::En)]
    #[case("আমার মাথা ব্যথা করছে", LanguageTag::Bn)]
    #[case("amar জ্বর hoyeche", LanguageTag::Mixed)]
    #[tokio::test]
    async fn test_unknown_uses_fallback_on_failure(
        #[case] command: &str,
        #[case] language: LanguageTag,
    ) {
        let f = fixture(failing());

        let reply = f.generator.respond(command).await.unwrap();
        assert_eq!(reply.reply_type, "ai_response");
        assert_eq!(reply.language, language);
        assert_eq!(reply.message, prompts::fallback_response(language));
        assert!(reply.action.is_none());
    }

    #[tokio::test]
    async fn test_unknown_request_shape() {
        let mut mock = MockTextGenerator::new();
        mock.expect_generate()
            .withf(|req| {
                req.max_tokens == 500
                    && (req.temperature - 0.7).abs() < f32::EPSILON
                    && req.system_prompt.as_deref()
                        == Some(prompts::system_prompt(LanguageTag::En))
            })
            .times(1)
            .returning(|_| Ok("Rest and drink fluids. 🍵".into()));
        let f = fixture(mock);

        let reply = f.generator.respond("what helps with a cold").await.unwrap();
        assert_eq!(reply.message, "Rest and drink fluids. 🍵");
        assert_eq!(reply.speech, "Rest and drink fluids.");
    }

    #[tokio::test]
    async fn test_emergency_fallback() {
        let f = fixture(failing());

        let reply = f.generator.respond("জরুরি সাহায্য").await.unwrap();
        assert_eq!(reply.reply_type, "emergency");
        assert_eq!(reply.message, prompts::emergency_fallback(LanguageTag::Bn));
        assert_eq!(reply.action.as_deref(), Some("/help-request/"));
    }

    #[tokio::test]
    async fn test_each_turn_appends_one_exchange() {
        let f = fixture(failing());

        for (i, command) in ["help", "mood check", "tell me about fever"].iter().enumerate() {
            f.generator.respond(command).await.unwrap();
            assert_eq!(f.history.count().await.unwrap(), i as u64 + 1);
        }
        f.generator.chat("is tea good for me").await.unwrap();
        f.generator.respond_to_mood("I'm tired", None).await.unwrap();
        assert_eq!(f.history.count().await.unwrap(), 5);

        let recent = f.history.recent(20).await.unwrap();
        assert_eq!(recent[0].user_text, "help");
        assert!(recent.windows(2).all(|w| w[0].id < w[1].id));
        assert_eq!(f.metrics.chat_exchanges_total.load(Ordering::Relaxed), 5);
    }

    #[tokio::test]
    async fn test_empty_input_is_rejected_without_exchange() {
        let f = fixture(failing());

        assert!(matches!(
            f.generator.respond("   ").await,
            Err(AppError::Validation(_))
        ));
        assert!(matches!(f.generator.chat("").await, Err(AppError::Validation(_))));
        assert!(matches!(
            f.generator.respond_to_mood("\n", None).await,
            Err(AppError::Validation(_))
        ));
        assert_eq!(f.history.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_long_input_is_rejected() {
        let f = fixture(failing());
        let generator = f.generator.with_max_message_chars(5);

        assert!(generator.chat("hello").await.is_ok());
        assert!(matches!(
            generator.chat("hello!").await,
            Err(AppError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_mood_positive() {
        let f = fixture(answering("positive"));

        let reply = f
            .generator
            .respond_to_mood("I feel great", Some(LanguageTag::En))
            .await
            .unwrap();
        assert_eq!(reply.reply_type, "mood_response");
        assert_eq!(reply.sentiment, Sentiment::Positive);
        assert_eq!(
            reply.message,
            templates::sentiment_reply(Sentiment::Positive, LanguageTag::En)
        );
    }

    #[tokio::test]
    async fn test_mood_language_defaults_to_detected() {
        let f = fixture(failing());

        let reply = f
            .generator
            .respond_to_mood("আমার মন ভালো নেই", None)
            .await
            .unwrap();
        assert_eq!(reply.language, LanguageTag::Bn);
        assert_eq!(reply.sentiment, Sentiment::Neutral);
    }

    #[tokio::test]
    async fn test_custom_rules() {
        use crate::services::intent::{IntentRule, Pattern};

        let f = fixture(failing());
        let generator = f.generator.with_matcher(IntentMatcher::new(vec![IntentRule {
            language: LanguageTag::Mixed,
            pattern: Pattern::Keyword("daktar"),
            intent: Intent::FindHospital,
        }]));

        let reply = generator.respond("kothay daktar pabo").await.unwrap();
        assert_eq!(reply.reply_type, "hospital_info");

        let reply = generator.respond("help").await.unwrap();
        assert_eq!(reply.reply_type, "ai_response");
    }

    #[tokio::test]
    async fn test_chat_returns_exchange_id() {
        let f = fixture(answering("Drink water."));

        let first = f.generator.chat("I have a headache").await.unwrap();
        let second = f.generator.chat("and a fever").await.unwrap();
        assert_eq!(first.response, "Drink water.");
        assert!(second.chat_id > first.chat_id);
    }
}
