//! Services
//!
//! Language detection and intent matching feed the `ResponseGenerator`; the
//! remaining services back the reference data and form endpoints. The directory
//! can be seeded from a TOML file at startup.

pub mod chat_history;
pub mod directory;
pub mod help_request;
pub mod intent;
pub mod language;
pub mod maternal;
pub mod mood;
pub mod response;
pub mod seed;
pub mod sentiment;
pub mod templates;

pub use chat_history::{ChatHistoryStore, create_chat_history_store};
pub use directory::{DirectoryService, create_directory_service};
pub use help_request::{HelpRequestService, create_help_request_service};
pub use intent::{IntentMatcher, IntentRule};
pub use language::detect_language;
pub use maternal::{MaternalService, create_maternal_service};
pub use mood::{MoodService, create_mood_service};
pub use response::{ChatReply, MoodReply, ResponseGenerator, VoiceReply};
pub use seed::{DirectorySeed, seed_directory};
pub use sentiment::SentimentClassifier;
