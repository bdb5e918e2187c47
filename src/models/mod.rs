//! Data models
//!
//! Chat history, reference data (facilities, tips) and the records behind
//! the mood, help request and maternal tracking forms.

pub mod chat;
pub mod facility;
pub mod health_tip;
pub mod help_request;
pub mod intent;
pub mod language;
pub mod maternal;
pub mod mood;

pub use chat::ChatExchange;
pub use facility::{FacilityType, HealthFacility};
pub use health_tip::HealthTip;
pub use help_request::{AnonymousHelpRequest, HelpType};
pub use intent::Intent;
pub use language::LanguageTag;
pub use maternal::{ChildRecord, PregnancyRecord, VaccinationRecord, vaccination_schedule};
pub use mood::{MoodCheckIn, MoodKind, Sentiment};
