use serde::Deserialize;

use crate::models::LanguageTag;

/// `POST /voice/command`
#[derive(Debug, Deserialize)]
pub struct VoiceCommandRequest {
    #[serde(default)]
    pub command: String,
}

/// `POST /voice/mood-response`
#[derive(Debug, Deserialize)]
pub struct MoodTextRequest {
    #[serde(default)]
    pub mood_text: String,
    /// Detected from `mood_text` when absent
    #[serde(default)]
    pub language: Option<LanguageTag>,
}
