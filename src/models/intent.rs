use serde::{Deserialize, Serialize};

/// Purpose of a voice or chat command
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Intent {
    ShowHealthTip,
    FindHospital,
    MoodCheck,
    Help,
    Emergency,
    Unknown,
}

impl Intent {
    /// Response `type` reported to clients
    pub fn response_type(&self) -> &'static str {
        match self {
            Intent::ShowHealthTip => "health_tip",
            Intent::FindHospital => "hospital_info",
            Intent::MoodCheck => "mood_check",
            Intent::Help => "help",
            Intent::Emergency => "emergency",
            Intent::Unknown => "ai_response",
        }
    }

    /// Client navigation hint
    pub fn action(&self) -> Option<&'static str> {
        match self {
            Intent::ShowHealthTip => Some("/health-tips/"),
            Intent::FindHospital => Some("/health-map/"),
            Intent::MoodCheck => Some("/mood-tracker/"),
            Intent::Emergency => Some("/help-request/"),
            Intent::Help | Intent::Unknown => None,
        }
    }
}
