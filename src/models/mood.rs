use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::storage::repository::Record;

/// Emotional tone of free-text mood input
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    #[default]
    Neutral,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }

    /// Exact label match; anything else is `None`
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "positive" => Some(Sentiment::Positive),
            "negative" => Some(Sentiment::Negative),
            "neutral" => Some(Sentiment::Neutral),
            _ => None,
        }
    }
}

/// Mood picked on the mood tracker
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MoodKind {
    Happy,
    Neutral,
    Sad,
    Anxious,
    Angry,
}

impl MoodKind {
    pub fn label_bn(&self) -> &'static str {
        match self {
            MoodKind::Happy => "😊 খুব ভালো",
            MoodKind::Neutral => "😐 ঠিক আছে",
            MoodKind::Sad => "😔 কিছুটা খারাপ",
            MoodKind::Anxious => "😰 চিন্তিত",
            MoodKind::Angry => "😠 রাগান্বিত",
        }
    }
}

impl FromStr for MoodKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "happy" => Ok(MoodKind::Happy),
            "neutral" => Ok(MoodKind::Neutral),
            "sad" => Ok(MoodKind::Sad),
            "anxious" => Ok(MoodKind::Anxious),
            "angry" => Ok(MoodKind::Angry),
            other => Err(format!("Unknown mood: {}", other)),
        }
    }
}

/// Stored mood tracker entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MoodCheckIn {
    pub id: u64,
    pub mood: MoodKind,
    #[serde(default)]
    pub notes: String,
    pub created_at: DateTime<Utc>,
}

impl MoodCheckIn {
    pub fn new(mood: MoodKind, notes: &str) -> Self {
        Self {
            id: 0,
            mood,
            notes: notes.to_string(),
            created_at: Utc::now(),
        }
    }
}

impl Record for MoodCheckIn {
    const TABLE: &'static str = "mood_checkin";

    fn id(&self) -> u64 {
        self.id
    }

    fn set_id(&mut self, id: u64) {
        self.id = id;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentiment_label_is_exact() {
        assert_eq!(Sentiment::from_label("positive"), Some(Sentiment::Positive));
        assert_eq!(Sentiment::from_label("Positive"), None);
        assert_eq!(Sentiment::from_label("very positive"), None);
    }

    #[test]
    fn test_mood_kind_parse() {
        assert_eq!("anxious".parse::<MoodKind>().unwrap(), MoodKind::Anxious);
        assert!("ecstatic".parse::<MoodKind>().is_err());
        assert!(MoodKind::Sad.label_bn().contains("খারাপ"));
    }
}
