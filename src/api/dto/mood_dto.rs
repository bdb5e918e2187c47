use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{MoodCheckIn, MoodKind};

/// `POST /mood-checkins` form body
#[derive(Debug, Deserialize)]
pub struct MoodCheckInForm {
    #[serde(default)]
    pub mood: String,
    pub notes: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MoodCheckInCreated {
    pub status: &'static str,
    pub id: u64,
}

#[derive(Debug, Serialize)]
pub struct MoodCheckInResponse {
    pub id: u64,
    pub mood: MoodKind,
    pub label: &'static str,
    pub notes: String,
    pub created_at: DateTime<Utc>,
}

impl From<MoodCheckIn> for MoodCheckInResponse {
    fn from(c: MoodCheckIn) -> Self {
        Self {
            id: c.id,
            mood: c.mood,
            label: c.mood.label_bn(),
            notes: c.notes,
            created_at: c.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MoodCheckInListResponse {
    pub checkins: Vec<MoodCheckInResponse>,
}
