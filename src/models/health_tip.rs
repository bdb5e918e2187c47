use serde::{Deserialize, Serialize};

use crate::models::language::LanguageTag;
use crate::storage::repository::Record;

/// Short health advice shown to users
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthTip {
    pub id: u64,
    pub text: String,
    pub language: LanguageTag,
}

impl HealthTip {
    pub fn new(text: &str, language: LanguageTag) -> Self {
        Self {
            id: 0,
            text: text.to_string(),
            language,
        }
    }
}

impl Record for HealthTip {
    const TABLE: &'static str = "health_tip";

    fn id(&self) -> u64 {
        self.id
    }

    fn set_id(&mut self, id: u64) {
        self.id = id;
    }
}
