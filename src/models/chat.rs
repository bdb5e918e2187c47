use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::storage::repository::Record;

/// One user message and the assistant's reply
///
/// Immutable once stored. `id` is assigned by the store and only grows, so
/// sorting by id gives conversation order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatExchange {
    pub id: u64,
    pub user_text: String,
    pub ai_text: String,
    pub created_at: DateTime<Utc>,
}

impl ChatExchange {
    pub fn new(user_text: &str, ai_text: &str) -> Self {
        Self {
            id: 0,
            user_text: user_text.to_string(),
            ai_text: ai_text.to_string(),
            created_at: Utc::now(),
        }
    }
}

impl Record for ChatExchange {
    const TABLE: &'static str = "chat_exchange";

    fn id(&self) -> u64 {
        self.id
    }

    fn set_id(&mut self, id: u64) {
        self.id = id;
    }
}
