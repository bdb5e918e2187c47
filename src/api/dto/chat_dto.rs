use serde::{Deserialize, Serialize};

use crate::models::ChatExchange;

/// Upper bound for `limit` on the history endpoint
pub const MAX_HISTORY_LIMIT: usize = 100;

/// `POST /chat/message` form body
#[derive(Debug, Deserialize)]
pub struct ChatMessageForm {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct ChatHistoryParams {
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct ChatHistoryResponse {
    pub exchanges: Vec<ChatExchange>,
    pub total: u64,
}
