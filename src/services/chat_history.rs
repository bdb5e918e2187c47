//! Chat history
//!
//! Append-only log of user/assistant exchanges.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::ChatExchange;
use crate::storage::factory::RepositoryRef;

/// Chat history store trait
#[async_trait]
pub trait ChatHistoryStore: Send + Sync {
    /// Append one exchange; the store assigns its id
    async fn append(&self, user_text: &str, ai_text: &str) -> Result<ChatExchange>;

    /// The `limit` most recent exchanges, oldest first
    async fn recent(&self, limit: usize) -> Result<Vec<ChatExchange>>;

    /// Number of stored exchanges
    async fn count(&self) -> Result<u64>;
}

/// Chat history store backed by a repository
pub struct ChatHistoryStoreImpl {
    repository: RepositoryRef<ChatExchange>,
}

impl ChatHistoryStoreImpl {
    pub fn new(repository: RepositoryRef<ChatExchange>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl ChatHistoryStore for ChatHistoryStoreImpl {
    async fn append(&self, user_text: &str, ai_text: &str) -> Result<ChatExchange> {
        let exchange = self
            .repository
            .create(ChatExchange::new(user_text, ai_text))
            .await?;
        tracing::debug!(chat_id = exchange.id, "Chat exchange stored");
        Ok(exchange)
    }

    async fn recent(&self, limit: usize) -> Result<Vec<ChatExchange>> {
        self.repository.latest(limit).await
    }

    async fn count(&self) -> Result<u64> {
        self.repository.count().await
    }
}

/// Create the chat history store
pub fn create_chat_history_store(repository: RepositoryRef<ChatExchange>) -> Box<dyn ChatHistoryStore> {
    Box::new(ChatHistoryStoreImpl::new(repository))
}
