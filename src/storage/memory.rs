//! In-process repository backend

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::error::Result;
use crate::storage::repository::{Record, Repository};

struct Table<T> {
    last_id: u64,
    rows: BTreeMap<u64, T>,
}

/// Repository kept in memory; ids are assigned under the write lock
pub struct MemoryRepository<T> {
    table: Arc<RwLock<Table<T>>>,
}

impl<T> Clone for MemoryRepository<T> {
    fn clone(&self) -> Self {
        Self {
            table: self.table.clone(),
        }
    }
}

impl<T> Default for MemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> MemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            table: Arc::new(RwLock::new(Table {
                last_id: 0,
                rows: BTreeMap::new(),
            })),
        }
    }
}

#[async_trait]
impl<T: Record> Repository<T> for MemoryRepository<T> {
    async fn create(&self, mut entity: T) -> Result<T> {
        let mut table = self.table.write();
        table.last_id += 1;
        let id = table.last_id;
        entity.set_id(id);
        table.rows.insert(id, entity.clone());
        Ok(entity)
    }

    async fn get_by_id(&self, id: u64) -> Result<Option<T>> {
        Ok(self.table.read().rows.get(&id).cloned())
    }

    async fn update(&self, entity: &T) -> Result<Option<T>> {
        let mut table = self.table.write();
        match table.rows.get_mut(&entity.id()) {
            Some(row) => {
                *row = entity.clone();
                Ok(Some(entity.clone()))
            }
            None => Ok(None),
        }
    }

    async fn latest(&self, limit: usize) -> Result<Vec<T>> {
        let table = self.table.read();
        let mut rows: Vec<T> = table.rows.values().rev().take(limit).cloned().collect();
        rows.reverse();
        Ok(rows)
    }

    async fn find_all(&self) -> Result<Vec<T>> {
        Ok(self.table.read().rows.values().cloned().collect())
    }

    async fn count(&self) -> Result<u64> {
        Ok(self.table.read().rows.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ChatExchange;

    #[tokio::test]
    async fn test_ids_increase_from_one() {
        let repo = MemoryRepository::<ChatExchange>::new();
        let first = repo.create(ChatExchange::new("a", "b")).await.unwrap();
        let second = repo.create(ChatExchange::new("c", "d")).await.unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_latest_returns_tail_in_ascending_order() {
        let repo = MemoryRepository::<ChatExchange>::new();
        for i in 0..5 {
            repo.create(ChatExchange::new(&format!("q{}", i), "a"))
                .await
                .unwrap();
        }

        let latest = repo.latest(3).await.unwrap();
        let ids: Vec<u64> = latest.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![3, 4, 5]);

        assert_eq!(repo.latest(50).await.unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_update_unknown_id() {
        let repo = MemoryRepository::<ChatExchange>::new();
        let mut exchange = ChatExchange::new("q", "a");
        exchange.id = 42;
        assert!(repo.update(&exchange).await.unwrap().is_none());

        let mut stored = repo.create(ChatExchange::new("q", "a")).await.unwrap();
        stored.ai_text = "changed".into();
        let updated = repo.update(&stored).await.unwrap().unwrap();
        assert_eq!(updated.ai_text, "changed");
        assert_eq!(
            repo.get_by_id(stored.id).await.unwrap().unwrap().ai_text,
            "changed"
        );
    }
}
