use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};

use crate::error::Result;

/// A stored entity keyed by a store-assigned sequence number
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Table (collection) name
    const TABLE: &'static str;

    fn id(&self) -> u64;

    fn set_id(&mut self, id: u64);
}

/// Repository trait
///
/// Ids start at 1 and increase with every `create`; multi-record reads return
/// records in ascending id order.
#[async_trait]
pub trait Repository<T: Record>: Send + Sync {
    /// Store a new entity, assigning its id
    async fn create(&self, entity: T) -> Result<T>;

    /// Get an entity by id
    async fn get_by_id(&self, id: u64) -> Result<Option<T>>;

    /// Replace an existing entity; `None` if the id is unknown
    async fn update(&self, entity: &T) -> Result<Option<T>>;

    /// The `limit` most recent entities, oldest first
    async fn latest(&self, limit: usize) -> Result<Vec<T>>;

    /// Every entity
    async fn find_all(&self) -> Result<Vec<T>>;

    /// Number of stored entities
    async fn count(&self) -> Result<u64>;
}
