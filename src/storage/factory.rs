//! Storage factory
//!
//! Builds every repository for the configured backend.

use std::sync::Arc;

use crate::config::config::{DatabaseConfig, DatabaseType};
use crate::error::{AppError, Result};
use crate::models::{
    AnonymousHelpRequest, ChatExchange, ChildRecord, HealthFacility, HealthTip, MoodCheckIn,
    PregnancyRecord, VaccinationRecord,
};
use crate::storage::memory::MemoryRepository;
use crate::storage::repository::{Record, Repository};

#[cfg(feature = "surrealdb")]
use crate::storage::surrealdb::{SurrealPool, SurrealRepository};

/// Shared handle to a repository
pub type RepositoryRef<T> = Arc<dyn Repository<T>>;

/// All repositories used by the services
#[derive(Clone)]
pub struct Repositories {
    pub chat_exchanges: RepositoryRef<ChatExchange>,
    pub facilities: RepositoryRef<HealthFacility>,
    pub health_tips: RepositoryRef<HealthTip>,
    pub mood_checkins: RepositoryRef<MoodCheckIn>,
    pub help_requests: RepositoryRef<AnonymousHelpRequest>,
    pub pregnancies: RepositoryRef<PregnancyRecord>,
    pub children: RepositoryRef<ChildRecord>,
    pub vaccinations: RepositoryRef<VaccinationRecord>,
}

impl Repositories {
    /// Fresh in-process repositories
    pub fn in_memory() -> Self {
        fn repo<T: Record>() -> RepositoryRef<T> {
            Arc::new(MemoryRepository::<T>::new())
        }

        Self {
            chat_exchanges: repo(),
            facilities: repo(),
            health_tips: repo(),
            mood_checkins: repo(),
            help_requests: repo(),
            pregnancies: repo(),
            children: repo(),
            vaccinations: repo(),
        }
    }

    #[cfg(feature = "surrealdb")]
    pub fn surrealdb(pool: &SurrealPool) -> Self {
        fn repo<T: Record>(pool: &SurrealPool) -> RepositoryRef<T> {
            Arc::new(SurrealRepository::<T>::new(pool))
        }

        Self {
            chat_exchanges: repo(pool),
            facilities: repo(pool),
            health_tips: repo(pool),
            mood_checkins: repo(pool),
            help_requests: repo(pool),
            pregnancies: repo(pool),
            children: repo(pool),
            vaccinations: repo(pool),
        }
    }
}

/// Storage factory
pub struct StorageFactory;

impl StorageFactory {
    /// Build repositories for the configured backend
    pub async fn create(config: &DatabaseConfig) -> Result<Repositories> {
        match config.db_type {
            DatabaseType::Memory => {
                tracing::warn!("Using in-memory storage; data is lost on restart");
                Ok(Repositories::in_memory())
            }
            #[cfg(feature = "surrealdb")]
            DatabaseType::SurrealDB => {
                let pool = SurrealPool::new(config)
                    .await
                    .map_err(|e| AppError::Database(e.to_string()))?;
                tracing::info!(url = %config.url, "Connected to SurrealDB");
                Ok(Repositories::surrealdb(&pool))
            }
            #[cfg(not(feature = "surrealdb"))]
            DatabaseType::SurrealDB => Err(AppError::Config(
                "SurrealDB feature is not enabled. Enable the 'surrealdb' feature or use the memory backend."
                    .into(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_backend() {
        let config = DatabaseConfig::default();
        let repos = StorageFactory::create(&config).await.unwrap();
        assert_eq!(repos.chat_exchanges.count().await.unwrap(), 0);
    }
}
