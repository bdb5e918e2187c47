//! SurrealDB repository backend
//!
//! Records are stored as `<table>:<seq>` with the id copied into a `seq`
//! field; the SurrealDB record id itself is never read back.

use async_trait::async_trait;
use serde::Deserialize;
use std::marker::PhantomData;
use surrealdb::{
    Surreal,
    engine::any::{Any, connect},
    opt::auth::Root,
};

use crate::config::config::DatabaseConfig;
use crate::error::{AppError, Result};
use crate::storage::repository::{Record, Repository};

/// SurrealDB connection
#[derive(Clone)]
pub struct SurrealPool {
    db: Surreal<Any>,
}

impl SurrealPool {
    /// Connect, authenticate and select namespace/database
    pub async fn new(config: &DatabaseConfig) -> std::result::Result<Self, surrealdb::Error> {
        let db: Surreal<Any> = connect(config.url.as_str()).await?;

        db.signin(Root {
            username: &config.username,
            password: &config.password,
        })
        .await?;

        db.use_ns(config.namespace.as_str())
            .use_db(config.database.as_str())
            .await?;

        Ok(Self { db })
    }

    pub fn inner(&self) -> Surreal<Any> {
        self.db.clone()
    }
}

#[derive(Deserialize)]
struct SeqRow {
    value: u64,
}

#[derive(Deserialize)]
struct UpdatedRow {
    #[allow(dead_code)]
    seq: u64,
}

#[derive(Deserialize)]
struct CountRow {
    count: u64,
}

/// Generic SurrealDB repository
pub struct SurrealRepository<T> {
    db: Surreal<Any>,
    _marker: PhantomData<T>,
}

impl<T> Clone for SurrealRepository<T> {
    fn clone(&self) -> Self {
        Self {
            db: self.db.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T: Record> SurrealRepository<T> {
    pub fn new(pool: &SurrealPool) -> Self {
        Self {
            db: pool.inner(),
            _marker: PhantomData,
        }
    }

    /// Atomically bump the per-table sequence
    async fn next_seq(&self) -> Result<u64> {
        let rows: Vec<SeqRow> = self
            .db
            .query("UPSERT type::thing('sequence', $tb) SET value += 1 RETURN value")
            .bind(("tb", T::TABLE))
            .await?
            .take(0)?;

        rows.first()
            .map(|r| r.value)
            .ok_or_else(|| AppError::Database(format!("Failed to allocate id for {}", T::TABLE)))
    }

    fn to_row(entity: &T) -> Result<serde_json::Value> {
        let mut value = serde_json::to_value(entity)?;
        if let Some(obj) = value.as_object_mut() {
            if let Some(id) = obj.remove("id") {
                obj.insert("seq".to_string(), id);
            }
        }
        Ok(value)
    }

    fn from_row(mut value: serde_json::Value) -> Result<T> {
        if let Some(obj) = value.as_object_mut() {
            if let Some(seq) = obj.remove("seq") {
                obj.insert("id".to_string(), seq);
            }
        }
        Ok(serde_json::from_value(value)?)
    }

    fn from_rows(rows: Vec<serde_json::Value>) -> Result<Vec<T>> {
        rows.into_iter().map(Self::from_row).collect()
    }
}

#[async_trait]
impl<T: Record> Repository<T> for SurrealRepository<T> {
    async fn create(&self, mut entity: T) -> Result<T> {
        let seq = self.next_seq().await?;
        entity.set_id(seq);
        let row = Self::to_row(&entity)?;

        self.db
            .query("CREATE type::thing($tb, $seq) CONTENT $row RETURN NONE")
            .bind(("tb", T::TABLE))
            .bind(("seq", seq))
            .bind(("row", row))
            .await?
            .check()?;

        Ok(entity)
    }

    async fn get_by_id(&self, id: u64) -> Result<Option<T>> {
        let rows: Vec<serde_json::Value> = self
            .db
            .query("SELECT * OMIT id FROM type::thing($tb, $seq)")
            .bind(("tb", T::TABLE))
            .bind(("seq", id))
            .await?
            .take(0)?;
        rows.into_iter().next().map(Self::from_row).transpose()
    }

    async fn update(&self, entity: &T) -> Result<Option<T>> {
        let row = Self::to_row(entity)?;
        let rows: Vec<UpdatedRow> = self
            .db
            .query("UPDATE type::thing($tb, $seq) CONTENT $row RETURN seq")
            .bind(("tb", T::TABLE))
            .bind(("seq", entity.id()))
            .bind(("row", row))
            .await?
            .take(0)?;

        Ok(if rows.is_empty() {
            None
        } else {
            Some(entity.clone())
        })
    }

    async fn latest(&self, limit: usize) -> Result<Vec<T>> {
        let rows: Vec<serde_json::Value> = self
            .db
            .query("SELECT * OMIT id FROM type::table($tb) ORDER BY seq DESC LIMIT $limit")
            .bind(("tb", T::TABLE))
            .bind(("limit", limit as u64))
            .await?
            .take(0)?;
        let mut records = Self::from_rows(rows)?;
        records.reverse();
        Ok(records)
    }

    async fn find_all(&self) -> Result<Vec<T>> {
        let rows: Vec<serde_json::Value> = self
            .db
            .query("SELECT * OMIT id FROM type::table($tb) ORDER BY seq ASC")
            .bind(("tb", T::TABLE))
            .await?
            .take(0)?;
        Self::from_rows(rows)
    }

    async fn count(&self) -> Result<u64> {
        let rows: Vec<CountRow> = self
            .db
            .query("SELECT count() FROM type::table($tb) GROUP ALL")
            .bind(("tb", T::TABLE))
            .await?
            .take(0)?;
        Ok(rows.first().map(|r| r.count).unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ChatExchange;

    #[test]
    fn test_row_mapping_moves_id_to_seq() {
        let mut exchange = ChatExchange::new("hello", "hi");
        exchange.id = 9;

        let row = SurrealRepository::<ChatExchange>::to_row(&exchange).unwrap();
        assert!(row.get("id").is_none());
        assert_eq!(row["seq"], 9);

        let back = SurrealRepository::<ChatExchange>::from_row(row).unwrap();
        assert_eq!(back, exchange);
    }
}
