//! Storage layer
//!
//! Repository seam over the persistence backend: in-process memory or
//! SurrealDB.

pub mod factory;
pub mod memory;
pub mod repository;

#[cfg(feature = "surrealdb")]
pub mod surrealdb;
