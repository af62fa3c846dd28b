//! Storage traits and backends.
//!
//! Handlers and the catalog layer only see [`EntityStore`] trait objects;
//! the concrete backend is chosen at startup. The crate ships an
//! in-memory backend suitable for development and tests.

pub mod in_memory;

pub use in_memory::InMemoryStore;

use crate::core::model::CatalogEntity;
use anyhow::Result;
use async_trait::async_trait;

/// CRUD contract every storage backend implements for an entity type.
///
/// The store is agnostic to entity semantics: it assigns integer primary
/// keys on create, lists in primary-key order and overwrites all mapped
/// fields verbatim on update.
#[async_trait]
pub trait EntityStore<T: CatalogEntity>: Send + Sync {
    /// Persist a new entity, assigning an id when none is supplied
    async fn create(&self, entity: T) -> Result<T>;

    /// Fetch an entity by primary key
    async fn get(&self, id: i32) -> Result<Option<T>>;

    /// List all entities in primary-key order
    async fn list(&self) -> Result<Vec<T>>;

    /// Overwrite the row at `id` with `entity` verbatim
    async fn update(&self, id: i32, entity: T) -> Result<T>;

    /// Remove an entity; a no-op when the id does not exist
    async fn delete(&self, id: i32) -> Result<()>;
}
