//! In-memory implementation of EntityStore for testing and development

use crate::core::model::CatalogEntity;
use crate::storage::EntityStore;
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::{Arc, RwLock};

/// In-memory entity store.
///
/// Uses RwLock for thread-safe access. Rows live in a BTreeMap so listing
/// comes back in primary-key order, matching what callers expect from a
/// relational backend.
pub struct InMemoryStore<T> {
    rows: Arc<RwLock<BTreeMap<i32, T>>>,
    next_id: Arc<AtomicI32>,
}

impl<T> Clone for InMemoryStore<T> {
    fn clone(&self) -> Self {
        Self {
            rows: Arc::clone(&self.rows),
            next_id: Arc::clone(&self.next_id),
        }
    }
}

impl<T> InMemoryStore<T> {
    /// Create a new in-memory store
    pub fn new() -> Self {
        Self {
            rows: Arc::new(RwLock::new(BTreeMap::new())),
            next_id: Arc::new(AtomicI32::new(1)),
        }
    }

    /// Keep the id sequence ahead of an explicitly supplied id
    fn bump_sequence(&self, used: i32) {
        self.next_id.fetch_max(used + 1, Ordering::SeqCst);
    }
}

impl<T> Default for InMemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: CatalogEntity> EntityStore<T> for InMemoryStore<T> {
    async fn create(&self, mut entity: T) -> Result<T> {
        let mut rows = self
            .rows
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        let id = match entity.id() {
            Some(id) => {
                self.bump_sequence(id);
                id
            }
            None => {
                let id = self.next_id.fetch_add(1, Ordering::SeqCst);
                entity.set_id(id);
                id
            }
        };

        rows.insert(id, entity.clone());

        Ok(entity)
    }

    async fn get(&self, id: i32) -> Result<Option<T>> {
        let rows = self
            .rows
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(rows.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<T>> {
        let rows = self
            .rows
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(rows.values().cloned().collect())
    }

    async fn update(&self, id: i32, mut entity: T) -> Result<T> {
        let mut rows = self
            .rows
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        entity.set_id(id);
        rows.insert(id, entity.clone());

        Ok(entity)
    }

    async fn delete(&self, id: i32) -> Result<()> {
        let mut rows = self
            .rows
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        rows.remove(&id);

        Ok(())
    }
}
