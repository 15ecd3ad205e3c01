use std::{collections::BTreeMap, sync::Arc};
use tokio::sync::RwLock;

use crate::errors::ServiceError;

/// Rows keyed by a store-assigned, monotonically increasing id.
///
/// Ids start at 1 and are never handed out twice, so key order in the
/// `BTreeMap` is creation order and survives removals untouched.
#[derive(Debug)]
pub struct Table<V> {
    next_id: i64,
    rows: BTreeMap<i64, V>,
}

impl<V> Default for Table<V> {
    fn default() -> Self {
        Self { next_id: 1, rows: BTreeMap::new() }
    }
}

impl<V> Table<V> {
    pub fn get(&self, id: i64) -> Option<&V> { self.rows.get(&id) }

    pub fn get_mut(&mut self, id: i64) -> Option<&mut V> { self.rows.get_mut(&id) }

    /// Rows in creation order.
    pub fn values(&self) -> impl Iterator<Item = &V> { self.rows.values() }

    /// Build a row for the next id and insert it. The id is only consumed
    /// when `build` succeeds.
    pub fn insert_next<F>(&mut self, build: F) -> Result<&V, ServiceError>
    where
        F: FnOnce(i64) -> Result<V, ServiceError>,
    {
        let id = self.next_id;
        let following = id
            .checked_add(1)
            .ok_or_else(|| ServiceError::Validation("id space exhausted".into()))?;
        let row = build(id)?;
        self.next_id = following;
        Ok(self.rows.entry(id).or_insert(row))
    }

    pub fn remove(&mut self, id: i64) -> Option<V> { self.rows.remove(&id) }
}

/// Shared handle to a [`Table`] behind a single reader/writer lock.
///
/// Every closure passed to [`MemoryTable::write`] runs under one write
/// acquisition, so check-then-mutate sequences are atomic to other callers.
pub struct MemoryTable<V> {
    inner: Arc<RwLock<Table<V>>>,
}

impl<V> Clone for MemoryTable<V> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

impl<V> Default for MemoryTable<V> {
    fn default() -> Self {
        Self { inner: Arc::new(RwLock::new(Table::default())) }
    }
}

impl<V: Clone> MemoryTable<V> {
    pub fn new() -> Self { Self::default() }

    /// Snapshot of all rows in creation order.
    pub async fn list(&self) -> Vec<V> {
        let table = self.inner.read().await;
        table.values().cloned().collect()
    }

    pub async fn get(&self, id: i64) -> Option<V> {
        let table = self.inner.read().await;
        table.get(id).cloned()
    }

    /// Apply a mutation under the write lock. The closure must validate before
    /// it mutates; an `Err` is expected to leave the table untouched.
    pub async fn write<F, T>(&self, f: F) -> Result<T, ServiceError>
    where
        F: FnOnce(&mut Table<V>) -> Result<T, ServiceError>,
    {
        let mut table = self.inner.write().await;
        f(&mut table)
    }
}
