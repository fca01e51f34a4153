//! Shared storage pattern for the in-memory repositories.
//!
//! Each store owns one [`MemoryTable`]: a keyed collection of records plus
//! the identity counter, guarded together by a single reader/writer lock.
//! Mutations take the write half for their whole duration (validate,
//! assign identity, write), reads take the read half and return clones.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::domain::DomainResult;

/// First identity handed out by an empty table.
const FIRST_ID: i64 = 1;

/// Records keyed by identity, plus the next identity to hand out.
#[derive(Debug)]
pub(crate) struct Table<R> {
    rows: HashMap<i64, R>,
    next_id: i64,
}

impl<R: Clone> Table<R> {
    fn new() -> Self {
        Self {
            rows: HashMap::new(),
            next_id: FIRST_ID,
        }
    }

    pub fn get(&self, id: i64) -> Option<&R> {
        self.rows.get(&id)
    }

    /// Iterate over `(id, record)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (i64, &R)> {
        self.rows.iter().map(|(id, row)| (*id, row))
    }

    /// Owned copies of every record matching `predicate`.
    pub fn select(&self, predicate: impl Fn(&R) -> bool) -> Vec<R> {
        self.rows
            .values()
            .filter(|row| predicate(row))
            .cloned()
            .collect()
    }

    /// Owned copies of every record.
    pub fn snapshot(&self) -> Vec<R> {
        self.rows.values().cloned().collect()
    }

    /// Build a record under the next identity and store it.
    ///
    /// The counter only advances once `build` succeeds, so a rejected
    /// record leaves both the rows and the counter untouched.
    pub fn insert_with(&mut self, build: impl FnOnce(i64) -> DomainResult<R>) -> DomainResult<R> {
        let id = self.next_id;
        let row = build(id)?;
        self.rows.insert(id, row.clone());
        self.next_id += 1;
        Ok(row)
    }

    /// Overwrite the record stored under `id`.
    pub fn replace(&mut self, id: i64, row: R) {
        self.rows.insert(id, row);
    }

    pub fn remove(&mut self, id: i64) -> Option<R> {
        self.rows.remove(&id)
    }

    /// Store a record under an identity chosen by the caller, moving the
    /// counter past it.
    pub fn seed(&mut self, id: i64, row: R) {
        self.rows.insert(id, row);
        self.next_id = self.next_id.max(id + 1);
    }
}

/// A [`Table`] behind one coarse `RwLock`.
///
/// Email uniqueness and the counter span the whole table, so one lock
/// guards both.
#[derive(Debug)]
pub(crate) struct MemoryTable<R> {
    inner: RwLock<Table<R>>,
}

impl<R: Clone> MemoryTable<R> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Table::new()),
        }
    }

    /// Shared access for queries.
    ///
    /// A poisoned lock is recovered. Writers only mutate after every check
    /// has passed, so the table is never left half-written.
    pub fn read(&self) -> RwLockReadGuard<'_, Table<R>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Exclusive access for mutations.
    pub fn write(&self) -> RwLockWriteGuard<'_, Table<R>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<R: Clone> Default for MemoryTable<R> {
    fn default() -> Self {
        Self::new()
    }
}
