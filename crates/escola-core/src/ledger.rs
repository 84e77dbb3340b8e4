//! Process-lifetime record storage with sequential ids.
//!
//! A `Ledger<T>` owns its records and its id counter behind a single mutex, so id
//! assignment and append happen as one step. Ids start at 1 and are never derived
//! from the collection length. Nothing survives a restart.

use std::sync::{Arc, Mutex, MutexGuard};

use anyhow::anyhow;

#[derive(Debug)]
struct Inner<T> {
    next_id: u64,
    records: Vec<T>,
}

/// Cloneable handle to a shared, mutex-guarded record list.
#[derive(Debug)]
pub struct Ledger<T> {
    inner: Arc<Mutex<Inner<T>>>,
}

impl<T> Clone for Ledger<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Default for Ledger<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Ledger<T> {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                next_id: 1,
                records: Vec::new(),
            })),
        }
    }

    fn lock(&self) -> anyhow::Result<MutexGuard<'_, Inner<T>>> {
        self.inner.lock().map_err(|_| anyhow!("ledger lock poisoned"))
    }

    /// Allocate the next id, build the record with it and append it.
    pub fn append_with<F>(&self, build: F) -> anyhow::Result<T>
    where
        F: FnOnce(u64) -> T,
        T: Clone,
    {
        let mut inner = self.lock()?;
        let id = inner.next_id;
        let record = build(id);
        inner.next_id += 1;
        inner.records.push(record.clone());
        Ok(record)
    }

    /// All records in insertion order.
    pub fn snapshot(&self) -> anyhow::Result<Vec<T>>
    where
        T: Clone,
    {
        Ok(self.lock()?.records.clone())
    }

    pub fn len(&self) -> anyhow::Result<usize> {
        Ok(self.lock()?.records.len())
    }

    pub fn is_empty(&self) -> anyhow::Result<bool> {
        Ok(self.len()? == 0)
    }
}
