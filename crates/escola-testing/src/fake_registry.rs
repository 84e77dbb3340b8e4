use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use escola_domain::kind::RegistryKind;
use escola_domain::reference::{LookupError, ReferenceValidator};

/// In-process registry answering existence checks from a fixed set.
///
/// Clones share state, so a test can keep a handle and inspect `calls()` after
/// handing the fake to a use case.
#[derive(Clone, Default)]
pub struct FakeRegistry {
    known: Arc<Mutex<HashSet<(RegistryKind, i32)>>>,
    outage: Arc<Mutex<Option<LookupError>>>,
    calls: Arc<Mutex<Vec<(RegistryKind, i32)>>>,
}

impl FakeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(entries: &[(RegistryKind, i32)]) -> Self {
        let fake = Self::new();
        for &(kind, id) in entries {
            fake.insert(kind, id);
        }
        fake
    }

    pub fn insert(&self, kind: RegistryKind, id: i32) {
        self.known.lock().unwrap().insert((kind, id));
    }

    /// Make every subsequent lookup fail with `error`.
    pub fn go_down(&self, error: LookupError) {
        *self.outage.lock().unwrap() = Some(error);
    }

    /// Lookups received so far, in order.
    pub fn calls(&self) -> Vec<(RegistryKind, i32)> {
        self.calls.lock().unwrap().clone()
    }
}

impl ReferenceValidator for FakeRegistry {
    async fn exists(&self, kind: RegistryKind, id: i32) -> Result<bool, LookupError> {
        self.calls.lock().unwrap().push((kind, id));
        if let Some(err) = self.outage.lock().unwrap().clone() {
            return Err(err);
        }
        Ok(self.known.lock().unwrap().contains(&(kind, id)))
    }
}
