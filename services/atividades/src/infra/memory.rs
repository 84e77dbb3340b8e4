use escola_core::ledger::Ledger;

use crate::domain::repository::ActivityStore;
use crate::domain::types::{Activity, NewActivity};
use crate::error::ActivityServiceError;

/// Process-lifetime activity store. Clones share the same records.
#[derive(Clone, Default)]
pub struct InMemoryActivityStore {
    ledger: Ledger<Activity>,
}

impl InMemoryActivityStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ActivityStore for InMemoryActivityStore {
    async fn insert(&self, activity: NewActivity) -> Result<Activity, ActivityServiceError> {
        Ok(self.ledger.append_with(|id| activity.with_id(id))?)
    }

    async fn list(&self) -> Result<Vec<Activity>, ActivityServiceError> {
        Ok(self.ledger.snapshot()?)
    }
}
