#![allow(async_fn_in_trait)]

use crate::domain::types::{Activity, NewActivity};
use crate::error::ActivityServiceError;

/// Storage for accepted activities. The store assigns ids.
pub trait ActivityStore: Send + Sync {
    async fn insert(&self, activity: NewActivity) -> Result<Activity, ActivityServiceError>;
    /// All activities in insertion order.
    async fn list(&self) -> Result<Vec<Activity>, ActivityServiceError>;
}
