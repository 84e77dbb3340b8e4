use escola_domain::field::{nullable_text, require, require_text};
use escola_domain::kind::RegistryKind;
use escola_domain::reference::{ReferenceValidator, check_references};

use crate::domain::repository::ActivityStore;
use crate::domain::types::{Activity, NewActivity};
use crate::error::ActivityServiceError;

// ── CreateActivity ───────────────────────────────────────────────────────────

pub struct CreateActivityInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub teacher_id: Option<i32>,
    pub class_group_id: Option<i32>,
}

/// Validate fields, confirm the teacher and then the class group exist in the
/// registry, and only then store the activity.
pub struct CreateActivityUseCase<S: ActivityStore, V: ReferenceValidator> {
    pub store: S,
    pub registry: V,
}

impl<S: ActivityStore, V: ReferenceValidator> CreateActivityUseCase<S, V> {
    pub async fn execute(
        &self,
        input: CreateActivityInput,
    ) -> Result<Activity, ActivityServiceError> {
        let activity = NewActivity {
            title: require_text("titulo", input.title)?,
            description: nullable_text(input.description),
            teacher_id: require("professor_id", input.teacher_id)?,
            class_group_id: require("turma_id", input.class_group_id)?,
        };
        check_references(
            &self.registry,
            &[
                (RegistryKind::Teacher, activity.teacher_id),
                (RegistryKind::ClassGroup, activity.class_group_id),
            ],
        )
        .await?;
        let created = self.store.insert(activity).await?;
        tracing::info!(
            activity_id = created.id,
            teacher_id = created.teacher_id,
            class_group_id = created.class_group_id,
            "activity created"
        );
        Ok(created)
    }
}

// ── ListActivities ───────────────────────────────────────────────────────────

pub struct ListActivitiesUseCase<S: ActivityStore> {
    pub store: S,
}

impl<S: ActivityStore> ListActivitiesUseCase<S> {
    pub async fn execute(&self) -> Result<Vec<Activity>, ActivityServiceError> {
        self.store.list().await
    }
}
