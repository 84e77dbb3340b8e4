use escola_domain::field::{nullable_text, optional_text, require_text};

use crate::domain::repository::ClassGroupRepository;
use crate::domain::types::{ClassGroup, ClassGroupPatch, NewClassGroup};
use crate::error::RegistryError;

// ── CreateClassGroup ─────────────────────────────────────────────────────────

pub struct CreateClassGroupInput {
    pub name: Option<String>,
    pub description: Option<String>,
}

pub struct CreateClassGroupUseCase<R: ClassGroupRepository> {
    pub repo: R,
}

impl<R: ClassGroupRepository> CreateClassGroupUseCase<R> {
    pub async fn execute(&self, input: CreateClassGroupInput) -> Result<ClassGroup, RegistryError> {
        let class_group = NewClassGroup {
            name: require_text("nome", input.name)?,
            description: nullable_text(input.description),
        };
        let created = self.repo.create(&class_group).await?;
        tracing::info!(class_group_id = created.id, "class group created");
        Ok(created)
    }
}

// ── GetClassGroup ────────────────────────────────────────────────────────────

pub struct GetClassGroupUseCase<R: ClassGroupRepository> {
    pub repo: R,
}

impl<R: ClassGroupRepository> GetClassGroupUseCase<R> {
    pub async fn execute(&self, id: i32) -> Result<ClassGroup, RegistryError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(RegistryError::ClassGroupNotFound)
    }
}

// ── ListClassGroups ──────────────────────────────────────────────────────────

pub struct ListClassGroupsUseCase<R: ClassGroupRepository> {
    pub repo: R,
}

impl<R: ClassGroupRepository> ListClassGroupsUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<ClassGroup>, RegistryError> {
        self.repo.list().await
    }
}

// ── UpdateClassGroup ─────────────────────────────────────────────────────────

pub struct UpdateClassGroupInput {
    pub name: Option<String>,
    /// `Some(None)` or a blank string clears the description.
    pub description: Option<Option<String>>,
}

pub struct UpdateClassGroupUseCase<R: ClassGroupRepository> {
    pub repo: R,
}

impl<R: ClassGroupRepository> UpdateClassGroupUseCase<R> {
    pub async fn execute(
        &self,
        id: i32,
        input: UpdateClassGroupInput,
    ) -> Result<ClassGroup, RegistryError> {
        let mut class_group = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(RegistryError::ClassGroupNotFound)?;
        ClassGroupPatch {
            name: optional_text("nome", input.name)?,
            description: input.description.map(nullable_text),
        }
        .apply(&mut class_group);
        self.repo.save(&class_group).await
    }
}

// ── DeleteClassGroup ─────────────────────────────────────────────────────────

pub struct DeleteClassGroupUseCase<R: ClassGroupRepository> {
    pub repo: R,
}

impl<R: ClassGroupRepository> DeleteClassGroupUseCase<R> {
    pub async fn execute(&self, id: i32) -> Result<(), RegistryError> {
        if !self.repo.delete(id).await? {
            return Err(RegistryError::ClassGroupNotFound);
        }
        tracing::info!(class_group_id = id, "class group deleted");
        Ok(())
    }
}
