use escola_domain::field::{non_negative, nullable_text, optional_text, require, require_text};

use crate::domain::repository::TeacherRepository;
use crate::domain::types::{NewTeacher, Teacher, TeacherPatch};
use crate::error::RegistryError;

// ── CreateTeacher ────────────────────────────────────────────────────────────

pub struct CreateTeacherInput {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub notes: Option<String>,
}

pub struct CreateTeacherUseCase<R: TeacherRepository> {
    pub repo: R,
}

impl<R: TeacherRepository> CreateTeacherUseCase<R> {
    pub async fn execute(&self, input: CreateTeacherInput) -> Result<Teacher, RegistryError> {
        let teacher = NewTeacher {
            name: require_text("nome", input.name)?,
            age: non_negative("idade", require("idade", input.age)?)?,
            email: require_text("email", input.email)?,
            subject: require_text("materia", input.subject)?,
            notes: nullable_text(input.notes),
        };
        if self.repo.find_by_email(&teacher.email).await?.is_some() {
            return Err(RegistryError::DuplicateEmail);
        }
        let created = self.repo.create(&teacher).await?;
        tracing::info!(teacher_id = created.id, "teacher created");
        Ok(created)
    }
}

// ── GetTeacher ───────────────────────────────────────────────────────────────

pub struct GetTeacherUseCase<R: TeacherRepository> {
    pub repo: R,
}

impl<R: TeacherRepository> GetTeacherUseCase<R> {
    pub async fn execute(&self, id: i32) -> Result<Teacher, RegistryError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(RegistryError::TeacherNotFound)
    }
}

// ── ListTeachers ─────────────────────────────────────────────────────────────

pub struct ListTeachersUseCase<R: TeacherRepository> {
    pub repo: R,
}

impl<R: TeacherRepository> ListTeachersUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<Teacher>, RegistryError> {
        self.repo.list().await
    }
}

// ── UpdateTeacher ────────────────────────────────────────────────────────────

pub struct UpdateTeacherInput {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub email: Option<String>,
    pub subject: Option<String>,
    /// `Some(None)` or a blank string clears the notes.
    pub notes: Option<Option<String>>,
}

pub struct UpdateTeacherUseCase<R: TeacherRepository> {
    pub repo: R,
}

impl<R: TeacherRepository> UpdateTeacherUseCase<R> {
    pub async fn execute(
        &self,
        id: i32,
        input: UpdateTeacherInput,
    ) -> Result<Teacher, RegistryError> {
        let mut teacher = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(RegistryError::TeacherNotFound)?;
        let patch = TeacherPatch {
            name: optional_text("nome", input.name)?,
            age: input.age.map(|age| non_negative("idade", age)).transpose()?,
            email: optional_text("email", input.email)?,
            subject: optional_text("materia", input.subject)?,
            notes: input.notes.map(nullable_text),
        };
        if let Some(email) = patch.email.as_deref() {
            let taken = self
                .repo
                .find_by_email(email)
                .await?
                .is_some_and(|other| other.id != id);
            if taken {
                return Err(RegistryError::DuplicateEmail);
            }
        }
        patch.apply(&mut teacher);
        self.repo.save(&teacher).await
    }
}

// ── DeleteTeacher ────────────────────────────────────────────────────────────

pub struct DeleteTeacherUseCase<R: TeacherRepository> {
    pub repo: R,
}

impl<R: TeacherRepository> DeleteTeacherUseCase<R> {
    pub async fn execute(&self, id: i32) -> Result<(), RegistryError> {
        if !self.repo.delete(id).await? {
            return Err(RegistryError::TeacherNotFound);
        }
        tracing::info!(teacher_id = id, "teacher deleted");
        Ok(())
    }
}
