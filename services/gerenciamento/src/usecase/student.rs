use escola_domain::field::{optional_text, require_text};

use crate::domain::repository::StudentRepository;
use crate::domain::types::{NewStudent, Student, StudentPatch};
use crate::error::RegistryError;

// ── CreateStudent ────────────────────────────────────────────────────────────

pub struct CreateStudentInput {
    pub name: Option<String>,
    pub email: Option<String>,
}

pub struct CreateStudentUseCase<R: StudentRepository> {
    pub repo: R,
}

impl<R: StudentRepository> CreateStudentUseCase<R> {
    pub async fn execute(&self, input: CreateStudentInput) -> Result<Student, RegistryError> {
        let student = NewStudent {
            name: require_text("nome", input.name)?,
            email: require_text("email", input.email)?,
        };
        if self.repo.find_by_email(&student.email).await?.is_some() {
            return Err(RegistryError::DuplicateEmail);
        }
        let created = self.repo.create(&student).await?;
        tracing::info!(student_id = created.id, "student created");
        Ok(created)
    }
}

// ── GetStudent ───────────────────────────────────────────────────────────────

pub struct GetStudentUseCase<R: StudentRepository> {
    pub repo: R,
}

impl<R: StudentRepository> GetStudentUseCase<R> {
    pub async fn execute(&self, id: i32) -> Result<Student, RegistryError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(RegistryError::StudentNotFound)
    }
}

// ── ListStudents ─────────────────────────────────────────────────────────────

pub struct ListStudentsUseCase<R: StudentRepository> {
    pub repo: R,
}

impl<R: StudentRepository> ListStudentsUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<Student>, RegistryError> {
        self.repo.list().await
    }
}

// ── UpdateStudent ────────────────────────────────────────────────────────────

pub struct UpdateStudentInput {
    pub name: Option<String>,
    pub email: Option<String>,
}

pub struct UpdateStudentUseCase<R: StudentRepository> {
    pub repo: R,
}

impl<R: StudentRepository> UpdateStudentUseCase<R> {
    pub async fn execute(
        &self,
        id: i32,
        input: UpdateStudentInput,
    ) -> Result<Student, RegistryError> {
        let mut student = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(RegistryError::StudentNotFound)?;
        let patch = StudentPatch {
            name: optional_text("nome", input.name)?,
            email: optional_text("email", input.email)?,
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
        patch.apply(&mut student);
        self.repo.save(&student).await
    }
}

// ── DeleteStudent ────────────────────────────────────────────────────────────

pub struct DeleteStudentUseCase<R: StudentRepository> {
    pub repo: R,
}

impl<R: StudentRepository> DeleteStudentUseCase<R> {
    pub async fn execute(&self, id: i32) -> Result<(), RegistryError> {
        if !self.repo.delete(id).await? {
            return Err(RegistryError::StudentNotFound);
        }
        tracing::info!(student_id = id, "student deleted");
        Ok(())
    }
}
