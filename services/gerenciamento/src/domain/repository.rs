#![allow(async_fn_in_trait)]

use crate::domain::types::{
    ClassGroup, NewClassGroup, NewStudent, NewTeacher, Student, Teacher,
};
use crate::error::RegistryError;

/// Repository for students. Ids are assigned by the store and never reused.
pub trait StudentRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Student>, RegistryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Student>, RegistryError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<Student>, RegistryError>;
    /// Insert a new row. Fails with `DuplicateEmail` on a unique-key violation.
    async fn create(&self, student: &NewStudent) -> Result<Student, RegistryError>;
    /// Overwrite every column of an existing row.
    async fn save(&self, student: &Student) -> Result<Student, RegistryError>;
    /// Delete a student. Returns `true` if a row was deleted.
    async fn delete(&self, id: i32) -> Result<bool, RegistryError>;
}

/// Repository for teachers.
pub trait TeacherRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Teacher>, RegistryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Teacher>, RegistryError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<Teacher>, RegistryError>;
    async fn create(&self, teacher: &NewTeacher) -> Result<Teacher, RegistryError>;
    async fn save(&self, teacher: &Teacher) -> Result<Teacher, RegistryError>;
    async fn delete(&self, id: i32) -> Result<bool, RegistryError>;
}

/// Repository for class groups. No uniqueness constraint beyond the id.
pub trait ClassGroupRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<ClassGroup>, RegistryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<ClassGroup>, RegistryError>;
    async fn create(&self, class_group: &NewClassGroup) -> Result<ClassGroup, RegistryError>;
    async fn save(&self, class_group: &ClassGroup) -> Result<ClassGroup, RegistryError>;
    async fn delete(&self, id: i32) -> Result<bool, RegistryError>;
}
