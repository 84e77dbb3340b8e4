use sea_orm::DatabaseConnection;

use crate::infra::db::{DbClassGroupRepository, DbStudentRepository, DbTeacherRepository};

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

impl AppState {
    pub fn student_repo(&self) -> DbStudentRepository {
        DbStudentRepository {
            db: self.db.clone(),
        }
    }

    pub fn teacher_repo(&self) -> DbTeacherRepository {
        DbTeacherRepository {
            db: self.db.clone(),
        }
    }

    pub fn class_group_repo(&self) -> DbClassGroupRepository {
        DbClassGroupRepository {
            db: self.db.clone(),
        }
    }
}
