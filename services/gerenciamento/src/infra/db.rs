use anyhow::Context as _;
use sea_orm::{
    ActiveModelTrait,
    ActiveValue::{NotSet, Set},
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, SqlErr,
};

use escola_gerenciamento_schema::{alunos, professores, turmas};

use crate::domain::repository::{ClassGroupRepository, StudentRepository, TeacherRepository};
use crate::domain::types::{
    ClassGroup, NewClassGroup, NewStudent, NewTeacher, Student, Teacher,
};
use crate::error::RegistryError;

/// Map a failed insert/update. Unique-key violations become `DuplicateEmail` so a
/// create that races past the email pre-check still fails cleanly.
fn write_error(err: DbErr, not_found: RegistryError, context: &'static str) -> RegistryError {
    if let Some(SqlErr::UniqueConstraintViolation(_)) = err.sql_err() {
        return RegistryError::DuplicateEmail;
    }
    if matches!(err, DbErr::RecordNotUpdated | DbErr::RecordNotFound(_)) {
        return not_found;
    }
    RegistryError::Internal(anyhow::Error::new(err).context(context))
}

// ── Student repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbStudentRepository {
    pub db: DatabaseConnection,
}

impl StudentRepository for DbStudentRepository {
    async fn list(&self) -> Result<Vec<Student>, RegistryError> {
        let models = alunos::Entity::find()
            .order_by_asc(alunos::Column::Id)
            .all(&self.db)
            .await
            .context("list students")?;
        Ok(models.into_iter().map(student_from_model).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Student>, RegistryError> {
        let model = alunos::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find student by id")?;
        Ok(model.map(student_from_model))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Student>, RegistryError> {
        let model = alunos::Entity::find()
            .filter(alunos::Column::Email.eq(email))
            .one(&self.db)
            .await
            .context("find student by email")?;
        Ok(model.map(student_from_model))
    }

    async fn create(&self, student: &NewStudent) -> Result<Student, RegistryError> {
        let model = alunos::ActiveModel {
            id: NotSet,
            nome: Set(student.name.clone()),
            email: Set(student.email.clone()),
        }
        .insert(&self.db)
        .await
        .map_err(|e| write_error(e, RegistryError::StudentNotFound, "create student"))?;
        Ok(student_from_model(model))
    }

    async fn save(&self, student: &Student) -> Result<Student, RegistryError> {
        let model = alunos::ActiveModel {
            id: Set(student.id),
            nome: Set(student.name.clone()),
            email: Set(student.email.clone()),
        }
        .update(&self.db)
        .await
        .map_err(|e| write_error(e, RegistryError::StudentNotFound, "update student"))?;
        Ok(student_from_model(model))
    }

    async fn delete(&self, id: i32) -> Result<bool, RegistryError> {
        let result = alunos::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete student")?;
        Ok(result.rows_affected > 0)
    }
}

fn student_from_model(model: alunos::Model) -> Student {
    Student {
        id: model.id,
        name: model.nome,
        email: model.email,
    }
}

// ── Teacher repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbTeacherRepository {
    pub db: DatabaseConnection,
}

impl TeacherRepository for DbTeacherRepository {
    async fn list(&self) -> Result<Vec<Teacher>, RegistryError> {
        let models = professores::Entity::find()
            .order_by_asc(professores::Column::Id)
            .all(&self.db)
            .await
            .context("list teachers")?;
        Ok(models.into_iter().map(teacher_from_model).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Teacher>, RegistryError> {
        let model = professores::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find teacher by id")?;
        Ok(model.map(teacher_from_model))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Teacher>, RegistryError> {
        let model = professores::Entity::find()
            .filter(professores::Column::Email.eq(email))
            .one(&self.db)
            .await
            .context("find teacher by email")?;
        Ok(model.map(teacher_from_model))
    }

    async fn create(&self, teacher: &NewTeacher) -> Result<Teacher, RegistryError> {
        let model = professores::ActiveModel {
            id: NotSet,
            nome: Set(teacher.name.clone()),
            idade: Set(teacher.age),
            email: Set(teacher.email.clone()),
            materia: Set(teacher.subject.clone()),
            observacoes: Set(teacher.notes.clone()),
        }
        .insert(&self.db)
        .await
        .map_err(|e| write_error(e, RegistryError::TeacherNotFound, "create teacher"))?;
        Ok(teacher_from_model(model))
    }

    async fn save(&self, teacher: &Teacher) -> Result<Teacher, RegistryError> {
        let model = professores::ActiveModel {
            id: Set(teacher.id),
            nome: Set(teacher.name.clone()),
            idade: Set(teacher.age),
            email: Set(teacher.email.clone()),
            materia: Set(teacher.subject.clone()),
            observacoes: Set(teacher.notes.clone()),
        }
        .update(&self.db)
        .await
        .map_err(|e| write_error(e, RegistryError::TeacherNotFound, "update teacher"))?;
        Ok(teacher_from_model(model))
    }

    async fn delete(&self, id: i32) -> Result<bool, RegistryError> {
        let result = professores::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete teacher")?;
        Ok(result.rows_affected > 0)
    }
}

fn teacher_from_model(model: professores::Model) -> Teacher {
    Teacher {
        id: model.id,
        name: model.nome,
        age: model.idade,
        email: model.email,
        subject: model.materia,
        notes: model.observacoes,
    }
}

// ── Class group repository ───────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbClassGroupRepository {
    pub db: DatabaseConnection,
}

impl ClassGroupRepository for DbClassGroupRepository {
    async fn list(&self) -> Result<Vec<ClassGroup>, RegistryError> {
        let models = turmas::Entity::find()
            .order_by_asc(turmas::Column::Id)
            .all(&self.db)
            .await
            .context("list class groups")?;
        Ok(models.into_iter().map(class_group_from_model).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<ClassGroup>, RegistryError> {
        let model = turmas::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find class group by id")?;
        Ok(model.map(class_group_from_model))
    }

    async fn create(&self, class_group: &NewClassGroup) -> Result<ClassGroup, RegistryError> {
        let model = turmas::ActiveModel {
            id: NotSet,
            nome: Set(class_group.name.clone()),
            descricao: Set(class_group.description.clone()),
        }
        .insert(&self.db)
        .await
        .map_err(|e| write_error(e, RegistryError::ClassGroupNotFound, "create class group"))?;
        Ok(class_group_from_model(model))
    }

    async fn save(&self, class_group: &ClassGroup) -> Result<ClassGroup, RegistryError> {
        let model = turmas::ActiveModel {
            id: Set(class_group.id),
            nome: Set(class_group.name.clone()),
            descricao: Set(class_group.description.clone()),
        }
        .update(&self.db)
        .await
        .map_err(|e| write_error(e, RegistryError::ClassGroupNotFound, "update class group"))?;
        Ok(class_group_from_model(model))
    }

    async fn delete(&self, id: i32) -> Result<bool, RegistryError> {
        let result = turmas::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete class group")?;
        Ok(result.rows_affected > 0)
    }
}

fn class_group_from_model(model: turmas::Model) -> ClassGroup {
    ClassGroup {
        id: model.id,
        name: model.nome,
        description: model.descricao,
    }
}
