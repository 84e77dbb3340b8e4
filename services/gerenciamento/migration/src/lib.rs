use sea_orm_migration::prelude::*;

mod m20251001_000001_create_alunos;
mod m20251001_000002_create_professores;
mod m20251001_000003_create_turmas;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251001_000001_create_alunos::Migration),
            Box::new(m20251001_000002_create_professores::Migration),
            Box::new(m20251001_000003_create_turmas::Migration),
        ]
    }
}
