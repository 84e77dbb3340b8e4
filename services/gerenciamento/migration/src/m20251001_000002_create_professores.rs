use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Professores::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Professores::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Professores::Nome).string_len(120).not_null())
                    .col(ColumnDef::new(Professores::Idade).integer().not_null())
                    .col(
                        ColumnDef::new(Professores::Email)
                            .string_len(120)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Professores::Materia)
                            .string_len(120)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Professores::Observacoes).text().null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Professores::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Professores {
    Table,
    Id,
    Nome,
    Idade,
    Email,
    Materia,
    Observacoes,
}
