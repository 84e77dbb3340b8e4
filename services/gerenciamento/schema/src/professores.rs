use sea_orm::entity::prelude::*;

/// Teacher record.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "professores")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub nome: String,
    pub idade: i32,
    #[sea_orm(unique)]
    pub email: String,
    pub materia: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub observacoes: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
