use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "certifications")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(string_len = 200)]
    pub title: String,

    #[sea_orm(string_len = 200)]
    pub issuer: String,

    pub issue_date: Date,

    #[sea_orm(nullable)]
    pub expiry_date: Option<Date>,

    pub credential_id: String,
    pub credential_url: String,

    #[sea_orm(column_type = "Text")]
    pub description: String,

    pub is_active: bool,
    pub display_order: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
