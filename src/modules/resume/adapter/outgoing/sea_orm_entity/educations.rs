use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "educations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(string_len = 200)]
    pub institution: String,

    #[sea_orm(string_len = 200)]
    pub degree: String,

    pub field_of_study: String,
    pub start_date: Date,

    #[sea_orm(nullable)]
    pub end_date: Option<Date>,

    #[sea_orm(column_type = "Text")]
    pub description: String,

    #[sea_orm(column_type = "Double", nullable)]
    pub gpa: Option<f64>,

    pub is_current: bool,
    pub display_order: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
