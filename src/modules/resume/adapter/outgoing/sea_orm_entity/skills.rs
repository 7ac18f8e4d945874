use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "skills")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(string_len = 100)]
    pub name: String,

    #[sea_orm(column_type = "Double")]
    pub proficiency: f64,

    /// One of `frontend | backend | database | tools | other`.
    #[sea_orm(string_len = 50)]
    pub category: String,

    pub icon: String,
    pub display_order: i32,
    pub is_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        has_many = "crate::modules::project::adapter::outgoing::sea_orm_entity::project_skills::Entity"
    )]
    ProjectSkills,
}

impl Related<crate::modules::project::adapter::outgoing::sea_orm_entity::project_skills::Entity>
    for Entity
{
    fn to() -> RelationDef {
        Relation::ProjectSkills.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
