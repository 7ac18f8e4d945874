use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// The only id `personal_info` accepts (enforced by a CHECK constraint).
pub const PERSONAL_INFO_ID: i32 = 1;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "personal_info")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,

    #[sea_orm(string_len = 100)]
    pub name: String,

    #[sea_orm(string_len = 200)]
    pub title: String,

    #[sea_orm(column_type = "Text")]
    pub bio: String,

    #[sea_orm(nullable)]
    pub profile_image: Option<String>,

    #[sea_orm(nullable)]
    pub resume: Option<String>,

    pub email: String,
    pub phone: String,
    pub location: String,
    pub github_url: String,
    pub linkedin_url: String,
    pub twitter_url: String,
    pub website_url: String,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        #[cfg(feature = "no_db_triggers")]
        {
            use chrono::Utc;
            use sea_orm::ActiveValue::Set;

            if !_insert {
                self.updated_at = Set(Utc::now().into());
            }
        }

        Ok(self)
    }
}
