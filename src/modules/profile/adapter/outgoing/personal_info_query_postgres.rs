use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait};
use std::sync::Arc;

use crate::modules::profile::adapter::outgoing::sea_orm_entity::personal_info::{
    self, Entity, PERSONAL_INFO_ID,
};
use crate::modules::profile::application::ports::outgoing::personal_info_query::{
    PersonalInfoQuery, PersonalInfoQueryError, PersonalInfoView,
};
use crate::shared::media::MediaUrls;

#[derive(Clone)]
pub struct PersonalInfoQueryPostgres {
    db: Arc<DatabaseConnection>,
    media: MediaUrls,
}

impl PersonalInfoQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>, media: MediaUrls) -> Self {
        Self { db, media }
    }
}

#[async_trait]
impl PersonalInfoQuery for PersonalInfoQueryPostgres {
    async fn get(&self) -> Result<Option<PersonalInfoView>, PersonalInfoQueryError> {
        let model = Entity::find_by_id(PERSONAL_INFO_ID)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.map(|m| model_to_view(m, &self.media)))
    }
}

fn model_to_view(model: personal_info::Model, media: &MediaUrls) -> PersonalInfoView {
    PersonalInfoView {
        profile_image_url: media.optional_url(model.profile_image.as_deref()),
        resume_url: media.optional_url(model.resume.as_deref()),
        name: model.name,
        title: model.title,
        bio: model.bio,
        email: model.email,
        phone: model.phone,
        location: model.location,
        github_url: model.github_url,
        linkedin_url: model.linkedin_url,
        twitter_url: model.twitter_url,
        website_url: model.website_url,
        updated_at: model.updated_at.into(),
    }
}

fn map_db_err(e: DbErr) -> PersonalInfoQueryError {
    PersonalInfoQueryError::DatabaseError(e.to_string())
}
