// src/modules/profile/application/ports/outgoing/personal_info_repository.rs

use async_trait::async_trait;

use crate::modules::profile::application::domain::entities::PersonalInfoDraft;

#[derive(Debug, Clone, PartialEq)]
pub struct PersonalInfoRecord {
    pub name: String,
    pub title: String,
    pub email: String,
    pub profile_image: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum PersonalInfoRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait PersonalInfoRepository: Send + Sync {
    /// Returns the singleton row, inserting it from `defaults` when absent.
    /// The flag is `true` when a row was inserted.
    async fn get_or_create(
        &self,
        defaults: PersonalInfoDraft,
    ) -> Result<(PersonalInfoRecord, bool), PersonalInfoRepositoryError>;

    /// Points the singleton at a stored profile image (relative media path).
    async fn set_profile_image(
        &self,
        relative_path: &str,
        defaults: PersonalInfoDraft,
    ) -> Result<PersonalInfoRecord, PersonalInfoRepositoryError>;
}
