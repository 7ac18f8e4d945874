// src/modules/profile/application/ports/outgoing/personal_info_query.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Site owner details embedded in every page context.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonalInfoView {
    pub name: String,
    pub title: String,
    pub bio: String,
    pub profile_image_url: Option<String>,
    pub resume_url: Option<String>,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub github_url: String,
    pub linkedin_url: String,
    pub twitter_url: String,
    pub website_url: String,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum PersonalInfoQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait PersonalInfoQuery: Send + Sync {
    /// `None` until the singleton row has been created.
    async fn get(&self) -> Result<Option<PersonalInfoView>, PersonalInfoQueryError>;
}
