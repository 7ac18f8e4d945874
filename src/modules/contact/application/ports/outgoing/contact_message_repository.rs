use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::modules::contact::application::domain::entities::ContactSubmission;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactMessageRecord {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub is_read: bool,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ContactMessageRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ContactMessageRepository: Send + Sync {
    /// Stores one unread message.
    async fn create(
        &self,
        submission: &ContactSubmission,
    ) -> Result<ContactMessageRecord, ContactMessageRepositoryError>;
}
