use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, Set};
use std::sync::Arc;

use crate::modules::contact::adapter::outgoing::sea_orm_entity::contact_messages::{
    self, ActiveModel,
};
use crate::modules::contact::application::domain::entities::ContactSubmission;
use crate::modules::contact::application::ports::outgoing::{
    ContactMessageRecord, ContactMessageRepository, ContactMessageRepositoryError,
};

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct ContactMessageRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ContactMessageRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContactMessageRepository for ContactMessageRepositoryPostgres {
    async fn create(
        &self,
        submission: &ContactSubmission,
    ) -> Result<ContactMessageRecord, ContactMessageRepositoryError> {
        let model = ActiveModel {
            name: Set(submission.name().to_string()),
            email: Set(submission.email().to_string()),
            subject: Set(submission.subject().to_string()),
            message: Set(submission.message().to_string()),
            created_at: Set(Utc::now().fixed_offset()),
            is_read: Set(false),
            ..Default::default()
        };

        let inserted = model.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(model_to_record(inserted))
    }
}

fn model_to_record(model: contact_messages::Model) -> ContactMessageRecord {
    ContactMessageRecord {
        id: model.id,
        name: model.name,
        email: model.email,
        subject: model.subject,
        message: model.message,
        created_at: model.created_at.into(),
        is_read: model.is_read,
    }
}

fn map_db_err(e: DbErr) -> ContactMessageRepositoryError {
    ContactMessageRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::contact::application::domain::entities::ContactFormInput;
    use crate::tests::support::fixtures::contact_message_model;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn submission() -> ContactSubmission {
        ContactSubmission::parse(ContactFormInput {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Hello".to_string(),
            message: "Hi!".to_string(),
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_create_returns_unread_record() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![contact_message_model(3, "Hello")]])
            .into_connection();

        let repo = ContactMessageRepositoryPostgres::new(Arc::new(db));
        let record = repo.create(&submission()).await.unwrap();

        assert_eq!(record.id, 3);
        assert_eq!(record.subject, "Hello");
        assert!(!record.is_read);
    }

    #[tokio::test]
    async fn test_create_maps_db_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom("disk full".to_string())])
            .into_connection();

        let repo = ContactMessageRepositoryPostgres::new(Arc::new(db));

        assert!(matches!(
            repo.create(&submission()).await,
            Err(ContactMessageRepositoryError::DatabaseError(_))
        ));
    }
}
