use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set};
use std::sync::Arc;

use crate::modules::profile::adapter::outgoing::sea_orm_entity::personal_info::{
    self, ActiveModel, Column, Entity, PERSONAL_INFO_ID,
};
use crate::modules::profile::application::domain::entities::PersonalInfoDraft;
use crate::modules::profile::application::ports::outgoing::personal_info_repository::{
    PersonalInfoRecord, PersonalInfoRepository, PersonalInfoRepositoryError,
};

#[derive(Clone)]
pub struct PersonalInfoRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PersonalInfoRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn find(&self) -> Result<Option<personal_info::Model>, PersonalInfoRepositoryError> {
        Entity::find_by_id(PERSONAL_INFO_ID)
            .one(&*self.db)
            .await
            .map_err(map_db_err)
    }
}

#[async_trait]
impl PersonalInfoRepository for PersonalInfoRepositoryPostgres {
    async fn get_or_create(
        &self,
        defaults: PersonalInfoDraft,
    ) -> Result<(PersonalInfoRecord, bool), PersonalInfoRepositoryError> {
        if let Some(existing) = self.find().await? {
            return Ok((model_to_record(existing), false));
        }

        // A concurrent writer may win the race for id 1; the re-read below
        // picks up whichever row ended up stored.
        let inserted = Entity::insert(draft_to_active_model(defaults))
            .on_conflict(OnConflict::column(Column::Id).do_nothing().to_owned())
            .exec_without_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        let stored = self.find().await?.ok_or_else(|| {
            PersonalInfoRepositoryError::DatabaseError(
                "personal_info row missing after insert".to_string(),
            )
        })?;

        Ok((model_to_record(stored), inserted > 0))
    }

    async fn set_profile_image(
        &self,
        relative_path: &str,
        defaults: PersonalInfoDraft,
    ) -> Result<PersonalInfoRecord, PersonalInfoRepositoryError> {
        self.get_or_create(defaults).await?;

        let model = ActiveModel {
            id: Set(PERSONAL_INFO_ID),
            profile_image: Set(Some(relative_path.to_string())),
            ..Default::default()
        };

        let updated = model.update(&*self.db).await.map_err(map_db_err)?;

        Ok(model_to_record(updated))
    }
}

fn draft_to_active_model(draft: PersonalInfoDraft) -> ActiveModel {
    ActiveModel {
        id: Set(PERSONAL_INFO_ID),
        name: Set(draft.name),
        title: Set(draft.title),
        bio: Set(draft.bio),
        profile_image: Set(None),
        resume: Set(None),
        email: Set(draft.email),
        phone: Set(draft.phone),
        location: Set(draft.location),
        github_url: Set(draft.github_url),
        linkedin_url: Set(draft.linkedin_url),
        twitter_url: Set(draft.twitter_url),
        website_url: Set(draft.website_url),
        updated_at: Set(Utc::now().fixed_offset()),
    }
}

fn model_to_record(model: personal_info::Model) -> PersonalInfoRecord {
    PersonalInfoRecord {
        name: model.name,
        title: model.title,
        email: model.email,
        profile_image: model.profile_image,
    }
}

fn map_db_err(e: DbErr) -> PersonalInfoRepositoryError {
    PersonalInfoRepositoryError::DatabaseError(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::fixtures::personal_info_model;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn draft() -> PersonalInfoDraft {
        PersonalInfoDraft::minimal("Test Owner", "owner@example.com")
    }

    #[tokio::test]
    async fn get_or_create_returns_existing_row_without_insert() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![personal_info_model()]])
            .into_connection();

        let repo = PersonalInfoRepositoryPostgres::new(Arc::new(db));
        let (record, created) = repo.get_or_create(draft()).await.unwrap();

        assert!(!created);
        assert_eq!(record.name, "Test Owner");
    }

    #[tokio::test]
    async fn get_or_create_inserts_singleton_when_missing() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<personal_info::Model>::new()])
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 1,
                rows_affected: 1,
            }])
            .append_query_results(vec![vec![personal_info_model()]])
            .into_connection();

        let repo = PersonalInfoRepositoryPostgres::new(Arc::new(db));
        let (record, created) = repo.get_or_create(draft()).await.unwrap();

        assert!(created);
        assert_eq!(record.email, "owner@example.com");
    }

    #[tokio::test]
    async fn set_profile_image_updates_singleton() {
        let mut updated = personal_info_model();
        updated.profile_image = Some("profile/abc_me.jpg".to_string());

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![personal_info_model()]])
            .append_query_results(vec![vec![updated]])
            .into_connection();

        let repo = PersonalInfoRepositoryPostgres::new(Arc::new(db));
        let record = repo
            .set_profile_image("profile/abc_me.jpg", draft())
            .await
            .unwrap();

        assert_eq!(record.profile_image.as_deref(), Some("profile/abc_me.jpg"));
    }

    #[tokio::test]
    async fn get_or_create_maps_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom("db down".to_string())])
            .into_connection();

        let repo = PersonalInfoRepositoryPostgres::new(Arc::new(db));
        let result = repo.get_or_create(draft()).await;

        assert!(matches!(
            result,
            Err(PersonalInfoRepositoryError::DatabaseError(_))
        ));
    }
}
