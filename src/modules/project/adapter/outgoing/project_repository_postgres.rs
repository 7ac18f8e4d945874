use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;

use crate::modules::project::adapter::outgoing::sea_orm_entity::project_skills;
use crate::modules::project::adapter::outgoing::sea_orm_entity::projects::{
    ActiveModel, Column, Entity,
};
use crate::modules::project::application::domain::entities::ProjectDraft;
use crate::modules::project::application::ports::outgoing::project_repository::{
    ProjectRepository, ProjectRepositoryError,
};

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct ProjectRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProjectRepository for ProjectRepositoryPostgres {
    async fn get_or_create(
        &self,
        draft: ProjectDraft,
    ) -> Result<(i32, bool), ProjectRepositoryError> {
        let existing = Entity::find()
            .filter(Column::Title.eq(draft.title.as_str()))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        if let Some(found) = existing {
            return Ok((found.id, false));
        }

        let now = Utc::now().fixed_offset();
        let model = ActiveModel {
            title: Set(draft.title),
            description: Set(draft.description),
            long_description: Set(draft.long_description),
            image: Set(None),
            github_url: Set(draft.github_url),
            live_url: Set(draft.live_url),
            featured: Set(draft.featured),
            display_order: Set(draft.display_order),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let inserted = model.insert(&*self.db).await.map_err(map_db_err)?;
        Ok((inserted.id, true))
    }

    async fn add_tech(&self, project_id: i32, skill_id: i32) -> Result<(), ProjectRepositoryError> {
        let link = project_skills::ActiveModel {
            project_id: Set(project_id),
            skill_id: Set(skill_id),
        };

        project_skills::Entity::insert(link)
            .on_conflict(
                OnConflict::columns([
                    project_skills::Column::ProjectId,
                    project_skills::Column::SkillId,
                ])
                .do_nothing()
                .to_owned(),
            )
            .exec_without_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(())
    }
}

fn map_db_err(e: DbErr) -> ProjectRepositoryError {
    ProjectRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
