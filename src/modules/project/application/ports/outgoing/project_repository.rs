use async_trait::async_trait;

use crate::modules::project::application::domain::entities::ProjectDraft;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProjectRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Looked up by title. Returns the id and whether a row was inserted.
    async fn get_or_create(&self, draft: ProjectDraft) -> Result<(i32, bool), ProjectRepositoryError>;

    /// Links a skill to a project; linking twice is a no-op.
    async fn add_tech(&self, project_id: i32, skill_id: i32) -> Result<(), ProjectRepositoryError>;
}
