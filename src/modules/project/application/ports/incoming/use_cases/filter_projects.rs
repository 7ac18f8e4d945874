use async_trait::async_trait;

use crate::modules::project::application::ports::outgoing::project_query::ProjectView;

#[derive(Debug, Clone, thiserror::Error)]
pub enum FilterProjectsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait FilterProjectsUseCase: Send + Sync {
    /// Every project whose tech stack has a skill name containing `tech`
    /// (case-insensitive); all projects when `tech` is absent or empty.
    async fn execute(&self, tech: Option<String>) -> Result<Vec<ProjectView>, FilterProjectsError>;
}
