use async_trait::async_trait;
use serde::Serialize;

use crate::modules::profile::application::ports::outgoing::PersonalInfoView;
use crate::modules::project::application::ports::outgoing::project_query::ProjectView;

pub const RELATED_PROJECTS_LIMIT: u64 = 3;

#[derive(Debug, Clone, Serialize)]
pub struct ProjectDetailContext {
    pub personal_info: Option<PersonalInfoView>,
    pub project: ProjectView,
    pub related_projects: Vec<ProjectView>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetProjectDetailError {
    #[error("Project not found")]
    NotFound,

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetProjectDetailUseCase: Send + Sync {
    async fn execute(&self, project_id: i32) -> Result<ProjectDetailContext, GetProjectDetailError>;
}
