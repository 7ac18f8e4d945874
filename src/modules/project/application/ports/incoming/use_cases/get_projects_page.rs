use async_trait::async_trait;
use serde::Serialize;

use crate::modules::profile::application::ports::outgoing::PersonalInfoView;
use crate::modules::project::application::ports::outgoing::project_query::ProjectView;
use crate::modules::resume::application::ports::outgoing::SkillView;
use crate::shared::pagination::PageMeta;

/// Number of projects shown per list page.
pub const PROJECTS_PAGE_SIZE: u64 = 6;

#[derive(Debug, Clone, Serialize)]
pub struct ProjectsPageContext {
    pub personal_info: Option<PersonalInfoView>,
    pub projects: Vec<ProjectView>,
    pub pagination: PageMeta,
    pub tech_skills: Vec<SkillView>,
    /// The raw `tech` filter, empty when absent.
    pub selected_tech: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetProjectsPageError {
    #[error("Invalid page: {0}")]
    PageNotFound(String),

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetProjectsPageUseCase: Send + Sync {
    async fn execute(
        &self,
        tech: Option<String>,
        page: Option<String>,
    ) -> Result<ProjectsPageContext, GetProjectsPageError>;
}
