use async_trait::async_trait;

use crate::modules::profile::application::ports::outgoing::{
    PersonalInfoQuery, PersonalInfoQueryError,
};
use crate::modules::project::application::domain::entities::ProjectListFilter;
use crate::modules::project::application::ports::incoming::use_cases::{
    GetProjectsPageError, GetProjectsPageUseCase, ProjectsPageContext, PROJECTS_PAGE_SIZE,
};
use crate::modules::project::application::ports::outgoing::{ProjectQuery, ProjectQueryError};
use crate::modules::resume::application::ports::outgoing::{ResumeQuery, ResumeQueryError};
use crate::shared::pagination::resolve_page;

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct GetProjectsPageService<Q, P, R>
where
    Q: ProjectQuery,
    P: PersonalInfoQuery,
    R: ResumeQuery,
{
    projects: Q,
    personal_info: P,
    resume: R,
}

impl<Q, P, R> GetProjectsPageService<Q, P, R>
where
    Q: ProjectQuery,
    P: PersonalInfoQuery,
    R: ResumeQuery,
{
    pub fn new(projects: Q, personal_info: P, resume: R) -> Self {
        Self {
            projects,
            personal_info,
            resume,
        }
    }
}

#[async_trait]
impl<Q, P, R> GetProjectsPageUseCase for GetProjectsPageService<Q, P, R>
where
    Q: ProjectQuery + Send + Sync,
    P: PersonalInfoQuery + Send + Sync,
    R: ResumeQuery + Send + Sync,
{
    async fn execute(
        &self,
        tech: Option<String>,
        page: Option<String>,
    ) -> Result<ProjectsPageContext, GetProjectsPageError> {
        let filter = ProjectListFilter::from_tech(tech.as_deref());

        let total = self.projects.count(&filter).await?;
        let pagination = resolve_page(page.as_deref(), total, PROJECTS_PAGE_SIZE)
            .map_err(|e| GetProjectsPageError::PageNotFound(e.to_string()))?;

        let projects = self.projects.list(&filter, pagination.request()).await?;
        let personal_info = self.personal_info.get().await?;
        let tech_skills = self.resume.active_skills().await?;

        Ok(ProjectsPageContext {
            personal_info,
            projects,
            pagination,
            tech_skills,
            selected_tech: tech.unwrap_or_default(),
        })
    }
}

impl From<ProjectQueryError> for GetProjectsPageError {
    fn from(e: ProjectQueryError) -> Self {
        GetProjectsPageError::QueryFailed(e.to_string())
    }
}

impl From<PersonalInfoQueryError> for GetProjectsPageError {
    fn from(e: PersonalInfoQueryError) -> Self {
        GetProjectsPageError::QueryFailed(e.to_string())
    }
}

impl From<ResumeQueryError> for GetProjectsPageError {
    fn from(e: ResumeQueryError) -> Self {
        GetProjectsPageError::QueryFailed(e.to_string())
    }
}

//
// ──────────────────────────────────────────────────────────
// Unit tests (service only)
// ──────────────────────────────────────────────────────────
//
