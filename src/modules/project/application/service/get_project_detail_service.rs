use async_trait::async_trait;

use crate::modules::profile::application::ports::outgoing::PersonalInfoQuery;
use crate::modules::project::application::ports::incoming::use_cases::{
    GetProjectDetailError, GetProjectDetailUseCase, ProjectDetailContext, RELATED_PROJECTS_LIMIT,
};
use crate::modules::project::application::ports::outgoing::{ProjectQuery, ProjectQueryError};

pub struct GetProjectDetailService<Q, P>
where
    Q: ProjectQuery,
    P: PersonalInfoQuery,
{
    projects: Q,
    personal_info: P,
}

impl<Q, P> GetProjectDetailService<Q, P>
where
    Q: ProjectQuery,
    P: PersonalInfoQuery,
{
    pub fn new(projects: Q, personal_info: P) -> Self {
        Self {
            projects,
            personal_info,
        }
    }
}

#[async_trait]
impl<Q, P> GetProjectDetailUseCase for GetProjectDetailService<Q, P>
where
    Q: ProjectQuery + Send + Sync,
    P: PersonalInfoQuery + Send + Sync,
{
    async fn execute(&self, project_id: i32) -> Result<ProjectDetailContext, GetProjectDetailError> {
        let project = self
            .projects
            .get_by_id(project_id)
            .await
            .map_err(|e| match e {
                ProjectQueryError::NotFound => GetProjectDetailError::NotFound,
                ProjectQueryError::DatabaseError(msg) => GetProjectDetailError::QueryFailed(msg),
            })?;

        let related_projects = self
            .projects
            .related(project.id, &project.skill_ids(), RELATED_PROJECTS_LIMIT)
            .await
            .map_err(|e| GetProjectDetailError::QueryFailed(e.to_string()))?;

        let personal_info = self
            .personal_info
            .get()
            .await
            .map_err(|e| GetProjectDetailError::QueryFailed(e.to_string()))?;

        Ok(ProjectDetailContext {
            personal_info,
            project,
            related_projects,
        })
    }
}
