use async_trait::async_trait;

use crate::modules::profile::application::ports::outgoing::PersonalInfoQuery;
use crate::modules::project::application::ports::outgoing::ProjectQuery;
use crate::modules::site::application::ports::incoming::use_cases::{
    GetHomePageError, GetHomePageUseCase, HomePageContext, FEATURED_PROJECTS_LIMIT,
};

pub struct GetHomePageService<P, Q>
where
    P: PersonalInfoQuery,
    Q: ProjectQuery,
{
    personal_info: P,
    projects: Q,
}

impl<P, Q> GetHomePageService<P, Q>
where
    P: PersonalInfoQuery,
    Q: ProjectQuery,
{
    pub fn new(personal_info: P, projects: Q) -> Self {
        Self {
            personal_info,
            projects,
        }
    }
}

#[async_trait]
impl<P, Q> GetHomePageUseCase for GetHomePageService<P, Q>
where
    P: PersonalInfoQuery + Send + Sync,
    Q: ProjectQuery + Send + Sync,
{
    async fn execute(&self) -> Result<HomePageContext, GetHomePageError> {
        let personal_info = self
            .personal_info
            .get()
            .await
            .map_err(|e| GetHomePageError::QueryFailed(e.to_string()))?;

        let featured_projects = self
            .projects
            .featured(FEATURED_PROJECTS_LIMIT)
            .await
            .map_err(|e| GetHomePageError::QueryFailed(e.to_string()))?;

        Ok(HomePageContext {
            personal_info,
            featured_projects,
        })
    }
}
