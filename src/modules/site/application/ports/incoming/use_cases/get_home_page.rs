use async_trait::async_trait;
use serde::Serialize;

use crate::modules::profile::application::ports::outgoing::PersonalInfoView;
use crate::modules::project::application::ports::outgoing::ProjectView;

pub const FEATURED_PROJECTS_LIMIT: u64 = 3;

#[derive(Debug, Clone, Serialize)]
pub struct HomePageContext {
    pub personal_info: Option<PersonalInfoView>,
    pub featured_projects: Vec<ProjectView>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetHomePageError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetHomePageUseCase: Send + Sync {
    async fn execute(&self) -> Result<HomePageContext, GetHomePageError>;
}
