use std::sync::Arc;

use crate::modules::project::application::ports::incoming::use_cases::{
    FilterProjectsUseCase, GetProjectDetailUseCase, GetProjectsPageUseCase,
};

#[derive(Clone)]
pub struct ProjectUseCases {
    pub get_page: Arc<dyn GetProjectsPageUseCase + Send + Sync>,
    pub get_detail: Arc<dyn GetProjectDetailUseCase + Send + Sync>,
    pub filter: Arc<dyn FilterProjectsUseCase + Send + Sync>,
}
