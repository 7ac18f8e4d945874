use std::sync::Arc;

use crate::modules::site::application::ports::incoming::use_cases::{
    GetAboutPageUseCase, GetHomePageUseCase,
};

#[derive(Clone)]
pub struct SiteUseCases {
    pub home: Arc<dyn GetHomePageUseCase + Send + Sync>,
    pub about: Arc<dyn GetAboutPageUseCase + Send + Sync>,
}
