use std::sync::Arc;

use crate::modules::contact::application::ports::incoming::use_cases::{
    GetContactPageUseCase, SubmitContactUseCase,
};

#[derive(Clone)]
pub struct ContactUseCases {
    pub page: Arc<dyn GetContactPageUseCase + Send + Sync>,
    pub submit: Arc<dyn SubmitContactUseCase + Send + Sync>,
}
