use async_trait::async_trait;
use serde::Serialize;

use crate::modules::contact::application::domain::entities::{ContactFormInput, ContactNotice};
use crate::modules::profile::application::ports::outgoing::PersonalInfoView;
use crate::shared::api::FieldErrors;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NoticeView {
    pub kind: ContactNotice,
    pub level: &'static str,
    pub message: &'static str,
}

impl From<ContactNotice> for NoticeView {
    fn from(kind: ContactNotice) -> Self {
        Self {
            kind,
            level: kind.level(),
            message: kind.message(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ContactPageContext {
    pub personal_info: Option<PersonalInfoView>,
    pub form: ContactFormInput,
    pub notice: Option<NoticeView>,
    /// Empty unless the page is re-rendered after a rejected submission.
    pub errors: FieldErrors,
}

impl ContactPageContext {
    /// Echo a rejected submission back into the page; any notice is dropped.
    pub fn with_rejected(self, form: ContactFormInput, errors: FieldErrors) -> Self {
        Self {
            form,
            notice: None,
            errors,
            ..self
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetContactPageError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetContactPageUseCase: Send + Sync {
    async fn execute(
        &self,
        notice: Option<ContactNotice>,
    ) -> Result<ContactPageContext, GetContactPageError>;
}
