use async_trait::async_trait;

use crate::modules::contact::application::domain::entities::{
    ContactFormErrors, ContactFormInput, ContactNotice,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactOutcome {
    pub message_id: i32,
    pub email_sent: bool,
}

impl ContactOutcome {
    pub fn notice(&self) -> ContactNotice {
        if self.email_sent {
            ContactNotice::Sent
        } else {
            ContactNotice::Saved
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SubmitContactError {
    #[error(transparent)]
    Invalid(#[from] ContactFormErrors),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait SubmitContactUseCase: Send + Sync {
    async fn execute(&self, input: ContactFormInput) -> Result<ContactOutcome, SubmitContactError>;
}
