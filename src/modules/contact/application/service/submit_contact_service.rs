use async_trait::async_trait;
use tracing::{info, warn};

use crate::modules::contact::application::domain::entities::{ContactFormInput, ContactSubmission};
use crate::modules::contact::application::ports::incoming::use_cases::{
    ContactOutcome, SubmitContactError, SubmitContactUseCase,
};
use crate::modules::contact::application::ports::outgoing::{
    ContactMessageRepository, ContactNotifier,
};

pub struct SubmitContactService<R, N>
where
    R: ContactMessageRepository,
    N: ContactNotifier,
{
    repository: R,
    notifier: N,
}

impl<R, N> SubmitContactService<R, N>
where
    R: ContactMessageRepository,
    N: ContactNotifier,
{
    pub fn new(repository: R, notifier: N) -> Self {
        Self {
            repository,
            notifier,
        }
    }
}

#[async_trait]
impl<R, N> SubmitContactUseCase for SubmitContactService<R, N>
where
    R: ContactMessageRepository + Send + Sync,
    N: ContactNotifier + Send + Sync,
{
    async fn execute(&self, input: ContactFormInput) -> Result<ContactOutcome, SubmitContactError> {
        let submission = ContactSubmission::parse(input)?;

        let record = self
            .repository
            .create(&submission)
            .await
            .map_err(|e| SubmitContactError::RepositoryError(e.to_string()))?;

        info!(message_id = record.id, "Contact message stored");

        let email_sent = self.notifier.notify(&record).await;
        if !email_sent {
            warn!(message_id = record.id, "Contact notification was not delivered");
        }

        Ok(ContactOutcome {
            message_id: record.id,
            email_sent,
        })
    }
}
