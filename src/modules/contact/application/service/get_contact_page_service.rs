use async_trait::async_trait;

use crate::modules::contact::application::domain::entities::{ContactFormInput, ContactNotice};
use crate::modules::contact::application::ports::incoming::use_cases::{
    ContactPageContext, GetContactPageError, GetContactPageUseCase,
};
use crate::modules::profile::application::ports::outgoing::PersonalInfoQuery;

pub struct GetContactPageService<P>
where
    P: PersonalInfoQuery,
{
    personal_info: P,
}

impl<P> GetContactPageService<P>
where
    P: PersonalInfoQuery,
{
    pub fn new(personal_info: P) -> Self {
        Self { personal_info }
    }
}

#[async_trait]
impl<P> GetContactPageUseCase for GetContactPageService<P>
where
    P: PersonalInfoQuery + Send + Sync,
{
    async fn execute(
        &self,
        notice: Option<ContactNotice>,
    ) -> Result<ContactPageContext, GetContactPageError> {
        let personal_info = self
            .personal_info
            .get()
            .await
            .map_err(|e| GetContactPageError::QueryFailed(e.to_string()))?;

        Ok(ContactPageContext {
            personal_info,
            form: ContactFormInput::default(),
            notice: notice.map(Into::into),
            errors: Default::default(),
        })
    }
}
