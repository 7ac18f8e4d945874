use async_trait::async_trait;

use crate::modules::profile::application::ports::outgoing::PersonalInfoQuery;
use crate::modules::resume::application::ports::outgoing::{ResumeQuery, SkillView};
use crate::modules::site::application::ports::incoming::use_cases::{
    AboutPageContext, AboutSkill, GetAboutPageError, GetAboutPageUseCase,
};
use crate::shared::template_filters::{to_percentage, DEFAULT_PERCENTAGE_MAX};

pub struct GetAboutPageService<P, R>
where
    P: PersonalInfoQuery,
    R: ResumeQuery,
{
    personal_info: P,
    resume: R,
}

impl<P, R> GetAboutPageService<P, R>
where
    P: PersonalInfoQuery,
    R: ResumeQuery,
{
    pub fn new(personal_info: P, resume: R) -> Self {
        Self {
            personal_info,
            resume,
        }
    }
}

fn query_failed(e: impl std::fmt::Display) -> GetAboutPageError {
    GetAboutPageError::QueryFailed(e.to_string())
}

fn with_percent(skill: SkillView) -> AboutSkill {
    AboutSkill {
        proficiency_percent: to_percentage(skill.proficiency, DEFAULT_PERCENTAGE_MAX),
        skill,
    }
}

#[async_trait]
impl<P, R> GetAboutPageUseCase for GetAboutPageService<P, R>
where
    P: PersonalInfoQuery + Send + Sync,
    R: ResumeQuery + Send + Sync,
{
    async fn execute(&self) -> Result<AboutPageContext, GetAboutPageError> {
        let personal_info = self.personal_info.get().await.map_err(query_failed)?;
        let skills = self.resume.active_skills().await.map_err(query_failed)?;
        let education = self.resume.educations().await.map_err(query_failed)?;
        let certifications = self
            .resume
            .active_certifications()
            .await
            .map_err(query_failed)?;

        Ok(AboutPageContext {
            personal_info,
            skills: skills.into_iter().map(with_percent).collect(),
            education,
            certifications,
        })
    }
}
