use async_trait::async_trait;
use serde::Serialize;

use crate::modules::profile::application::ports::outgoing::PersonalInfoView;
use crate::modules::resume::application::ports::outgoing::{
    CertificationView, EducationView, SkillView,
};

/// A skill as shown on the about page, with its proficiency bar width.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AboutSkill {
    #[serde(flatten)]
    pub skill: SkillView,
    pub proficiency_percent: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct AboutPageContext {
    pub personal_info: Option<PersonalInfoView>,
    pub skills: Vec<AboutSkill>,
    pub education: Vec<EducationView>,
    pub certifications: Vec<CertificationView>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetAboutPageError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetAboutPageUseCase: Send + Sync {
    async fn execute(&self) -> Result<AboutPageContext, GetAboutPageError>;
}
