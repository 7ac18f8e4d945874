use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::modules::contact::application::domain::entities::{ContactFormInput, ContactNotice};
use crate::modules::contact::application::ports::incoming::use_cases::{
    ContactOutcome, ContactPageContext, GetContactPageError, GetContactPageUseCase,
    SubmitContactError, SubmitContactUseCase,
};
use crate::modules::profile::application::ports::outgoing::{
    PersonalInfoQuery, PersonalInfoQueryError, PersonalInfoView,
};
use crate::modules::project::application::domain::entities::ProjectListFilter;
use crate::modules::project::application::ports::incoming::use_cases::{
    FilterProjectsError, FilterProjectsUseCase, GetProjectDetailError, GetProjectDetailUseCase,
    GetProjectsPageError, GetProjectsPageUseCase, ProjectDetailContext, ProjectsPageContext,
};
use crate::modules::project::application::ports::outgoing::{
    ProjectQuery, ProjectQueryError, ProjectView,
};
use crate::modules::resume::application::ports::outgoing::{
    CertificationView, EducationView, ResumeQuery, ResumeQueryError, SkillView,
};
use crate::modules::site::application::ports::incoming::use_cases::{
    AboutPageContext, GetAboutPageError, GetAboutPageUseCase, GetHomePageError,
    GetHomePageUseCase, HomePageContext,
};
use crate::shared::pagination::PageRequest;
use crate::tests::support::fixtures::personal_info_view;

const NOT_USED: &str = "not used in this test";

//
// ──────────────────────────────────────────────────────────
// Outgoing query stubs
// ──────────────────────────────────────────────────────────
//

#[derive(Clone)]
pub struct StubPersonalInfoQuery {
    result: Result<Option<PersonalInfoView>, String>,
}

impl StubPersonalInfoQuery {
    pub fn found() -> Self {
        Self {
            result: Ok(Some(personal_info_view())),
        }
    }

    pub fn empty() -> Self {
        Self { result: Ok(None) }
    }

    pub fn failing() -> Self {
        Self {
            result: Err("connection refused".to_string()),
        }
    }
}

#[async_trait]
impl PersonalInfoQuery for StubPersonalInfoQuery {
    async fn get(&self) -> Result<Option<PersonalInfoView>, PersonalInfoQueryError> {
        self.result
            .clone()
            .map_err(PersonalInfoQueryError::DatabaseError)
    }
}

#[derive(Clone, Default)]
pub struct StubResumeQuery {
    skills: Vec<SkillView>,
    educations: Vec<EducationView>,
    certifications: Vec<CertificationView>,
    fail: bool,
}

impl StubResumeQuery {
    pub fn with_skills(skills: Vec<SkillView>) -> Self {
        Self {
            skills,
            ..Default::default()
        }
    }

    pub fn with_educations(mut self, educations: Vec<EducationView>) -> Self {
        self.educations = educations;
        self
    }

    pub fn with_certifications(mut self, certifications: Vec<CertificationView>) -> Self {
        self.certifications = certifications;
        self
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    fn check(&self) -> Result<(), ResumeQueryError> {
        if self.fail {
            return Err(ResumeQueryError::DatabaseError("connection refused".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl ResumeQuery for StubResumeQuery {
    async fn active_skills(&self) -> Result<Vec<SkillView>, ResumeQueryError> {
        self.check()?;
        Ok(self.skills.clone())
    }

    async fn educations(&self) -> Result<Vec<EducationView>, ResumeQueryError> {
        self.check()?;
        Ok(self.educations.clone())
    }

    async fn active_certifications(&self) -> Result<Vec<CertificationView>, ResumeQueryError> {
        self.check()?;
        Ok(self.certifications.clone())
    }
}

#[derive(Default)]
struct ProjectQueryCalls {
    page_request: Option<PageRequest>,
    filter: Option<ProjectListFilter>,
    related: Option<(i32, Vec<i32>, u64)>,
}

/// In-memory `ProjectQuery`. Clones share the call recorder, so a test can
/// hand one clone to a service and inspect the other.
#[derive(Clone, Default)]
pub struct StubProjectQuery {
    projects: Vec<ProjectView>,
    related: Vec<ProjectView>,
    fail: bool,
    calls: Arc<Mutex<ProjectQueryCalls>>,
}

impl StubProjectQuery {
    pub fn with_projects(projects: Vec<ProjectView>) -> Self {
        Self {
            projects,
            ..Default::default()
        }
    }

    pub fn with_related(mut self, related: Vec<ProjectView>) -> Self {
        self.related = related;
        self
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn last_page_request(&self) -> Option<PageRequest> {
        self.calls.lock().unwrap().page_request
    }

    pub fn last_filter(&self) -> Option<ProjectListFilter> {
        self.calls.lock().unwrap().filter.clone()
    }

    pub fn last_related_call(&self) -> Option<(i32, Vec<i32>, u64)> {
        self.calls.lock().unwrap().related.clone()
    }

    fn check(&self) -> Result<(), ProjectQueryError> {
        if self.fail {
            return Err(ProjectQueryError::DatabaseError("connection refused".to_string()));
        }
        Ok(())
    }

    fn record_filter(&self, filter: &ProjectListFilter) {
        self.calls.lock().unwrap().filter = Some(filter.clone());
    }
}

#[async_trait]
impl ProjectQuery for StubProjectQuery {
    async fn featured(&self, limit: u64) -> Result<Vec<ProjectView>, ProjectQueryError> {
        self.check()?;
        Ok(self
            .projects
            .iter()
            .filter(|p| p.featured)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn get_by_id(&self, project_id: i32) -> Result<ProjectView, ProjectQueryError> {
        self.check()?;
        self.projects
            .iter()
            .find(|p| p.id == project_id)
            .cloned()
            .ok_or(ProjectQueryError::NotFound)
    }

    async fn count(&self, filter: &ProjectListFilter) -> Result<u64, ProjectQueryError> {
        self.check()?;
        self.record_filter(filter);
        Ok(self.projects.len() as u64)
    }

    async fn list(
        &self,
        filter: &ProjectListFilter,
        page: PageRequest,
    ) -> Result<Vec<ProjectView>, ProjectQueryError> {
        self.check()?;
        self.record_filter(filter);
        self.calls.lock().unwrap().page_request = Some(page);
        Ok(self.projects.clone())
    }

    async fn list_all(
        &self,
        filter: &ProjectListFilter,
    ) -> Result<Vec<ProjectView>, ProjectQueryError> {
        self.check()?;
        self.record_filter(filter);
        Ok(self.projects.clone())
    }

    async fn related(
        &self,
        project_id: i32,
        skill_ids: &[i32],
        limit: u64,
    ) -> Result<Vec<ProjectView>, ProjectQueryError> {
        self.check()?;
        self.calls.lock().unwrap().related = Some((project_id, skill_ids.to_vec(), limit));
        Ok(self.related.clone())
    }
}

//
// ──────────────────────────────────────────────────────────
// Default use case stubs (builder fallbacks)
// ──────────────────────────────────────────────────────────
//

#[derive(Default, Clone)]
pub struct StubGetHomePageUseCase;

#[async_trait]
impl GetHomePageUseCase for StubGetHomePageUseCase {
    async fn execute(&self) -> Result<HomePageContext, GetHomePageError> {
        Err(GetHomePageError::QueryFailed(NOT_USED.to_string()))
    }
}

#[derive(Default, Clone)]
pub struct StubGetAboutPageUseCase;

#[async_trait]
impl GetAboutPageUseCase for StubGetAboutPageUseCase {
    async fn execute(&self) -> Result<AboutPageContext, GetAboutPageError> {
        Err(GetAboutPageError::QueryFailed(NOT_USED.to_string()))
    }
}

#[derive(Default, Clone)]
pub struct StubGetProjectsPageUseCase;

#[async_trait]
impl GetProjectsPageUseCase for StubGetProjectsPageUseCase {
    async fn execute(
        &self,
        _tech: Option<String>,
        _page: Option<String>,
    ) -> Result<ProjectsPageContext, GetProjectsPageError> {
        Err(GetProjectsPageError::QueryFailed(NOT_USED.to_string()))
    }
}

#[derive(Default, Clone)]
pub struct StubGetProjectDetailUseCase;

#[async_trait]
impl GetProjectDetailUseCase for StubGetProjectDetailUseCase {
    async fn execute(&self, _project_id: i32) -> Result<ProjectDetailContext, GetProjectDetailError> {
        Err(GetProjectDetailError::NotFound)
    }
}

#[derive(Default, Clone)]
pub struct StubFilterProjectsUseCase;

#[async_trait]
impl FilterProjectsUseCase for StubFilterProjectsUseCase {
    async fn execute(&self, _tech: Option<String>) -> Result<Vec<ProjectView>, FilterProjectsError> {
        Err(FilterProjectsError::QueryFailed(NOT_USED.to_string()))
    }
}

#[derive(Default, Clone)]
pub struct StubGetContactPageUseCase;

#[async_trait]
impl GetContactPageUseCase for StubGetContactPageUseCase {
    async fn execute(
        &self,
        _notice: Option<ContactNotice>,
    ) -> Result<ContactPageContext, GetContactPageError> {
        Err(GetContactPageError::QueryFailed(NOT_USED.to_string()))
    }
}

#[derive(Default, Clone)]
pub struct StubSubmitContactUseCase;

#[async_trait]
impl SubmitContactUseCase for StubSubmitContactUseCase {
    async fn execute(&self, _input: ContactFormInput) -> Result<ContactOutcome, SubmitContactError> {
        Err(SubmitContactError::RepositoryError(NOT_USED.to_string()))
    }
}
