use crate::modules::contact::application::contact_use_cases::ContactUseCases;
use crate::modules::contact::application::ports::incoming::use_cases::{
    GetContactPageUseCase, SubmitContactUseCase,
};
use crate::modules::project::application::ports::incoming::use_cases::{
    FilterProjectsUseCase, GetProjectDetailUseCase, GetProjectsPageUseCase,
};
use crate::modules::project::application::project_use_cases::ProjectUseCases;
use crate::modules::site::application::ports::incoming::use_cases::{
    GetAboutPageUseCase, GetHomePageUseCase,
};
use crate::modules::site::application::site_use_cases::SiteUseCases;
use crate::tests::support::stubs::*;
use crate::AppState;
use actix_web::web;
use std::sync::Arc;

/// Every use case defaults to a stub that fails; tests swap in the ones
/// their handler touches.
pub struct TestAppStateBuilder {
    home: Arc<dyn GetHomePageUseCase + Send + Sync>,
    about: Arc<dyn GetAboutPageUseCase + Send + Sync>,
    get_projects_page: Arc<dyn GetProjectsPageUseCase + Send + Sync>,
    get_project_detail: Arc<dyn GetProjectDetailUseCase + Send + Sync>,
    filter_projects: Arc<dyn FilterProjectsUseCase + Send + Sync>,
    contact_page: Arc<dyn GetContactPageUseCase + Send + Sync>,
    submit_contact: Arc<dyn SubmitContactUseCase + Send + Sync>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            home: Arc::new(StubGetHomePageUseCase),
            about: Arc::new(StubGetAboutPageUseCase),
            get_projects_page: Arc::new(StubGetProjectsPageUseCase),
            get_project_detail: Arc::new(StubGetProjectDetailUseCase),
            filter_projects: Arc::new(StubFilterProjectsUseCase),
            contact_page: Arc::new(StubGetContactPageUseCase),
            submit_contact: Arc::new(StubSubmitContactUseCase),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_home(mut self, uc: impl GetHomePageUseCase + Send + Sync + 'static) -> Self {
        self.home = Arc::new(uc);
        self
    }

    pub fn with_about(mut self, uc: impl GetAboutPageUseCase + Send + Sync + 'static) -> Self {
        self.about = Arc::new(uc);
        self
    }

    pub fn with_get_projects_page(
        mut self,
        uc: impl GetProjectsPageUseCase + Send + Sync + 'static,
    ) -> Self {
        self.get_projects_page = Arc::new(uc);
        self
    }

    pub fn with_get_project_detail(
        mut self,
        uc: impl GetProjectDetailUseCase + Send + Sync + 'static,
    ) -> Self {
        self.get_project_detail = Arc::new(uc);
        self
    }

    pub fn with_filter_projects(
        mut self,
        uc: impl FilterProjectsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.filter_projects = Arc::new(uc);
        self
    }

    pub fn with_contact_page(
        mut self,
        uc: impl GetContactPageUseCase + Send + Sync + 'static,
    ) -> Self {
        self.contact_page = Arc::new(uc);
        self
    }

    pub fn with_submit_contact(
        mut self,
        uc: impl SubmitContactUseCase + Send + Sync + 'static,
    ) -> Self {
        self.submit_contact = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            site: SiteUseCases {
                home: self.home,
                about: self.about,
            },
            project: ProjectUseCases {
                get_page: self.get_projects_page,
                get_detail: self.get_project_detail,
                filter: self.filter_projects,
            },
            contact: ContactUseCases {
                page: self.contact_page,
                submit: self.submit_contact,
            },
        })
    }
}
