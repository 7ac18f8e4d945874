mod filter_projects;
mod get_project_detail;
mod get_projects_page;

pub use filter_projects::{FilterProjectsError, FilterProjectsUseCase};
pub use get_project_detail::{
    GetProjectDetailError, GetProjectDetailUseCase, ProjectDetailContext, RELATED_PROJECTS_LIMIT,
};
pub use get_projects_page::{
    GetProjectsPageError, GetProjectsPageUseCase, ProjectsPageContext, PROJECTS_PAGE_SIZE,
};
