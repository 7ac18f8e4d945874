mod filter_projects_service;
mod get_project_detail_service;
mod get_projects_page_service;

pub use filter_projects_service::FilterProjectsService;
pub use get_project_detail_service::GetProjectDetailService;
pub use get_projects_page_service::GetProjectsPageService;
