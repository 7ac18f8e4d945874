pub mod filter_projects;
mod get_project_detail;
mod get_projects_page;

pub use filter_projects::{
    filter_projects_handler, FilterProjectsQuery, FilterProjectsResponse, FilteredProject,
};
pub use get_project_detail::get_project_detail_handler;
pub use get_projects_page::get_projects_page_handler;
