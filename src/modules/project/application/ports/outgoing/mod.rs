pub mod project_query;
pub mod project_repository;

pub use project_query::{ProjectQuery, ProjectQueryError, ProjectView, TechStackItem};
pub use project_repository::{ProjectRepository, ProjectRepositoryError};
