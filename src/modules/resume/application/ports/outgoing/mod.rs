pub mod resume_query;
pub mod resume_repository;

pub use resume_query::{
    CertificationView, EducationView, ResumeQuery, ResumeQueryError, SkillView,
};
pub use resume_repository::{ResumeRepository, ResumeRepositoryError};
