// src/modules/resume/application/ports/outgoing/resume_repository.rs

use async_trait::async_trait;

use crate::modules::resume::application::domain::entities::{
    CertificationDraft, EducationDraft, SkillDraft,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ResumeRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Idempotent writes used by the seed command. Each `get_or_create_*`
/// returns the row id and whether a row was inserted.
#[async_trait]
pub trait ResumeRepository: Send + Sync {
    /// Looked up by exact name.
    async fn get_or_create_skill(
        &self,
        draft: SkillDraft,
    ) -> Result<(i32, bool), ResumeRepositoryError>;

    /// Looked up by institution + degree.
    async fn get_or_create_education(
        &self,
        draft: EducationDraft,
    ) -> Result<(i32, bool), ResumeRepositoryError>;

    /// Looked up by title + issuer.
    async fn get_or_create_certification(
        &self,
        draft: CertificationDraft,
    ) -> Result<(i32, bool), ResumeRepositoryError>;

    async fn find_skill_id_by_name(&self, name: &str) -> Result<Option<i32>, ResumeRepositoryError>;
}
