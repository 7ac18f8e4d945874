// src/modules/resume/application/ports/outgoing/resume_query.rs

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Serialize;

use crate::modules::resume::application::domain::entities::SkillCategory;

//
// ──────────────────────────────────────────────────────────
// Query DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillView {
    pub id: i32,
    pub name: String,
    pub proficiency: f64,
    pub category: SkillCategory,
    pub category_label: &'static str,
    pub icon: String,
    pub display_order: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EducationView {
    pub id: i32,
    pub institution: String,
    pub degree: String,
    pub field_of_study: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub description: String,
    pub gpa: Option<f64>,
    pub is_current: bool,
    pub display_order: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CertificationView {
    pub id: i32,
    pub title: String,
    pub issuer: String,
    pub issue_date: NaiveDate,
    pub expiry_date: Option<NaiveDate>,
    pub credential_id: String,
    pub credential_url: String,
    pub description: String,
    pub display_order: i32,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ResumeQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Invalid stored data: {0}")]
    InvalidData(String),
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ResumeQuery: Send + Sync {
    /// Active skills ordered by `display_order, name`.
    async fn active_skills(&self) -> Result<Vec<SkillView>, ResumeQueryError>;

    /// All education entries, newest start date first.
    async fn educations(&self) -> Result<Vec<EducationView>, ResumeQueryError>;

    /// Active certifications, newest issue date first.
    async fn active_certifications(&self) -> Result<Vec<CertificationView>, ResumeQueryError>;
}
