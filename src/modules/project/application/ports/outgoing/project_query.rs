// src/modules/project/application/ports/outgoing/project_query.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::modules::project::application::domain::entities::ProjectListFilter;
use crate::shared::pagination::PageRequest;

//
// ──────────────────────────────────────────────────────────
// Query DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TechStackItem {
    pub id: i32,
    pub name: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectView {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub long_description: String,
    pub image_url: Option<String>,
    pub github_url: String,
    pub live_url: String,
    pub featured: bool,
    pub display_order: i32,
    pub tech_stack: Vec<TechStackItem>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProjectView {
    pub fn skill_ids(&self) -> Vec<i32> {
        self.tech_stack.iter().map(|t| t.id).collect()
    }
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProjectQueryError {
    #[error("Project not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

/// Read side of projects. Every list is in default order
/// (`display_order ASC, created_at DESC`) with tech stacks loaded.
#[async_trait]
pub trait ProjectQuery: Send + Sync {
    async fn featured(&self, limit: u64) -> Result<Vec<ProjectView>, ProjectQueryError>;

    async fn get_by_id(&self, project_id: i32) -> Result<ProjectView, ProjectQueryError>;

    async fn count(&self, filter: &ProjectListFilter) -> Result<u64, ProjectQueryError>;

    async fn list(
        &self,
        filter: &ProjectListFilter,
        page: PageRequest,
    ) -> Result<Vec<ProjectView>, ProjectQueryError>;

    /// Unpaginated; used by the JSON filter endpoint.
    async fn list_all(
        &self,
        filter: &ProjectListFilter,
    ) -> Result<Vec<ProjectView>, ProjectQueryError>;

    /// Other projects sharing at least one of `skill_ids`, distinct.
    async fn related(
        &self,
        project_id: i32,
        skill_ids: &[i32],
        limit: u64,
    ) -> Result<Vec<ProjectView>, ProjectQueryError>;
}
