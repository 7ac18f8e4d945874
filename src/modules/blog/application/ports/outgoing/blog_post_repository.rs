use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::modules::blog::application::domain::entities::split_tags;

#[derive(Debug, Clone)]
pub struct CreateBlogPostData {
    pub title: String,
    pub slug: String,
    pub content: String,
    pub excerpt: String,
    pub featured_image: Option<String>,
    pub author: String,
    pub published: bool,
    pub featured: bool,
    pub tags: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlogPostResult {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub excerpt: String,
    pub featured_image: Option<String>,
    pub author: String,
    pub published: bool,
    pub featured: bool,
    pub tags: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BlogPostResult {
    pub fn tags_list(&self) -> Vec<String> {
        split_tags(&self.tags)
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum BlogPostRepositoryError {
    #[error("Slug already exists")]
    SlugAlreadyExists,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait BlogPostRepository: Send + Sync {
    async fn find_id_by_slug(&self, slug: &str) -> Result<Option<i32>, BlogPostRepositoryError>;

    async fn create(
        &self,
        data: CreateBlogPostData,
    ) -> Result<BlogPostResult, BlogPostRepositoryError>;
}
