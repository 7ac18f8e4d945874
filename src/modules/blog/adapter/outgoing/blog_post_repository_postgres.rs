use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QuerySelect, Set,
};
use std::sync::Arc;

use crate::modules::blog::adapter::outgoing::sea_orm_entity::blog_posts::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::blog::application::ports::outgoing::{
    BlogPostRepository, BlogPostRepositoryError, BlogPostResult, CreateBlogPostData,
};

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct BlogPostRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl BlogPostRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BlogPostRepository for BlogPostRepositoryPostgres {
    async fn find_id_by_slug(&self, slug: &str) -> Result<Option<i32>, BlogPostRepositoryError> {
        Entity::find()
            .filter(Column::Slug.eq(slug.trim()))
            .select_only()
            .column(Column::Id)
            .into_tuple::<i32>()
            .one(&*self.db)
            .await
            .map_err(map_db_err)
    }

    async fn create(
        &self,
        data: CreateBlogPostData,
    ) -> Result<BlogPostResult, BlogPostRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            title: Set(data.title),
            slug: Set(data.slug),
            content: Set(data.content),
            excerpt: Set(data.excerpt),
            featured_image: Set(data.featured_image),
            author: Set(data.author),
            published: Set(data.published),
            featured: Set(data.featured),
            tags: Set(data.tags),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&*self.db).await.map_err(map_slug_error)?;

        Ok(model_to_result(result))
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn model_to_result(model: blog_posts::Model) -> BlogPostResult {
    BlogPostResult {
        id: model.id,
        title: model.title,
        slug: model.slug,
        content: model.content,
        excerpt: model.excerpt,
        featured_image: model.featured_image,
        author: model.author,
        published: model.published,
        featured: model.featured,
        tags: model.tags,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    }
}

fn map_slug_error(e: DbErr) -> BlogPostRepositoryError {
    let msg = e.to_string().to_lowercase();

    if (msg.contains("duplicate") || msg.contains("unique") || msg.contains("23505"))
        && msg.contains("slug")
    {
        BlogPostRepositoryError::SlugAlreadyExists
    } else {
        BlogPostRepositoryError::DatabaseError(e.to_string())
    }
}

fn map_db_err(e: DbErr) -> BlogPostRepositoryError {
    BlogPostRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
