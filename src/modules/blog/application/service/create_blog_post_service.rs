use async_trait::async_trait;

use crate::modules::blog::application::ports::incoming::use_cases::{
    CreateBlogPostCommand, CreateBlogPostError, CreateBlogPostUseCase,
};
use crate::modules::blog::application::ports::outgoing::{
    BlogPostRepository, BlogPostRepositoryError, BlogPostResult, CreateBlogPostData,
};

#[derive(Debug, Clone)]
pub struct CreateBlogPostService<R>
where
    R: BlogPostRepository + Send + Sync,
{
    repository: R,
    default_author: String,
}

impl<R> CreateBlogPostService<R>
where
    R: BlogPostRepository + Send + Sync,
{
    pub fn new(repository: R, default_author: impl Into<String>) -> Self {
        Self {
            repository,
            default_author: default_author.into(),
        }
    }
}

#[async_trait]
impl<R> CreateBlogPostUseCase for CreateBlogPostService<R>
where
    R: BlogPostRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: CreateBlogPostCommand,
    ) -> Result<BlogPostResult, CreateBlogPostError> {
        let taken = self
            .repository
            .find_id_by_slug(command.slug())
            .await
            .map_err(map_repo_err)?;

        if taken.is_some() {
            return Err(CreateBlogPostError::SlugAlreadyExists);
        }

        let data = CreateBlogPostData {
            title: command.title().to_string(),
            slug: command.slug().to_string(),
            content: command.content().to_string(),
            excerpt: command.excerpt().to_string(),
            featured_image: command.featured_image().map(str::to_string),
            author: command
                .author()
                .unwrap_or(self.default_author.as_str())
                .to_string(),
            published: command.published(),
            featured: command.featured(),
            tags: command.tags().to_string(),
        };

        // The unique index still guards against a concurrent insert.
        self.repository.create(data).await.map_err(map_repo_err)
    }
}

fn map_repo_err(e: BlogPostRepositoryError) -> CreateBlogPostError {
    match e {
        BlogPostRepositoryError::SlugAlreadyExists => CreateBlogPostError::SlugAlreadyExists,
        other => CreateBlogPostError::RepositoryError(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::sync::{Arc, Mutex};

    use crate::modules::blog::application::ports::incoming::use_cases::BlogPostInput;

    // ──────────────────────────────────────────────────────────
    // In-memory repository
    // ──────────────────────────────────────────────────────────

    #[derive(Clone, Default)]
    struct InMemoryBlogPosts {
        posts: Arc<Mutex<Vec<BlogPostResult>>>,
        fail_with: Option<BlogPostRepositoryError>,
    }

    #[async_trait]
    impl BlogPostRepository for InMemoryBlogPosts {
        async fn find_id_by_slug(
            &self,
            slug: &str,
        ) -> Result<Option<i32>, BlogPostRepositoryError> {
            if let Some(err) = &self.fail_with {
                return Err(err.clone());
            }
            Ok(self
                .posts
                .lock()
                .unwrap()
                .iter()
                .find(|p| p.slug == slug)
                .map(|p| p.id))
        }

        async fn create(
            &self,
            data: CreateBlogPostData,
        ) -> Result<BlogPostResult, BlogPostRepositoryError> {
            let mut posts = self.posts.lock().unwrap();
            let now = Utc::now();
            let post = BlogPostResult {
                id: posts.len() as i32 + 1,
                title: data.title,
                slug: data.slug,
                content: data.content,
                excerpt: data.excerpt,
                featured_image: data.featured_image,
                author: data.author,
                published: data.published,
                featured: data.featured,
                tags: data.tags,
                created_at: now,
                updated_at: now,
            };
            posts.push(post.clone());
            Ok(post)
        }
    }

    fn command(slug: &str, author: Option<&str>) -> CreateBlogPostCommand {
        CreateBlogPostCommand::new(BlogPostInput {
            title: "Getting Started with Django".to_string(),
            slug: slug.to_string(),
            content: "Django is a high-level Python web framework.".to_string(),
            author: author.map(str::to_string),
            tags: "Django, Python, Web Development".to_string(),
            published: true,
            ..Default::default()
        })
        .unwrap()
    }

    // ──────────────────────────────────────────────────────────
    // Tests
    // ──────────────────────────────────────────────────────────

    #[tokio::test]
    async fn author_defaults_to_site_owner() {
        let service = CreateBlogPostService::new(InMemoryBlogPosts::default(), "Jane Doe");

        let post = service.execute(command("django", None)).await.unwrap();

        assert_eq!(post.author, "Jane Doe");
        assert_eq!(post.tags_list(), vec!["Django", "Python", "Web Development"]);
    }

    #[tokio::test]
    async fn explicit_author_is_kept() {
        let service = CreateBlogPostService::new(InMemoryBlogPosts::default(), "Jane Doe");

        let post = service
            .execute(command("django", Some("Guest")))
            .await
            .unwrap();

        assert_eq!(post.author, "Guest");
    }

    #[tokio::test]
    async fn second_post_with_same_slug_fails() {
        let repo = InMemoryBlogPosts::default();
        let service = CreateBlogPostService::new(repo.clone(), "Jane Doe");

        service.execute(command("django", None)).await.unwrap();
        let second = service.execute(command("django", None)).await;

        assert!(matches!(second, Err(CreateBlogPostError::SlugAlreadyExists)));
        assert_eq!(repo.posts.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn repository_error_is_mapped() {
        let repo = InMemoryBlogPosts {
            fail_with: Some(BlogPostRepositoryError::DatabaseError(
                "connection lost".to_string(),
            )),
            ..Default::default()
        };
        let service = CreateBlogPostService::new(repo, "Jane Doe");

        match service.execute(command("django", None)).await {
            Err(CreateBlogPostError::RepositoryError(msg)) => {
                assert!(msg.contains("connection lost"))
            }
            other => panic!("expected RepositoryError, got {other:?}"),
        }
    }
}
