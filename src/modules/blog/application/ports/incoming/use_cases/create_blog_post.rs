use async_trait::async_trait;

use crate::modules::blog::application::domain::entities::{
    is_valid_slug, MAX_EXCERPT_LEN, MAX_SLUG_LEN, MAX_TAGS_LEN, MAX_TITLE_LEN,
};
use crate::modules::blog::application::ports::outgoing::BlogPostResult;

//
// ──────────────────────────────────────────────────────────
// Create BlogPost Command
// ──────────────────────────────────────────────────────────
//

/// Raw form input for a new post.
#[derive(Debug, Clone, Default)]
pub struct BlogPostInput {
    pub title: String,
    pub slug: String,
    pub content: String,
    pub excerpt: String,
    pub featured_image: Option<String>,
    /// Falls back to the site owner's name when absent.
    pub author: Option<String>,
    pub published: bool,
    pub featured: bool,
    pub tags: String,
}

#[derive(Debug, Clone)]
pub struct CreateBlogPostCommand {
    title: String,
    slug: String,
    content: String,
    excerpt: String,
    featured_image: Option<String>,
    author: Option<String>,
    published: bool,
    featured: bool,
    tags: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CreateBlogPostCommandError {
    #[error("Title cannot be empty")]
    EmptyTitle,

    #[error("Title must be at most {MAX_TITLE_LEN} characters")]
    TitleTooLong,

    #[error("Slug cannot be empty")]
    EmptySlug,

    #[error("Slug must be at most {MAX_SLUG_LEN} characters")]
    SlugTooLong,

    #[error("Slug may only contain letters, numbers, underscores or hyphens")]
    InvalidSlug,

    #[error("Content cannot be empty")]
    EmptyContent,

    #[error("Excerpt must be at most {MAX_EXCERPT_LEN} characters")]
    ExcerptTooLong,

    #[error("Tags must be at most {MAX_TAGS_LEN} characters")]
    TagsTooLong,
}

impl CreateBlogPostCommand {
    pub fn new(input: BlogPostInput) -> Result<Self, CreateBlogPostCommandError> {
        let title = input.title.trim();
        if title.is_empty() {
            return Err(CreateBlogPostCommandError::EmptyTitle);
        }
        if title.chars().count() > MAX_TITLE_LEN {
            return Err(CreateBlogPostCommandError::TitleTooLong);
        }

        let slug = input.slug.trim();
        if slug.is_empty() {
            return Err(CreateBlogPostCommandError::EmptySlug);
        }
        if slug.chars().count() > MAX_SLUG_LEN {
            return Err(CreateBlogPostCommandError::SlugTooLong);
        }
        if !is_valid_slug(slug) {
            return Err(CreateBlogPostCommandError::InvalidSlug);
        }

        if input.content.trim().is_empty() {
            return Err(CreateBlogPostCommandError::EmptyContent);
        }

        let excerpt = input.excerpt.trim();
        if excerpt.chars().count() > MAX_EXCERPT_LEN {
            return Err(CreateBlogPostCommandError::ExcerptTooLong);
        }

        let tags = input.tags.trim();
        if tags.chars().count() > MAX_TAGS_LEN {
            return Err(CreateBlogPostCommandError::TagsTooLong);
        }

        Ok(Self {
            title: title.to_string(),
            slug: slug.to_string(),
            content: input.content,
            excerpt: excerpt.to_string(),
            featured_image: input.featured_image.filter(|p| !p.trim().is_empty()),
            author: input
                .author
                .map(|a| a.trim().to_string())
                .filter(|a| !a.is_empty()),
            published: input.published,
            featured: input.featured,
            tags: tags.to_string(),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn excerpt(&self) -> &str {
        &self.excerpt
    }

    pub fn featured_image(&self) -> Option<&str> {
        self.featured_image.as_deref()
    }

    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    pub fn published(&self) -> bool {
        self.published
    }

    pub fn featured(&self) -> bool {
        self.featured
    }

    pub fn tags(&self) -> &str {
        &self.tags
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateBlogPostError {
    #[error("Slug already exists")]
    SlugAlreadyExists,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateBlogPostUseCase: Send + Sync {
    async fn execute(
        &self,
        command: CreateBlogPostCommand,
    ) -> Result<BlogPostResult, CreateBlogPostError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> BlogPostInput {
        BlogPostInput {
            title: " Getting Started ".to_string(),
            slug: "getting-started".to_string(),
            content: "Body".to_string(),
            tags: "Django, Python".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn valid_input_is_normalized() {
        let cmd = CreateBlogPostCommand::new(BlogPostInput {
            author: Some("  ".to_string()),
            ..valid_input()
        })
        .unwrap();

        assert_eq!(cmd.title(), "Getting Started");
        assert_eq!(cmd.slug(), "getting-started");
        assert_eq!(cmd.author(), None);
    }

    #[test]
    fn slug_rules_are_enforced() {
        let too_long = "a".repeat(51);
        let cases = [
            ("", CreateBlogPostCommandError::EmptySlug),
            ("has space", CreateBlogPostCommandError::InvalidSlug),
            (too_long.as_str(), CreateBlogPostCommandError::SlugTooLong),
        ];

        for (slug, expected) in cases {
            let result = CreateBlogPostCommand::new(BlogPostInput {
                slug: slug.to_string(),
                ..valid_input()
            });
            assert_eq!(result.unwrap_err(), expected, "slug {slug:?}");
        }
    }

    #[test]
    fn slug_at_max_length_is_accepted() {
        let result = CreateBlogPostCommand::new(BlogPostInput {
            slug: "a".repeat(50),
            ..valid_input()
        });
        assert!(result.is_ok());
    }

    #[test]
    fn content_is_required() {
        let result = CreateBlogPostCommand::new(BlogPostInput {
            content: "   ".to_string(),
            ..valid_input()
        });
        assert_eq!(result.unwrap_err(), CreateBlogPostCommandError::EmptyContent);
    }

    #[test]
    fn excerpt_and_tags_are_bounded() {
        let long_excerpt = CreateBlogPostCommand::new(BlogPostInput {
            excerpt: "x".repeat(501),
            ..valid_input()
        });
        assert_eq!(
            long_excerpt.unwrap_err(),
            CreateBlogPostCommandError::ExcerptTooLong
        );

        let long_tags = CreateBlogPostCommand::new(BlogPostInput {
            tags: "t,".repeat(101),
            ..valid_input()
        });
        assert_eq!(long_tags.unwrap_err(), CreateBlogPostCommandError::TagsTooLong);
    }
}
