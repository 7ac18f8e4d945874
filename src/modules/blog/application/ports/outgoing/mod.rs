pub mod blog_post_repository;

pub use blog_post_repository::{
    BlogPostRepository, BlogPostRepositoryError, BlogPostResult, CreateBlogPostData,
};
