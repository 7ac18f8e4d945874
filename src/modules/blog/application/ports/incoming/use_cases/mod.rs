mod create_blog_post;

pub use create_blog_post::{
    BlogPostInput, CreateBlogPostCommand, CreateBlogPostCommandError, CreateBlogPostError,
    CreateBlogPostUseCase,
};
