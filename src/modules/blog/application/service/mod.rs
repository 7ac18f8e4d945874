mod create_blog_post_service;

pub use create_blog_post_service::CreateBlogPostService;
