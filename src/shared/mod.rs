pub mod api;
pub mod media;
pub mod pagination;
pub mod template_filters;
