pub mod extractor_config;
pub mod response;

pub use extractor_config::{custom_form_config, custom_query_config};
pub use response::{ApiError, ApiResponse, FieldErrors};
