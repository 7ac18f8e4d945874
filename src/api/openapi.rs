use crate::api::schemas::{ErrorDetail, ErrorResponse};
use crate::modules::project::adapter::incoming::web::routes::{
    FilterProjectsResponse, FilteredProject,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio Site API",
        version = "1.0.0",
        description = "JSON endpoints of the portfolio site",
    ),
    paths(
        // Project endpoints
        crate::modules::project::adapter::incoming::web::routes::filter_projects::filter_projects_handler,
    ),
    components(
        schemas(
            // Response wrappers
            ErrorResponse,
            ErrorDetail,

            // Project DTOs
            FilteredProject,
            FilterProjectsResponse,
        )
    ),
    tags(
        (name = "projects", description = "Project listing endpoints"),
    )
)]
pub struct ApiDoc;
