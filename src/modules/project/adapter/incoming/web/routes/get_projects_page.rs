use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::{error, warn};

use crate::modules::project::application::ports::incoming::use_cases::GetProjectsPageError;
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Query DTO
// ──────────────────────────────────────────────────────────
//

/// `page` stays a string so that `last` and malformed numbers reach the
/// pagination rules instead of failing extraction.
#[derive(Debug, Deserialize)]
pub struct ProjectsPageQuery {
    pub tech: Option<String>,
    pub page: Option<String>,
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

#[get("/projects/")]
pub async fn get_projects_page_handler(
    query: web::Query<ProjectsPageQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let ProjectsPageQuery { tech, page } = query.into_inner();

    match data.project.get_page.execute(tech, page).await {
        Ok(ctx) => ApiResponse::success(ctx),

        Err(GetProjectsPageError::PageNotFound(msg)) => {
            warn!("Projects page rejected: {}", msg);
            ApiResponse::not_found("PAGE_NOT_FOUND", &msg)
        }

        Err(GetProjectsPageError::QueryFailed(msg)) => {
            error!("Failed to build projects page: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
