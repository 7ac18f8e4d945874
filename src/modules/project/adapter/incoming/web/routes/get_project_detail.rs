use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::project::application::ports::incoming::use_cases::GetProjectDetailError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/projects/{project_id}/")]
pub async fn get_project_detail_handler(
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    let project_id = path.into_inner();

    match data.project.get_detail.execute(project_id).await {
        Ok(ctx) => ApiResponse::success(ctx),

        Err(GetProjectDetailError::NotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }

        Err(GetProjectDetailError::QueryFailed(msg)) => {
            error!(project_id, "Failed to load project detail: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
