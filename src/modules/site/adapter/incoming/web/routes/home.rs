use actix_web::{get, web, Responder};
use tracing::error;

use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/")]
pub async fn home_handler(data: web::Data<AppState>) -> impl Responder {
    match data.site.home.execute().await {
        Ok(ctx) => ApiResponse::success(ctx),
        Err(e) => {
            error!("Failed to build home page: {}", e);
            ApiResponse::internal_error()
        }
    }
}
