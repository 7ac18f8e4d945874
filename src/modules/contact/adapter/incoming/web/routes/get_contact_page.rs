use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::modules::contact::application::domain::entities::ContactNotice;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Unknown `notice` values are ignored.
#[derive(Debug, Deserialize)]
pub struct ContactPageQuery {
    pub notice: Option<String>,
}

#[get("/contact/")]
pub async fn get_contact_page_handler(
    query: web::Query<ContactPageQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let notice = query
        .notice
        .as_deref()
        .and_then(|n| n.parse::<ContactNotice>().ok());

    match data.contact.page.execute(notice).await {
        Ok(ctx) => ApiResponse::success(ctx),
        Err(e) => {
            error!("Failed to build contact page: {}", e);
            ApiResponse::internal_error()
        }
    }
}
