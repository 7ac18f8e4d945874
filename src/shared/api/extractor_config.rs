// src/shared/api/extractor_config.rs
use crate::shared::api::ApiResponse;
use actix_web::web::{FormConfig, QueryConfig};

pub fn custom_query_config() -> QueryConfig {
    QueryConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        actix_web::error::InternalError::from_response(
            err,
            ApiResponse::bad_request("INVALID_QUERY", &message),
        )
        .into()
    })
}

/// Contact submissions are small; anything bigger is rejected before parsing.
pub fn custom_form_config() -> FormConfig {
    FormConfig::default()
        .limit(64 * 1024)
        .error_handler(|err, _req| {
            let message = err.to_string();
            actix_web::error::InternalError::from_response(
                err,
                ApiResponse::bad_request("INVALID_FORM", &message),
            )
            .into()
        })
}
