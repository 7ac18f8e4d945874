use actix_web::{http::header, post, web, HttpResponse, Responder};
use tracing::error;

use crate::modules::contact::application::domain::entities::{
    ContactFormErrors, ContactFormInput,
};
use crate::modules::contact::application::ports::incoming::use_cases::SubmitContactError;
use crate::shared::api::ApiResponse;
use crate::AppState;

pub const CONTACT_FORM_INVALID: &str = "Please correct the errors below and try again.";

/// Post/redirect/get: a stored message redirects back to the contact page
/// with a notice telling whether the notification email went out. A rejected
/// form re-renders the page with the submitted values at 400.
#[post("/contact/")]
pub async fn submit_contact_handler(
    form: web::Form<ContactFormInput>,
    data: web::Data<AppState>,
) -> impl Responder {
    let input = form.into_inner();

    match data.contact.submit.execute(input.clone()).await {
        Ok(outcome) => HttpResponse::SeeOther()
            .insert_header((
                header::LOCATION,
                format!("/contact/?notice={}", outcome.notice().as_str()),
            ))
            .finish(),

        Err(SubmitContactError::Invalid(errors)) => rerender(&data, input, errors).await,

        Err(SubmitContactError::RepositoryError(msg)) => {
            error!("Failed to store contact message: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

async fn rerender(
    data: &AppState,
    input: ContactFormInput,
    errors: ContactFormErrors,
) -> HttpResponse {
    match data.contact.page.execute(None).await {
        Ok(page) => {
            let page = page.with_rejected(input, errors.fields.clone());
            ApiResponse::validation_error(page, CONTACT_FORM_INVALID, errors.fields)
        }
        Err(e) => {
            error!("Failed to build contact page: {}", e);
            ApiResponse::internal_error()
        }
    }
}
