use actix_web::{get, web, Responder};
use tracing::error;

use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/about/")]
pub async fn about_handler(data: web::Data<AppState>) -> impl Responder {
    match data.site.about.execute().await {
        Ok(ctx) => ApiResponse::success(ctx),
        Err(e) => {
            error!("Failed to build about page: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::Value;

    use crate::modules::resume::application::domain::entities::SkillCategory;
    use crate::modules::site::application::ports::incoming::use_cases::{
        AboutPageContext, AboutSkill, GetAboutPageError, GetAboutPageUseCase,
    };
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::fixtures::{education_view, skill_view};

    #[derive(Clone)]
    struct MockGetAboutPageUseCase {
        result: Result<AboutPageContext, GetAboutPageError>,
    }

    #[async_trait]
    impl GetAboutPageUseCase for MockGetAboutPageUseCase {
        async fn execute(&self) -> Result<AboutPageContext, GetAboutPageError> {
            self.result.clone()
        }
    }

    #[actix_web::test]
    async fn test_about_success() {
        let uc = MockGetAboutPageUseCase {
            result: Ok(AboutPageContext {
                personal_info: None,
                skills: vec![AboutSkill {
                    skill: skill_view(1, "Django", SkillCategory::Backend),
                    proficiency_percent: 90.0,
                }],
                education: vec![education_view(1, "Stanford University")],
                certifications: vec![],
            }),
        };
        let app_state = TestAppStateBuilder::default().with_about(uc).build();

        let app = test::init_service(App::new().app_data(app_state).service(about_handler)).await;
        let req = test::TestRequest::get().uri("/about/").to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["skills"][0]["name"], "Django");
        assert_eq!(body["data"]["skills"][0]["category_label"], "Backend");
        assert_eq!(body["data"]["skills"][0]["proficiency_percent"], 90.0);
        assert_eq!(
            body["data"]["education"][0]["institution"],
            "Stanford University"
        );
    }

    #[actix_web::test]
    async fn test_about_query_failed() {
        let uc = MockGetAboutPageUseCase {
            result: Err(GetAboutPageError::QueryFailed("db down".to_string())),
        };
        let app_state = TestAppStateBuilder::default().with_about(uc).build();

        let app = test::init_service(App::new().app_data(app_state).service(about_handler)).await;
        let req = test::TestRequest::get().uri("/about/").to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
    }
}
