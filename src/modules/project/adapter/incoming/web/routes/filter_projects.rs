use actix_web::{get, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::{IntoParams, ToSchema};

use crate::api::schemas::ErrorResponse;
use crate::modules::project::application::ports::outgoing::ProjectView;
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, IntoParams)]
pub struct FilterProjectsQuery {
    /// Case-insensitive substring of a skill name
    #[param(example = "django")]
    pub tech: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FilteredProject {
    #[schema(example = 1)]
    pub id: i32,

    #[schema(example = "E-Commerce Platform")]
    pub title: String,

    pub description: String,

    /// Empty when the project has no image
    #[schema(example = "/media/projects/shop.png")]
    pub image_url: String,

    pub github_url: String,
    pub live_url: String,

    /// Skill names
    #[schema(example = json!(["Django", "PostgreSQL"]))]
    pub tech_stack: Vec<String>,
}

impl From<ProjectView> for FilteredProject {
    fn from(view: ProjectView) -> Self {
        Self {
            id: view.id,
            title: view.title,
            description: view.description,
            image_url: view.image_url.unwrap_or_default(),
            github_url: view.github_url,
            live_url: view.live_url,
            tech_stack: view.tech_stack.into_iter().map(|t| t.name).collect(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FilterProjectsResponse {
    pub projects: Vec<FilteredProject>,
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

/// Filter projects by technology
///
/// Returns every project whose tech stack has a skill name containing `tech`.
/// The payload is not wrapped in the standard envelope.
#[utoipa::path(
    get,
    path = "/api/projects/filter/",
    tag = "projects",
    params(FilterProjectsQuery),
    responses(
        (
            status = 200,
            description = "Matching projects",
            body = FilterProjectsResponse,
            example = json!({
                "projects": [{
                    "id": 1,
                    "title": "E-Commerce Platform",
                    "description": "A full-featured e-commerce platform",
                    "image_url": "",
                    "github_url": "https://github.com/example/ecommerce",
                    "live_url": "",
                    "tech_stack": ["Django", "PostgreSQL"]
                }]
            })
        ),
        (
            status = 500,
            description = "Internal server error",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "INTERNAL_ERROR",
                    "message": "An unexpected error occurred"
                }
            })
        ),
    )
)]
#[get("/api/projects/filter/")]
pub async fn filter_projects_handler(
    query: web::Query<FilterProjectsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.project.filter.execute(query.into_inner().tech).await {
        Ok(projects) => HttpResponse::Ok().json(FilterProjectsResponse {
            projects: projects.into_iter().map(FilteredProject::from).collect(),
        }),

        Err(e) => {
            error!("Failed to filter projects: {}", e);
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

    use crate::modules::project::application::ports::incoming::use_cases::{
        FilterProjectsError, FilterProjectsUseCase,
    };
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::fixtures::project_view;

    /* --------------------------------------------------
     * Mock FilterProjectsUseCase
     * -------------------------------------------------- */

    /// Keeps projects whose tech names contain `tech`, like the real query.
    #[derive(Clone)]
    struct InMemoryFilterProjects {
        projects: Vec<ProjectView>,
    }

    #[async_trait]
    impl FilterProjectsUseCase for InMemoryFilterProjects {
        async fn execute(
            &self,
            tech: Option<String>,
        ) -> Result<Vec<ProjectView>, FilterProjectsError> {
            let needle = tech.unwrap_or_default().to_lowercase();
            Ok(self
                .projects
                .iter()
                .filter(|p| {
                    needle.is_empty()
                        || p.tech_stack
                            .iter()
                            .any(|t| t.name.to_lowercase().contains(&needle))
                })
                .cloned()
                .collect())
        }
    }

    #[derive(Clone)]
    struct FailingFilterProjects;

    #[async_trait]
    impl FilterProjectsUseCase for FailingFilterProjects {
        async fn execute(
            &self,
            _tech: Option<String>,
        ) -> Result<Vec<ProjectView>, FilterProjectsError> {
            Err(FilterProjectsError::QueryFailed("db down".to_string()))
        }
    }

    fn catalogue() -> InMemoryFilterProjects {
        let mut with_image = project_view(2, "Weather Dashboard", &[(20, "React")]);
        with_image.image_url = Some("/media/projects/weather.png".to_string());

        InMemoryFilterProjects {
            projects: vec![
                project_view(1, "E-Commerce Platform", &[(10, "Django"), (11, "PostgreSQL")]),
                with_image,
            ],
        }
    }

    async fn get_json(uc: impl FilterProjectsUseCase + 'static, uri: &str) -> (StatusCode, Value) {
        let app_state = TestAppStateBuilder::default()
            .with_filter_projects(uc)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(filter_projects_handler),
        )
        .await;

        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        (status, test::read_body_json(resp).await)
    }

    /* --------------------------------------------------
     * Tests
     * -------------------------------------------------- */

    #[actix_web::test]
    async fn test_filter_by_tech_returns_only_matches() {
        let (status, body) = get_json(catalogue(), "/api/projects/filter/?tech=Django").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.get("success").is_none());

        let projects = body["projects"].as_array().unwrap();
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0]["title"], "E-Commerce Platform");
        assert_eq!(
            projects[0]["tech_stack"],
            serde_json::json!(["Django", "PostgreSQL"])
        );
        assert_eq!(projects[0]["image_url"], "");
    }

    #[actix_web::test]
    async fn test_filter_is_case_insensitive() {
        let (_, body) = get_json(catalogue(), "/api/projects/filter/?tech=react").await;

        let projects = body["projects"].as_array().unwrap();
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0]["image_url"], "/media/projects/weather.png");
    }

    #[actix_web::test]
    async fn test_empty_filter_returns_all() {
        let (_, body) = get_json(catalogue(), "/api/projects/filter/").await;

        assert_eq!(body["projects"].as_array().unwrap().len(), 2);
    }

    #[actix_web::test]
    async fn test_filter_failure_is_internal_error() {
        let (status, body) =
            get_json(FailingFilterProjects, "/api/projects/filter/?tech=rust").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
    }
}
