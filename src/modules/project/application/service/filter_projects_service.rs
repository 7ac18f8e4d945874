use async_trait::async_trait;

use crate::modules::project::application::domain::entities::ProjectListFilter;
use crate::modules::project::application::ports::incoming::use_cases::{
    FilterProjectsError, FilterProjectsUseCase,
};
use crate::modules::project::application::ports::outgoing::{ProjectQuery, ProjectView};

pub struct FilterProjectsService<Q>
where
    Q: ProjectQuery,
{
    query: Q,
}

impl<Q> FilterProjectsService<Q>
where
    Q: ProjectQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> FilterProjectsUseCase for FilterProjectsService<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    async fn execute(&self, tech: Option<String>) -> Result<Vec<ProjectView>, FilterProjectsError> {
        let filter = ProjectListFilter::from_tech(tech.as_deref());

        self.query
            .list_all(&filter)
            .await
            .map_err(|e| FilterProjectsError::QueryFailed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::fixtures::project_view;
    use crate::tests::support::stubs::StubProjectQuery;

    #[tokio::test]
    async fn empty_tech_means_no_filter() {
        let query = StubProjectQuery::with_projects(vec![project_view(1, "A", &[])]);
        let svc = FilterProjectsService::new(query.clone());

        let projects = svc.execute(Some(String::new())).await.unwrap();

        assert_eq!(projects.len(), 1);
        assert_eq!(query.last_filter(), Some(ProjectListFilter::default()));
    }

    #[tokio::test]
    async fn query_error_is_mapped() {
        let svc = FilterProjectsService::new(StubProjectQuery::failing());

        let result = svc.execute(Some("rust".to_string())).await;

        assert!(matches!(result, Err(FilterProjectsError::QueryFailed(_))));
    }
}
