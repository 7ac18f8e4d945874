// src/modules/project/adapter/outgoing/project_query_postgres.rs

use async_trait::async_trait;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::{
    sea_query::Expr, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Select,
};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::modules::project::adapter::outgoing::sea_orm_entity::project_skills;
use crate::modules::project::adapter::outgoing::sea_orm_entity::projects::{self, Column, Entity};
use crate::modules::project::application::domain::entities::ProjectListFilter;
use crate::modules::project::application::ports::outgoing::project_query::{
    ProjectQuery, ProjectQueryError, ProjectView, TechStackItem,
};
use crate::modules::resume::adapter::outgoing::sea_orm_entity::skills;
use crate::shared::media::MediaUrls;
use crate::shared::pagination::PageRequest;

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct ProjectQueryPostgres {
    db: Arc<DatabaseConnection>,
    media: MediaUrls,
}

impl ProjectQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>, media: MediaUrls) -> Self {
        Self { db, media }
    }

    /// Base select for a filter, or `None` when the filter can match nothing.
    async fn filtered(
        &self,
        filter: &ProjectListFilter,
    ) -> Result<Option<Select<Entity>>, ProjectQueryError> {
        let query = default_order(Entity::find());

        let Some(pattern) = filter.tech_pattern() else {
            return Ok(Some(query));
        };

        let skill_ids = skills::Entity::find()
            .filter(Expr::col(skills::Column::Name).ilike(pattern))
            .select_only()
            .column(skills::Column::Id)
            .into_tuple::<i32>()
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        if skill_ids.is_empty() {
            return Ok(None);
        }

        let project_ids = self.project_ids_with_skills(&skill_ids, None).await?;
        if project_ids.is_empty() {
            return Ok(None);
        }

        Ok(Some(query.filter(Column::Id.is_in(project_ids))))
    }

    async fn project_ids_with_skills(
        &self,
        skill_ids: &[i32],
        exclude_project: Option<i32>,
    ) -> Result<Vec<i32>, ProjectQueryError> {
        let mut query = project_skills::Entity::find()
            .filter(project_skills::Column::SkillId.is_in(skill_ids.to_vec()));

        if let Some(id) = exclude_project {
            query = query.filter(project_skills::Column::ProjectId.ne(id));
        }

        query
            .select_only()
            .column(project_skills::Column::ProjectId)
            .distinct()
            .into_tuple::<i32>()
            .all(&*self.db)
            .await
            .map_err(map_db_err)
    }

    /// Two queries regardless of how many projects are loaded.
    async fn with_tech_stacks(
        &self,
        models: Vec<projects::Model>,
    ) -> Result<Vec<ProjectView>, ProjectQueryError> {
        if models.is_empty() {
            return Ok(Vec::new());
        }

        let project_ids: Vec<i32> = models.iter().map(|m| m.id).collect();

        let links = project_skills::Entity::find()
            .filter(project_skills::Column::ProjectId.is_in(project_ids))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let linked_skills = if links.is_empty() {
            Vec::new()
        } else {
            let skill_ids: HashSet<i32> = links.iter().map(|l| l.skill_id).collect();
            skills::Entity::find()
                .filter(skills::Column::Id.is_in(skill_ids))
                .order_by_asc(skills::Column::DisplayOrder)
                .order_by_asc(skills::Column::Name)
                .all(&*self.db)
                .await
                .map_err(map_db_err)?
        };

        let mut by_project: HashMap<i32, HashSet<i32>> = HashMap::new();
        for link in links {
            by_project
                .entry(link.project_id)
                .or_default()
                .insert(link.skill_id);
        }

        Ok(models
            .into_iter()
            .map(|model| {
                let tech_stack = by_project
                    .get(&model.id)
                    .map(|ids| {
                        linked_skills
                            .iter()
                            .filter(|s| ids.contains(&s.id))
                            .map(skill_to_item)
                            .collect()
                    })
                    .unwrap_or_default();
                model_to_view(model, tech_stack, &self.media)
            })
            .collect())
    }
}

#[async_trait]
impl ProjectQuery for ProjectQueryPostgres {
    async fn featured(&self, limit: u64) -> Result<Vec<ProjectView>, ProjectQueryError> {
        let models = default_order(Entity::find())
            .filter(Column::Featured.eq(true))
            .limit(limit)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        self.with_tech_stacks(models).await
    }

    async fn get_by_id(&self, project_id: i32) -> Result<ProjectView, ProjectQueryError> {
        let model = Entity::find_by_id(project_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(ProjectQueryError::NotFound)?;

        self.with_tech_stacks(vec![model])
            .await?
            .pop()
            .ok_or(ProjectQueryError::NotFound)
    }

    async fn count(&self, filter: &ProjectListFilter) -> Result<u64, ProjectQueryError> {
        match self.filtered(filter).await? {
            Some(query) => query.count(&*self.db).await.map_err(map_db_err),
            None => Ok(0),
        }
    }

    async fn list(
        &self,
        filter: &ProjectListFilter,
        page: PageRequest,
    ) -> Result<Vec<ProjectView>, ProjectQueryError> {
        let Some(query) = self.filtered(filter).await? else {
            return Ok(Vec::new());
        };

        let models = query
            .offset(page.offset())
            .limit(page.per_page)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        self.with_tech_stacks(models).await
    }

    async fn list_all(
        &self,
        filter: &ProjectListFilter,
    ) -> Result<Vec<ProjectView>, ProjectQueryError> {
        let Some(query) = self.filtered(filter).await? else {
            return Ok(Vec::new());
        };

        let models = query.all(&*self.db).await.map_err(map_db_err)?;

        self.with_tech_stacks(models).await
    }

    async fn related(
        &self,
        project_id: i32,
        skill_ids: &[i32],
        limit: u64,
    ) -> Result<Vec<ProjectView>, ProjectQueryError> {
        if skill_ids.is_empty() {
            return Ok(Vec::new());
        }

        let related_ids = self
            .project_ids_with_skills(skill_ids, Some(project_id))
            .await?;
        if related_ids.is_empty() {
            return Ok(Vec::new());
        }

        let models = default_order(Entity::find())
            .filter(Column::Id.is_in(related_ids))
            .limit(limit)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        self.with_tech_stacks(models).await
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn default_order(query: Select<Entity>) -> Select<Entity> {
    query
        .order_by_asc(Column::DisplayOrder)
        .order_by_desc(Column::CreatedAt)
}

fn skill_to_item(skill: &skills::Model) -> TechStackItem {
    TechStackItem {
        id: skill.id,
        name: skill.name.clone(),
        icon: skill.icon.clone(),
    }
}

fn model_to_view(
    model: projects::Model,
    tech_stack: Vec<TechStackItem>,
    media: &MediaUrls,
) -> ProjectView {
    ProjectView {
        id: model.id,
        image_url: media.optional_url(model.image.as_deref()),
        title: model.title,
        description: model.description,
        long_description: model.long_description,
        github_url: model.github_url,
        live_url: model.live_url,
        featured: model.featured,
        display_order: model.display_order,
        tech_stack,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    }
}

fn map_db_err(e: DbErr) -> ProjectQueryError {
    ProjectQueryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
