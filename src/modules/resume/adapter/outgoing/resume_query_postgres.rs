use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;

use crate::modules::resume::adapter::outgoing::sea_orm_entity::{
    certifications, educations, skills,
};
use crate::modules::resume::application::domain::entities::SkillCategory;
use crate::modules::resume::application::ports::outgoing::resume_query::{
    CertificationView, EducationView, ResumeQuery, ResumeQueryError, SkillView,
};

#[derive(Clone)]
pub struct ResumeQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ResumeQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ResumeQuery for ResumeQueryPostgres {
    async fn active_skills(&self) -> Result<Vec<SkillView>, ResumeQueryError> {
        let models = skills::Entity::find()
            .filter(skills::Column::IsActive.eq(true))
            .order_by_asc(skills::Column::DisplayOrder)
            .order_by_asc(skills::Column::Name)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        models.into_iter().map(skill_to_view).collect()
    }

    async fn educations(&self) -> Result<Vec<EducationView>, ResumeQueryError> {
        let models = educations::Entity::find()
            .order_by_desc(educations::Column::StartDate)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(education_to_view).collect())
    }

    async fn active_certifications(&self) -> Result<Vec<CertificationView>, ResumeQueryError> {
        let models = certifications::Entity::find()
            .filter(certifications::Column::IsActive.eq(true))
            .order_by_desc(certifications::Column::IssueDate)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(certification_to_view).collect())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn skill_to_view(model: skills::Model) -> Result<SkillView, ResumeQueryError> {
    let category = model
        .category
        .parse::<SkillCategory>()
        .map_err(|e| ResumeQueryError::InvalidData(e.to_string()))?;

    Ok(SkillView {
        id: model.id,
        name: model.name,
        proficiency: model.proficiency,
        category,
        category_label: category.label(),
        icon: model.icon,
        display_order: model.display_order,
    })
}

fn education_to_view(model: educations::Model) -> EducationView {
    EducationView {
        id: model.id,
        institution: model.institution,
        degree: model.degree,
        field_of_study: model.field_of_study,
        start_date: model.start_date,
        end_date: model.end_date,
        description: model.description,
        gpa: model.gpa,
        is_current: model.is_current,
        display_order: model.display_order,
    }
}

fn certification_to_view(model: certifications::Model) -> CertificationView {
    CertificationView {
        id: model.id,
        title: model.title,
        issuer: model.issuer,
        issue_date: model.issue_date,
        expiry_date: model.expiry_date,
        credential_id: model.credential_id,
        credential_url: model.credential_url,
        description: model.description,
        display_order: model.display_order,
    }
}

fn map_db_err(e: DbErr) -> ResumeQueryError {
    ResumeQueryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
