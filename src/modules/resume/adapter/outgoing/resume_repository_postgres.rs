use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;

use crate::modules::resume::adapter::outgoing::sea_orm_entity::{
    certifications, educations, skills,
};
use crate::modules::resume::application::domain::entities::{
    CertificationDraft, EducationDraft, SkillDraft,
};
use crate::modules::resume::application::ports::outgoing::resume_repository::{
    ResumeRepository, ResumeRepositoryError,
};

#[derive(Clone)]
pub struct ResumeRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ResumeRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ResumeRepository for ResumeRepositoryPostgres {
    async fn get_or_create_skill(
        &self,
        draft: SkillDraft,
    ) -> Result<(i32, bool), ResumeRepositoryError> {
        if let Some(id) = self.find_skill_id_by_name(draft.name()).await? {
            return Ok((id, false));
        }

        let model = skills::ActiveModel {
            name: Set(draft.name().to_string()),
            proficiency: Set(draft.proficiency()),
            category: Set(draft.category().as_str().to_string()),
            icon: Set(draft.icon().to_string()),
            display_order: Set(draft.display_order()),
            is_active: Set(true),
            ..Default::default()
        };

        let inserted = model.insert(&*self.db).await.map_err(map_db_err)?;
        Ok((inserted.id, true))
    }

    async fn get_or_create_education(
        &self,
        draft: EducationDraft,
    ) -> Result<(i32, bool), ResumeRepositoryError> {
        let existing = educations::Entity::find()
            .filter(educations::Column::Institution.eq(draft.institution.as_str()))
            .filter(educations::Column::Degree.eq(draft.degree.as_str()))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        if let Some(found) = existing {
            return Ok((found.id, false));
        }

        let model = educations::ActiveModel {
            institution: Set(draft.institution),
            degree: Set(draft.degree),
            field_of_study: Set(draft.field_of_study),
            start_date: Set(draft.start_date),
            end_date: Set(draft.end_date),
            description: Set(draft.description),
            gpa: Set(draft.gpa),
            is_current: Set(draft.is_current),
            display_order: Set(0),
            ..Default::default()
        };

        let inserted = model.insert(&*self.db).await.map_err(map_db_err)?;
        Ok((inserted.id, true))
    }

    async fn get_or_create_certification(
        &self,
        draft: CertificationDraft,
    ) -> Result<(i32, bool), ResumeRepositoryError> {
        let existing = certifications::Entity::find()
            .filter(certifications::Column::Title.eq(draft.title.as_str()))
            .filter(certifications::Column::Issuer.eq(draft.issuer.as_str()))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        if let Some(found) = existing {
            return Ok((found.id, false));
        }

        let model = certifications::ActiveModel {
            title: Set(draft.title),
            issuer: Set(draft.issuer),
            issue_date: Set(draft.issue_date),
            expiry_date: Set(draft.expiry_date),
            credential_id: Set(draft.credential_id),
            credential_url: Set(draft.credential_url),
            description: Set(draft.description),
            is_active: Set(true),
            display_order: Set(0),
            ..Default::default()
        };

        let inserted = model.insert(&*self.db).await.map_err(map_db_err)?;
        Ok((inserted.id, true))
    }

    async fn find_skill_id_by_name(&self, name: &str) -> Result<Option<i32>, ResumeRepositoryError> {
        let found = skills::Entity::find()
            .filter(skills::Column::Name.eq(name))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(found.map(|m| m.id))
    }
}

fn map_db_err(e: DbErr) -> ResumeRepositoryError {
    ResumeRepositoryError::DatabaseError(e.to_string())
}
