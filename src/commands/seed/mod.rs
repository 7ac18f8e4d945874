//! Idempotent sample-data loader behind the `seed` subcommand.

pub mod data;

use tracing::{info, warn};

use crate::modules::blog::application::ports::incoming::use_cases::{
    CreateBlogPostCommand, CreateBlogPostCommandError, CreateBlogPostError, CreateBlogPostUseCase,
};
use crate::modules::profile::application::ports::outgoing::{
    PersonalInfoRepository, PersonalInfoRepositoryError,
};
use crate::modules::project::application::domain::entities::ProjectValidationError;
use crate::modules::project::application::ports::outgoing::{
    ProjectRepository, ProjectRepositoryError,
};
use crate::modules::resume::application::domain::entities::{
    ResumeValidationError, SkillDraft,
};
use crate::modules::resume::application::ports::outgoing::{
    ResumeRepository, ResumeRepositoryError,
};

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("Invalid sample data: {0}")]
    InvalidData(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<ResumeValidationError> for SeedError {
    fn from(e: ResumeValidationError) -> Self {
        SeedError::InvalidData(e.to_string())
    }
}

impl From<ProjectValidationError> for SeedError {
    fn from(e: ProjectValidationError) -> Self {
        SeedError::InvalidData(e.to_string())
    }
}

impl From<CreateBlogPostCommandError> for SeedError {
    fn from(e: CreateBlogPostCommandError) -> Self {
        SeedError::InvalidData(e.to_string())
    }
}

impl From<PersonalInfoRepositoryError> for SeedError {
    fn from(e: PersonalInfoRepositoryError) -> Self {
        SeedError::Storage(e.to_string())
    }
}

impl From<ResumeRepositoryError> for SeedError {
    fn from(e: ResumeRepositoryError) -> Self {
        SeedError::Storage(e.to_string())
    }
}

impl From<ProjectRepositoryError> for SeedError {
    fn from(e: ProjectRepositoryError) -> Self {
        SeedError::Storage(e.to_string())
    }
}

/// Rows inserted by one run. A second run reports zeros.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SeedReport {
    pub personal_info_created: bool,
    pub skills_created: usize,
    pub educations_created: usize,
    pub certifications_created: usize,
    pub projects_created: usize,
    pub blog_posts_created: usize,
}

pub struct SeedService<P, R, J, B>
where
    P: PersonalInfoRepository,
    R: ResumeRepository,
    J: ProjectRepository,
    B: CreateBlogPostUseCase,
{
    personal_info: P,
    resume: R,
    projects: J,
    blog: B,
}

impl<P, R, J, B> SeedService<P, R, J, B>
where
    P: PersonalInfoRepository,
    R: ResumeRepository,
    J: ProjectRepository,
    B: CreateBlogPostUseCase,
{
    pub fn new(personal_info: P, resume: R, projects: J, blog: B) -> Self {
        Self {
            personal_info,
            resume,
            projects,
            blog,
        }
    }

    pub async fn run(&self) -> Result<SeedReport, SeedError> {
        info!("Creating sample data...");
        let mut report = SeedReport::default();

        let (_, created) = self
            .personal_info
            .get_or_create(data::personal_info())
            .await?;
        if created {
            info!("Created personal info");
        }
        report.personal_info_created = created;

        for (name, proficiency, category, icon) in data::SKILLS {
            let draft = SkillDraft::new(name, *proficiency, *category, icon)?;
            let (_, created) = self.resume.get_or_create_skill(draft).await?;
            if created {
                info!("Created skill: {}", name);
                report.skills_created += 1;
            }
        }

        for draft in data::educations() {
            let draft = draft.validated()?;
            let degree = draft.degree.clone();
            let (_, created) = self.resume.get_or_create_education(draft).await?;
            if created {
                info!("Created education: {}", degree);
                report.educations_created += 1;
            }
        }

        for draft in data::certifications() {
            let draft = draft.validated()?;
            let title = draft.title.clone();
            let (_, created) = self.resume.get_or_create_certification(draft).await?;
            if created {
                info!("Created certification: {}", title);
                report.certifications_created += 1;
            }
        }

        for draft in data::projects() {
            let draft = draft.validated()?;
            let title = draft.title.clone();
            let (project_id, created) = self.projects.get_or_create(draft).await?;
            if !created {
                continue;
            }

            // Tech stack links are only attached to new projects.
            for skill in data::tech_for_title(&title) {
                match self.resume.find_skill_id_by_name(skill).await? {
                    Some(skill_id) => self.projects.add_tech(project_id, skill_id).await?,
                    None => warn!("Skill {} not found; not linked to {}", skill, title),
                }
            }

            info!("Created project: {}", title);
            report.projects_created += 1;
        }

        for input in data::blog_posts() {
            let command = CreateBlogPostCommand::new(input)?;
            let title = command.title().to_string();
            match self.blog.execute(command).await {
                Ok(_) => {
                    info!("Created blog post: {}", title);
                    report.blog_posts_created += 1;
                }
                Err(CreateBlogPostError::SlugAlreadyExists) => {}
                Err(e) => return Err(SeedError::Storage(e.to_string())),
            }
        }

        info!("Successfully populated database with sample data!");
        Ok(report)
    }
}
