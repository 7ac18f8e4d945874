pub use sea_orm_migration::prelude::*;

mod m20250601_000001_create_updated_at_function;
mod m20250601_000002_create_personal_info_table;
mod m20250601_000003_create_skills_table;
mod m20250601_000004_create_educations_table;
mod m20250601_000005_create_certifications_table;
mod m20250601_000006_create_projects_table;
mod m20250601_000007_create_project_skills_table;
mod m20250601_000008_create_blog_posts_table;
mod m20250601_000009_create_contact_messages_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_updated_at_function::Migration),
            Box::new(m20250601_000002_create_personal_info_table::Migration),
            Box::new(m20250601_000003_create_skills_table::Migration),
            Box::new(m20250601_000004_create_educations_table::Migration),
            Box::new(m20250601_000005_create_certifications_table::Migration),
            Box::new(m20250601_000006_create_projects_table::Migration),
            Box::new(m20250601_000007_create_project_skills_table::Migration),
            Box::new(m20250601_000008_create_blog_posts_table::Migration),
            Box::new(m20250601_000009_create_contact_messages_table::Migration),
        ]
    }
}
