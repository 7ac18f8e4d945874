use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use crate::modules::blog::adapter::outgoing::sea_orm_entity::blog_posts;
use crate::modules::blog::application::ports::outgoing::BlogPostResult;
use crate::modules::contact::adapter::outgoing::sea_orm_entity::contact_messages;
use crate::modules::profile::adapter::outgoing::sea_orm_entity::personal_info;
use crate::modules::profile::application::ports::outgoing::PersonalInfoView;
use crate::modules::project::adapter::outgoing::sea_orm_entity::projects;
use crate::modules::project::application::ports::outgoing::{ProjectView, TechStackItem};
use crate::modules::resume::adapter::outgoing::sea_orm_entity::{
    certifications, educations, skills,
};
use crate::modules::resume::application::domain::entities::SkillCategory;
use crate::modules::resume::application::ports::outgoing::{
    CertificationView, EducationView, SkillView,
};

fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap()
}

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ──────────────────────────────────────────────────────────
// Profile
// ──────────────────────────────────────────────────────────

pub fn personal_info_model() -> personal_info::Model {
    personal_info::Model {
        id: 1,
        name: "Test Owner".to_string(),
        title: "Software Engineer".to_string(),
        bio: "Builds things.".to_string(),
        profile_image: None,
        resume: None,
        email: "owner@example.com".to_string(),
        phone: String::new(),
        location: "Remote".to_string(),
        github_url: "https://github.com/owner".to_string(),
        linkedin_url: String::new(),
        twitter_url: String::new(),
        website_url: String::new(),
        updated_at: fixed_now().fixed_offset(),
    }
}

pub fn personal_info_view() -> PersonalInfoView {
    PersonalInfoView {
        name: "Test Owner".to_string(),
        title: "Software Engineer".to_string(),
        bio: "Builds things.".to_string(),
        profile_image_url: None,
        resume_url: None,
        email: "owner@example.com".to_string(),
        phone: String::new(),
        location: "Remote".to_string(),
        github_url: "https://github.com/owner".to_string(),
        linkedin_url: String::new(),
        twitter_url: String::new(),
        website_url: String::new(),
        updated_at: fixed_now(),
    }
}

// ──────────────────────────────────────────────────────────
// Resume
// ──────────────────────────────────────────────────────────

pub fn skill_model(id: i32, name: &str, category: &str) -> skills::Model {
    skills::Model {
        id,
        name: name.to_string(),
        proficiency: 8.0,
        category: category.to_string(),
        icon: String::new(),
        display_order: 0,
        is_active: true,
    }
}

pub fn skill_view(id: i32, name: &str, category: SkillCategory) -> SkillView {
    SkillView {
        id,
        name: name.to_string(),
        proficiency: 8.0,
        category,
        category_label: category.label(),
        icon: String::new(),
        display_order: 0,
    }
}

pub fn education_model(id: i32, institution: &str) -> educations::Model {
    educations::Model {
        id,
        institution: institution.to_string(),
        degree: "Bachelor of Science".to_string(),
        field_of_study: "Computer Science".to_string(),
        start_date: day(2014, 9, 1),
        end_date: Some(day(2018, 6, 1)),
        description: String::new(),
        gpa: Some(3.8),
        is_current: false,
        display_order: 0,
    }
}

pub fn education_view(id: i32, institution: &str) -> EducationView {
    EducationView {
        id,
        institution: institution.to_string(),
        degree: "Bachelor of Science".to_string(),
        field_of_study: "Computer Science".to_string(),
        start_date: day(2014, 9, 1),
        end_date: Some(day(2018, 6, 1)),
        description: String::new(),
        gpa: Some(3.8),
        is_current: false,
        display_order: 0,
    }
}

pub fn certification_model(id: i32, title: &str) -> certifications::Model {
    certifications::Model {
        id,
        title: title.to_string(),
        issuer: "Amazon Web Services".to_string(),
        issue_date: day(2022, 3, 10),
        expiry_date: None,
        credential_id: String::new(),
        credential_url: String::new(),
        description: String::new(),
        is_active: true,
        display_order: 0,
    }
}

pub fn certification_view(id: i32, title: &str) -> CertificationView {
    CertificationView {
        id,
        title: title.to_string(),
        issuer: "Amazon Web Services".to_string(),
        issue_date: day(2022, 3, 10),
        expiry_date: None,
        credential_id: String::new(),
        credential_url: String::new(),
        description: String::new(),
        display_order: 0,
    }
}

// ──────────────────────────────────────────────────────────
// Projects
// ──────────────────────────────────────────────────────────

pub fn project_model(id: i32, title: &str) -> projects::Model {
    projects::Model {
        id,
        title: title.to_string(),
        description: format!("{title} description"),
        long_description: String::new(),
        image: None,
        github_url: String::new(),
        live_url: String::new(),
        featured: false,
        display_order: 0,
        created_at: fixed_now().fixed_offset(),
        updated_at: fixed_now().fixed_offset(),
    }
}

/// `tech` is `(skill_id, name)` in display order.
pub fn project_view(id: i32, title: &str, tech: &[(i32, &str)]) -> ProjectView {
    ProjectView {
        id,
        title: title.to_string(),
        description: format!("{title} description"),
        long_description: String::new(),
        image_url: None,
        github_url: String::new(),
        live_url: String::new(),
        featured: false,
        display_order: 0,
        tech_stack: tech
            .iter()
            .map(|(skill_id, name)| TechStackItem {
                id: *skill_id,
                name: name.to_string(),
                icon: String::new(),
            })
            .collect(),
        created_at: fixed_now(),
        updated_at: fixed_now(),
    }
}

// ──────────────────────────────────────────────────────────
// Blog
// ──────────────────────────────────────────────────────────

pub fn blog_post_model(id: i32, slug: &str) -> blog_posts::Model {
    blog_posts::Model {
        id,
        title: slug.replace('-', " "),
        slug: slug.to_string(),
        content: "Body".to_string(),
        excerpt: String::new(),
        featured_image: None,
        author: "Test Owner".to_string(),
        published: true,
        featured: false,
        tags: "rust, web".to_string(),
        created_at: fixed_now().fixed_offset(),
        updated_at: fixed_now().fixed_offset(),
    }
}

pub fn blog_post_result(id: i32, slug: &str) -> BlogPostResult {
    BlogPostResult {
        id,
        title: slug.replace('-', " "),
        slug: slug.to_string(),
        content: "Body".to_string(),
        excerpt: String::new(),
        featured_image: None,
        author: "Test Owner".to_string(),
        published: true,
        featured: false,
        tags: "rust, web".to_string(),
        created_at: fixed_now(),
        updated_at: fixed_now(),
    }
}

// ──────────────────────────────────────────────────────────
// Contact
// ──────────────────────────────────────────────────────────

pub fn contact_message_model(id: i32, subject: &str) -> contact_messages::Model {
    contact_messages::Model {
        id,
        name: "Jane Visitor".to_string(),
        email: "jane@example.com".to_string(),
        subject: subject.to_string(),
        message: "Hi there".to_string(),
        created_at: fixed_now().fixed_offset(),
        is_read: false,
    }
}
