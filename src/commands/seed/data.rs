//! Sample content loaded by the `seed` subcommand.

use chrono::NaiveDate;

use crate::modules::blog::application::ports::incoming::use_cases::BlogPostInput;
use crate::modules::profile::application::domain::entities::PersonalInfoDraft;
use crate::modules::project::application::domain::entities::ProjectDraft;
use crate::modules::resume::application::domain::entities::{
    CertificationDraft, EducationDraft, SkillCategory,
};

pub fn personal_info() -> PersonalInfoDraft {
    PersonalInfoDraft {
        name: "Doni Alston G".to_string(),
        title: PersonalInfoDraft::DEFAULT_TITLE.to_string(),
        bio: "Passionate about creating innovative web solutions with Python, Django, and \
              modern frontend technologies. I love building scalable applications that make \
              a difference."
            .to_string(),
        email: "doni.alston@example.com".to_string(),
        phone: "+1 (555) 123-4567".to_string(),
        location: "San Francisco, CA".to_string(),
        github_url: "https://github.com/donialston".to_string(),
        linkedin_url: "https://linkedin.com/in/donialston".to_string(),
        twitter_url: "https://twitter.com/donialston".to_string(),
        website_url: String::new(),
    }
}

/// (name, proficiency out of 10, category, icon)
pub const SKILLS: &[(&str, f64, SkillCategory, &str)] = &[
    ("HTML5", 9.5, SkillCategory::Frontend, "fab fa-html5"),
    ("CSS3", 9.0, SkillCategory::Frontend, "fab fa-css3-alt"),
    ("JavaScript", 8.5, SkillCategory::Frontend, "fab fa-js-square"),
    ("React", 8.0, SkillCategory::Frontend, "fab fa-react"),
    ("Vue.js", 7.5, SkillCategory::Frontend, "fab fa-vue"),
    ("Tailwind CSS", 9.0, SkillCategory::Frontend, "fas fa-paint-brush"),
    ("Python", 9.5, SkillCategory::Backend, "fab fa-python"),
    ("Django", 9.0, SkillCategory::Backend, "fas fa-server"),
    ("Flask", 8.5, SkillCategory::Backend, "fas fa-flask"),
    ("FastAPI", 8.0, SkillCategory::Backend, "fas fa-rocket"),
    ("Node.js", 7.5, SkillCategory::Backend, "fab fa-node-js"),
    ("Express.js", 7.0, SkillCategory::Backend, "fas fa-code"),
    ("PostgreSQL", 8.5, SkillCategory::Database, "fas fa-database"),
    ("MySQL", 8.0, SkillCategory::Database, "fas fa-database"),
    ("MongoDB", 7.5, SkillCategory::Database, "fas fa-leaf"),
    ("Redis", 7.0, SkillCategory::Database, "fas fa-memory"),
    ("Git", 9.0, SkillCategory::Tools, "fab fa-git-alt"),
    ("Docker", 8.0, SkillCategory::Tools, "fab fa-docker"),
    ("AWS", 7.5, SkillCategory::Tools, "fab fa-aws"),
    ("Linux", 8.5, SkillCategory::Tools, "fab fa-linux"),
];

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

pub fn educations() -> Vec<EducationDraft> {
    vec![
        EducationDraft {
            institution: "University of California, Berkeley".to_string(),
            degree: "Bachelor of Science in Computer Science".to_string(),
            field_of_study: "Computer Science".to_string(),
            start_date: date(2018, 9, 1),
            end_date: Some(date(2022, 5, 15)),
            description: "Focused on software engineering, algorithms, and data structures."
                .to_string(),
            gpa: Some(3.8),
            is_current: false,
        },
        EducationDraft {
            institution: "Stanford University".to_string(),
            degree: "Master of Science in Software Engineering".to_string(),
            field_of_study: "Software Engineering".to_string(),
            start_date: date(2022, 9, 1),
            end_date: Some(date(2024, 5, 15)),
            description: "Advanced studies in software architecture, machine learning, and \
                          distributed systems."
                .to_string(),
            gpa: Some(3.9),
            is_current: true,
        },
    ]
}

pub fn certifications() -> Vec<CertificationDraft> {
    vec![
        CertificationDraft {
            title: "AWS Certified Solutions Architect".to_string(),
            issuer: "Amazon Web Services".to_string(),
            issue_date: date(2023, 6, 15),
            expiry_date: Some(date(2026, 6, 15)),
            credential_id: "AWS-SAA-123456".to_string(),
            credential_url: String::new(),
            description: "Validates expertise in designing distributed systems on AWS."
                .to_string(),
        },
        CertificationDraft {
            title: "Django Professional Certification".to_string(),
            issuer: "Django Software Foundation".to_string(),
            issue_date: date(2023, 3, 20),
            expiry_date: None,
            credential_id: "Django-Pro-789012".to_string(),
            credential_url: String::new(),
            description: "Certified Django developer with expertise in web development."
                .to_string(),
        },
        CertificationDraft {
            title: "Python Institute PCAP".to_string(),
            issuer: "Python Institute".to_string(),
            issue_date: date(2022, 12, 10),
            expiry_date: None,
            credential_id: "PCAP-345678".to_string(),
            credential_url: String::new(),
            description: "Certified Associate in Python Programming.".to_string(),
        },
    ]
}

fn project(
    title: &str,
    description: &str,
    long_description: &str,
    slug: &str,
    live_url: &str,
    featured: bool,
) -> ProjectDraft {
    ProjectDraft {
        title: title.to_string(),
        description: description.to_string(),
        long_description: long_description.to_string(),
        github_url: format!("https://github.com/donialston/{slug}"),
        live_url: live_url.to_string(),
        featured,
        display_order: 0,
    }
}

pub fn projects() -> Vec<ProjectDraft> {
    vec![
        project(
            "E-Commerce Platform",
            "A full-stack e-commerce platform built with Django and React.",
            "A complete e-commerce solution with user authentication, product management, \
             shopping cart, payment processing, and admin dashboard. Built with Django REST \
             Framework for the backend and React for the frontend.",
            "ecommerce-platform",
            "https://ecommerce-demo.example.com",
            true,
        ),
        project(
            "Task Management API",
            "RESTful API for task management with real-time updates.",
            "A task management API built with Django REST Framework and WebSockets. Features \
             include user authentication, project management, task assignment, real-time \
             notifications, and file uploads.",
            "task-management-api",
            "https://task-api.example.com",
            true,
        ),
        project(
            "Weather Dashboard",
            "Real-time weather dashboard with data visualization.",
            "A responsive dashboard showing current conditions and forecasts, built with \
             Django, Chart.js, and external weather APIs. Includes location-based weather, \
             historical data, and interactive charts.",
            "weather-dashboard",
            "https://weather-demo.example.com",
            true,
        ),
        project(
            "Blog CMS",
            "Content management system for blogging with Markdown support.",
            "A blogging platform with Markdown support, comments, user management, and SEO \
             optimization. Includes draft posts, categories, tags, and social sharing.",
            "blog-cms",
            "https://blog-cms.example.com",
            false,
        ),
        project(
            "Portfolio Website",
            "Personal portfolio website with admin panel.",
            "A responsive portfolio showcasing projects, skills, and experience, with dark and \
             light mode, a contact form, blog integration, and an admin panel.",
            "portfolio",
            "https://doni-alston.dev",
            false,
        ),
        project(
            "Chat Application",
            "Real-time chat application with WebSockets.",
            "A real-time chat built with Django Channels and WebSockets. Supports private \
             messages, group chats, file sharing, message history, and presence indicators.",
            "chat-app",
            "https://chat-demo.example.com",
            false,
        ),
    ]
}

/// Skills attached to a freshly created project, guessed from its title.
pub fn tech_for_title(title: &str) -> Vec<&'static str> {
    let mut names = Vec::new();
    if title.contains("Django") || title.contains("API") {
        names.push("Django");
    }
    if title.contains("React") || title.contains("Dashboard") {
        names.push("React");
    }
    if title.contains("Python") {
        names.push("Python");
    }
    names
}

pub fn blog_posts() -> Vec<BlogPostInput> {
    vec![
        BlogPostInput {
            title: "Getting Started with Django REST Framework".to_string(),
            slug: "getting-started-django-rest-framework".to_string(),
            content: include_str!("posts/getting-started-django-rest-framework.md").to_string(),
            excerpt: "Learn how to build powerful APIs with Django REST Framework. This \
                      comprehensive guide covers installation, serializers, viewsets, and more."
                .to_string(),
            published: true,
            featured: true,
            tags: "django, python, api, rest, web-development".to_string(),
            ..Default::default()
        },
        BlogPostInput {
            title: "Building Responsive UIs with Tailwind CSS".to_string(),
            slug: "building-responsive-uis-tailwind-css".to_string(),
            content: include_str!("posts/building-responsive-uis-tailwind-css.md").to_string(),
            excerpt: "Learn how to build beautiful, responsive user interfaces with Tailwind \
                      CSS. This guide covers the basics and advanced techniques."
                .to_string(),
            published: true,
            featured: true,
            tags: "tailwind, css, frontend, responsive, web-design".to_string(),
            ..Default::default()
        },
        BlogPostInput {
            title: "Python Best Practices for Web Development".to_string(),
            slug: "python-best-practices-web-development".to_string(),
            content: include_str!("posts/python-best-practices-web-development.md").to_string(),
            excerpt: "Learn essential Python best practices for web development. This \
                      comprehensive guide covers code organization, security, performance, and \
                      testing."
                .to_string(),
            published: true,
            featured: false,
            tags: "python, django, best-practices, web-development, programming".to_string(),
            ..Default::default()
        },
    ]
}
