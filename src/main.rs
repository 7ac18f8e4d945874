pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

use crate::api::openapi::ApiDoc;
use crate::cli::{Cli, Command};
use crate::commands::seed::SeedService;
use crate::commands::upload_profile_image::ProfileImageUploader;
use crate::config::{load_dotenv, AppConfig, ServerConfig, SmtpConfig};

use crate::modules::blog::adapter::outgoing::BlogPostRepositoryPostgres;
use crate::modules::blog::application::service::CreateBlogPostService;
use crate::modules::contact::adapter::outgoing::{
    ContactMessageRepositoryPostgres, EmailContactNotifier,
};
use crate::modules::contact::application::contact_use_cases::ContactUseCases;
use crate::modules::contact::application::service::{GetContactPageService, SubmitContactService};
use crate::modules::email::adapter::outgoing::SmtpEmailSender;
use crate::modules::email::application::ports::outgoing::EmailSender;
use crate::modules::profile::adapter::outgoing::{
    PersonalInfoQueryPostgres, PersonalInfoRepositoryPostgres,
};
use crate::modules::profile::application::domain::entities::PersonalInfoDraft;
use crate::modules::project::adapter::outgoing::{ProjectQueryPostgres, ProjectRepositoryPostgres};
use crate::modules::project::application::project_use_cases::ProjectUseCases;
use crate::modules::project::application::service::{
    FilterProjectsService, GetProjectDetailService, GetProjectsPageService,
};
use crate::modules::resume::adapter::outgoing::{ResumeQueryPostgres, ResumeRepositoryPostgres};
use crate::modules::site::application::service::{GetAboutPageService, GetHomePageService};
use crate::modules::site::application::site_use_cases::SiteUseCases;
use crate::shared::api::{custom_form_config, custom_query_config};
use crate::shared::media::MediaUrls;

use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use clap::Parser;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub site: SiteUseCases,
    pub project: ProjectUseCases,
    pub contact: ContactUseCases,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    load_dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = AppConfig::from_env().context("Invalid configuration")?;

    info!("Starting application ({})...", config.rust_env);

    let db = Arc::new(connect(&config.database_url).await?);

    Migrator::up(db.as_ref(), None)
        .await
        .context("Failed to run migrations")?;

    match cli.command() {
        Command::Serve => serve(config, db).await,
        Command::Seed => seed(&config, db).await,
        Command::UploadProfileImage { path } => upload_profile_image(&config, db, &path).await,
    }
}

#[cfg(not(tarpaulin_include))]
async fn connect(database_url: &str) -> anyhow::Result<DatabaseConnection> {
    let mut opt = ConnectOptions::new(database_url.to_string());
    opt.max_connections(50)
        .min_connections(5)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    Database::connect(opt)
        .await
        .context("Failed to connect to database")
}

#[cfg(not(tarpaulin_include))]
fn smtp_sender(config: &AppConfig, server: &ServerConfig) -> anyhow::Result<SmtpEmailSender> {
    match &server.smtp {
        // Local Mailpit
        SmtpConfig::Local { host, port } => {
            Ok(SmtpEmailSender::new_local(host, *port, &config.email_from))
        }
        SmtpConfig::Relay {
            server,
            username,
            password,
        } => SmtpEmailSender::new(server, username, password, &config.email_from)
            .context("Failed to build SMTP transport"),
    }
}

#[cfg(not(tarpaulin_include))]
fn build_state(
    config: &AppConfig,
    server: &ServerConfig,
    db: &Arc<DatabaseConnection>,
) -> anyhow::Result<AppState> {
    let media = MediaUrls::new(config.media_url.clone());

    let personal_info = PersonalInfoQueryPostgres::new(Arc::clone(db), media.clone());
    let resume = ResumeQueryPostgres::new(Arc::clone(db));
    let projects = ProjectQueryPostgres::new(Arc::clone(db), media);

    let site = SiteUseCases {
        home: Arc::new(GetHomePageService::new(
            personal_info.clone(),
            projects.clone(),
        )),
        about: Arc::new(GetAboutPageService::new(
            personal_info.clone(),
            resume.clone(),
        )),
    };

    let project = ProjectUseCases {
        get_page: Arc::new(GetProjectsPageService::new(
            projects.clone(),
            personal_info.clone(),
            resume,
        )),
        get_detail: Arc::new(GetProjectDetailService::new(
            projects.clone(),
            personal_info.clone(),
        )),
        filter: Arc::new(FilterProjectsService::new(projects)),
    };

    let sender: Arc<dyn EmailSender + Send + Sync> = Arc::new(smtp_sender(config, server)?);
    let notifier = EmailContactNotifier::new(sender, config.contact_recipient.clone());

    let contact = ContactUseCases {
        page: Arc::new(GetContactPageService::new(personal_info)),
        submit: Arc::new(SubmitContactService::new(
            ContactMessageRepositoryPostgres::new(Arc::clone(db)),
            notifier,
        )),
    };

    Ok(AppState {
        site,
        project,
        contact,
    })
}

#[cfg(not(tarpaulin_include))]
async fn serve(config: AppConfig, db: Arc<DatabaseConnection>) -> anyhow::Result<()> {
    let server = ServerConfig::from_env(&config.rust_env).context("Invalid server configuration")?;
    let state = build_state(&config, &server, &db)?;
    let server_url = server.server_url();
    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&db)))
            .app_data(custom_query_config())
            .app_data(custom_form_config())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
async fn seed(config: &AppConfig, db: Arc<DatabaseConnection>) -> anyhow::Result<()> {
    let service = SeedService::new(
        PersonalInfoRepositoryPostgres::new(Arc::clone(&db)),
        ResumeRepositoryPostgres::new(Arc::clone(&db)),
        ProjectRepositoryPostgres::new(Arc::clone(&db)),
        CreateBlogPostService::new(
            BlogPostRepositoryPostgres::new(Arc::clone(&db)),
            config.site_owner_name.clone(),
        ),
    );

    let report = service.run().await.context("Seeding failed")?;
    info!(?report, "Seed finished");
    Ok(())
}

#[cfg(not(tarpaulin_include))]
async fn upload_profile_image(
    config: &AppConfig,
    db: Arc<DatabaseConnection>,
    path: &Path,
) -> anyhow::Result<()> {
    let uploader = ProfileImageUploader::new(
        PersonalInfoRepositoryPostgres::new(db),
        config.media_root.clone(),
        PersonalInfoDraft::minimal(&config.site_owner_name, &config.email_from),
    );

    let record = uploader
        .upload(path)
        .await
        .with_context(|| format!("Error uploading image {}", path.display()))?;

    let media = MediaUrls::new(config.media_url.clone());
    if let Some(stored) = record.profile_image.as_deref() {
        info!("Image saved as: {} ({})", stored, media.url_for(stored));
    }
    Ok(())
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Site
    cfg.service(crate::modules::site::adapter::incoming::web::routes::home_handler);
    cfg.service(crate::modules::site::adapter::incoming::web::routes::about_handler);
    cfg.service(crate::modules::site::adapter::incoming::web::routes::loading_handler);
    // Projects
    cfg.service(crate::modules::project::adapter::incoming::web::routes::get_projects_page_handler);
    cfg.service(crate::modules::project::adapter::incoming::web::routes::get_project_detail_handler);
    cfg.service(crate::modules::project::adapter::incoming::web::routes::filter_projects_handler);
    // Contact
    cfg.service(crate::modules::contact::adapter::incoming::web::routes::get_contact_page_handler);
    cfg.service(crate::modules::contact::adapter::incoming::web::routes::submit_contact_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
        std::process::exit(1);
    }
}
