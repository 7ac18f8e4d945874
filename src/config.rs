// src/config.rs
use std::env;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is not set in .env file")]
    Missing(&'static str),

    #[error("{key} has an invalid value: {value}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SmtpConfig {
    /// Authenticated relay (production).
    Relay {
        server: String,
        username: String,
        password: String,
    },
    /// Plain local catcher such as Mailpit (RUST_ENV=test).
    Local { host: String, port: u16 },
}

/// Settings every subcommand needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub rust_env: String,
    pub database_url: String,
    pub email_from: String,
    pub contact_recipient: String,
    pub media_root: PathBuf,
    pub media_url: String,
    pub site_owner_name: String,
}

/// Settings only `serve` needs: the listen address and outgoing mail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub smtp: SmtpConfig,
}

pub const DEFAULT_SITE_OWNER_NAME: &str = "Site Owner";

struct Vars<F> {
    lookup: F,
}

impl<F> Vars<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn get(&self, key: &str) -> Option<String> {
        (self.lookup)(key).filter(|v| !v.trim().is_empty())
    }

    fn require(&self, key: &'static str) -> Result<String, ConfigError> {
        self.get(key).ok_or(ConfigError::Missing(key))
    }

    fn parse<T: std::str::FromStr>(&self, key: &'static str, raw: String) -> Result<T, ConfigError> {
        raw.parse::<T>()
            .map_err(|_| ConfigError::Invalid { key, value: raw })
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let vars = Vars { lookup };

        let email_from = vars.require("EMAIL_FROM")?;
        let contact_recipient = vars
            .get("CONTACT_RECIPIENT_EMAIL")
            .unwrap_or_else(|| email_from.clone());

        Ok(Self {
            rust_env: vars.get("RUST_ENV").unwrap_or_else(|| "development".to_string()),
            database_url: vars.require("DATABASE_URL")?,
            email_from,
            contact_recipient,
            media_root: PathBuf::from(vars.get("MEDIA_ROOT").unwrap_or_else(|| "media".to_string())),
            media_url: vars.get("MEDIA_URL").unwrap_or_else(|| "/media/".to_string()),
            site_owner_name: vars
                .get("SITE_OWNER_NAME")
                .unwrap_or_else(|| DEFAULT_SITE_OWNER_NAME.to_string()),
        })
    }
}

impl ServerConfig {
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn from_env(rust_env: &str) -> Result<Self, ConfigError> {
        Self::from_lookup(rust_env, |key| env::var(key).ok())
    }

    /// `RUST_ENV=test` talks to a local catcher; anything else needs relay credentials.
    pub fn from_lookup<F>(rust_env: &str, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let vars = Vars { lookup };

        let smtp = if rust_env == "test" {
            let port_raw = vars.get("SMTP_PORT").unwrap_or_else(|| "1025".to_string());
            SmtpConfig::Local {
                host: vars.get("SMTP_HOST").unwrap_or_else(|| "localhost".to_string()),
                port: vars.parse("SMTP_PORT", port_raw)?,
            }
        } else {
            SmtpConfig::Relay {
                server: vars.require("SMTP_SERVER")?,
                username: vars.require("SMTP_USERNAME")?,
                password: vars.require("SMTP_PASSWORD")?,
            }
        };

        Ok(Self {
            host: vars.require("HOST")?,
            port: vars.parse("PORT", vars.require("PORT")?)?,
            smtp,
        })
    }
}

/// Loads `.env.{RUST_ENV}` first, then falls back to `.env`.
#[cfg(not(tarpaulin_include))]
pub fn load_dotenv() {
    let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }
}
