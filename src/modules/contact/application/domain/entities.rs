use email_address::EmailAddress;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

pub const MAX_NAME_LEN: usize = 100;
pub const MAX_EMAIL_LEN: usize = 254;
pub const MAX_SUBJECT_LEN: usize = 200;

const REQUIRED: &str = "This field is required.";
const INVALID_EMAIL: &str = "Enter a valid email address.";

//
// ──────────────────────────────────────────────────────────
// Raw form input
// ──────────────────────────────────────────────────────────
//

/// Contact form as posted. Missing fields deserialize as empty strings so
/// they surface as field errors rather than extractor failures.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactFormInput {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, thiserror::Error)]
#[error("Invalid contact form")]
pub struct ContactFormErrors {
    pub fields: BTreeMap<String, Vec<String>>,
}

impl ContactFormErrors {
    fn push(&mut self, field: &str, message: impl Into<String>) {
        self.fields
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn has(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }
}

//
// ──────────────────────────────────────────────────────────
// Validated submission
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    name: String,
    email: String,
    subject: String,
    message: String,
}

impl ContactSubmission {
    /// Trims every field and collects all field errors at once.
    pub fn parse(input: ContactFormInput) -> Result<Self, ContactFormErrors> {
        let mut errors = ContactFormErrors::default();

        let name = required(&mut errors, "name", &input.name, Some(MAX_NAME_LEN));
        let email = required(&mut errors, "email", &input.email, Some(MAX_EMAIL_LEN));
        let subject = required(&mut errors, "subject", &input.subject, Some(MAX_SUBJECT_LEN));
        let message = required(&mut errors, "message", &input.message, None);

        if !email.is_empty() && !EmailAddress::is_valid(&email) {
            errors.push("email", INVALID_EMAIL);
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(Self {
            name,
            email,
            subject,
            message,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

fn required(
    errors: &mut ContactFormErrors,
    field: &str,
    raw: &str,
    max: Option<usize>,
) -> String {
    let value = raw.trim().to_string();

    if value.is_empty() {
        errors.push(field, REQUIRED);
        return value;
    }

    if let Some(max) = max {
        let len = value.chars().count();
        if len > max {
            errors.push(
                field,
                format!("Ensure this value has at most {max} characters (it has {len})."),
            );
        }
    }

    value
}

//
// ──────────────────────────────────────────────────────────
// Flash notice after post/redirect/get
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactNotice {
    Sent,
    Saved,
}

impl ContactNotice {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactNotice::Sent => "sent",
            ContactNotice::Saved => "saved",
        }
    }

    pub fn level(&self) -> &'static str {
        match self {
            ContactNotice::Sent => "success",
            ContactNotice::Saved => "warning",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            ContactNotice::Sent => "Thank you for your message! I'll get back to you soon.",
            ContactNotice::Saved => {
                "Your message has been saved, but there was an issue sending the notification email."
            }
        }
    }
}

impl FromStr for ContactNotice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sent" => Ok(ContactNotice::Sent),
            "saved" => Ok(ContactNotice::Saved),
            other => Err(format!("unknown notice: {other}")),
        }
    }
}
