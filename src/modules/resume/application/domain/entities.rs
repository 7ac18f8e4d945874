use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

//
// ──────────────────────────────────────────────────────────
// Skill category
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Frontend,
    Backend,
    Database,
    Tools,
    Other,
}

impl SkillCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillCategory::Frontend => "frontend",
            SkillCategory::Backend => "backend",
            SkillCategory::Database => "database",
            SkillCategory::Tools => "tools",
            SkillCategory::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SkillCategory::Frontend => "Frontend",
            SkillCategory::Backend => "Backend",
            SkillCategory::Database => "Database",
            SkillCategory::Tools => "Tools & Technologies",
            SkillCategory::Other => "Other",
        }
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown skill category: {0}")]
pub struct UnknownSkillCategory(pub String);

impl FromStr for SkillCategory {
    type Err = UnknownSkillCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "frontend" => Ok(SkillCategory::Frontend),
            "backend" => Ok(SkillCategory::Backend),
            "database" => Ok(SkillCategory::Database),
            "tools" => Ok(SkillCategory::Tools),
            "other" => Ok(SkillCategory::Other),
            other => Err(UnknownSkillCategory(other.to_string())),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Validation
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ResumeValidationError {
    #[error("{0} is required")]
    Required(&'static str),

    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },

    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: f64,
        max: f64,
    },

    #[error("end_date cannot be before start_date")]
    EndBeforeStart,
}

fn required(field: &'static str, value: &str, max: usize) -> Result<String, ResumeValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ResumeValidationError::Required(field));
    }
    optional(field, value, max)
}

fn optional(field: &'static str, value: &str, max: usize) -> Result<String, ResumeValidationError> {
    let value = value.trim();
    if value.chars().count() > max {
        return Err(ResumeValidationError::TooLong { field, max });
    }
    Ok(value.to_string())
}

//
// ──────────────────────────────────────────────────────────
// Skill
// ──────────────────────────────────────────────────────────
//

pub const MIN_PROFICIENCY: f64 = 0.0;
pub const MAX_PROFICIENCY: f64 = 10.0;

#[derive(Debug, Clone, PartialEq)]
pub struct SkillDraft {
    name: String,
    proficiency: f64,
    category: SkillCategory,
    icon: String,
    display_order: i32,
}

impl SkillDraft {
    pub fn new(
        name: &str,
        proficiency: f64,
        category: SkillCategory,
        icon: &str,
    ) -> Result<Self, ResumeValidationError> {
        let name = required("name", name, 100)?;
        let icon = optional("icon", icon, 100)?;

        // NaN fails both comparisons, so it is rejected here too.
        if !(MIN_PROFICIENCY..=MAX_PROFICIENCY).contains(&proficiency) {
            return Err(ResumeValidationError::OutOfRange {
                field: "proficiency",
                min: MIN_PROFICIENCY,
                max: MAX_PROFICIENCY,
            });
        }

        Ok(Self {
            name,
            proficiency: (proficiency * 10.0).round() / 10.0,
            category,
            icon,
            display_order: 0,
        })
    }

    pub fn with_display_order(mut self, order: i32) -> Self {
        self.display_order = order.max(0);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn proficiency(&self) -> f64 {
        self.proficiency
    }

    pub fn category(&self) -> SkillCategory {
        self.category
    }

    pub fn icon(&self) -> &str {
        &self.icon
    }

    pub fn display_order(&self) -> i32 {
        self.display_order
    }
}

//
// ──────────────────────────────────────────────────────────
// Education
// ──────────────────────────────────────────────────────────
//

pub const MAX_GPA: f64 = 9.99;

#[derive(Debug, Clone, PartialEq)]
pub struct EducationDraft {
    pub institution: String,
    pub degree: String,
    pub field_of_study: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub description: String,
    pub gpa: Option<f64>,
    pub is_current: bool,
}

impl EducationDraft {
    /// Trims text fields and checks lengths, GPA range and date order.
    pub fn validated(self) -> Result<Self, ResumeValidationError> {
        if let Some(gpa) = self.gpa {
            if !(0.0..=MAX_GPA).contains(&gpa) {
                return Err(ResumeValidationError::OutOfRange {
                    field: "gpa",
                    min: 0.0,
                    max: MAX_GPA,
                });
            }
        }

        if matches!(self.end_date, Some(end) if end < self.start_date) {
            return Err(ResumeValidationError::EndBeforeStart);
        }

        Ok(Self {
            institution: required("institution", &self.institution, 200)?,
            degree: required("degree", &self.degree, 200)?,
            field_of_study: optional("field_of_study", &self.field_of_study, 200)?,
            description: self.description.trim().to_string(),
            gpa: self.gpa.map(|g| (g * 100.0).round() / 100.0),
            ..self
        })
    }
}

//
// ──────────────────────────────────────────────────────────
// Certification
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificationDraft {
    pub title: String,
    pub issuer: String,
    pub issue_date: NaiveDate,
    pub expiry_date: Option<NaiveDate>,
    pub credential_id: String,
    pub credential_url: String,
    pub description: String,
}

impl CertificationDraft {
    pub fn validated(self) -> Result<Self, ResumeValidationError> {
        Ok(Self {
            title: required("title", &self.title, 200)?,
            issuer: required("issuer", &self.issuer, 200)?,
            credential_id: optional("credential_id", &self.credential_id, 100)?,
            credential_url: optional("credential_url", &self.credential_url, 200)?,
            description: self.description.trim().to_string(),
            ..self
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn category_round_trips_through_str() {
        for category in [
            SkillCategory::Frontend,
            SkillCategory::Backend,
            SkillCategory::Database,
            SkillCategory::Tools,
            SkillCategory::Other,
        ] {
            assert_eq!(category.as_str().parse::<SkillCategory>(), Ok(category));
        }
        assert_eq!(SkillCategory::Tools.label(), "Tools & Technologies");
        assert!("devops".parse::<SkillCategory>().is_err());
    }

    #[test]
    fn skill_proficiency_bounds_are_inclusive() {
        assert!(SkillDraft::new("Rust", 0.0, SkillCategory::Backend, "").is_ok());
        assert!(SkillDraft::new("Rust", 10.0, SkillCategory::Backend, "").is_ok());
    }

    #[test]
    fn skill_proficiency_outside_range_is_rejected() {
        for bad in [-0.1, 10.1, 95.0, f64::NAN, f64::INFINITY] {
            let result = SkillDraft::new("Rust", bad, SkillCategory::Backend, "");
            assert!(
                matches!(
                    result,
                    Err(ResumeValidationError::OutOfRange {
                        field: "proficiency",
                        ..
                    })
                ),
                "expected {bad} to be rejected"
            );
        }
    }

    #[test]
    fn skill_proficiency_is_rounded_to_one_decimal() {
        let draft = SkillDraft::new("Rust", 8.46, SkillCategory::Backend, "fab fa-rust").unwrap();
        assert_eq!(draft.proficiency(), 8.5);
    }

    #[test]
    fn skill_name_is_required_and_bounded() {
        assert_eq!(
            SkillDraft::new("   ", 5.0, SkillCategory::Other, ""),
            Err(ResumeValidationError::Required("name"))
        );
        assert_eq!(
            SkillDraft::new(&"x".repeat(101), 5.0, SkillCategory::Other, ""),
            Err(ResumeValidationError::TooLong {
                field: "name",
                max: 100
            })
        );
    }

    #[test]
    fn skill_display_order_is_never_negative() {
        let draft = SkillDraft::new("Git", 9.0, SkillCategory::Tools, "")
            .unwrap()
            .with_display_order(-3);
        assert_eq!(draft.display_order(), 0);
    }

    #[test]
    fn education_rejects_gpa_out_of_range_and_reversed_dates() {
        let base = EducationDraft {
            institution: "Uni".to_string(),
            degree: "BSc".to_string(),
            field_of_study: String::new(),
            start_date: date(2018, 9, 1),
            end_date: Some(date(2022, 5, 15)),
            description: String::new(),
            gpa: Some(3.8),
            is_current: false,
        };

        assert!(base.clone().validated().is_ok());

        let high_gpa = EducationDraft {
            gpa: Some(10.0),
            ..base.clone()
        };
        assert!(matches!(
            high_gpa.validated(),
            Err(ResumeValidationError::OutOfRange { field: "gpa", .. })
        ));

        let reversed = EducationDraft {
            end_date: Some(date(2017, 1, 1)),
            ..base
        };
        assert_eq!(
            reversed.validated(),
            Err(ResumeValidationError::EndBeforeStart)
        );
    }

    #[test]
    fn certification_requires_title_and_issuer() {
        let draft = CertificationDraft {
            title: "  ".to_string(),
            issuer: "Issuer".to_string(),
            issue_date: date(2023, 1, 1),
            expiry_date: None,
            credential_id: String::new(),
            credential_url: String::new(),
            description: String::new(),
        };

        assert_eq!(
            draft.validated(),
            Err(ResumeValidationError::Required("title"))
        );
    }
}
