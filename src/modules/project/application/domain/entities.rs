//
// ──────────────────────────────────────────────────────────
// Listing filter
// ──────────────────────────────────────────────────────────
//

/// Case-insensitive substring filter over the names of a project's skills.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectListFilter {
    tech: Option<String>,
}

impl ProjectListFilter {
    /// An absent or empty `tech` value matches every project.
    pub fn from_tech(tech: Option<&str>) -> Self {
        Self {
            tech: tech.filter(|t| !t.is_empty()).map(str::to_string),
        }
    }

    pub fn tech(&self) -> Option<&str> {
        self.tech.as_deref()
    }

    /// `ILIKE` pattern with `\`, `%` and `_` escaped so they match literally.
    pub fn tech_pattern(&self) -> Option<String> {
        self.tech.as_deref().map(|t| {
            let mut escaped = String::with_capacity(t.len() + 2);
            escaped.push('%');
            for c in t.chars() {
                if matches!(c, '\\' | '%' | '_') {
                    escaped.push('\\');
                }
                escaped.push(c);
            }
            escaped.push('%');
            escaped
        })
    }
}

//
// ──────────────────────────────────────────────────────────
// Draft (seed input)
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProjectValidationError {
    #[error("{0} is required")]
    Required(&'static str),

    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub long_description: String,
    pub github_url: String,
    pub live_url: String,
    pub featured: bool,
    pub display_order: i32,
}

impl ProjectDraft {
    pub fn validated(self) -> Result<Self, ProjectValidationError> {
        let title = self.title.trim().to_string();
        if title.is_empty() {
            return Err(ProjectValidationError::Required("title"));
        }
        if self.description.trim().is_empty() {
            return Err(ProjectValidationError::Required("description"));
        }

        for (field, value, max) in [
            ("title", title.as_str(), 200),
            ("github_url", self.github_url.as_str(), 200),
            ("live_url", self.live_url.as_str(), 200),
        ] {
            if value.chars().count() > max {
                return Err(ProjectValidationError::TooLong { field, max });
            }
        }

        Ok(Self {
            title,
            display_order: self.display_order.max(0),
            ..self
        })
    }
}
