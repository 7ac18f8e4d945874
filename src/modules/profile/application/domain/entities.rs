/// Values used when the singleton `personal_info` row has to be created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonalInfoDraft {
    pub name: String,
    pub title: String,
    pub bio: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub github_url: String,
    pub linkedin_url: String,
    pub twitter_url: String,
    pub website_url: String,
}

impl PersonalInfoDraft {
    pub const DEFAULT_TITLE: &'static str = "Python Full Stack Developer";

    /// Minimal profile for `owner_name`; everything optional is left blank.
    pub fn minimal(owner_name: &str, email: &str) -> Self {
        Self {
            name: owner_name.trim().to_string(),
            title: Self::DEFAULT_TITLE.to_string(),
            bio: String::new(),
            email: email.trim().to_string(),
            phone: String::new(),
            location: String::new(),
            github_url: String::new(),
            linkedin_url: String::new(),
            twitter_url: String::new(),
            website_url: String::new(),
        }
    }
}
