// src/shared/media.rs

/// Builds public URLs for files stored under `MEDIA_ROOT`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaUrls {
    base: String,
}

impl MediaUrls {
    pub fn new(base: impl Into<String>) -> Self {
        let mut base = base.into();
        if !base.ends_with('/') {
            base.push('/');
        }
        Self { base }
    }

    pub fn url_for(&self, relative_path: &str) -> String {
        format!("{}{}", self.base, relative_path.trim_start_matches('/'))
    }

    /// Stored file columns are nullable and may also hold an empty string.
    pub fn optional_url(&self, relative_path: Option<&str>) -> Option<String> {
        relative_path
            .filter(|p| !p.trim().is_empty())
            .map(|p| self.url_for(p))
    }
}

impl Default for MediaUrls {
    fn default() -> Self {
        Self::new("/media/")
    }
}
