//! Copies an image into `MEDIA_ROOT/profile/` and points the personal info
//! singleton at it.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::modules::profile::application::domain::entities::PersonalInfoDraft;
use crate::modules::profile::application::ports::outgoing::{
    PersonalInfoRecord, PersonalInfoRepository,
};

pub const MAX_PROFILE_IMAGE_BYTES: u64 = 5 * 1024 * 1024;
pub const PROFILE_IMAGE_DIR: &str = "profile";

#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("Image file '{0}' not found")]
    NotFound(PathBuf),

    #[error("'{0}' is not a regular file")]
    NotAFile(PathBuf),

    #[error("File is too large ({size_mb:.1}MB); use an image smaller than 5MB")]
    TooLarge { size_mb: f64 },

    #[error("File error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage error: {0}")]
    Storage(String),
}

pub struct ProfileImageUploader<P>
where
    P: PersonalInfoRepository,
{
    repository: P,
    media_root: PathBuf,
    defaults: PersonalInfoDraft,
}

impl<P> ProfileImageUploader<P>
where
    P: PersonalInfoRepository,
{
    /// `defaults` is used when the singleton row does not exist yet.
    pub fn new(repository: P, media_root: impl Into<PathBuf>, defaults: PersonalInfoDraft) -> Self {
        Self {
            repository,
            media_root: media_root.into(),
            defaults,
        }
    }

    pub async fn upload(&self, source: &Path) -> Result<PersonalInfoRecord, UploadError> {
        let metadata = match tokio::fs::metadata(source).await {
            Ok(m) => m,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(UploadError::NotFound(source.to_path_buf()))
            }
            Err(e) => return Err(e.into()),
        };

        if !metadata.is_file() {
            return Err(UploadError::NotAFile(source.to_path_buf()));
        }

        if metadata.len() > MAX_PROFILE_IMAGE_BYTES {
            return Err(UploadError::TooLarge {
                size_mb: metadata.len() as f64 / 1024.0 / 1024.0,
            });
        }

        let relative_path = stored_name(source);
        let destination = self.media_root.join(&relative_path);

        if let Some(parent) = destination.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::copy(source, &destination).await?;

        let record = match self
            .repository
            .set_profile_image(&relative_path, self.defaults.clone())
            .await
        {
            Ok(record) => record,
            Err(e) => {
                // Nothing references the copy.
                if let Err(cleanup) = tokio::fs::remove_file(&destination).await {
                    warn!(
                        "Failed to remove {} after storage error: {}",
                        destination.display(),
                        cleanup
                    );
                }
                return Err(UploadError::Storage(e.to_string()));
            }
        };

        info!("Uploaded profile image as {}", relative_path);
        Ok(record)
    }
}

/// `profile/<uuid>_<original file name>`, always with forward slashes.
fn stored_name(source: &Path) -> String {
    let file_name = source
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());

    format!("{}/{}_{}", PROFILE_IMAGE_DIR, uuid::Uuid::new_v4().simple(), file_name)
}
