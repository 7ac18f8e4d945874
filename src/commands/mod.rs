pub mod seed;
pub mod upload_profile_image;
