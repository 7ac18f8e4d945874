pub mod blog;
pub mod contact;
pub mod email;
pub mod profile;
pub mod project;
pub mod resume;
pub mod site;
