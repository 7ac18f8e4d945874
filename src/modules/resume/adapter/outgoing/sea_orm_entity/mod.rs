pub mod certifications;
pub mod educations;
pub mod skills;
