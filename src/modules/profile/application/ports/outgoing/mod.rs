pub mod personal_info_query;
pub mod personal_info_repository;

pub use personal_info_query::{PersonalInfoQuery, PersonalInfoQueryError, PersonalInfoView};
pub use personal_info_repository::{
    PersonalInfoRecord, PersonalInfoRepository, PersonalInfoRepositoryError,
};
