mod personal_info_query_postgres;
mod personal_info_repository_postgres;
pub mod sea_orm_entity;

pub use personal_info_query_postgres::PersonalInfoQueryPostgres;
pub use personal_info_repository_postgres::PersonalInfoRepositoryPostgres;
