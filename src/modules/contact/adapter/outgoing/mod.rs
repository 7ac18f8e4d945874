mod contact_message_repository_postgres;
mod email_contact_notifier;
pub mod sea_orm_entity;

pub use contact_message_repository_postgres::ContactMessageRepositoryPostgres;
pub use email_contact_notifier::EmailContactNotifier;
